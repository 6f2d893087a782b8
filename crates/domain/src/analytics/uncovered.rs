use std::fmt;

use serde::{Serialize, Serializer};

use crate::model::{EntityId, FileCoverage};

/// Inclusive span of uncovered 1-based lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UncoveredRange {
    start: u64,
    end: u64,
}

impl UncoveredRange {
    #[inline]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn start(self) -> u64 {
        self.start
    }

    #[inline]
    pub const fn end(self) -> u64 {
        self.end
    }

    #[inline]
    pub const fn is_single(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for UncoveredRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() { write!(f, "{}", self.start) } else { write!(f, "{}-{}", self.start, self.end) }
    }
}

/// Run-length encoded uncovered statements of one file, ascending.
///
/// Renders as `"2-3, 5"`; empty when every statement was hit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UncoveredLines(Vec<UncoveredRange>);

impl UncoveredLines {
    /// Group zero-hit statements into runs.
    ///
    /// Ids are sorted numerically first. A run is a stretch of neighbours in
    /// that sorted sequence that all have zero hits; ids missing from the map
    /// do not break a run.
    pub fn from_statement_hits<'a, I>(hits: I) -> Self
    where
        I: IntoIterator<Item = (&'a EntityId, &'a u64)>,
    {
        let mut sorted: Vec<(EntityId, u64)> = hits.into_iter().map(|(id, count)| (*id, *count)).collect();
        sorted.sort_unstable_by_key(|(id, _)| *id);

        let mut ranges = Vec::new();
        let mut open: Option<UncoveredRange> = None;
        for (id, count) in sorted {
            let line = id.line_number();
            open = match (count, open) {
                (0, Some(run)) => Some(UncoveredRange::new(run.start, line)),
                (0, None) => Some(UncoveredRange::new(line, line)),
                (_, run) => {
                    ranges.extend(run);
                    None
                }
            };
        }
        ranges.extend(open);
        Self(ranges)
    }

    pub fn for_file(file: &FileCoverage) -> Self {
        Self::from_statement_hits(&file.statement_hits)
    }

    pub fn ranges(&self) -> &[UncoveredRange] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UncoveredLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl Serialize for UncoveredLines {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
