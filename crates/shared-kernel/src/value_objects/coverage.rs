// crates/shared-kernel/src/value_objects/coverage.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// A `covered / total` pair for one metric category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coverage {
    covered: usize,
    total: usize,
}

impl Coverage {
    #[inline]
    pub const fn new(covered: usize, total: usize) -> Self {
        Self { covered, total }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { covered: 0, total: 0 }
    }

    #[inline]
    pub const fn covered(self) -> usize {
        self.covered
    }

    #[inline]
    pub const fn total(self) -> usize {
        self.total
    }

    #[inline]
    pub const fn uncovered(self) -> usize {
        self.total.saturating_sub(self.covered)
    }

    /// Count one more tracked entity.
    #[inline]
    pub fn record(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.covered += 1;
        }
    }

    /// Build a ratio from an iterator of "was it hit" flags.
    pub fn from_hits<I>(hits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        hits.into_iter().fold(Self::zero(), |mut acc, hit| {
            acc.record(hit);
            acc
        })
    }

    /// Percentage covered; not applicable when nothing is tracked.
    pub fn percent(self) -> Percentage {
        if self.total == 0 {
            Percentage::not_applicable()
        } else {
            Percentage::new(self.covered as f64 / self.total as f64 * 100.0)
        }
    }
}

impl Add for Coverage {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.covered + rhs.covered, self.total + rhs.total)
    }
}

impl AddAssign for Coverage {
    fn add_assign(&mut self, rhs: Self) {
        self.covered += rhs.covered;
        self.total += rhs.total;
    }
}

impl Sum for Coverage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Coverage> for Coverage {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Percentage in `0.0..=100.0`, or "not applicable" for an empty metric.
///
/// Serialises as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Option<f64>);

impl Percentage {
    /// Rendered in place of a number when the metric has no entries.
    pub const NOT_APPLICABLE: &'static str = "—";

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    #[inline]
    pub const fn not_applicable() -> Self {
        Self(None)
    }

    #[inline]
    pub const fn value(self) -> Option<f64> {
        self.0
    }

    #[inline]
    pub const fn is_applicable(self) -> bool {
        self.0.is_some()
    }
}

mod display {
    use std::fmt;

    use super::{Coverage, Percentage};

    impl fmt::Display for Percentage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.0 {
                Some(value) => write!(f, "{value:.2}"),
                None => f.write_str(Self::NOT_APPLICABLE),
            }
        }
    }

    impl fmt::Display for Coverage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}/{}", self.covered, self.total)
        }
    }
}
