use covsum_shared_kernel::SourcePath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{EntityId, SourceRange};

/// istanbul coverage data for one source file.
///
/// Maps keep the order they had in the document; that order is not numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCoverage {
    pub path: SourcePath,
    pub all: bool,
    pub statement_map: IndexMap<EntityId, SourceRange>,
    #[serde(rename = "s")]
    pub statement_hits: IndexMap<EntityId, u64>,
    pub branch_map: IndexMap<EntityId, BranchMapping>,
    /// One hit count per outcome of each branch site.
    #[serde(rename = "b")]
    pub branch_hits: IndexMap<EntityId, Vec<u64>>,
    pub fn_map: IndexMap<EntityId, FunctionMapping>,
    #[serde(rename = "f")]
    pub function_hits: IndexMap<EntityId, u64>,
}

/// Location metadata for a branch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchMapping {
    /// istanbul branch kind (`if`, `cond-expr`, `binary-expr`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub line: u64,
    pub loc: SourceRange,
    pub locations: Vec<SourceRange>,
}

/// Location metadata for a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMapping {
    pub name: String,
    pub decl: SourceRange,
    pub loc: SourceRange,
    pub line: u64,
}

impl FileCoverage {
    /// Empty coverage entry for `path`.
    pub fn new(path: impl Into<SourcePath>) -> Self {
        Self {
            path: path.into(),
            all: false,
            statement_map: IndexMap::new(),
            statement_hits: IndexMap::new(),
            branch_map: IndexMap::new(),
            branch_hits: IndexMap::new(),
            fn_map: IndexMap::new(),
            function_hits: IndexMap::new(),
        }
    }

    /// Record a statement, with a one-line range whose start line is `id + 1`.
    #[must_use]
    pub fn with_statement(mut self, id: u64, hits: u64) -> Self {
        let id = EntityId::new(id);
        let mut range = SourceRange::default();
        range.start.line = id.line_number();
        range.end.line = id.line_number();
        self.statement_map.insert(id, range);
        self.statement_hits.insert(id, hits);
        self
    }

    #[must_use]
    pub fn with_branch(mut self, id: u64, outcomes: impl Into<Vec<u64>>) -> Self {
        self.branch_hits.insert(EntityId::new(id), outcomes.into());
        self
    }

    #[must_use]
    pub fn with_function(mut self, id: u64, hits: u64) -> Self {
        self.function_hits.insert(EntityId::new(id), hits);
        self
    }

    /// Whether a branch site was reached: its first outcome was taken.
    ///
    /// Only the first arm is inspected, so a site whose other arms never ran
    /// still counts as covered.
    pub fn branch_site_covered(outcomes: &[u64]) -> bool {
        outcomes.first().is_some_and(|hits| *hits != 0)
    }
}
