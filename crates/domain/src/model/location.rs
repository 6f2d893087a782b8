use serde::{Deserialize, Serialize};

/// A point in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u64,
    pub column: u64,
}

/// Start/end span of an instrumented construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}
