//! Test-run sections of the report. They are validated on decode; only the
//! counters feed the optional test summary footer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Position;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub added: u64,
    pub did_update: bool,
    pub failure: bool,
    pub files_added: u64,
    pub files_removed: u64,
    pub files_removed_list: Vec<Value>,
    pub files_unmatched: u64,
    pub files_updated: u64,
    pub matched: u64,
    pub total: u64,
    pub unchecked: u64,
    pub unchecked_keys_by_file: Vec<Value>,
    pub unmatched: u64,
    pub updated: u64,
}

/// Result of one test file (suite).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteResult {
    pub assertion_results: Vec<AssertionResult>,
    pub end_time: u64,
    pub message: String,
    pub name: String,
    pub start_time: u64,
    pub status: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionResult {
    pub ancestor_titles: Vec<String>,
    pub duration: u64,
    pub failure_details: Vec<Value>,
    pub failure_messages: Vec<Value>,
    pub full_name: String,
    pub invocations: u64,
    pub location: Position,
    pub num_passing_asserts: u64,
    pub retry_reasons: Vec<Value>,
    pub status: String,
    pub title: String,
}
