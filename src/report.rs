use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome document of one paginated prospect-import run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub report: Vec<Page>,
    pub status: RunStatus,
}

impl ImportReport {
    /// Typed parse of an untyped JSON document. There is no partial
    /// result: either the whole document matches the expected shape or
    /// the caller gets an error and must stop.
    pub fn parse(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("input does not match the import-report shape")
    }
}

/// Whether the import run scanned everything or was cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    ReachedEnd,
    Done,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::ReachedEnd => "reached_end",
            RunStatus::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub page: u64,
    pub status: String,
    pub prospects: Vec<Prospect>,
}

/// One imported entity, tagged by its `status` field. Everything beyond
/// the tag and the error reason is an opaque profile payload carried
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Prospect {
    Success {
        #[serde(flatten)]
        profile: Map<String, Value>,
    },
    Error {
        #[serde(default)]
        reason: Option<String>,
        #[serde(flatten)]
        profile: Map<String, Value>,
    },
}

impl Prospect {
    /// The error reason, if this is an error prospect that carries a
    /// non-empty one.
    pub fn error_reason(&self) -> Option<&str> {
        match self {
            Prospect::Error {
                reason: Some(reason),
                ..
            } if !reason.is_empty() => Some(reason),
            _ => None,
        }
    }
}
