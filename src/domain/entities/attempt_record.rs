use crate::domain::value_objects::PuzzleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A user's progress on one catalog entry. Records are never deleted:
/// a completed attempt keeps its puzzle viewable forever, even after
/// the entry itself is reconciled away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub id: String,
    pub puzzle_id: PuzzleId,
    pub completed: bool,
    pub score: Option<i64>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub metadata: Option<Value>,
    /// Pending-upload flag; cleared by the (out-of-scope) progress
    /// uploader, not by catalog sync.
    pub synced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptDraft {
    pub id: String,
    pub puzzle_id: PuzzleId,
    pub started_at: DateTime<Utc>,
    pub metadata: Option<Value>,
}

impl AttemptDraft {
    pub fn new(puzzle_id: PuzzleId) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            puzzle_id,
            started_at: Utc::now(),
            metadata: None,
        }
    }

    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
