use crate::domain::value_objects::PuzzleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Permanent unlock of one catalog entry earned out-of-band (watching
/// an ad). Grants never expire; `granted_at` is provenance only and is
/// deliberately absent from the unlock check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdUnlockGrant {
    pub puzzle_id: PuzzleId,
    pub granted_at: DateTime<Utc>,
}

impl AdUnlockGrant {
    pub fn new(puzzle_id: PuzzleId, granted_at: DateTime<Utc>) -> Self {
        Self {
            puzzle_id,
            granted_at,
        }
    }
}
