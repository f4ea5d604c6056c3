use serde::{Deserialize, Serialize};

/// Outcome of one catalog sync pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub success: bool,
    pub synced_count: u32,
    pub orphans_removed: u32,
    pub error: Option<String>,
}

impl SyncReport {
    pub fn succeeded(synced_count: u32, orphans_removed: u32) -> Self {
        Self {
            success: true,
            synced_count,
            orphans_removed,
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            synced_count: 0,
            orphans_removed: 0,
            error: Some(error),
        }
    }

    /// Report for a sync request that was skipped because another pass
    /// already holds the in-flight guard.
    pub fn skipped() -> Self {
        Self {
            success: true,
            synced_count: 0,
            orphans_removed: 0,
            error: None,
        }
    }
}

/// Counters returned by the store after a snapshot was applied
/// transactionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotApplied {
    pub upserted: u32,
    pub orphans_removed: u32,
}
