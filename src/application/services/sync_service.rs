use crate::application::ports::catalog_store::CatalogStore;
use crate::application::ports::remote_catalog::{RemoteCatalogGateway, RemoteCatalogRecord};
use crate::domain::entities::{CatalogEntryDraft, SyncReport};
use crate::domain::value_objects::{Category, Difficulty, PuzzleDate, PuzzleId};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to fetch remote catalog: {0}")]
    RemoteFetch(String),

    #[error("Failed to apply catalog snapshot: {0}")]
    SnapshotApply(String),
}

impl From<SyncError> for AppError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::RemoteFetch(msg) => AppError::RemoteFetch(msg),
            SyncError::SnapshotApply(msg) => AppError::Database(msg),
        }
    }
}

/// Requested replication strategy. `Since` survives for callers that
/// predate the full-pull strategy but is executed as a full pull: the
/// old incremental path silently dropped server-side deletions and
/// lost data permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    Full,
    Since(DateTime<Utc>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncState {
    pub last_full_sync_at: Option<DateTime<Utc>>,
    pub sync_in_flight: bool,
}

/// Replicates the remote catalog into the local store. One full pull
/// per pass, with orphan reconciliation and upserts applied atomically
/// from the store's point of view. A failed fetch leaves the local
/// snapshot untouched.
pub struct CatalogSyncService {
    remote: Arc<dyn RemoteCatalogGateway>,
    store: Arc<dyn CatalogStore>,
    state: Arc<RwLock<SyncState>>,
}

impl CatalogSyncService {
    pub fn new(remote: Arc<dyn RemoteCatalogGateway>, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            remote,
            store,
            state: Arc::new(RwLock::new(SyncState {
                last_full_sync_at: None,
                sync_in_flight: false,
            })),
        }
    }

    pub async fn state(&self) -> SyncState {
        self.state.read().await.clone()
    }

    /// Runs one sync pass. Infallible by signature: every failure mode
    /// is folded into the returned report so callers keep serving the
    /// previous snapshot and retry on the next session/focus trigger.
    pub async fn sync(&self, mode: SyncMode) -> SyncReport {
        {
            let mut state = self.state.write().await;
            if state.sync_in_flight {
                info!("Catalog sync already in flight, skipping");
                return SyncReport::skipped();
            }
            state.sync_in_flight = true;
        }

        if let SyncMode::Since(since) = mode {
            warn!(%since, "Incremental catalog sync is deprecated, running a full pull");
        }

        let report = match self.run_full_pull().await {
            Ok(report) => report,
            Err(err) => {
                tracing::error!("Catalog sync failed: {err}");
                SyncReport::failed(err.to_string())
            }
        };

        let mut state = self.state.write().await;
        state.sync_in_flight = false;
        if report.success {
            state.last_full_sync_at = Some(Utc::now());
        }

        report
    }

    async fn run_full_pull(&self) -> Result<SyncReport, SyncError> {
        let snapshot = self
            .remote
            .fetch_catalog()
            .await
            .map_err(|err| SyncError::RemoteFetch(err.to_string()))?;

        let drafts = validate_snapshot(snapshot);

        let applied = self
            .store
            .apply_snapshot(&drafts)
            .await
            .map_err(|err| SyncError::SnapshotApply(err.to_string()))?;

        info!(
            upserted = applied.upserted,
            orphans_removed = applied.orphans_removed,
            "Catalog sync completed"
        );
        Ok(SyncReport::succeeded(
            applied.upserted,
            applied.orphans_removed,
        ))
    }
}

/// Boundary validation of the raw remote records. A record with an
/// unusable id is dropped (and logged); a malformed date degrades to
/// "undated" so one bad row cannot poison the snapshot.
fn validate_snapshot(records: Vec<RemoteCatalogRecord>) -> Vec<CatalogEntryDraft> {
    let mut drafts = Vec::with_capacity(records.len());
    for record in records {
        let id = match PuzzleId::new(record.id.clone()) {
            Ok(id) => id,
            Err(reason) => {
                warn!(raw_id = %record.id, %reason, "Dropping catalog record with unusable id");
                continue;
            }
        };

        let item_date = match record.item_date.as_deref() {
            Some(raw) => {
                let parsed = PuzzleDate::parse_opt(raw);
                if parsed.is_none() {
                    warn!(puzzle_id = %id, raw_date = raw, "Malformed item date, storing as undated");
                }
                parsed
            }
            None => None,
        };

        drafts.push(CatalogEntryDraft {
            id,
            category: Category::from(record.category.as_str()),
            item_date,
            difficulty: record.difficulty.as_deref().map(Difficulty::from),
            is_special: record.is_special,
        });
    }
    drafts
}
