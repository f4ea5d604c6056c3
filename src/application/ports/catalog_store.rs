use crate::domain::entities::{
    AttemptDraft, AttemptRecord, CatalogEntry, CatalogEntryDraft, SnapshotApplied,
};
use crate::domain::value_objects::{Category, PuzzleId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Local, persisted replica of the remote catalog plus the user's
/// attempt history. Single writer (catalog sync), many readers
/// (paginated queries); implementations must not let a reader observe
/// a partially-applied snapshot.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Applies one full remote snapshot atomically: deletes every
    /// local entry absent from `records`, then upserts all of
    /// `records`. All-or-nothing: on failure the local content is
    /// exactly what it was before the call. Attempt history is never
    /// touched by reconciliation.
    async fn apply_snapshot(
        &self,
        records: &[CatalogEntryDraft],
    ) -> Result<SnapshotApplied, AppError>;

    async fn all_ids(&self) -> Result<Vec<PuzzleId>, AppError>;

    async fn get_entry(&self, id: &PuzzleId) -> Result<Option<CatalogEntry>, AppError>;

    /// Stable ordering: `item_date` descending, undated (backlog)
    /// entries after all dated ones, ties broken by `id` ascending.
    async fn list_page(
        &self,
        offset: u32,
        limit: u32,
        category: Option<&Category>,
    ) -> Result<Vec<CatalogEntry>, AppError>;

    async fn count_matching(&self, category: Option<&Category>) -> Result<u64, AppError>;

    /// Entries dated on or before `today` whose current attempt (if
    /// any) is not completed. Never surfaces future-dated or undated
    /// entries. The "current" attempt is picked deterministically:
    /// latest `started_at`, ties broken by largest rowid.
    async fn list_incomplete(
        &self,
        offset: u32,
        limit: u32,
        today: NaiveDate,
    ) -> Result<Vec<CatalogEntry>, AppError>;

    /// Counts DISTINCT incomplete entries; duplicate attempt rows must
    /// not inflate the result.
    async fn count_incomplete(&self, today: NaiveDate) -> Result<u64, AppError>;

    async fn record_attempt(&self, draft: AttemptDraft) -> Result<AttemptRecord, AppError>;

    async fn complete_attempt(
        &self,
        attempt_id: &str,
        score: Option<i64>,
    ) -> Result<(), AppError>;

    /// The logically-current attempt for a puzzle, resolved with the
    /// same tie-break as the incomplete filter.
    async fn current_attempt(
        &self,
        puzzle_id: &PuzzleId,
    ) -> Result<Option<AttemptRecord>, AppError>;

    async fn has_completed_attempt(&self, puzzle_id: &PuzzleId) -> Result<bool, AppError>;

    async fn attempts_for_puzzle(
        &self,
        puzzle_id: &PuzzleId,
    ) -> Result<Vec<AttemptRecord>, AppError>;

    /// Ids of every puzzle with at least one completed attempt, for
    /// decorating a page of entries in a single read.
    async fn completed_puzzle_ids(&self) -> Result<HashSet<PuzzleId>, AppError>;
}
