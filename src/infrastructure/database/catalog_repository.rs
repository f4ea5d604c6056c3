use super::connection::DbPool;
use super::mapper::{map_attempt_row, map_entry_row};
use super::queries::{
    COUNT_ALL, COUNT_BY_CATEGORY, COUNT_INCOMPLETE, DELETE_ENTRY, EXISTS_COMPLETED_ATTEMPT,
    INSERT_ATTEMPT, MARK_ATTEMPT_COMPLETED, SELECT_ALL_IDS, SELECT_ATTEMPTS_BY_PUZZLE,
    SELECT_COMPLETED_PUZZLE_IDS, SELECT_ENTRY_BY_ID, SELECT_INCOMPLETE_PAGE, SELECT_PAGE,
    SELECT_PAGE_BY_CATEGORY, UPSERT_ENTRY,
};
use crate::application::ports::catalog_store::CatalogStore;
use crate::domain::entities::{
    AttemptDraft, AttemptRecord, CatalogEntry, CatalogEntryDraft, SnapshotApplied,
};
use crate::domain::value_objects::{Category, PuzzleDate, PuzzleId};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::Row;
use std::collections::HashSet;
use tracing::warn;

pub struct SqliteCatalogStore {
    pool: DbPool,
}

impl SqliteCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn date_key(today: NaiveDate) -> String {
        PuzzleDate::new(today).to_string()
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn apply_snapshot(
        &self,
        records: &[CatalogEntryDraft],
    ) -> Result<SnapshotApplied, AppError> {
        let synced_at = Utc::now().timestamp_millis();
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query(SELECT_ALL_IDS).fetch_all(&mut *tx).await?;
        let mut local_ids = HashSet::with_capacity(rows.len());
        for row in rows {
            local_ids.insert(row.try_get::<String, _>("id")?);
        }

        let server_ids: HashSet<&str> = records.iter().map(|record| record.id.as_str()).collect();

        let mut orphans_removed = 0u32;
        for orphan in local_ids.iter().filter(|id| !server_ids.contains(id.as_str())) {
            sqlx::query(DELETE_ENTRY)
                .bind(orphan)
                .execute(&mut *tx)
                .await?;
            orphans_removed += 1;
        }

        for record in records {
            sqlx::query(UPSERT_ENTRY)
                .bind(record.id.as_str())
                .bind(record.category.as_str())
                .bind(record.item_date.map(|date| date.to_string()))
                .bind(record.difficulty.as_ref().map(|d| d.as_str().to_string()))
                .bind(record.is_special as i64)
                .bind(synced_at)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(SnapshotApplied {
            upserted: records.len() as u32,
            orphans_removed,
        })
    }

    async fn all_ids(&self) -> Result<Vec<PuzzleId>, AppError> {
        let rows = sqlx::query(SELECT_ALL_IDS).fetch_all(&self.pool).await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            let raw: String = row.try_get("id")?;
            ids.push(PuzzleId::new(raw).map_err(AppError::Database)?);
        }
        Ok(ids)
    }

    async fn get_entry(&self, id: &PuzzleId) -> Result<Option<CatalogEntry>, AppError> {
        let row = sqlx::query(SELECT_ENTRY_BY_ID)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(row) => Ok(Some(map_entry_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        offset: u32,
        limit: u32,
        category: Option<&Category>,
    ) -> Result<Vec<CatalogEntry>, AppError> {
        let rows = match category {
            Some(category) => {
                sqlx::query(SELECT_PAGE_BY_CATEGORY)
                    .bind(category.as_str())
                    .bind(limit as i64)
                    .bind(offset as i64)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query(SELECT_PAGE)
                    .bind(limit as i64)
                    .bind(offset as i64)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(map_entry_row(&row)?);
        }
        Ok(entries)
    }

    async fn count_matching(&self, category: Option<&Category>) -> Result<u64, AppError> {
        let row = match category {
            Some(category) => {
                sqlx::query(COUNT_BY_CATEGORY)
                    .bind(category.as_str())
                    .fetch_one(&self.pool)
                    .await?
            }
            None => sqlx::query(COUNT_ALL).fetch_one(&self.pool).await?,
        };
        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as u64)
    }

    async fn list_incomplete(
        &self,
        offset: u32,
        limit: u32,
        today: NaiveDate,
    ) -> Result<Vec<CatalogEntry>, AppError> {
        let rows = sqlx::query(SELECT_INCOMPLETE_PAGE)
            .bind(Self::date_key(today))
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(map_entry_row(&row)?);
        }
        Ok(entries)
    }

    async fn count_incomplete(&self, today: NaiveDate) -> Result<u64, AppError> {
        let row = sqlx::query(COUNT_INCOMPLETE)
            .bind(Self::date_key(today))
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as u64)
    }

    async fn record_attempt(&self, draft: AttemptDraft) -> Result<AttemptRecord, AppError> {
        let metadata = draft
            .metadata
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(INSERT_ATTEMPT)
            .bind(&draft.id)
            .bind(draft.puzzle_id.as_str())
            .bind(draft.started_at.timestamp_millis())
            .bind(metadata)
            .execute(&self.pool)
            .await?;

        Ok(AttemptRecord {
            id: draft.id,
            puzzle_id: draft.puzzle_id,
            completed: false,
            score: None,
            started_at: draft.started_at,
            completed_at: None,
            metadata: draft.metadata,
            synced: false,
        })
    }

    async fn complete_attempt(
        &self,
        attempt_id: &str,
        score: Option<i64>,
    ) -> Result<(), AppError> {
        let completed_at = Utc::now().timestamp_millis();
        let result = sqlx::query(MARK_ATTEMPT_COMPLETED)
            .bind(score)
            .bind(completed_at)
            .bind(attempt_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Attempt {attempt_id} not found")));
        }
        Ok(())
    }

    async fn current_attempt(
        &self,
        puzzle_id: &PuzzleId,
    ) -> Result<Option<AttemptRecord>, AppError> {
        let rows = sqlx::query(SELECT_ATTEMPTS_BY_PUZZLE)
            .bind(puzzle_id.as_str())
            .fetch_all(&self.pool)
            .await?;

        if rows.len() > 1 {
            // Data-corruption case: tolerated, not fatal.
            warn!(
                puzzle_id = %puzzle_id,
                count = rows.len(),
                "Multiple attempt rows for one puzzle, using the most recently started"
            );
        }

        match rows.first() {
            Some(row) => Ok(Some(map_attempt_row(row)?)),
            None => Ok(None),
        }
    }

    async fn has_completed_attempt(&self, puzzle_id: &PuzzleId) -> Result<bool, AppError> {
        let row = sqlx::query(EXISTS_COMPLETED_ATTEMPT)
            .bind(puzzle_id.as_str())
            .fetch_one(&self.pool)
            .await?;
        let present: i64 = row.try_get("present")?;
        Ok(present != 0)
    }

    async fn attempts_for_puzzle(
        &self,
        puzzle_id: &PuzzleId,
    ) -> Result<Vec<AttemptRecord>, AppError> {
        let rows = sqlx::query(SELECT_ATTEMPTS_BY_PUZZLE)
            .bind(puzzle_id.as_str())
            .fetch_all(&self.pool)
            .await?;

        let mut attempts = Vec::with_capacity(rows.len());
        for row in rows {
            attempts.push(map_attempt_row(&row)?);
        }
        Ok(attempts)
    }

    async fn completed_puzzle_ids(&self) -> Result<HashSet<PuzzleId>, AppError> {
        let rows = sqlx::query(SELECT_COMPLETED_PUZZLE_IDS)
            .fetch_all(&self.pool)
            .await?;

        let mut ids = HashSet::with_capacity(rows.len());
        for row in rows {
            let raw: String = row.try_get("puzzle_id")?;
            ids.insert(PuzzleId::new(raw).map_err(AppError::Database)?);
        }
        Ok(ids)
    }
}
