use crate::domain::entities::{AttemptRecord, CatalogEntry};
use crate::domain::value_objects::{Category, Difficulty, PuzzleDate, PuzzleId};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::warn;

pub(super) fn map_entry_row(row: &SqliteRow) -> Result<CatalogEntry, AppError> {
    let raw_id: String = row.try_get("id")?;
    let id = PuzzleId::new(raw_id).map_err(AppError::Database)?;

    let raw_date: Option<String> = row.try_get("item_date")?;
    let item_date = raw_date.as_deref().and_then(|raw| {
        let parsed = PuzzleDate::parse_opt(raw);
        if parsed.is_none() {
            warn!(puzzle_id = %id, raw_date = raw, "Stored item date is malformed, treating as undated");
        }
        parsed
    });

    let category: String = row.try_get("category")?;
    let difficulty: Option<String> = row.try_get("difficulty")?;
    let is_special: i64 = row.try_get("is_special")?;
    let synced_at: i64 = row.try_get("synced_at")?;

    Ok(CatalogEntry {
        id,
        category: Category::from(category.as_str()),
        item_date,
        difficulty: difficulty.as_deref().map(Difficulty::from),
        is_special: is_special != 0,
        synced_at: DateTime::<Utc>::from_timestamp_millis(synced_at).unwrap_or_default(),
    })
}

pub(super) fn map_attempt_row(row: &SqliteRow) -> Result<AttemptRecord, AppError> {
    let id: String = row.try_get("id")?;
    let raw_puzzle_id: String = row.try_get("puzzle_id")?;
    let puzzle_id = PuzzleId::new(raw_puzzle_id).map_err(AppError::Database)?;

    let completed: i64 = row.try_get("completed")?;
    let score: Option<i64> = row.try_get("score")?;
    let started_at: i64 = row.try_get("started_at")?;
    let completed_at: Option<i64> = row.try_get("completed_at")?;
    let synced: i64 = row.try_get("synced")?;

    let raw_metadata: Option<String> = row.try_get("metadata")?;
    let metadata = raw_metadata.as_deref().and_then(|raw| {
        let parsed = serde_json::from_str(raw).ok();
        if parsed.is_none() {
            warn!(attempt_id = %id, "Attempt metadata is not valid JSON, dropping");
        }
        parsed
    });

    Ok(AttemptRecord {
        id,
        puzzle_id,
        completed: completed != 0,
        score,
        started_at: DateTime::<Utc>::from_timestamp_millis(started_at).unwrap_or_default(),
        completed_at: completed_at.and_then(DateTime::<Utc>::from_timestamp_millis),
        metadata,
        synced: synced != 0,
    })
}
