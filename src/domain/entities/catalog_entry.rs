use crate::domain::value_objects::{Category, Difficulty, PuzzleDate, PuzzleId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One addressable content item of the archive, as replicated into the
/// local store. Created and updated exclusively by catalog sync; the
/// read path never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: PuzzleId,
    pub category: Category,
    /// `None` for backlog items that carry no calendar date.
    pub item_date: Option<PuzzleDate>,
    pub difficulty: Option<Difficulty>,
    pub is_special: bool,
    pub synced_at: DateTime<Utc>,
}

impl CatalogEntry {
    /// Availability: has this item been published yet? Distinct from
    /// the lock decision: an unreleased item is simply not shown,
    /// while a released item may still be locked.
    pub fn is_released(&self, today: NaiveDate) -> bool {
        match self.item_date {
            Some(date) => date.as_naive() <= today,
            // Backlog items carry no date and are always available.
            None => true,
        }
    }
}

/// Validated shape handed to the local store by catalog sync.
/// `synced_at` is assigned at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntryDraft {
    pub id: PuzzleId,
    pub category: Category,
    pub item_date: Option<PuzzleDate>,
    pub difficulty: Option<Difficulty>,
    pub is_special: bool,
}
