pub mod access;
pub mod entities;
pub mod value_objects;

pub use access::{AccessDecisionEngine, AccessRequest, AccessVerdict, AdUnlockRegistry, UnlockRule};
pub use entities::{
    AdUnlockGrant, ArchiveItem, AttemptDraft, AttemptRecord, CatalogEntry, CatalogEntryDraft,
    SnapshotApplied, SyncReport,
};
pub use value_objects::{Category, Difficulty, PuzzleDate, PuzzleId};
