pub mod ad_unlock_grant;
pub mod archive_item;
pub mod attempt_record;
pub mod catalog_entry;
pub mod sync_report;

pub use ad_unlock_grant::AdUnlockGrant;
pub use archive_item::ArchiveItem;
pub use attempt_record::{AttemptDraft, AttemptRecord};
pub use catalog_entry::{CatalogEntry, CatalogEntryDraft};
pub use sync_report::{SnapshotApplied, SyncReport};
