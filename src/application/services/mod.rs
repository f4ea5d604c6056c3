pub mod archive_service;
pub mod sync_service;

pub use archive_service::{
    spawn_event_loop, ArchivePage, ArchiveSessionService, PageRequest, SessionContext,
    SessionEvent,
};
pub use sync_service::{CatalogSyncService, SyncError, SyncMode, SyncState};
