//! Entitlement decisions and offline catalog synchronization for the
//! karuta puzzle archive.
//!
//! The crate keeps a local, queryable replica of the remote puzzle
//! catalog in sync (full pull with orphan reconciliation) and decides,
//! per historical item, whether the user may open it: completed items
//! stay unlocked forever, entitled users see everything, a rolling
//! free window covers the most recent days, and ad-watch grants unlock
//! single items permanently.
//!
//! This is a library consumed by a presentation layer; there is no CLI
//! surface. Rendering, checkout and the puzzle mechanics themselves
//! live elsewhere and reach this core only through the ports in
//! [`application::ports`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;

pub use application::ports::{
    AdGrantGateway, CatalogStore, ClockSource, EntitlementGateway, RemoteCatalogGateway,
    RemoteCatalogRecord, SystemClock,
};
pub use application::services::{
    spawn_event_loop, ArchivePage, ArchiveSessionService, CatalogSyncService, PageRequest,
    SessionContext, SessionEvent, SyncMode, SyncState,
};
pub use domain::access::{
    is_within_free_window, AccessDecisionEngine, AccessRequest, AccessVerdict, AdUnlockRegistry,
    UnlockRule,
};
pub use domain::entities::{
    AdUnlockGrant, ArchiveItem, AttemptDraft, AttemptRecord, CatalogEntry, CatalogEntryDraft,
    SnapshotApplied, SyncReport,
};
pub use domain::value_objects::{Category, Difficulty, PuzzleDate, PuzzleId};
pub use infrastructure::database::{initialize_schema, Database, DbPool, SqliteCatalogStore};
pub use shared::{AppConfig, AppError};

/// Installs a default tracing subscriber for hosts that embed the
/// library without their own logging setup.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "karuta_archive=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
