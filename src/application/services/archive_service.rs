use crate::application::ports::ad_grants::AdGrantGateway;
use crate::application::ports::catalog_store::CatalogStore;
use crate::application::ports::clock::ClockSource;
use crate::application::ports::entitlement::EntitlementGateway;
use crate::application::services::sync_service::{CatalogSyncService, SyncMode};
use crate::domain::access::{AccessDecisionEngine, AccessRequest, AdUnlockRegistry};
use crate::domain::entities::{ArchiveItem, CatalogEntry};
use crate::domain::value_objects::Category;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, RwLock};
use tracing::{debug, info, warn};

/// Session-scoped flags, owned by the session service. Constructed at
/// session start, torn down at session end, never free-standing
/// module state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub synced_this_session: bool,
    pub load_in_flight: bool,
    pub page_epoch: u64,
}

impl SessionContext {
    fn fresh() -> Self {
        Self {
            synced_this_session: false,
            load_in_flight: false,
            page_epoch: 0,
        }
    }
}

/// Commands consumed by the orchestrator loop. Focus triggers and
/// entitlement changes arrive as explicit events so their ordering is
/// owned here, not by whichever async callback happens to fire first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Focus,
    EntitlementChanged,
    GrantsChanged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
    pub category: Option<Category>,
    pub incomplete_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivePage {
    pub items: Vec<ArchiveItem>,
    pub total: u64,
    pub offset: u32,
}

/// Composition root of the archive screen: syncs once per session,
/// serves lock-decorated pages, and re-evaluates verdicts when the
/// entitlement flag or the grant set changes.
pub struct ArchiveSessionService {
    store: Arc<dyn CatalogStore>,
    sync: Arc<CatalogSyncService>,
    entitlement: Arc<dyn EntitlementGateway>,
    grants: Arc<dyn AdGrantGateway>,
    clock: Arc<dyn ClockSource>,
    engine: AccessDecisionEngine,
    sync_on_focus: bool,
    context: Arc<RwLock<SessionContext>>,
    current_items: Arc<RwLock<Vec<ArchiveItem>>>,
    // Serializes page loads against each other and against lock
    // recomputation; never held across a caller-visible await point.
    load_lock: Arc<Mutex<()>>,
}

impl ArchiveSessionService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<dyn CatalogStore>,
        sync: Arc<CatalogSyncService>,
        entitlement: Arc<dyn EntitlementGateway>,
        grants: Arc<dyn AdGrantGateway>,
        clock: Arc<dyn ClockSource>,
        free_window_days: u32,
        sync_on_focus: bool,
    ) -> Self {
        Self {
            store,
            sync,
            entitlement,
            grants,
            clock,
            engine: AccessDecisionEngine::new(free_window_days),
            sync_on_focus,
            context: Arc::new(RwLock::new(SessionContext::fresh())),
            current_items: Arc::new(RwLock::new(Vec::new())),
            load_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn session_context(&self) -> SessionContext {
        self.context.read().await.clone()
    }

    pub async fn current_items(&self) -> Vec<ArchiveItem> {
        self.current_items.read().await.clone()
    }

    /// Session start boundary: fresh flags, empty list. The first page
    /// load after this will trigger exactly one catalog sync.
    pub async fn start_session(&self) {
        *self.context.write().await = SessionContext::fresh();
        self.current_items.write().await.clear();
        info!("Archive session started");
    }

    /// Session end boundary.
    pub async fn end_session(&self) {
        *self.context.write().await = SessionContext::fresh();
        self.current_items.write().await.clear();
        info!("Archive session ended");
    }

    /// Loads one page and decorates it with lock verdicts. Returns
    /// `None` when the page was superseded by a reset while in flight:
    /// the result is discarded, never committed to the current list.
    pub async fn load_page(&self, request: PageRequest) -> Result<Option<ArchivePage>, AppError> {
        let _load = self.load_lock.lock().await;

        let epoch = {
            let mut context = self.context.write().await;
            context.load_in_flight = true;
            context.page_epoch
        };

        let result = self.load_page_inner(&request).await;

        let superseded = {
            let mut context = self.context.write().await;
            context.load_in_flight = false;
            context.page_epoch != epoch
        };

        let page = result?;
        if superseded {
            debug!(offset = request.offset, "Discarding superseded page load");
            return Ok(None);
        }

        let mut items = self.current_items.write().await;
        if request.offset == 0 {
            items.clear();
        }
        items.extend(page.items.iter().cloned());

        Ok(Some(page))
    }

    async fn load_page_inner(&self, request: &PageRequest) -> Result<ArchivePage, AppError> {
        self.ensure_synced_once().await;

        let today = self.clock.today();
        let (entries, total) = if request.incomplete_only {
            let entries = self
                .store
                .list_incomplete(request.offset, request.limit, today)
                .await?;
            let total = self.store.count_incomplete(today).await?;
            (entries, total)
        } else {
            let entries = self
                .store
                .list_page(request.offset, request.limit, request.category.as_ref())
                .await?;
            let total = self.store.count_matching(request.category.as_ref()).await?;
            (entries, total)
        };

        let items = self.decorate(entries).await?;
        Ok(ArchivePage {
            items,
            total,
            offset: request.offset,
        })
    }

    async fn ensure_synced_once(&self) {
        let first_load = {
            let mut context = self.context.write().await;
            if context.synced_this_session {
                false
            } else {
                // Marked before the attempt: a failed first sync is
                // retried by focus triggers, not by every page load.
                context.synced_this_session = true;
                true
            }
        };

        if first_load {
            let report = self.sync.sync(SyncMode::Full).await;
            if !report.success {
                warn!(
                    error = report.error.as_deref().unwrap_or("unknown"),
                    "Initial catalog sync failed, serving stale snapshot"
                );
            }
        }
    }

    /// Resync trigger (screen focus). Skipped entirely while a load is
    /// in flight so the page-reset logic cannot be applied twice.
    pub async fn handle_focus(&self) -> Result<(), AppError> {
        {
            let context = self.context.read().await;
            if context.load_in_flight {
                debug!("Focus event during page load, skipping resync");
                return Ok(());
            }
        }

        if !self.sync_on_focus {
            return Ok(());
        }

        let report = self.sync.sync(SyncMode::Full).await;
        if !report.success {
            warn!(
                error = report.error.as_deref().unwrap_or("unknown"),
                "Focus resync failed, keeping previous snapshot"
            );
        }
        self.reset_to_first_page().await;
        Ok(())
    }

    /// Advances the page epoch. An in-flight load that started under
    /// the previous epoch discards its result on arrival.
    pub async fn reset_to_first_page(&self) -> u64 {
        let mut context = self.context.write().await;
        context.page_epoch += 1;
        context.page_epoch
    }

    /// Re-runs the lock decision over the already-fetched items after
    /// the entitlement flag or grant set changed. Pure recomputation:
    /// no catalog sync, no page fetch. Waits for an in-flight load to
    /// finish, then recomputes once.
    pub async fn reevaluate_locks(&self) -> Result<Vec<ArchiveItem>, AppError> {
        let _load = self.load_lock.lock().await;

        let entries: Vec<CatalogEntry> = {
            let items = self.current_items.read().await;
            items.iter().map(|item| item.entry.clone()).collect()
        };
        let reevaluated = self.decorate(entries).await?;
        *self.current_items.write().await = reevaluated.clone();
        Ok(reevaluated)
    }

    async fn decorate(&self, entries: Vec<CatalogEntry>) -> Result<Vec<ArchiveItem>, AppError> {
        let today = self.clock.today();

        // Fail closed: an unreadable entitlement or grant set locks
        // rather than unlocks.
        let is_entitled = match self.entitlement.is_entitled().await {
            Ok(flag) => flag,
            Err(err) => {
                warn!("Entitlement lookup failed, treating as not entitled: {err}");
                false
            }
        };
        let registry = match self.grants.list_active_grants().await {
            Ok(grants) => AdUnlockRegistry::new(&grants),
            Err(err) => {
                warn!("Ad grant lookup failed, treating as no grants: {err}");
                AdUnlockRegistry::default()
            }
        };
        let completed = self.store.completed_puzzle_ids().await?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let request = AccessRequest {
                    item_date: entry.item_date.map(|date| date.as_naive()),
                    is_entitled,
                    puzzle_id: Some(&entry.id),
                    grants: Some(&registry),
                    has_completed_attempt: Some(completed.contains(&entry.id)),
                };
                let verdict = self.engine.evaluate(&request, today);
                ArchiveItem {
                    entry,
                    locked: verdict.locked,
                    unlock_reason: verdict.unlock_reason,
                }
            })
            .collect())
    }

    async fn handle_event(&self, event: SessionEvent) {
        let result = match event {
            SessionEvent::Focus => self.handle_focus().await,
            SessionEvent::EntitlementChanged | SessionEvent::GrantsChanged => {
                self.reevaluate_locks().await.map(|_| ())
            }
        };
        if let Err(err) = result {
            warn!("Session event handling failed: {err}");
        }
    }
}

/// Single consumer loop over the session command queue.
pub fn spawn_event_loop(
    service: Arc<ArchiveSessionService>,
    mut rx: mpsc::Receiver<SessionEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            service.handle_event(event).await;
        }
        debug!("Session event loop terminated");
    })
}
