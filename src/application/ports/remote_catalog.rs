use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Catalog record as served by the canonical remote store. Raw wire
/// shape; ids and dates are validated by the sync engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCatalogRecord {
    pub id: String,
    pub category: String,
    pub item_date: Option<String>,
    pub difficulty: Option<String>,
    pub is_special: bool,
}

/// Read access to the canonical remote catalog. The fetch bypasses
/// per-user visibility restrictions by contract: catalog metadata
/// (unlike item content) is globally readable so locked placeholders
/// can be rendered.
///
/// No deadline is imposed here; callers needing bounded latency wrap
/// their own timeout around the fetch.
#[async_trait]
pub trait RemoteCatalogGateway: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<RemoteCatalogRecord>, AppError>;
}
