use crate::domain::entities::AdUnlockGrant;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Grants earned through the external ad-watch flow. Grants are
/// permanent, so "active" means "all"; there is no expiry to filter.
#[async_trait]
pub trait AdGrantGateway: Send + Sync {
    async fn list_active_grants(&self) -> Result<Vec<AdUnlockGrant>, AppError>;
}
