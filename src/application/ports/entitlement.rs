use crate::shared::error::AppError;
use async_trait::async_trait;

/// Subscription-equivalent entitlement flag, owned by the external
/// auth/subscription collaborator. Read once per evaluation, never
/// cached beyond it.
#[async_trait]
pub trait EntitlementGateway: Send + Sync {
    async fn is_entitled(&self) -> Result<bool, AppError>;
}
