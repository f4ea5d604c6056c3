use crate::domain::access::UnlockRule;
use crate::domain::entities::CatalogEntry;
use serde::{Deserialize, Serialize};

/// A catalog entry decorated with its lock verdict, as served to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveItem {
    pub entry: CatalogEntry,
    pub locked: bool,
    pub unlock_reason: Option<UnlockRule>,
}
