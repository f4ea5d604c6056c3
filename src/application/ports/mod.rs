pub mod ad_grants;
pub mod catalog_store;
pub mod clock;
pub mod entitlement;
pub mod remote_catalog;

pub use ad_grants::AdGrantGateway;
pub use catalog_store::CatalogStore;
pub use clock::{ClockSource, SystemClock};
pub use entitlement::EntitlementGateway;
pub use remote_catalog::{RemoteCatalogGateway, RemoteCatalogRecord};
