pub mod catalog_repository;
pub mod connection;
mod mapper;
mod queries;

pub use catalog_repository::SqliteCatalogStore;
pub use connection::{initialize_schema, Database, DbPool};
