use crate::shared::config::DatabaseConfig;
use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;
use tracing::info;

pub type DbPool = Pool<Sqlite>;

pub struct Database;

impl Database {
    pub async fn initialize(config: &DatabaseConfig) -> Result<DbPool> {
        // Create database directory
        if let Some(parent) = Path::new(&config.url).parent() {
            std::fs::create_dir_all(parent)?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        info!("Database connected: {}", config.url);

        initialize_schema(&pool).await?;

        Ok(pool)
    }
}

/// Embedded DDL, safe to run repeatedly. Also used by the test suites
/// to provision in-memory databases.
pub async fn initialize_schema(pool: &DbPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS catalog_entries (
            id TEXT PRIMARY KEY,
            category TEXT NOT NULL,
            item_date TEXT,
            difficulty TEXT,
            is_special INTEGER NOT NULL DEFAULT 0,
            synced_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_catalog_entries_item_date
        ON catalog_entries(item_date, id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_catalog_entries_category
        ON catalog_entries(category)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attempts (
            id TEXT PRIMARY KEY,
            puzzle_id TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            score INTEGER,
            started_at INTEGER NOT NULL,
            completed_at INTEGER,
            metadata TEXT,
            synced INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Pagination of the incomplete filter must not degrade with total
    // attempt history size.
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_attempts_puzzle_completed
        ON attempts(puzzle_id, completed)
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn initialize_creates_database_file_and_schema() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test_init.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", db_path.display()),
            max_connections: 1,
            connection_timeout: 30,
        };

        let pool = Database::initialize(&config).await.unwrap();
        assert!(db_path.exists());

        let table_check = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='catalog_entries'",
        )
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert!(table_check.is_some());

        pool.close().await;
    }

    #[tokio::test]
    async fn composite_attempt_index_is_present() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        initialize_schema(&pool).await.unwrap();

        let index_check = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type='index' AND name='idx_attempts_puzzle_completed'",
        )
        .fetch_optional(&pool)
        .await
        .unwrap();
        assert!(index_check.is_some());

        pool.close().await;
    }

    #[tokio::test]
    async fn schema_initialization_is_repeatable() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        initialize_schema(&pool).await.unwrap();
        initialize_schema(&pool).await.unwrap();
        pool.close().await;
    }
}
