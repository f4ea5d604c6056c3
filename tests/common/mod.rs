pub mod mocks;

use karuta_archive::{initialize_schema, Category, CatalogEntryDraft, Difficulty, PuzzleDate, PuzzleId, SqliteCatalogStore};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

pub struct StoreTestContext {
    pub store: Arc<SqliteCatalogStore>,
    #[allow(dead_code)]
    pub pool: Pool<Sqlite>,
}

pub async fn setup_store() -> StoreTestContext {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    initialize_schema(&pool).await.expect("schema");

    StoreTestContext {
        store: Arc::new(SqliteCatalogStore::new(pool.clone())),
        pool,
    }
}

#[allow(dead_code)]
pub fn draft(id: &str, date: Option<&str>) -> CatalogEntryDraft {
    draft_in_category(id, date, "classic")
}

#[allow(dead_code)]
pub fn draft_in_category(id: &str, date: Option<&str>, category: &str) -> CatalogEntryDraft {
    CatalogEntryDraft {
        id: PuzzleId::new(id.to_string()).expect("puzzle id"),
        category: Category::from(category),
        item_date: date.map(|raw| PuzzleDate::parse(raw).expect("puzzle date")),
        difficulty: Some(Difficulty::Medium),
        is_special: false,
    }
}
