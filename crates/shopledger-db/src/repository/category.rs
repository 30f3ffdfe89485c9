//! # Category Repository
//!
//! Read access to product categories. Categories are managed by migrations
//! and seed data; the shell only lists them to populate pickers.

use sqlx::SqlitePool;

use crate::error::DbResult;
use shopledger_core::Category;

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    /// Inserts a category and returns the generated id.
    ///
    /// Used by seed tooling and tests; the shell itself never creates
    /// categories.
    pub async fn insert(&self, name: &str) -> DbResult<i64> {
        let id: i64 = sqlx::query_scalar("INSERT INTO categories (name) VALUES (?1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
