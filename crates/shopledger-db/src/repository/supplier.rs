//! # Supplier Repository
//!
//! Read access to suppliers, used to populate the import form's supplier
//! picker.

use sqlx::SqlitePool;

use crate::error::DbResult;
use shopledger_core::Supplier;

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Lists all suppliers ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Supplier>> {
        let suppliers =
            sqlx::query_as::<_, Supplier>("SELECT id, name, contact FROM suppliers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(suppliers)
    }

    /// Inserts a supplier and returns the generated id.
    ///
    /// Used by seed tooling and tests.
    pub async fn insert(&self, name: &str, contact: Option<&str>) -> DbResult<i64> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO suppliers (name, contact) VALUES (?1, ?2) RETURNING id",
        )
        .bind(name)
        .bind(contact)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.suppliers();

        repo.insert("Mekong Wholesale", Some("555-0160")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Mekong Wholesale");
        assert_eq!(all[0].contact.as_deref(), Some("555-0160"));
    }
}
