//! # Customer Repository
//!
//! Plain CRUD for customer records.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shopledger_core::{Customer, NewCustomer};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Lists all customers ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, gender, contact FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Gets a customer by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, gender, contact FROM customers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a customer and returns the generated id.
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<i64> {
        debug!(name = %customer.name, "inserting customer");

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO customers (name, gender, contact) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(&customer.name)
        .bind(&customer.gender)
        .bind(&customer.contact)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Updates a customer in place.
    pub async fn update(&self, id: i64, customer: &NewCustomer) -> DbResult<()> {
        let result = sqlx::query(
            "UPDATE customers SET name = ?2, gender = ?3, contact = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(&customer.name)
        .bind(&customer.gender)
        .bind(&customer.contact)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Deletes a customer.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
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
    async fn test_crud_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.customers();

        let id = repo
            .insert(&NewCustomer {
                name: "Sophea Lim".to_string(),
                gender: Some("F".to_string()),
                contact: Some("555-0134".to_string()),
            })
            .await
            .unwrap();

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Sophea Lim");

        repo.update(
            id,
            &NewCustomer {
                name: "Sophea Lim".to_string(),
                gender: Some("F".to_string()),
                contact: Some("555-9999".to_string()),
            },
        )
        .await
        .unwrap();

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.contact.as_deref(), Some("555-9999"));

        repo.delete(id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
