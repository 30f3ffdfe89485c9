//! # Product Repository
//!
//! CRUD for products. Stock adjustment does NOT happen here: product
//! quantity is only mutated inside the sale and import ledger transactions
//! (see [`crate::repository::sale`] and [`crate::repository::import`]).

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shopledger_core::{NewProduct, Product, ProductWithCategory};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products joined with their category name, ordered by id.
    pub async fn list(&self) -> DbResult<Vec<ProductWithCategory>> {
        let products = sqlx::query_as::<_, ProductWithCategory>(
            r#"
            SELECT p.id, p.name, p.quantity, p.sale_price_cents,
                   p.supply_price_cents, p.category_id, c.name AS category
            FROM products p
            JOIN categories c ON p.category_id = c.id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, sale_price_cents, supply_price_cents, category_id
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a product and returns the generated id.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, "inserting product");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products
                (name, quantity, sale_price_cents, supply_price_cents, category_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.sale_price_cents)
        .bind(product.supply_price_cents)
        .bind(product.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Updates a product in place.
    pub async fn update(&self, id: i64, product: &NewProduct) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2, quantity = ?3, sale_price_cents = ?4,
                supply_price_cents = ?5, category_id = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.quantity)
        .bind(product.sale_price_cents)
        .bind(product.supply_price_cents)
        .bind(product.category_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        sqlx::query("DELETE FROM products WHERE id = ?1")
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

    async fn db_with_category() -> (Database, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let cat_id = db.categories().insert("Beverages").await.unwrap();
        (db, cat_id)
    }

    fn widget(category_id: i64) -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            quantity: 10,
            sale_price_cents: 1999,
            supply_price_cents: 1599,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let (db, cat_id) = db_with_category().await;
        let repo = db.products();

        let id = repo.insert(&widget(cat_id)).await.unwrap();

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Widget");
        assert_eq!(fetched.quantity, 10);
        assert_eq!(fetched.sale_price_cents, 1999);

        let mut updated = widget(cat_id);
        updated.quantity = 25;
        repo.update(id, &updated).await.unwrap();
        assert_eq!(repo.get(id).await.unwrap().unwrap().quantity, 25);

        repo.delete(id).await.unwrap();
        assert!(repo.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_includes_category_name() {
        let (db, cat_id) = db_with_category().await;
        db.products().insert(&widget(cat_id)).await.unwrap();

        let listed = db.products().list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category, "Beverages");
    }

    #[tokio::test]
    async fn test_insert_with_unknown_category_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db.products().insert(&widget(42)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKey { .. }));
    }
}
