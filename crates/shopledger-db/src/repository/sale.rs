//! # Sale Ledger Repository
//!
//! Records sales as atomic multi-row writes.
//!
//! ## Transaction Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  record(header, lines)                                      │
//! │                                                             │
//! │  BEGIN                                                      │
//! │    INSERT sales (header)            → sale_id               │
//! │    for each line, in input order:                           │
//! │      INSERT sale_lines (line, sale_id)                      │
//! │      UPDATE products SET quantity = quantity - line.qty     │
//! │  COMMIT                                                     │
//! │                                                             │
//! │  Any failure → ROLLBACK, nothing visible                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trusted Inputs
//! Line amounts and the header total come from the caller and are stored as
//! given, never recomputed. There is no stock floor: a sale may drive a
//! product's quantity negative. Unknown product references fail on the
//! sale_lines foreign key and abort the whole batch.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use shopledger_core::{Sale, SaleInput, SaleLine, SaleLineInput};

/// Repository for the sale ledger.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale: header, lines and stock decrements in one
    /// transaction. Returns the generated sale id.
    ///
    /// Either every row (1 header + N lines) is inserted and every product
    /// decrement applied, or none are. Not idempotent: calling twice with
    /// identical inputs records two independent sales and decrements stock
    /// twice.
    pub async fn record(&self, header: &SaleInput, lines: &[SaleLineInput]) -> DbResult<i64> {
        debug!(
            employee = %header.employee_name,
            customer = %header.customer_name,
            lines = lines.len(),
            "recording sale"
        );

        // Rolls back on drop unless committed.
        let mut tx = self.pool.begin().await?;

        let sale_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sales
                (sale_date, employee_id, employee_name, customer_id, customer_name, total_cents)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
        )
        .bind(header.sale_date)
        .bind(header.employee_id)
        .bind(&header.employee_name)
        .bind(header.customer_id)
        .bind(&header.customer_name)
        .bind(header.total_cents)
        .fetch_one(&mut *tx)
        .await?;

        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO sale_lines
                    (sale_id, product_id, product_name, quantity, unit_price_cents, amount_cents)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(sale_id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.quantity)
            .bind(line.unit_price_cents)
            .bind(line.amount_cents)
            .execute(&mut *tx)
            .await?;

            sqlx::query("UPDATE products SET quantity = quantity - ?1 WHERE id = ?2")
                .bind(line.quantity)
                .bind(line.product_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(sale_id, lines = lines.len(), total_cents = header.total_cents, "sale recorded");

        Ok(sale_id)
    }

    /// Lists all sale headers, newest business date first.
    pub async fn list(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, sale_date, employee_id, employee_name,
                   customer_id, customer_name, total_cents
            FROM sales
            ORDER BY sale_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Gets the lines of one sale, in insertion order.
    pub async fn lines(&self, sale_id: i64) -> DbResult<Vec<SaleLine>> {
        let lines = sqlx::query_as::<_, SaleLine>(
            r#"
            SELECT id, sale_id, product_id, product_name,
                   quantity, unit_price_cents, amount_cents
            FROM sale_lines
            WHERE sale_id = ?1
            ORDER BY id
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use shopledger_core::{NewCustomer, NewEmployee, NewProduct};

    struct Fixture {
        db: Database,
        employee_id: i64,
        customer_id: i64,
        widget_id: i64,
        gizmo_id: i64,
    }

    /// In-memory database with one employee, one customer and two products
    /// (Widget qty 10 at $19.99, Gizmo qty 5 at $5.00).
    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let category_id = db.categories().insert("General").await.unwrap();

        let employee_id = db
            .employees()
            .insert(&NewEmployee {
                name: "Dara Chan".to_string(),
                gender: None,
                birth_date: None,
                position: Some("Cashier".to_string()),
                salary_cents: 0,
                address: None,
                contact: None,
                hired_date: None,
                photo: None,
                stopped: false,
            })
            .await
            .unwrap();

        let customer_id = db
            .customers()
            .insert(&NewCustomer {
                name: "Sophea Lim".to_string(),
                gender: None,
                contact: None,
            })
            .await
            .unwrap();

        let widget_id = db
            .products()
            .insert(&NewProduct {
                name: "Widget".to_string(),
                quantity: 10,
                sale_price_cents: 1999,
                supply_price_cents: 1599,
                category_id,
            })
            .await
            .unwrap();

        let gizmo_id = db
            .products()
            .insert(&NewProduct {
                name: "Gizmo".to_string(),
                quantity: 5,
                sale_price_cents: 500,
                supply_price_cents: 400,
                category_id,
            })
            .await
            .unwrap();

        Fixture {
            db,
            employee_id,
            customer_id,
            widget_id,
            gizmo_id,
        }
    }

    fn header(fx: &Fixture, total_cents: i64) -> SaleInput {
        SaleInput {
            sale_date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap(),
            employee_id: fx.employee_id,
            employee_name: "Dara Chan".to_string(),
            customer_id: fx.customer_id,
            customer_name: "Sophea Lim".to_string(),
            total_cents,
        }
    }

    fn widget_line(fx: &Fixture, quantity: i64) -> SaleLineInput {
        SaleLineInput {
            product_id: fx.widget_id,
            product_name: "Widget".to_string(),
            quantity,
            unit_price_cents: 1999,
            amount_cents: 1999 * quantity,
        }
    }

    #[tokio::test]
    async fn test_record_decrements_stock_and_persists_rows() {
        let fx = fixture().await;

        // 2 × $19.99 Widget = $39.98
        let sale_id = fx
            .db
            .sales()
            .record(&header(&fx, 3998), &[widget_line(&fx, 2)])
            .await
            .unwrap();

        let widget = fx.db.products().get(fx.widget_id).await.unwrap().unwrap();
        assert_eq!(widget.quantity, 8);

        let sales = fx.db.sales().list().await.unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].id, sale_id);
        assert_eq!(sales[0].total_cents, 3998);
        assert_eq!(sales[0].employee_name, "Dara Chan");

        let lines = fx.db.sales().lines(sale_id).await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, fx.widget_id);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].amount_cents, 3998);
    }

    #[tokio::test]
    async fn test_multi_line_sale_adjusts_each_product() {
        let fx = fixture().await;

        let lines = vec![
            widget_line(&fx, 3),
            SaleLineInput {
                product_id: fx.gizmo_id,
                product_name: "Gizmo".to_string(),
                quantity: 2,
                unit_price_cents: 500,
                amount_cents: 1000,
            },
        ];

        let sale_id = fx.db.sales().record(&header(&fx, 6997), &lines).await.unwrap();

        assert_eq!(fx.db.products().get(fx.widget_id).await.unwrap().unwrap().quantity, 7);
        assert_eq!(fx.db.products().get(fx.gizmo_id).await.unwrap().unwrap().quantity, 3);

        // Lines preserve input order.
        let stored = fx.db.sales().lines(sale_id).await.unwrap();
        assert_eq!(stored[0].product_id, fx.widget_id);
        assert_eq!(stored[1].product_id, fx.gizmo_id);
    }

    #[tokio::test]
    async fn test_failed_line_rolls_back_everything() {
        let fx = fixture().await;

        let lines = vec![
            widget_line(&fx, 2),
            // Unknown product id violates the sale_lines foreign key.
            SaleLineInput {
                product_id: 9999,
                product_name: "Ghost".to_string(),
                quantity: 1,
                unit_price_cents: 100,
                amount_cents: 100,
            },
        ];

        let err = fx.db.sales().record(&header(&fx, 4098), &lines).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKey { .. }));

        // No header, no lines, no stock change from the first line either.
        assert!(fx.db.sales().list().await.unwrap().is_empty());
        assert_eq!(fx.db.products().get(fx.widget_id).await.unwrap().unwrap().quantity, 10);
    }

    #[tokio::test]
    async fn test_no_stock_floor() {
        let fx = fixture().await;

        // Selling 12 of a product with 10 on hand is allowed and leaves -2.
        fx.db
            .sales()
            .record(&header(&fx, 23988), &[widget_line(&fx, 12)])
            .await
            .unwrap();

        assert_eq!(fx.db.products().get(fx.widget_id).await.unwrap().unwrap().quantity, -2);
    }

    #[tokio::test]
    async fn test_duplicate_calls_are_independent() {
        let fx = fixture().await;

        let first = fx.db.sales().record(&header(&fx, 3998), &[widget_line(&fx, 2)]).await.unwrap();
        let second = fx.db.sales().record(&header(&fx, 3998), &[widget_line(&fx, 2)]).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(fx.db.sales().list().await.unwrap().len(), 2);
        assert_eq!(fx.db.products().get(fx.widget_id).await.unwrap().unwrap().quantity, 6);
    }

    #[tokio::test]
    async fn test_empty_line_list_records_header_only() {
        let fx = fixture().await;

        let sale_id = fx.db.sales().record(&header(&fx, 0), &[]).await.unwrap();

        assert_eq!(fx.db.sales().list().await.unwrap().len(), 1);
        assert!(fx.db.sales().lines(sale_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_newest_date_first() {
        let fx = fixture().await;

        let mut early = header(&fx, 100);
        early.sale_date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let mut late = header(&fx, 200);
        late.sale_date = NaiveDate::from_ymd_opt(2026, 7, 15).unwrap();

        fx.db.sales().record(&early, &[]).await.unwrap();
        fx.db.sales().record(&late, &[]).await.unwrap();

        let sales = fx.db.sales().list().await.unwrap();
        assert_eq!(sales[0].total_cents, 200);
        assert_eq!(sales[1].total_cents, 100);
    }
}
