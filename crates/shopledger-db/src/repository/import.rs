//! # Import Ledger Repository
//!
//! Records stock imports as atomic multi-row writes. Structurally the
//! mirror of the sale ledger, except that each line performs an upsert
//! against the product table instead of a plain decrement.
//!
//! ## Transaction Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  record(header, lines)                                      │
//! │                                                             │
//! │  BEGIN                                                      │
//! │    INSERT imports (header)          → import_id             │
//! │    for each line, in input order:                           │
//! │      INSERT import_lines (line, import_id)                  │
//! │      product exists?                                        │
//! │        yes → quantity += line.qty, sale price = line price  │
//! │        no  → INSERT product (line id/name/qty,              │
//! │              sale price = line price,                       │
//! │              supply price = 80% of line price,              │
//! │              category = configured default)                 │
//! │  COMMIT                                                     │
//! │                                                             │
//! │  Any failure → ROLLBACK, nothing visible                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The update path never touches the supply price; it is derived once, on
//! creation. The create path fails (and rolls back the whole import) if the
//! configured default category does not exist.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use shopledger_core::{Import, ImportInput, ImportLine, ImportLineInput};

/// Repository for the import ledger.
#[derive(Debug, Clone)]
pub struct ImportRepository {
    pool: SqlitePool,

    /// Category assigned to products created by the upsert's insert path.
    default_category_id: i64,
}

impl ImportRepository {
    /// Creates a new ImportRepository.
    pub fn new(pool: SqlitePool, default_category_id: i64) -> Self {
        ImportRepository {
            pool,
            default_category_id,
        }
    }

    /// Records an import: header, lines and product upserts in one
    /// transaction. Returns the generated import id.
    ///
    /// Same atomicity contract as the sale ledger: either every row and
    /// every product mutation is applied, or none are.
    pub async fn record(&self, header: &ImportInput, lines: &[ImportLineInput]) -> DbResult<i64> {
        debug!(
            supplier = %header.supplier_name,
            employee = %header.employee_name,
            lines = lines.len(),
            "recording import"
        );

        // Rolls back on drop unless committed.
        let mut tx = self.pool.begin().await?;

        let import_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO imports
                (import_date, supplier_id, supplier_name, employee_id, employee_name, total_cents)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            "#,
        )
        .bind(header.import_date)
        .bind(header.supplier_id)
        .bind(&header.supplier_name)
        .bind(header.employee_id)
        .bind(&header.employee_name)
        .bind(header.total_cents)
        .fetch_one(&mut *tx)
        .await?;

        for line in lines {
            sqlx::query(
                r#"
                INSERT INTO import_lines
                    (import_id, product_id, product_name, quantity, unit_price_cents, amount_cents)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(import_id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.quantity)
            .bind(line.unit_price_cents)
            .bind(line.amount_cents)
            .execute(&mut *tx)
            .await?;

            let exists: Option<i64> =
                sqlx::query_scalar("SELECT id FROM products WHERE id = ?1")
                    .bind(line.product_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            if exists.is_some() {
                // Restock: bump quantity, overwrite the sale price with the
                // imported unit price. Supply price stays as-is.
                sqlx::query(
                    "UPDATE products SET quantity = quantity + ?1, sale_price_cents = ?2 WHERE id = ?3",
                )
                .bind(line.quantity)
                .bind(line.unit_price_cents)
                .bind(line.product_id)
                .execute(&mut *tx)
                .await?;
            } else {
                sqlx::query(
                    r#"
                    INSERT INTO products
                        (id, name, quantity, sale_price_cents, supply_price_cents, category_id)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    "#,
                )
                .bind(line.product_id)
                .bind(&line.product_name)
                .bind(line.quantity)
                .bind(line.unit_price_cents)
                .bind(line.initial_supply_price().cents())
                .bind(self.default_category_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        info!(import_id, lines = lines.len(), total_cents = header.total_cents, "import recorded");

        Ok(import_id)
    }

    /// Lists all import headers, newest business date first.
    pub async fn list(&self) -> DbResult<Vec<Import>> {
        let imports = sqlx::query_as::<_, Import>(
            r#"
            SELECT id, import_date, supplier_id, supplier_name,
                   employee_id, employee_name, total_cents
            FROM imports
            ORDER BY import_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(imports)
    }

    /// Gets the lines of one import, in insertion order.
    pub async fn lines(&self, import_id: i64) -> DbResult<Vec<ImportLine>> {
        let lines = sqlx::query_as::<_, ImportLine>(
            r#"
            SELECT id, import_id, product_id, product_name,
                   quantity, unit_price_cents, amount_cents
            FROM import_lines
            WHERE import_id = ?1
            ORDER BY id
            "#,
        )
        .bind(import_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
