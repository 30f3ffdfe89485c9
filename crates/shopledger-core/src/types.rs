//! # Domain Types
//!
//! Entities and ledger input types used throughout Shopledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Domain Types                          │
//! │                                                             │
//! │  Entities (stored rows)        Ledger inputs (caller data)  │
//! │  ──────────────────────        ───────────────────────────  │
//! │  Employee   Customer           SaleInput  + SaleLineInput   │
//! │  Category   Supplier           ImportInput+ ImportLineInput │
//! │  Product                                                    │
//! │  Sale       SaleLine                                        │
//! │  Import     ImportLine                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Sale and import rows carry denormalized copies of employee, customer,
//! supplier and product names. The copies are point-in-time captures taken
//! when the transaction is recorded; renaming an entity later must not
//! rewrite history, so the snapshots are deliberate and stay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::SUPPLY_PRICE_PCT;

// =============================================================================
// Entities
// =============================================================================

/// An employee of the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
    /// Monthly salary in cents.
    pub salary_cents: i64,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub hired_date: Option<NaiveDate>,
    /// Path or URI of the employee photo, if one was uploaded.
    pub photo: Option<String>,
    /// True once the employee has stopped working (soft deactivation).
    pub stopped: bool,
}

/// Input for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub salary_cents: i64,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub hired_date: Option<NaiveDate>,
    pub photo: Option<String>,
    pub stopped: bool,
}

/// A customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub contact: Option<String>,
}

/// Input for creating or updating a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub gender: Option<String>,
    pub contact: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A supplier of stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub contact: Option<String>,
}

/// A product on hand.
///
/// `quantity` is mutated by the two ledger operations: a sale decrements it,
/// an import increments it (or creates the row). No floor is enforced, so a
/// sale can drive it negative; the listing screens surface that as an
/// oversold product rather than the ledger rejecting the sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Stock on hand. May go negative, see type docs.
    pub quantity: i64,
    /// Unit sale price in cents. Overwritten by each import of this product.
    pub sale_price_cents: i64,
    /// Unit supply (cost) price in cents. Set at creation only.
    pub supply_price_cents: i64,
    pub category_id: i64,
}

impl Product {
    /// Returns the sale price as Money.
    #[inline]
    pub fn sale_price(&self) -> Money {
        Money::from_cents(self.sale_price_cents)
    }

    /// Returns the supply price as Money.
    #[inline]
    pub fn supply_price(&self) -> Money {
        Money::from_cents(self.supply_price_cents)
    }
}

/// Input for creating or updating a product through the entity layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub sale_price_cents: i64,
    pub supply_price_cents: i64,
    pub category_id: i64,
}

/// A product row joined with its category name, for listing screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductWithCategory {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub sale_price_cents: i64,
    pub supply_price_cents: i64,
    pub category_id: i64,
    pub category: String,
}

// =============================================================================
// Sale Ledger
// =============================================================================

/// A recorded sale header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    pub sale_date: NaiveDate,
    pub employee_id: i64,
    /// Employee name snapshot taken at sale time.
    pub employee_name: String,
    pub customer_id: i64,
    /// Customer name snapshot taken at sale time.
    pub customer_name: String,
    /// Declared total in cents, supplied by the caller and not recomputed.
    pub total_cents: i64,
}

/// A line of a recorded sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleLine {
    pub id: i64,
    pub sale_id: i64,
    pub product_id: i64,
    /// Product name snapshot taken at sale time.
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    /// Line amount in cents, supplied by the caller and not recomputed.
    pub amount_cents: i64,
}

/// Caller-supplied sale header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleInput {
    pub sale_date: NaiveDate,
    pub employee_id: i64,
    pub employee_name: String,
    pub customer_id: i64,
    pub customer_name: String,
    pub total_cents: i64,
}

/// Caller-supplied sale line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLineInput {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub amount_cents: i64,
}

// =============================================================================
// Import Ledger
// =============================================================================

/// A recorded stock import header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Import {
    pub id: i64,
    pub import_date: NaiveDate,
    pub supplier_id: i64,
    /// Supplier name snapshot taken at import time.
    pub supplier_name: String,
    pub employee_id: i64,
    /// Employee name snapshot taken at import time.
    pub employee_name: String,
    /// Declared total in cents, supplied by the caller and not recomputed.
    pub total_cents: i64,
}

/// A line of a recorded import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ImportLine {
    pub id: i64,
    pub import_id: i64,
    pub product_id: i64,
    /// Product name snapshot taken at import time.
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    /// Line amount in cents, supplied by the caller and not recomputed.
    pub amount_cents: i64,
}

/// Caller-supplied import header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportInput {
    pub import_date: NaiveDate,
    pub supplier_id: i64,
    pub supplier_name: String,
    pub employee_id: i64,
    pub employee_name: String,
    pub total_cents: i64,
}

/// Caller-supplied import line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLineInput {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub amount_cents: i64,
}

impl ImportLineInput {
    /// Supply price assigned when this line creates a product that does not
    /// exist yet: [`SUPPLY_PRICE_PCT`] percent of the unit price.
    pub fn initial_supply_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents).percent(SUPPLY_PRICE_PCT)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(unit_price_cents: i64) -> ImportLineInput {
        ImportLineInput {
            product_id: 9,
            product_name: "Gadget".to_string(),
            quantity: 10,
            unit_price_cents,
            amount_cents: unit_price_cents * 10,
        }
    }

    #[test]
    fn test_initial_supply_price() {
        // $10.00 -> $8.00
        assert_eq!(line(1000).initial_supply_price().cents(), 800);
        // $19.99 -> $15.99
        assert_eq!(line(1999).initial_supply_price().cents(), 1599);
    }

    #[test]
    fn test_product_money_accessors() {
        let product = Product {
            id: 1,
            name: "Widget".to_string(),
            quantity: 10,
            sale_price_cents: 1999,
            supply_price_cents: 1599,
            category_id: 1,
        };
        assert_eq!(product.sale_price().cents(), 1999);
        assert_eq!(product.supply_price().to_string(), "$15.99");
    }
}
