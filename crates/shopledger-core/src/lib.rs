//! # shopledger-core: Pure Domain Types for Shopledger
//!
//! Shopledger is a small business-management backend for a retail/inventory
//! operation: employees, customers, products, suppliers, sales and stock
//! imports over a local SQLite store. This crate holds the domain model; all
//! storage lives in `shopledger-db`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Shopledger Architecture                   │
//! │                                                             │
//! │  Desktop shell (forms, lists, dialogs)                      │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ★ shopledger-core (THIS CRATE) ★                           │
//! │    entity types · ledger inputs · Money                     │
//! │    NO I/O • NO DATABASE • PURE TYPES                        │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  shopledger-db                                              │
//! │    SQLite pool, repositories, ledger transactions           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities and ledger input types
//! - [`money`] - Integer-cent money arithmetic (no floating point!)

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category assigned to products created on the fly by an import whose line
/// references an unknown product id.
///
/// ## Why a constant?
/// The fallback must point at a real category row. This is the seed value
/// for `DbConfig::default_category_id`; deployments with a different
/// category layout override it through configuration instead of editing
/// this constant.
pub const DEFAULT_CATEGORY_ID: i64 = 1;

/// Percentage of the unit price used as the supply (cost) price when an
/// import creates a product that does not exist yet.
///
/// The supply price is only derived at creation time. Later imports of the
/// same product overwrite the sale price but never touch the supply price.
pub const SUPPLY_PRICE_PCT: u32 = 80;
