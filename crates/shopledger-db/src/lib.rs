//! # shopledger-db: Database Layer for Shopledger
//!
//! SQLite storage for the Shopledger business-management backend, built on
//! sqlx. Besides plain entity CRUD, this crate implements the only
//! non-trivial logic in the system: the two atomic ledger operations that
//! record a sale or a stock import and adjust product stock in the same
//! transaction.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Shopledger Data Flow                     │
//! │                                                             │
//! │  Desktop shell (collects header + line items)               │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │               shopledger-db (THIS CRATE)            │   │
//! │  │                                                     │   │
//! │  │  ┌──────────┐  ┌───────────────┐  ┌─────────────┐  │   │
//! │  │  │ Database │  │ Repositories  │  │ Migrations  │  │   │
//! │  │  │ (pool.rs)│  │ sale, import, │  │ (embedded)  │  │   │
//! │  │  │          │◄─│ product, ...  │  │ 001_init.sql│  │   │
//! │  │  └──────────┘  └───────────────┘  └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  SQLite database file                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (entities and ledgers)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopledger_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/shop.db")).await?;
//!
//! let sale_id = db.sales().record(&header, &lines).await?;
//! let lines = db.sales().lines(sale_id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::customer::CustomerRepository;
pub use repository::employee::EmployeeRepository;
pub use repository::import::ImportRepository;
pub use repository::product::ProductRepository;
pub use repository::sale::SaleRepository;
pub use repository::supplier::SupplierRepository;
