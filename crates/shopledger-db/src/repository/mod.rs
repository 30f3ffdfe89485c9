//! # Repository Module
//!
//! Database repository implementations for Shopledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Caller (desktop shell)                                     │
//! │       │                                                     │
//! │       │  db.sales().record(&header, &lines)                 │
//! │       ▼                                                     │
//! │  SaleRepository                                             │
//! │  ├── record(&self, header, lines)   ← atomic ledger write   │
//! │  ├── list(&self)                                            │
//! │  └── lines(&self, sale_id)                                  │
//! │       │                                                     │
//! │       ▼  SQL                                                │
//! │  SQLite database                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entity repositories ([`employee`], [`customer`], [`category`],
//! [`supplier`], [`product`]) are plain parameterized CRUD. The two ledger
//! repositories ([`sale`], [`import`]) each expose a single multi-row
//! atomic write plus read accessors; they are the only place in the system
//! where product stock is mutated as a side effect.

pub mod category;
pub mod customer;
pub mod employee;
pub mod import;
pub mod product;
pub mod sale;
pub mod supplier;
