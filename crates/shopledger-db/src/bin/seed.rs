//! # Seed Data Generator
//!
//! Populates a database with development data: categories, a few parties
//! and a product range, then records one sample import and one sample sale
//! so the ledger screens have something to show.
//!
//! ## Usage
//! ```bash
//! # Seed the default ./shopledger.db
//! cargo run -p shopledger-db --bin seed
//!
//! # Specify database path
//! cargo run -p shopledger-db --bin seed -- --db ./data/shop.db
//! ```

use chrono::Local;
use std::env;
use tracing_subscriber::EnvFilter;

use shopledger_core::{
    ImportInput, ImportLineInput, NewCustomer, NewEmployee, NewProduct, SaleInput, SaleLineInput,
};
use shopledger_db::{Database, DbConfig, DbResult};

/// Category name / product list pairs for realistic test data.
const CATALOG: &[(&str, &[(&str, i64)])] = &[
    (
        "Beverages",
        &[
            ("Coca-Cola 330ml", 150),
            ("Orange Juice 1L", 399),
            ("Drinking Water 1.5L", 80),
            ("Iced Tea 500ml", 175),
        ],
    ),
    (
        "Snacks",
        &[
            ("Potato Chips", 250),
            ("Chocolate Bar", 199),
            ("Salted Peanuts", 120),
            ("Rice Crackers", 160),
        ],
    ),
    (
        "Household",
        &[
            ("Dish Soap 500ml", 320),
            ("Laundry Powder 1kg", 550),
            ("Paper Towels", 275),
        ],
    ),
];

#[tokio::main]
async fn main() -> DbResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| "./shopledger.db".to_string());

    println!("Seeding database at {}", db_path);

    let db = Database::new(DbConfig::new(&db_path)).await?;

    // Categories
    println!();
    println!("Creating categories...");
    let mut category_ids = Vec::new();
    for (name, _) in CATALOG {
        let id = db.categories().insert(name).await?;
        category_ids.push(id);
        println!("  {} (id {})", name, id);
    }

    // Parties
    println!();
    println!("Creating parties...");
    let employee_id = db
        .employees()
        .insert(&NewEmployee {
            name: "Dara Chan".to_string(),
            gender: Some("F".to_string()),
            birth_date: None,
            position: Some("Cashier".to_string()),
            salary_cents: 38_000_00,
            address: None,
            contact: Some("555-0101".to_string()),
            hired_date: None,
            photo: None,
            stopped: false,
        })
        .await?;

    let customer_id = db
        .customers()
        .insert(&NewCustomer {
            name: "Walk-in Customer".to_string(),
            gender: None,
            contact: None,
        })
        .await?;

    let supplier_id = db.suppliers().insert("Mekong Wholesale", Some("555-0160")).await?;
    println!("  1 employee, 1 customer, 1 supplier");

    // Products
    println!();
    println!("Creating products...");
    let mut first_product_id = None;
    let mut generated = 0;
    for ((_, products), category_id) in CATALOG.iter().zip(&category_ids) {
        for (name, price_cents) in *products {
            let id = db
                .products()
                .insert(&NewProduct {
                    name: name.to_string(),
                    quantity: 0,
                    sale_price_cents: *price_cents,
                    supply_price_cents: price_cents * 80 / 100,
                    category_id: *category_id,
                })
                .await?;
            first_product_id.get_or_insert(id);
            generated += 1;
        }
    }
    println!("  {} products", generated);

    // One sample import to put stock on the shelf, one sample sale.
    let today = Local::now().date_naive();
    let product_id = first_product_id.expect("catalog is non-empty");
    let product = db.products().get(product_id).await?.expect("just inserted");

    let import_id = db
        .imports()
        .record(
            &ImportInput {
                import_date: today,
                supplier_id,
                supplier_name: "Mekong Wholesale".to_string(),
                employee_id,
                employee_name: "Dara Chan".to_string(),
                total_cents: product.sale_price_cents * 50,
            },
            &[ImportLineInput {
                product_id,
                product_name: product.name.clone(),
                quantity: 50,
                unit_price_cents: product.sale_price_cents,
                amount_cents: product.sale_price_cents * 50,
            }],
        )
        .await?;

    let sale_id = db
        .sales()
        .record(
            &SaleInput {
                sale_date: today,
                employee_id,
                employee_name: "Dara Chan".to_string(),
                customer_id,
                customer_name: "Walk-in Customer".to_string(),
                total_cents: product.sale_price_cents * 2,
            },
            &[SaleLineInput {
                product_id,
                product_name: product.name.clone(),
                quantity: 2,
                unit_price_cents: product.sale_price_cents,
                amount_cents: product.sale_price_cents * 2,
            }],
        )
        .await?;

    println!();
    println!("✓ Recorded import {} and sale {}", import_id, sale_id);

    let stocked = db.products().get(product_id).await?.expect("still there");
    println!("  {} now has {} on hand", stocked.name, stocked.quantity);

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Parses `--db PATH` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
