//! In-memory product catalog served by the demo routes.

use respond_core::projection::{Record, Schema};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price_cents: i64,
    pub stock: u32,
    /// Purchase price; known to the schema but never listed publicly.
    pub supplier_cost_cents: i64,
}

impl Record for Product {
    fn schema() -> Schema<Self> {
        Schema::<Self>::new()
            .field("id", |p| json!(p.id))
            .field("name", |p| json!(p.name))
            .field("price_cents", |p| json!(p.price_cents))
            .field("stock", |p| json!(p.stock))
            .field("supplier_cost_cents", |p| json!(p.supplier_cost_cents))
    }
}

const ADJECTIVES: [&str; 5] = ["Compact", "Deluxe", "Rugged", "Silent", "Travel"];
const NOUNS: [&str; 5] = ["Kettle", "Lamp", "Backpack", "Speaker", "Tripod"];

/// Deterministic catalog of `count` products with ids `1..=count`.
pub fn seed(count: usize) -> Vec<Product> {
    (1..=count)
        .zip(ADJECTIVES.iter().cycle().zip(NOUNS.iter().cycle().skip(2)))
        .map(|(n, (adjective, noun))| {
            let id = i64::try_from(n).unwrap_or(i64::MAX);
            Product {
                id,
                name: format!("{adjective} {noun} {id}"),
                price_cents: 995 + id * 250,
                stock: u32::try_from(n % 7).unwrap_or(0) * 3,
                supplier_cost_cents: 400 + id * 100,
            }
        })
        .collect()
}

/// Products whose name starts with `prefix`, ignoring case.
pub fn search(products: &[Product], prefix: &str) -> Vec<Product> {
    let prefix = prefix.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().starts_with(&prefix))
        .cloned()
        .collect()
}
