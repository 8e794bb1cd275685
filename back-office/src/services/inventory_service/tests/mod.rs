use super::*;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::models::{Specification, StockStatus};

use crate::inventory::SelectAllState;

fn entry(id: &str, name: &str, category: &str, specs: &[(&str, u32)], price: i64) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        specifications: specs
            .iter()
            .enumerate()
            .map(|(i, (spec, qty))| Specification::new(format!("{id}-{i}"), *spec, *qty))
            .collect(),
        price: Decimal::from(price),
        created_at: 0,
        updated_at: 0,
        image: String::new(),
    }
}

/// '1' (上衣, M×5, 100) and '2' (褲子, M×0, 300)
fn two_entry_catalog() -> Vec<CatalogEntry> {
    vec![
        entry("1", "棉質T恤", "上衣", &[("M", 5)], 100),
        entry("2", "直筒牛仔褲", "褲子", &[("M", 0)], 300),
    ]
}

/// Twelve in-stock entries with ids "p01".."p12"
fn twelve_entry_catalog() -> Vec<CatalogEntry> {
    (1..=12)
        .map(|i| {
            entry(
                &format!("p{:02}", i),
                &format!("商品 {}", i),
                if i % 2 == 0 { "上衣" } else { "褲子" },
                &[("M", i)],
                i64::from(i) * 100,
            )
        })
        .collect()
}

fn create_test_service(catalog: Vec<CatalogEntry>) -> InventoryService {
    InventoryService::new(catalog)
}

/// Service whose reporter records every message
fn create_reporting_service(
    catalog: Vec<CatalogEntry>,
) -> (InventoryService, Arc<Mutex<Vec<String>>>) {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let sink = reports.clone();
    let service = InventoryService::new(catalog)
        .with_error_reporter(move |msg: &str| sink.lock().push(msg.to_string()));
    (service, reports)
}

fn visible_ids(service: &InventoryService) -> Vec<String> {
    service.page().items.into_iter().map(|row| row.id).collect()
}

fn new_entry(name: &str, category: &str, price: i64) -> CatalogEntryCreate {
    CatalogEntryCreate {
        name: name.to_string(),
        category: category.to_string(),
        specifications: vec![Specification::new("n-0", "F", 3)],
        price: Decimal::from(price),
        image: None,
    }
}

mod test_flows;
