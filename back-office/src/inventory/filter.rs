//! Filter evaluator
//!
//! Pure predicate deciding whether a catalog entry satisfies a
//! [`FilterSpec`]. Stock status is always evaluated against the derived
//! total stock.

use shared::models::{CatalogEntry, FilterSpec, StockStatus};

/// Whether `entry` satisfies every active constraint of `filter`
pub fn matches(entry: &CatalogEntry, filter: &FilterSpec) -> bool {
    // 1. Category (OR)
    if !filter.categories.is_empty() && !filter.categories.contains(&entry.category) {
        return false;
    }

    // 2. Specification (OR: any spec name contains any selected token)
    if !filter.specifications.is_empty() {
        let has_matching_spec = filter.specifications.iter().any(|token| {
            entry
                .specifications
                .iter()
                .any(|spec| spec.name.contains(token.as_str()))
        });
        if !has_matching_spec {
            return false;
        }
    }

    // 3. Price range
    if let Some(min) = filter.price_min {
        if entry.price < min {
            return false;
        }
    }
    if let Some(max) = filter.price_max {
        if entry.price > max {
            return false;
        }
    }

    // 4. Stock status
    let total_stock = entry.total_stock();
    match filter.stock_status {
        StockStatus::All => true,
        StockStatus::InStock => total_stock > 0,
        StockStatus::OutOfStock => total_stock == 0,
    }
}

/// Keep the entries matching `filter`, in catalog order
pub fn apply<'a>(entries: &'a [CatalogEntry], filter: &FilterSpec) -> Vec<&'a CatalogEntry> {
    entries.iter().filter(|e| matches(e, filter)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::Specification;

    fn entry(id: &str, category: &str, specs: &[(&str, u32)], price: i64) -> CatalogEntry {
        CatalogEntry {
            id: id.into(),
            name: format!("商品{}", id),
            category: category.into(),
            specifications: specs
                .iter()
                .enumerate()
                .map(|(i, (name, qty))| Specification::new(format!("{id}-{i}"), *name, *qty))
                .collect(),
            price: Decimal::from(price),
            created_at: 0,
            updated_at: 0,
            image: String::new(),
        }
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            entry("1", "上衣", &[("M", 5)], 100),
            entry("2", "褲子", &[("M", 0)], 300),
            entry("3", "上衣", &[("XL 黑", 2), ("L 白", 0)], 680),
        ]
    }

    fn ids(entries: Vec<&CatalogEntry>) -> Vec<&str> {
        entries.into_iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let catalog = catalog();
        assert_eq!(ids(apply(&catalog, &FilterSpec::default())), ["1", "2", "3"]);
    }

    #[test]
    fn category_filter() {
        let catalog = catalog();
        let filter = FilterSpec {
            categories: vec!["上衣".into()],
            ..Default::default()
        };
        assert_eq!(ids(apply(&catalog[..2], &filter)), ["1"]);
    }

    #[test]
    fn out_of_stock_uses_derived_total() {
        let catalog = catalog();
        let filter = FilterSpec {
            stock_status: StockStatus::OutOfStock,
            ..Default::default()
        };
        assert_eq!(ids(apply(&catalog, &filter)), ["2"]);

        let filter = FilterSpec {
            stock_status: StockStatus::InStock,
            ..Default::default()
        };
        assert_eq!(ids(apply(&catalog, &filter)), ["1", "3"]);
    }

    #[test]
    fn specification_tokens_match_substrings_case_sensitively() {
        let catalog = catalog();
        let filter = FilterSpec {
            specifications: vec!["XL".into(), "S".into()],
            ..Default::default()
        };
        assert_eq!(ids(apply(&catalog, &filter)), ["3"]);

        let filter = FilterSpec {
            specifications: vec!["xl".into()],
            ..Default::default()
        };
        assert!(apply(&catalog, &filter).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = catalog();
        let filter = FilterSpec {
            price_min: Some(Decimal::from(100)),
            price_max: Some(Decimal::from(300)),
            ..Default::default()
        };
        assert_eq!(ids(apply(&catalog, &filter)), ["1", "2"]);
    }

    #[test]
    fn groups_combine_with_and() {
        let catalog = catalog();
        let filter = FilterSpec {
            categories: vec!["上衣".into(), "褲子".into()],
            price_min: Some(Decimal::from(200)),
            stock_status: StockStatus::InStock,
            ..Default::default()
        };
        assert_eq!(ids(apply(&catalog, &filter)), ["3"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let filter = FilterSpec {
            categories: vec!["上衣".into()],
            stock_status: StockStatus::InStock,
            ..Default::default()
        };
        let once: Vec<CatalogEntry> = apply(&catalog, &filter).into_iter().cloned().collect();
        let twice: Vec<CatalogEntry> = apply(&once, &filter).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}
