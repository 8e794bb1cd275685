//! Free-text search over display rows

use super::projection::DisplayProjection;
use crate::utils::format::strip_price_decoration;

/// Whether `row` contains the already-normalized (trimmed, lowercased) query
fn row_matches(row: &DisplayProjection, needle: &str) -> bool {
    let price = strip_price_decoration(&row.price);
    [
        row.name.as_str(),
        row.category.as_str(),
        row.specification.as_str(),
        price.as_str(),
        row.inventory.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Rows containing `query` in name, category, specification names, bare
/// price or inventory text. A blank query returns the input unchanged.
pub fn search(rows: &[DisplayProjection], query: &str) -> Vec<DisplayProjection> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row_matches(row, &needle))
        .cloned()
        .collect()
}
