//! Built-in demo data, used when no catalog file is configured

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::models::{CatalogEntry, CategoryNode, Specification};

// 2025-01-01 00:00:00 UTC
const SAMPLE_CREATED_AT: i64 = 1_735_689_600_000;

struct SampleRow {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    specs: &'static [(&'static str, u32)],
    price: &'static str,
}

const ROWS: &[SampleRow] = &[
    SampleRow {
        id: "1",
        name: "經典棉質T恤",
        category: "上衣",
        specs: &[("白色 M", 12), ("白色 L", 8), ("黑色 M", 0)],
        price: "390",
    },
    SampleRow {
        id: "2",
        name: "直筒牛仔褲",
        category: "褲子",
        specs: &[("28", 0), ("30", 0)],
        price: "1290",
    },
    SampleRow {
        id: "3",
        name: "羊毛大衣",
        category: "外套",
        specs: &[("灰色 M", 3), ("灰色 L", 2)],
        price: "12800",
    },
    SampleRow {
        id: "4",
        name: "亞麻襯衫",
        category: "上衣",
        specs: &[("藍色 S", 5), ("藍色 XL", 1)],
        price: "980",
    },
    SampleRow {
        id: "5",
        name: "運動短褲",
        category: "褲子",
        specs: &[("黑色 M", 20)],
        price: "590",
    },
    SampleRow {
        id: "6",
        name: "針織毛衣",
        category: "上衣",
        specs: &[("米色 F", 0)],
        price: "1580",
    },
    SampleRow {
        id: "7",
        name: "防風夾克",
        category: "外套",
        specs: &[("軍綠 L", 4), ("黑色 L", 6)],
        price: "2680",
    },
    SampleRow {
        id: "8",
        name: "帆布托特包",
        category: "配件",
        specs: &[("原色", 15)],
        price: "450",
    },
    SampleRow {
        id: "9",
        name: "羊毛圍巾",
        category: "配件",
        specs: &[("酒紅", 7), ("深灰", 0)],
        price: "680",
    },
    SampleRow {
        id: "10",
        name: "寬版西裝褲",
        category: "褲子",
        specs: &[("黑色 S", 2), ("黑色 M", 3)],
        price: "1490.5",
    },
    SampleRow {
        id: "11",
        name: "連帽上衣",
        category: "上衣",
        specs: &[("灰色 XL", 9)],
        price: "1180",
    },
    SampleRow {
        id: "12",
        name: "棒球帽",
        category: "配件",
        specs: &[],
        price: "350",
    },
];

/// Twelve products across four categories, some out of stock
pub fn sample_catalog() -> Vec<CatalogEntry> {
    ROWS.iter()
        .enumerate()
        .map(|(i, row)| CatalogEntry {
            id: row.id.to_string(),
            name: row.name.to_string(),
            category: row.category.to_string(),
            specifications: row
                .specs
                .iter()
                .enumerate()
                .map(|(n, (name, quantity))| {
                    Specification::new(format!("{}-s{}", row.id, n + 1), *name, *quantity)
                })
                .collect(),
            price: Decimal::from_str(row.price).unwrap_or_default(),
            created_at: SAMPLE_CREATED_AT + i as i64 * 86_400_000,
            updated_at: SAMPLE_CREATED_AT + i as i64 * 86_400_000,
            image: format!("/images/products/{}.png", row.id),
        })
        .collect()
}

/// Top-level categories and their children
pub fn sample_categories() -> (Vec<CategoryNode>, Vec<(String, Vec<CategoryNode>)>) {
    let top_level = vec![
        CategoryNode::new("1", "電子產品"),
        CategoryNode::new("2", "服裝"),
        CategoryNode::new("3", "食品"),
    ];
    let children = vec![
        (
            "1".to_string(),
            vec![CategoryNode::new("1-1", "手機"), CategoryNode::new("1-2", "電腦")],
        ),
        ("2".to_string(), vec![CategoryNode::new("2-1", "上衣")]),
        ("3".to_string(), vec![CategoryNode::new("3-1", "零食")]),
    ];
    (top_level, children)
}
