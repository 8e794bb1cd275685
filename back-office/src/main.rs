use anyhow::Context;
use back_office::category::StaticConfirmer;
use back_office::sample::{sample_catalog, sample_categories};
use back_office::{CategoryBoard, InventoryService, load_catalog, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志, 配置)
    let config = setup_environment()?;

    print_banner();
    tracing::info!(environment = %config.environment, "Back office starting...");

    // 2. 加载商品目录
    let catalog = match &config.catalog_path {
        Some(path) => {
            load_catalog(path).with_context(|| format!("failed to load catalog from {path}"))?
        }
        None => {
            tracing::info!("CATALOG_PATH not set, using built-in sample catalog");
            sample_catalog()
        }
    };

    // 3. 库存列表
    let inventory = InventoryService::with_rows_per_page(catalog, config.rows_per_page)
        .context("invalid ROWS_PER_PAGE")?
        .with_error_reporter(|message: &str| tracing::warn!(reason = message, "toast"));

    let page = inventory.page();
    let (from, to) = page.page_info.display_range();
    tracing::info!(
        from,
        to,
        total = page.page_info.total,
        pages = page.page_info.total_pages,
        "First inventory page"
    );
    for row in &page.items {
        tracing::info!(
            id = %row.id,
            name = %row.name,
            category = %row.category,
            price = %row.price,
            inventory = %row.inventory,
            "row"
        );
    }

    // 4. 分类看板
    let (top_level, children) = sample_categories();
    let board = CategoryBoard::new(top_level, children)
        .with_error_reporter(|message: &str| tracing::warn!(reason = message, "toast"))
        .with_confirmer(StaticConfirmer(true));

    let top = board.top_level_strategy();
    top.on_reorder("3", "1");
    let added = top.add("家居");
    top.on_select("2");
    if let Some(nested) = board.nested_strategy() {
        nested.add("褲子");
        nested.delete("2-1").await;
    }
    if let Some(added) = added {
        top.delete(&added.id).await;
    }

    let tree = serde_json::to_string(&board.snapshot()).context("failed to serialize categories")?;
    tracing::info!(tree = %tree, "Category board after demo round-trip");

    Ok(())
}
