//! Back Office - 商品后台核心
//!
//! # 架构概述
//!
//! - **库存列表** (`inventory`): filter → projection → search → pagination → selection
//! - **服务** (`services`): [`InventoryService`] 编排列表状态与商品增删改
//! - **分类管理** (`category`): 两级分类树，拖拽排序与确认删除
//! - **表单** (`forms`): 编辑商品、规格对话框、新增商品
//! - **报表** (`reports`): 统计图表与订单摘要
//!
//! # 模块结构
//!
//! ```text
//! back-office/src/
//! ├── core/          # 配置、目录加载、错误
//! ├── inventory/     # 列表管线各阶段
//! ├── services/      # InventoryService 与协作者接口
//! ├── category/      # 分类看板与策略
//! ├── forms/         # 表单状态与校验
//! ├── reports/       # 图表与订单摘要
//! ├── sample.rs      # 内置示例数据
//! └── utils/         # 格式化、日志、校验工具
//! ```

pub mod category;
pub mod core;
pub mod forms;
pub mod inventory;
pub mod reports;
pub mod sample;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use category::{CategoryBoard, CategoryStrategy, DeleteConfirmer};
pub use core::{CatalogSourceError, Config, load_catalog};
pub use inventory::{DisplayProjection, Paginator, SelectAllState, SelectionTracker};
pub use services::{DeleteTarget, ErrorReporter, InventoryPage, InventoryService, Navigator};

// Re-export unified error types from shared
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{build_filter, init_logger, init_logger_with_file};

/// Load `.env`, then install the logger from [`Config`]
pub fn setup_environment() -> anyhow::Result<Config> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    tracing::debug!(environment = %config.environment, "Environment ready");
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____             __      ____   _________
   / __ )____ ______/ /__   / __ \ / __/ __(_)_______
  / __  / __ `/ ___/ //_/  / / / // /_/ /_/ / ___/ _ \
 / /_/ / /_/ / /__/ ,<    / /_/ // __/ __/ / /__/  __/
/_____/\__,_/\___/_/|_|   \____//_/ /_/ /_/\___/\___/
    "#
    );
}
