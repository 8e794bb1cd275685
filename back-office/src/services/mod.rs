//! 服务层
//!
//! - [`InventoryService`] - 库存列表管线 (filter → search → paginate → select) 与商品增删改
//! - [`collaborators`] - 错误提示、导航、点击回调接口

pub mod collaborators;
pub mod inventory_service;

pub use collaborators::{ErrorReporter, Navigator, SelectHandler};
pub use inventory_service::{DeleteTarget, InventoryPage, InventoryService};
