//! 核心模块 - 配置、目录加载和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 后台配置
//! - [`load_catalog`] - 从 JSON 文件加载初始商品目录
//! - [`CatalogSourceError`] - 目录加载错误

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::load_catalog;
pub use config::Config;
pub use error::{CatalogSourceError, Result};
