use std::path::PathBuf;

use shared::error::AppError;
use thiserror::Error;

/// Failure to load the initial catalog
#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("无法读取商品目录 {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("商品目录格式错误 {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("商品目录内容无效: {0}")]
    Invalid(#[from] AppError),
}

pub type Result<T> = std::result::Result<T, CatalogSourceError>;
