use crate::inventory::DEFAULT_ROWS_PER_PAGE;

/// 后台配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | CATALOG_PATH | (未设置) | 商品目录 JSON 文件，未设置时使用内置示例 |
/// | ROWS_PER_PAGE | 5 | 列表每页行数 |
///
/// # 示例
///
/// ```ignore
/// CATALOG_PATH=./catalog.json ROWS_PER_PAGE=10 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 商品目录文件
    pub catalog_path: Option<String>,
    /// 每页行数 (>= 1)
    pub rows_per_page: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
            catalog_path: std::env::var("CATALOG_PATH").ok().filter(|v| !v.is_empty()),
            rows_per_page: std::env::var("ROWS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|rows: &usize| *rows > 0)
                .unwrap_or(DEFAULT_ROWS_PER_PAGE),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(catalog_path: Option<String>, rows_per_page: usize) -> Self {
        let mut config = Self::from_env();
        config.catalog_path = catalog_path;
        config.rows_per_page = rows_per_page;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_catalog_and_page_size() {
        let config = Config::with_overrides(Some("/tmp/catalog.json".into()), 20);
        assert_eq!(config.catalog_path.as_deref(), Some("/tmp/catalog.json"));
        assert_eq!(config.rows_per_page, 20);
    }

    #[test]
    fn environment_flags() {
        let mut config = Config::with_overrides(None, 5);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
