//! Dashboard read models

pub mod chart;
pub mod order_summary;

pub use chart::{ChartPoint, ChartSeries, StatisticalChart, TimeRange};
pub use order_summary::OrderSummary;
