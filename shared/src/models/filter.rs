//! Inventory Filter Model

use crate::error::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock status constraint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    #[default]
    All,
    InStock,
    OutOfStock,
}

/// Multi-field filter of the inventory list
///
/// Groups combine with AND; values inside `categories` and
/// `specifications` combine with OR. An empty group, a `None` bound or
/// [`StockStatus::All`] imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub categories: Vec<String>,
    /// Substring tokens matched against specification names
    pub specifications: Vec<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub stock_status: StockStatus,
}

impl FilterSpec {
    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.specifications.is_empty()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.stock_status == StockStatus::All
    }

    /// Number of active field groups (badge on the filter button)
    pub fn active_count(&self) -> usize {
        [
            !self.categories.is_empty(),
            !self.specifications.is_empty(),
            self.price_min.is_some() || self.price_max.is_some(),
            self.stock_status != StockStatus::All,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Reject malformed price bounds
    pub fn validate(&self) -> AppResult<()> {
        if let Some(min) = self.price_min {
            if min.is_sign_negative() && !min.is_zero() {
                return Err(AppError::validation("Minimum price must be >= 0")
                    .with_detail("field", "priceMin"));
            }
        }
        if let Some(max) = self.price_max {
            if max.is_sign_negative() && !max.is_zero() {
                return Err(AppError::validation("Maximum price must be >= 0")
                    .with_detail("field", "priceMax"));
            }
        }
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(AppError::validation(format!(
                    "Minimum price {} is greater than maximum price {}",
                    min, max
                ))
                .with_detail("field", "priceMin"));
            }
        }
        Ok(())
    }
}
