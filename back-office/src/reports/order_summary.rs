//! Order summary card

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub title: String,
    pub amount: Decimal,
    pub count: u32,
}

impl OrderSummary {
    pub fn new(title: impl Into<String>, amount: Decimal, count: u32) -> Self {
        Self {
            title: title.into(),
            amount,
            count,
        }
    }

    /// `NT$1200/3筆`
    pub fn label(&self) -> String {
        format!("NT${}/{}筆", self.amount.normalize(), self.count)
    }
}
