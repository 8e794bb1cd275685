//! Display formatting for the inventory table

use rust_decimal::Decimal;

/// Currency prefix of formatted prices
pub const CURRENCY_PREFIX: &str = "NT$ ";

/// Inventory text of an entry without stock
pub const OUT_OF_STOCK_TEXT: &str = "缺貨";

/// Group the integer part with thousands separators, keep at most 3 decimals.
///
/// `1234567.5` → `"1,234,567.5"`, `100` → `"100"`.
pub fn group_thousands(value: Decimal) -> String {
    let normalized = value.round_dp(3).normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if normalized.is_sign_negative() && !normalized.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// `NT$ 1,234`
pub fn format_price(price: Decimal) -> String {
    format!("{}{}", CURRENCY_PREFIX, group_thousands(price))
}

/// Inverse of the display decoration: drop the currency prefix and commas
pub fn strip_price_decoration(text: &str) -> String {
    text.replace(CURRENCY_PREFIX, "").replace(',', "")
}

/// `缺貨` for zero stock, otherwise `{n} 件`
pub fn format_inventory(total_stock: u64) -> String {
    if total_stock == 0 {
        OUT_OF_STOCK_TEXT.to_string()
    } else {
        format!("{} 件", total_stock)
    }
}
