//! Add product page

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CatalogEntryCreate, Specification};

use crate::utils::validation::{MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddProductForm {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub specifications: Vec<Specification>,
    pub image: Option<String>,
}

impl AddProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks run before the confirm dialog opens
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "商品名稱和商品類別不得為空",
            ));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::validation(format!(
                "name is too long (max {MAX_NAME_LEN})"
            ))
            .with_detail("field", "name"));
        }
        if self.price.is_zero() {
            return Err(AppError::with_message(
                ErrorCode::ProductInvalidPrice,
                "價格不得設置為0",
            ));
        }
        if self.price.is_sign_negative() {
            return Err(AppError::with_message(
                ErrorCode::ProductInvalidPrice,
                "價格必須大於 0",
            ));
        }
        if self.specifications.is_empty() {
            return Err(
                AppError::validation("至少需要 1 個規格").with_detail("field", "specifications")
            );
        }
        validate_optional_text(&self.image, "image", MAX_URL_LEN)?;
        Ok(())
    }

    /// Validated create payload
    pub fn to_create(&self) -> AppResult<CatalogEntryCreate> {
        self.validate()?;
        Ok(CatalogEntryCreate {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            specifications: self.specifications.clone(),
            price: self.price,
            image: self.image.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddProductForm {
        AddProductForm {
            name: " 羊毛圍巾 ".into(),
            category: "配件".into(),
            price: Decimal::from(680),
            specifications: vec![Specification::new("s1", "F", 10)],
            image: None,
        }
    }

    #[test]
    fn builds_trimmed_create_payload() {
        let create = form().to_create().unwrap();
        assert_eq!(create.name, "羊毛圍巾");
        assert_eq!(create.price, Decimal::from(680));
    }

    #[test]
    fn required_fields() {
        let mut f = form();
        f.category = " ".into();
        assert_eq!(f.validate().unwrap_err().code, ErrorCode::RequiredField);
    }

    #[test]
    fn zero_or_negative_price_is_rejected() {
        let mut f = form();
        f.price = Decimal::ZERO;
        assert_eq!(f.validate().unwrap_err().code, ErrorCode::ProductInvalidPrice);
        f.price = Decimal::from(-1);
        assert_eq!(f.validate().unwrap_err().code, ErrorCode::ProductInvalidPrice);
    }

    #[test]
    fn needs_a_specification() {
        let mut f = form();
        f.specifications.clear();
        assert_eq!(f.validate().unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn reset_clears_everything() {
        let mut f = form();
        f.reset();
        assert_eq!(f, AddProductForm::new());
    }
}
