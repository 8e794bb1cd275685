//! Edit product dialog

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{CatalogEntry, CatalogEntryUpdate, Specification};

use super::{FieldErrors, FormField};

/// Warning shown when the edited entry would have no stock
pub const ZERO_STOCK_WARNING: &str = "庫存為 0，商品將顯示為缺貨";

/// Working copy of one catalog entry
#[derive(Debug, Clone)]
pub struct EditProductForm {
    original: CatalogEntry,
    data: CatalogEntry,
    errors: FieldErrors,
}

impl EditProductForm {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            data: entry.clone(),
            original: entry,
            errors: FieldErrors::new(),
        }
    }

    pub fn data(&self) -> &CatalogEntry {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_dirty(&self) -> bool {
        self.data != self.original
    }

    pub fn update_name(&mut self, name: impl Into<String>) {
        self.data.name = name.into();
        self.errors.remove(&FormField::Name);
    }

    pub fn update_category(&mut self, category: impl Into<String>) {
        self.data.category = category.into();
        self.errors.remove(&FormField::Category);
    }

    pub fn update_specifications(&mut self, specifications: Vec<Specification>) {
        self.data.specifications = specifications;
        self.errors.remove(&FormField::Specifications);
    }

    pub fn update_price(&mut self, price: Decimal) {
        self.data.price = price;
        self.errors.remove(&FormField::Price);
    }

    pub fn update_image(&mut self, image: impl Into<String>) {
        self.data.image = image.into();
        self.errors.remove(&FormField::Image);
    }

    /// Recompute the field errors; true when there are none
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.data.name.trim().is_empty() {
            errors.insert(FormField::Name, "商品名稱不可為空".into());
        }
        if self.data.category.trim().is_empty() {
            errors.insert(FormField::Category, "請選擇商品分類".into());
        }
        if self.data.specifications.is_empty() {
            errors.insert(FormField::Specifications, "至少需要 1 個規格".into());
        }
        if self.data.price.is_sign_negative() && !self.data.price.is_zero() {
            errors.insert(FormField::Price, "價格必須大於或等於 0".into());
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Non-blocking notices about the working copy
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.data.total_stock() == 0 {
            warnings.push(ZERO_STOCK_WARNING);
        }
        warnings
    }

    /// Drop all edits
    pub fn reset(&mut self) {
        self.data = self.original.clone();
        self.errors.clear();
    }

    /// Validate and collect the changed fields into an update payload
    pub fn to_update(&mut self) -> AppResult<CatalogEntryUpdate> {
        if !self.validate() {
            let mut err = AppError::validation("商品資料有誤，請檢查欄位");
            for (field, message) in &self.errors {
                err = err.with_detail(field.as_str(), message.as_str());
            }
            return Err(err);
        }

        let data = &self.data;
        let original = &self.original;
        Ok(CatalogEntryUpdate {
            name: (data.name != original.name).then(|| data.name.clone()),
            category: (data.category != original.category).then(|| data.category.clone()),
            specifications: (data.specifications != original.specifications)
                .then(|| data.specifications.clone()),
            price: (data.price != original.price).then_some(data.price),
            image: (data.image != original.image).then(|| data.image.clone()),
        })
    }
}
