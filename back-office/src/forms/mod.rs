//! Product forms
//!
//! Working-copy state and validation behind the edit dialog, the
//! specification dialog, the add-product page and the specification
//! input widget.

pub mod add_product;
pub mod edit_product;
pub mod product_spec;
pub mod spec_input;

use std::collections::BTreeMap;

use serde::Serialize;

pub use add_product::AddProductForm;
pub use edit_product::EditProductForm;
pub use product_spec::{RowField, SpecificationForm, SpecificationRow};
pub use spec_input::SpecificationInput;

/// Field of a product form that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Category,
    Specifications,
    Price,
    Image,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Category => "category",
            FormField::Specifications => "specifications",
            FormField::Price => "price",
            FormField::Image => "image",
        }
    }
}

/// Field → message
pub type FieldErrors = BTreeMap<FormField, String>;
