//! Specification dialog
//!
//! Rows are edited as raw text and only parsed on save.

use std::collections::HashSet;

use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Specification;

/// One editable row; `quantity` is the raw input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecificationRow {
    pub id: String,
    pub name: String,
    pub quantity: String,
}

impl SpecificationRow {
    fn blank() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            quantity: String::new(),
        }
    }
}

/// Editable column of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Quantity,
}

#[derive(Debug, Clone)]
pub struct SpecificationForm {
    rows: Vec<SpecificationRow>,
}

impl Default for SpecificationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecificationForm {
    /// One blank row
    pub fn new() -> Self {
        Self {
            rows: vec![SpecificationRow::blank()],
        }
    }

    pub fn rows(&self) -> &[SpecificationRow] {
        &self.rows
    }

    /// Append a blank row, returning its id
    pub fn add_row(&mut self) -> String {
        let row = SpecificationRow::blank();
        let id = row.id.clone();
        self.rows.push(row);
        id
    }

    /// Remove a row; the last remaining row is kept
    pub fn remove_row(&mut self, id: &str) {
        if self.rows.len() > 1 {
            self.rows.retain(|row| row.id != id);
        }
    }

    pub fn update_row(&mut self, id: &str, field: RowField, value: impl Into<String>) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            match field {
                RowField::Name => row.name = value.into(),
                RowField::Quantity => row.quantity = value.into(),
            }
        }
    }

    /// Back to one blank row (every close of the dialog)
    pub fn reset(&mut self) {
        self.rows = vec![SpecificationRow::blank()];
    }

    /// Parse the rows and append them to `existing`.
    ///
    /// On success the form is reset and the combined list returned; on
    /// error the rows are left as typed.
    pub fn save(&mut self, existing: &[Specification]) -> AppResult<Vec<Specification>> {
        if self
            .rows
            .iter()
            .any(|row| row.name.trim().is_empty() || row.quantity.trim().is_empty())
        {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "輸入欄位不得為空",
            ));
        }

        let mut parsed = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let quantity = row.quantity.trim().parse::<u32>().map_err(|_| {
                AppError::with_message(ErrorCode::SpecInvalidQuantity, "數量必須為有效的非負整數")
                    .with_detail("quantity", row.quantity.as_str())
            })?;
            parsed.push(Specification::new(row.id.clone(), row.name.clone(), quantity));
        }

        let mut seen: HashSet<&str> = existing.iter().map(|spec| spec.name.as_str()).collect();
        for spec in &parsed {
            if !seen.insert(spec.name.as_str()) {
                return Err(
                    AppError::with_message(ErrorCode::SpecDuplicateName, "規格不得重複")
                        .with_detail("name", spec.name.as_str()),
                );
            }
        }

        let mut combined = existing.to_vec();
        combined.extend(parsed);
        self.reset();
        Ok(combined)
    }
}
