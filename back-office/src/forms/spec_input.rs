//! Inline specification editor of the add-product page

use shared::models::Specification;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecificationInput {
    specs: Vec<Specification>,
}

impl SpecificationInput {
    pub fn new(specs: Vec<Specification>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[Specification] {
        &self.specs
    }

    pub fn into_specs(self) -> Vec<Specification> {
        self.specs
    }

    /// Add a spec, or replace the quantity of the one with the same name.
    ///
    /// Blank names are ignored; returns false in that case.
    pub fn upsert(&mut self, name: &str, quantity: u32) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.specs.iter_mut().find(|spec| spec.name == name) {
            Some(spec) => spec.quantity = quantity,
            None => self.specs.push(Specification::new(
                uuid::Uuid::new_v4().to_string(),
                name,
                quantity,
            )),
        }
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.specs.retain(|spec| spec.id != id);
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.specs.iter_mut().find(|spec| spec.id == id) {
            Some(spec) => {
                spec.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// +/- buttons; never goes below zero
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) {
        if let Some(spec) = self.specs.iter_mut().find(|spec| spec.id == id) {
            let next = (i64::from(spec.quantity) + delta).clamp(0, i64::from(u32::MAX));
            spec.quantity = next as u32;
        }
    }

    /// Typed quantity; anything but a non-negative integer is ignored
    pub fn set_quantity_text(&mut self, id: &str, value: &str) {
        let Ok(quantity) = value.trim().parse::<u32>() else {
            return;
        };
        if let Some(spec) = self.specs.iter_mut().find(|spec| spec.id == id) {
            spec.quantity = quantity;
        }
    }

    pub fn total_stock(&self) -> u64 {
        self.specs.iter().map(|spec| u64::from(spec.quantity)).sum()
    }
}
