//! Field-level error map rendered under each form input.
//!
//! Nothing in the submit path populates or consults this map: submission always
//! commits the draft. The form still renders whatever is stored here, so a
//! caller can set messages explicitly.

use std::collections::BTreeMap;

use crate::models::DraftField;

/// Error messages keyed by draft field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<DraftField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: DraftField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn set(&mut self, field: DraftField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
