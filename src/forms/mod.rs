//! Form definitions backing the admin views.
//!
//! Validation failures are collected into a field-to-message map and block
//! submission; nothing in this layer panics on user input.

use std::collections::HashMap;

use validator::ValidationErrors;

pub mod driver;
pub mod fuel;
pub mod insurance;
pub mod service_event;
pub mod vehicle;

/// Per-field validation messages, keyed by form field name.
pub type FieldErrors = HashMap<String, String>;

/// Extracts the first message per field from validator output.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = HashMap::new();
    for (field, errs) in errors.field_errors() {
        let message = errs
            .first()
            .and_then(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| "invalid value".to_string());
        map.insert(field.to_string(), message);
    }
    map
}
