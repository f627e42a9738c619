//! Conversion of `validator` failures into the API's field-level error report.
//!
//! The report maps each invalid field name to the list of human-readable
//! violation messages for that field. Handlers attach it to the 400 response
//! under `data`, so clients can highlight individual form fields. Field names
//! are reported in their wire form (camelCase), matching the request payload
//! rather than the Rust struct.

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Per-field violation messages, ordered by field name for stable output.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flatten a [`ValidationErrors`] tree into one entry per invalid field.
///
/// Each schema attribute carries its own `message`; the error code is the
/// fallback for constraints declared without one.
pub fn error_report(errors: &ValidationErrors) -> FieldErrors {
    let mut report = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value ({}).", e.code),
            })
            .collect();
        report.insert(to_camel_case(&field), messages);
    }
    report
}

/// Convert a Rust field name (`user_id`) to its wire form (`userId`).
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
