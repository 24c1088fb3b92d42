//! Field checks shared by request bodies
//!
//! Each check records its failure in a [`ValidationErrors`] and never stops
//! the caller, so one pass reports every broken field.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{ValidateUrl, ValidationError, ValidationErrors};

pub const MUST_NOT_BE_BLANK: &str = "must not be blank";
pub const MUST_NOT_BE_NULL: &str = "must not be null";
pub const MUST_BE_A_VALID_URL: &str = "must be a valid URL";

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Absent, empty and whitespace-only values are blank.
pub fn not_blank(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) -> bool {
    let present = value.is_some_and(|v| !v.trim().is_empty());
    if !present {
        errors.add(field, failure("not_blank", MUST_NOT_BE_BLANK));
    }
    present
}

pub fn not_null<T>(errors: &mut ValidationErrors, field: &'static str, value: Option<&T>) -> bool {
    if value.is_none() {
        errors.add(field, failure("not_null", MUST_NOT_BE_NULL));
    }
    value.is_some()
}

/// Only checked when a value is present; blankness is reported separately.
pub fn url(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        if !value.validate_url() {
            errors.add(field, failure("url", MUST_BE_A_VALID_URL));
        }
    }
}

/// Flatten errors into `field → first message`, ordered by field name.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}
