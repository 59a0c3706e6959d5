//! # Form Validator
//!
//! Inspects the required fields of a form and annotates the ones that fail.
//!
//! Rules per required field, in precedence order:
//!
//! 1. empty after trimming: "This field is required"
//! 2. email field whose value is not shaped like `x@y.z`: "Please enter a valid email"
//! 3. password field shorter than six characters: "Password must be at least 6 characters"
//!
//! The format rules only run when the field is non-empty, so a field never
//! shows more than one message per pass. Optional fields are not inspected.

use crate::site::events::ModelEvent;
use crate::site::models::{Field, FieldKind, Form};
use regex::Regex;
use std::sync::OnceLock;

pub use crate::site::events::FieldError;

/// Minimum password length, counted in UTF-16 code units like the browser does
pub const MIN_PASSWORD_LEN: usize = 6;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        // `\s` in the browser also covers U+FEFF
        Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
            .expect("email pattern should compile")
    })
}

/// Email-shape check: `local@domain.tld` without whitespace or extra `@`
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Whitespace as the browser's `trim` sees it: Unicode White_Space plus the BOM
fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Apply the validation rules to one field
pub fn check_field(field: &Field) -> Result<(), FieldError> {
    if field.value.trim_matches(is_form_whitespace).is_empty() {
        return Err(FieldError::MissingRequired);
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(&field.value) => Err(FieldError::InvalidEmail),
        FieldKind::Password if field.value.encode_utf16().count() < MIN_PASSWORD_LEN => {
            Err(FieldError::WeakPassword)
        }
        _ => Ok(()),
    }
}

/// Validate a form, annotating its fields in place
///
/// Returns true iff every required field passed.
pub fn validate(form: &mut Form) -> bool {
    validate_with_events(form).0
}

/// Validate a form and report the annotation changes as model events
pub fn validate_with_events(form: &mut Form) -> (bool, Vec<ModelEvent>) {
    let mut is_valid = true;
    let mut events = Vec::new();

    for field in form.fields.iter_mut().filter(|field| field.required) {
        match check_field(field) {
            Err(error) => {
                is_valid = false;
                field.mark_invalid(error);
                events.push(ModelEvent::FieldInvalidated {
                    form: form.id.clone(),
                    field: field.name.clone(),
                    error,
                });
            }
            Ok(()) => {
                if field.clear_error() {
                    events.push(ModelEvent::FieldErrorCleared {
                        form: form.id.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        "Validated form '{}': valid={}, errors={}",
        form.id,
        is_valid,
        form.error_count()
    );

    (is_valid, events)
}
