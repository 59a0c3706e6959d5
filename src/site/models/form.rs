//! # Form Model
//!
//! Forms and their fields as declared by the page markup. Fields are only
//! read and annotated by the site logic, never created by it.

use crate::site::events::{FieldError, FormIdentity};
use serde::{Deserialize, Serialize};

/// Type tag of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Textarea,
    Select,
    Other,
}

/// A single input, textarea or select element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: String,
    /// Value restored when the form is reset
    #[serde(default)]
    pub default_value: String,
    /// Error state class on the control
    #[serde(default)]
    pub invalid: bool,
    /// Inline error message rendered after the control
    #[serde(default)]
    pub error: Option<FieldError>,
}

impl Field {
    pub fn new<S: Into<String>>(name: S, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
            default_value: String::new(),
            invalid: false,
            error: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_default<S: Into<String>>(mut self, default_value: S) -> Self {
        self.default_value = default_value.into();
        self.value = self.default_value.clone();
        self
    }

    /// Put the field into the error state with an inline message
    pub fn mark_invalid(&mut self, error: FieldError) {
        self.invalid = true;
        self.error = Some(error);
    }

    /// Drop the error state and any inline message
    ///
    /// Returns true if the field was annotated before.
    pub fn clear_error(&mut self) -> bool {
        let was_annotated = self.invalid || self.error.is_some();
        self.invalid = false;
        self.error = None;
        was_annotated
    }

    /// Text of the inline error message, if one is shown
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// A form element and its ordered fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Element id from the markup
    pub id: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Submission intent derived from the element id
    pub fn identity(&self) -> Option<FormIdentity> {
        FormIdentity::from_element_id(&self.id)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default_value.clone();
        }
    }

    /// Number of inline error messages currently shown
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|field| field.error.is_some()).count()
    }
}
