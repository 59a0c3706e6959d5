//! # Core Event Types
//!
//! Identifiers and small value types shared by page events, model events
//! and the page models: card and notification ids, category tags,
//! notification severities, field validation errors and the five known
//! form identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of a product card as declared by the page markup
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a notification, unique for the lifetime of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category tag carried by product cards and filter buttons
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    /// Reserved tag that matches every card
    pub const ALL: &'static str = "all";

    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(tag.into())
    }

    pub fn all() -> Self {
        Self::new(Self::ALL)
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Info,
    Error,
}

impl Severity {
    /// Style class applied to the notification element
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "alert-success",
            Severity::Info => "alert-info",
            Severity::Error => "alert-error",
        }
    }
}

/// Which of the known forms a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormIdentity {
    Contact,
    BuyerSignup,
    BuyerLogin,
    SupplierSignup,
    SupplierLogin,
}

impl FormIdentity {
    pub const ALL: [FormIdentity; 5] = [
        FormIdentity::Contact,
        FormIdentity::BuyerSignup,
        FormIdentity::BuyerLogin,
        FormIdentity::SupplierSignup,
        FormIdentity::SupplierLogin,
    ];

    /// Resolve a form element id to its identity
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|identity| identity.element_id() == id)
    }

    /// Element id the markup uses for this form
    pub fn element_id(&self) -> &'static str {
        match self {
            FormIdentity::Contact => "contactForm",
            FormIdentity::BuyerSignup => "buyerSignup",
            FormIdentity::BuyerLogin => "buyerLogin",
            FormIdentity::SupplierSignup => "supplierSignup",
            FormIdentity::SupplierLogin => "supplierLogin",
        }
    }

    /// Fixed message shown after a successful (simulated) submission
    pub fn success_message(&self) -> &'static str {
        match self {
            FormIdentity::Contact => "Thank you for your message! We will get back to you soon.",
            FormIdentity::BuyerSignup => "Buyer account created successfully!",
            FormIdentity::BuyerLogin => "Logged in successfully as buyer!",
            FormIdentity::SupplierSignup => "Supplier application submitted successfully!",
            FormIdentity::SupplierLogin => "Logged in successfully as supplier!",
        }
    }
}

impl fmt::Display for FormIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormIdentity::Contact => "contact",
            FormIdentity::BuyerSignup => "buyer-signup",
            FormIdentity::BuyerLogin => "buyer-login",
            FormIdentity::SupplierSignup => "supplier-signup",
            FormIdentity::SupplierLogin => "supplier-login",
        };
        f.write_str(name)
    }
}

/// Why a field failed validation; `Display` is the inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("This field is required")]
    MissingRequired,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    WeakPassword,
}
