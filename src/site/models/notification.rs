//! # Notification Model
//!
//! Transient banner messages appended to the page body.

use crate::site::events::{NotificationId, Severity};
use serde::{Deserialize, Serialize};

/// A banner message with a display-then-fade-then-remove lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Fade-out class applied before removal
    #[serde(default)]
    pub fading: bool,
}

impl Notification {
    pub fn new<S: Into<String>>(id: NotificationId, message: S, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            fading: false,
        }
    }

    /// Full class list of the banner element
    pub fn css_classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["alert", self.severity.css_class()];
        if self.fading {
            classes.push("fade-out");
        }
        classes
    }
}
