//! # Model Events
//!
//! Events emitted when the page state changes. Every handler reports the
//! side effects it applied as a list of these, which makes the behaviour
//! observable without a rendering surface.

use super::types::{CardId, Category, FieldError, FormIdentity, NotificationId, Severity};
use serde::Serialize;

/// Events emitted when the page changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ModelEvent {
    /// A navigation link was marked as the current page
    NavLinkActivated { href: String },

    /// A filter control became the active one
    FilterSelected { category: Option<Category> },

    /// A product card was shown or hidden
    CardVisibilityChanged { card: CardId, visible: bool },

    /// A field's value changed through user input
    FieldValueChanged { form: String, field: String },

    /// A field failed validation and now carries an inline message
    FieldInvalidated {
        form: String,
        field: String,
        error: FieldError,
    },

    /// A previously invalid field passed validation
    FieldErrorCleared { form: String, field: String },

    /// Native submission was prevented for a known form
    SubmissionIntercepted { form: FormIdentity },

    /// Submission was rejected by validation
    SubmissionRejected { form: FormIdentity },

    /// Form fields were restored to their initial values
    FormReset { form: FormIdentity },

    /// A notification was appended to the page
    NotificationShown {
        id: NotificationId,
        message: String,
        severity: Severity,
    },

    /// A notification started fading out
    NotificationFading { id: NotificationId },

    /// A notification was removed from the page
    NotificationRemoved { id: NotificationId },

    /// The menu toggle was inserted into the header
    MenuToggleInstalled,

    /// The menu was opened or closed
    MenuToggled { open: bool },

    /// The scroll-to-top control was appended to the page
    ScrollButtonInstalled,

    /// The scroll-to-top control was shown or hidden
    ScrollButtonVisibilityChanged { visible: bool },

    /// A smooth scroll to the top of the page was requested
    ScrolledToTop,
}
