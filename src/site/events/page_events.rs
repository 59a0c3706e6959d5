//! # Page Events
//!
//! Events dispatched by the browsing surface: page load, clicks, form
//! input and submission, and scrolling. These are the only inputs the
//! site logic reacts to.

use super::types::CardId;
use serde::{Deserialize, Serialize};

/// Element a click landed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ClickTarget {
    /// Filter control at the given position in the filter bar
    FilterButton { index: usize },
    /// "Add to cart" control inside the given product card
    AddToCart { card: CardId },
    /// Mobile menu toggle in the header
    MenuToggle,
    /// Scroll-to-top control
    ScrollToTop,
    /// Anything else on the page
    Other,
}

/// Events delivered to the page by the user or the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// Document structure is ready
    ContentLoaded,

    /// User activated an element
    Click(ClickTarget),

    /// User changed a field's value
    Input {
        form: String,
        field: String,
        value: String,
    },

    /// User submitted a form
    Submit { form: String },

    /// Window scrolled to a vertical offset in pixels
    Scroll { offset: u32 },
}

impl PageEvent {
    pub fn click(target: ClickTarget) -> Self {
        PageEvent::Click(target)
    }

    pub fn submit<S: Into<String>>(form: S) -> Self {
        PageEvent::Submit { form: form.into() }
    }

    pub fn input<F, N, V>(form: F, field: N, value: V) -> Self
    where
        F: Into<String>,
        N: Into<String>,
        V: Into<String>,
    {
        PageEvent::Input {
            form: form.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}
