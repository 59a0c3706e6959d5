//! # Page Chrome Model
//!
//! Header, navigation and the two widgets the site logic injects into the
//! page: the mobile menu toggle and the scroll-to-top control.

use serde::{Deserialize, Serialize};

/// Label of the injected menu toggle
pub const MENU_TOGGLE_LABEL: &str = "☰";
/// ARIA label of the injected menu toggle
pub const MENU_TOGGLE_ARIA_LABEL: &str = "Toggle menu";
/// Label of the injected scroll-to-top control
pub const SCROLL_BUTTON_LABEL: &str = "↑";
/// ARIA label of the injected scroll-to-top control
pub const SCROLL_BUTTON_ARIA_LABEL: &str = "Scroll to top";

/// Page header; the menu toggle is inserted at its start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub menu_toggle: Option<MenuToggle>,
}

/// Button that opens and closes the navigation on small screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuToggle {
    pub label: String,
    pub aria_label: String,
    #[serde(default)]
    pub active: bool,
}

impl Default for MenuToggle {
    fn default() -> Self {
        Self {
            label: MENU_TOGGLE_LABEL.to_string(),
            aria_label: MENU_TOGGLE_ARIA_LABEL.to_string(),
            active: false,
        }
    }
}

/// A navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

impl NavLink {
    pub fn new<S: Into<String>>(href: S) -> Self {
        Self {
            href: href.into(),
            active: false,
        }
    }
}

/// Navigation container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nav {
    #[serde(default)]
    pub links: Vec<NavLink>,
    /// Open state class toggled by the menu toggle
    #[serde(default)]
    pub open: bool,
}

impl Nav {
    pub fn with_links<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: hrefs.into_iter().map(NavLink::new).collect(),
            open: false,
        }
    }

    /// Links currently marked as the current page
    pub fn active_links(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter().filter(|link| link.active)
    }
}

/// Scroll-to-top control appended to the page body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollButton {
    pub label: String,
    pub aria_label: String,
    #[serde(default)]
    pub visible: bool,
}

impl Default for ScrollButton {
    fn default() -> Self {
        Self {
            label: SCROLL_BUTTON_LABEL.to_string(),
            aria_label: SCROLL_BUTTON_ARIA_LABEL.to_string(),
            visible: false,
        }
    }
}
