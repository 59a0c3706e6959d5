//! # Page Model
//!
//! The whole page as one explicit state object. Components receive it by
//! mutable reference and read or mutate named regions of it; nothing here
//! is global, so every test can build its own isolated page.

use super::{FilterButton, Form, Header, Nav, Notification, ProductCard, ScrollButton};
use crate::site::events::{CardId, NotificationId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a page fixture
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read page fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate product card id '{0}'")]
    DuplicateCard(CardId),

    #[error("duplicate form id '{0}'")]
    DuplicateForm(String),

    #[error("duplicate notification id {0}")]
    DuplicateNotification(NotificationId),
}

/// Complete state of one loaded page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Path of the current document, e.g. `/shop/products.html`
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub header: Option<Header>,
    #[serde(default)]
    pub nav: Option<Nav>,
    #[serde(default)]
    pub filter_buttons: Vec<FilterButton>,
    #[serde(default)]
    pub products: Vec<ProductCard>,
    #[serde(default)]
    pub forms: Vec<Form>,
    /// Vertical scroll offset in pixels
    #[serde(default)]
    pub scroll_offset: u32,
    #[serde(default)]
    pub scroll_button: Option<ScrollButton>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Page {
    pub fn new<S: Into<String>>(location: S) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Parse a page fixture from JSON
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let page: Page = serde_json::from_str(json)?;
        page.check_ids()?;
        Ok(page)
    }

    /// Load a page fixture from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PageError> {
        let path = path.as_ref();
        tracing::debug!("Loading page fixture from '{}'", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn check_ids(&self) -> Result<(), PageError> {
        let mut cards = HashSet::new();
        for card in &self.products {
            if !cards.insert(&card.id) {
                return Err(PageError::DuplicateCard(card.id.clone()));
            }
        }
        let mut forms = HashSet::new();
        for form in &self.forms {
            if !forms.insert(form.id.as_str()) {
                return Err(PageError::DuplicateForm(form.id.clone()));
            }
        }
        let mut notifications = HashSet::new();
        for notification in &self.notifications {
            if !notifications.insert(notification.id) {
                return Err(PageError::DuplicateNotification(notification.id));
            }
        }
        Ok(())
    }

    /// Trailing segment of the location path, possibly empty
    pub fn path_segment(&self) -> &str {
        self.location.rsplit('/').next().unwrap_or_default()
    }

    pub fn card(&self, id: &CardId) -> Option<&ProductCard> {
        self.products.iter().find(|card| &card.id == id)
    }

    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.iter_mut().find(|form| form.id == id)
    }

    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn notification_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.notifications.iter_mut().find(|n| n.id == id)
    }

    /// Remove a notification element; false if it was already gone
    pub fn remove_notification(&mut self, id: NotificationId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Cards currently shown, in page order
    pub fn visible_cards(&self) -> impl Iterator<Item = &ProductCard> {
        self.products.iter().filter(|card| card.visible)
    }
}
