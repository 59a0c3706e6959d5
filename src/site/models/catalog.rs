//! # Catalog Model
//!
//! Product cards and the filter bar above them.

use crate::site::events::{CardId, Category};
use serde::{Deserialize, Serialize};

fn shown() -> bool {
    true
}

/// A product card in the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: CardId,
    #[serde(default)]
    pub category: Option<Category>,
    pub name: String,
    pub price: String,
    #[serde(default = "shown")]
    pub visible: bool,
}

impl ProductCard {
    pub fn new<I, N, P>(id: I, category: Option<&str>, name: N, price: P) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        P: Into<String>,
    {
        Self {
            id: CardId::new(id),
            category: category.map(Category::new),
            name: name.into(),
            price: price.into(),
            visible: true,
        }
    }

    /// Whether the card should be shown for a filter selection
    pub fn matches(&self, selection: Option<&Category>) -> bool {
        match selection {
            Some(category) if category.is_all() => true,
            selection => self.category.as_ref() == selection,
        }
    }
}

/// A category filter control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub active: bool,
}

impl FilterButton {
    pub fn new(category: &str) -> Self {
        Self {
            category: Some(Category::new(category)),
            active: false,
        }
    }
}
