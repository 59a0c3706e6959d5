//! # Storefront - Headless Marketplace Page Behaviour
//!
//! The interactive layer of a marketplace marketing site (navigation
//! highlighting, product filtering, form validation with simulated
//! submission, notifications, mobile menu, scroll-to-top and cart
//! announcements) modelled as plain Rust state and events, so it can be
//! driven and tested without a browser.
//!
//! ## Example
//!
//! ```rust
//! use storefront::config::SiteConfig;
//! use storefront::site::{ClickTarget, Page, PageEvent, SiteController};
//! use storefront::site::events::CardId;
//! use storefront::site::models::ProductCard;
//!
//! let mut page = Page::new("/products.html");
//! page.products.push(ProductCard::new("w", Some("tools"), "Widget", "$10"));
//!
//! let mut controller = SiteController::new(page, SiteConfig::default());
//! controller.dispatch(&PageEvent::ContentLoaded).unwrap();
//! controller
//!     .dispatch(&PageEvent::click(ClickTarget::AddToCart { card: CardId::new("w") }))
//!     .unwrap();
//!
//! assert_eq!(
//!     controller.page().notifications[0].message,
//!     "Widget added to cart ($10)"
//! );
//! ```

pub mod cmd_args;
pub mod config;
pub mod site;

// Re-export main types for easy access
pub use site::*;
