//! # Site Module
//!
//! Interactive behaviour of the marketplace pages, organised like a small
//! MVVM application:
//!
//! - **Models**: the page as explicit state (forms, cards, nav, widgets, notifications)
//! - **Components**: initializers and handlers that react to page events
//! - **Controller**: owns the page, boots it and routes events to handlers
//!
//! ```text
//! ┌──────────────┐  PageEvent  ┌──────────────┐  handle()  ┌──────────────┐
//! │   Browser    │────────────▶│  Controller  │───────────▶│  Components  │
//! │  (or script) │             │              │            │              │
//! └──────────────┘             └──────┬───────┘            └──────┬───────┘
//!                                     │ ModelEvent                │ mutate
//!                                     ▼                           ▼
//!                              ┌──────────────┐            ┌──────────────┐
//!                              │  Event bus   │            │     Page     │
//!                              └──────────────┘            └──────────────┘
//! ```

pub mod components;
pub mod controller;
pub mod events;
pub mod models;
pub mod replay;
pub mod scheduler;

pub use controller::SiteController;
pub use events::{ClickTarget, ModelEvent, PageEvent};
pub use models::Page;
