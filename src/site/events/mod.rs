//! # Events Module
//!
//! Page events flow in, model events flow out. This module groups the
//! event types, their shared identifiers and the event bus that fans model
//! events out to observers.

pub mod event_bus;
pub mod model_events;
pub mod page_events;
pub mod types;

pub use event_bus::{EventBus, ModelEventHandler, SimpleEventBus};
pub use model_events::ModelEvent;
pub use page_events::{ClickTarget, PageEvent};
pub use types::{CardId, Category, FieldError, FormIdentity, NotificationId, Severity};
