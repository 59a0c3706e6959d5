//! # Event Handler Infrastructure
//!
//! Handlers are the listeners of the page. Each one decides whether a page
//! event concerns it, applies its effect to the page and reports what
//! changed as model events.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::site::components::notifications::NotificationCenter;
use crate::site::events::{ModelEvent, PageEvent};
use crate::site::models::Page;

/// Listener attached to the page
pub trait Handler: Send + Sync {
    /// Check if this handler reacts to the given event on the current page
    fn is_relevant(&self, event: &PageEvent, page: &Page) -> bool;

    /// Apply the handler's effect and return the resulting model events
    fn handle(&self, event: &PageEvent, context: &mut HandlerContext<'_>)
        -> Result<Vec<ModelEvent>>;

    /// Get handler name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Mutable view of everything a handler may touch
pub struct HandlerContext<'a> {
    pub page: &'a mut Page,
    pub notifications: &'a mut NotificationCenter,
    pub config: &'a SiteConfig,
}

impl<'a> HandlerContext<'a> {
    pub fn new(
        page: &'a mut Page,
        notifications: &'a mut NotificationCenter,
        config: &'a SiteConfig,
    ) -> Self {
        Self {
            page,
            notifications,
            config,
        }
    }
}
