//! # Handler Registry
//!
//! Explicit event-to-handler table built when the page boots. Unlike a
//! key-binding table, every relevant handler sees the event, in
//! registration order, just as every listener on a page receives a
//! dispatched event.

use anyhow::Result;
use std::sync::Arc;

use crate::site::components::handler::{Handler, HandlerContext};
use crate::site::events::{ModelEvent, PageEvent};

// Type alias for complex Handler type
type HandlerArc = Arc<dyn Handler>;

pub struct HandlerRegistry {
    handlers: Vec<HandlerArc>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Add a handler to the registry
    pub fn register(&mut self, handler: HandlerArc) {
        tracing::debug!("Registering handler {}", handler.name());
        self.handlers.push(handler);
    }

    /// Whether a handler with the given name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.iter().any(|handler| handler.name() == name)
    }

    /// Offer an event to every handler and collect the model events of those that react
    pub fn dispatch(
        &self,
        event: &PageEvent,
        context: &mut HandlerContext<'_>,
    ) -> Result<Vec<ModelEvent>> {
        let mut events = Vec::new();
        for handler in &self.handlers {
            if handler.is_relevant(event, context.page) {
                tracing::debug!("Handler {} reacting to {:?}", handler.name(), event);
                events.extend(handler.handle(event, context)?);
            }
        }

        if events.is_empty() {
            tracing::debug!("No model changes for {:?}", event);
        }
        Ok(events)
    }

    /// Get all registered handlers (for testing/debugging)
    pub fn handlers(&self) -> &[HandlerArc] {
        &self.handlers
    }

    /// Get count of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
