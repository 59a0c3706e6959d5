//! # Cart Notification
//!
//! Document-level listener for "add to cart" controls. It only announces
//! the addition; no cart state exists anywhere.

use anyhow::Result;

use crate::site::components::handler::{Handler, HandlerContext};
use crate::site::events::{ClickTarget, ModelEvent, PageEvent, Severity};
use crate::site::models::{Page, ProductCard};

/// Text announced when a card's product is added to the cart
pub fn cart_message(card: &ProductCard) -> String {
    format!("{} added to cart ({})", card.name, card.price)
}

#[derive(Debug, Default)]
pub struct CartHandler;

impl Handler for CartHandler {
    fn is_relevant(&self, event: &PageEvent, _page: &Page) -> bool {
        matches!(event, PageEvent::Click(ClickTarget::AddToCart { .. }))
    }

    fn handle(
        &self,
        event: &PageEvent,
        context: &mut HandlerContext<'_>,
    ) -> Result<Vec<ModelEvent>> {
        let PageEvent::Click(ClickTarget::AddToCart { card }) = event else {
            return Ok(Vec::new());
        };
        let Some(message) = context.page.card(card).map(cart_message) else {
            tracing::debug!("Add to cart clicked outside a known product card: {}", card);
            return Ok(Vec::new());
        };

        let (_, shown) = context
            .notifications
            .show(context.page, message, Severity::Success);
        Ok(vec![shown])
    }

    fn name(&self) -> &'static str {
        "CartHandler"
    }
}
