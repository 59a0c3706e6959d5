//! # Product Filter
//!
//! Category filter bar. Clicking a filter control makes it the only active
//! one and shows exactly the cards of its category (or every card for the
//! reserved `all` category). No selection history is kept beyond the
//! active-button state.

use anyhow::Result;

use crate::site::components::handler::{Handler, HandlerContext};
use crate::site::events::{ClickTarget, ModelEvent, PageEvent};
use crate::site::models::Page;

/// Activate the filter control at `index` and apply its category to the cards
pub fn select_category(page: &mut Page, index: usize) -> Vec<ModelEvent> {
    let Some(selection) = page.filter_buttons.get(index).map(|b| b.category.clone()) else {
        tracing::debug!("No filter button at index {}", index);
        return Vec::new();
    };

    for (position, button) in page.filter_buttons.iter_mut().enumerate() {
        button.active = position == index;
    }

    let mut events = vec![ModelEvent::FilterSelected {
        category: selection.clone(),
    }];
    for card in &mut page.products {
        let visible = card.matches(selection.as_ref());
        if card.visible != visible {
            card.visible = visible;
            events.push(ModelEvent::CardVisibilityChanged {
                card: card.id.clone(),
                visible,
            });
        }
    }
    events
}

/// Click listener on the filter controls
#[derive(Debug, Default)]
pub struct FilterHandler;

impl Handler for FilterHandler {
    fn is_relevant(&self, event: &PageEvent, page: &Page) -> bool {
        matches!(
            event,
            PageEvent::Click(ClickTarget::FilterButton { index }) if *index < page.filter_buttons.len()
        )
    }

    fn handle(
        &self,
        event: &PageEvent,
        context: &mut HandlerContext<'_>,
    ) -> Result<Vec<ModelEvent>> {
        match event {
            PageEvent::Click(ClickTarget::FilterButton { index }) => {
                Ok(select_category(context.page, *index))
            }
            _ => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "FilterHandler"
    }
}
