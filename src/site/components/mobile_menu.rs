//! # Mobile Menu Toggle
//!
//! Inserts a toggle at the start of the header and flips the navigation's
//! open state each time it is clicked. The state is presentational only.

use anyhow::Result;

use crate::site::components::handler::{Handler, HandlerContext};
use crate::site::events::{ClickTarget, ModelEvent, PageEvent};
use crate::site::models::{MenuToggle, Page};

/// Insert the toggle into the header; no header or an existing toggle is a no-op
pub fn install(page: &mut Page) -> Option<ModelEvent> {
    let Some(header) = page.header.as_mut() else {
        tracing::debug!("No header on page, menu toggle not installed");
        return None;
    };
    if header.menu_toggle.is_some() {
        return None;
    }
    header.menu_toggle = Some(MenuToggle::default());
    Some(ModelEvent::MenuToggleInstalled)
}

/// Flip the open state on the toggle and the navigation
pub fn toggle(page: &mut Page) -> Option<ModelEvent> {
    let menu_toggle = page.header.as_mut()?.menu_toggle.as_mut()?;
    menu_toggle.active = !menu_toggle.active;
    let open = menu_toggle.active;

    match page.nav.as_mut() {
        Some(nav) => nav.open = !nav.open,
        None => tracing::debug!("No navigation to open, only the toggle changes state"),
    }
    Some(ModelEvent::MenuToggled { open })
}

/// Click listener on the menu toggle
#[derive(Debug, Default)]
pub struct MenuToggleHandler;

impl Handler for MenuToggleHandler {
    fn is_relevant(&self, event: &PageEvent, page: &Page) -> bool {
        matches!(event, PageEvent::Click(ClickTarget::MenuToggle))
            && page
                .header
                .as_ref()
                .is_some_and(|header| header.menu_toggle.is_some())
    }

    fn handle(
        &self,
        _event: &PageEvent,
        context: &mut HandlerContext<'_>,
    ) -> Result<Vec<ModelEvent>> {
        Ok(toggle(context.page).into_iter().collect())
    }

    fn name(&self) -> &'static str {
        "MenuToggleHandler"
    }
}
