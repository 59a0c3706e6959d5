//! # Scroll-to-Top Control
//!
//! A control appended to the page that shows once the page is scrolled
//! past the threshold and smoothly scrolls back to the top when clicked.
//! Visibility is re-evaluated on every scroll event, without debouncing.

use anyhow::Result;

use crate::site::components::handler::{Handler, HandlerContext};
use crate::site::events::{ClickTarget, ModelEvent, PageEvent};
use crate::site::models::{Page, ScrollButton};

/// Append the control to the page; an existing control is kept
pub fn install(page: &mut Page) -> Option<ModelEvent> {
    if page.scroll_button.is_some() {
        return None;
    }
    page.scroll_button = Some(ScrollButton::default());
    Some(ModelEvent::ScrollButtonInstalled)
}

/// Show the control iff the current offset exceeds `threshold_px`
pub fn update_visibility(page: &mut Page, threshold_px: u32) -> Option<ModelEvent> {
    let visible = page.scroll_offset > threshold_px;
    let button = page.scroll_button.as_mut()?;
    if button.visible == visible {
        return None;
    }
    button.visible = visible;
    Some(ModelEvent::ScrollButtonVisibilityChanged { visible })
}

/// Scroll listener on the window
#[derive(Debug, Default)]
pub struct ScrollHandler;

impl Handler for ScrollHandler {
    fn is_relevant(&self, event: &PageEvent, page: &Page) -> bool {
        matches!(event, PageEvent::Scroll { .. }) && page.scroll_button.is_some()
    }

    fn handle(
        &self,
        _event: &PageEvent,
        context: &mut HandlerContext<'_>,
    ) -> Result<Vec<ModelEvent>> {
        let threshold = context.config.scroll_threshold_px;
        Ok(update_visibility(context.page, threshold).into_iter().collect())
    }

    fn name(&self) -> &'static str {
        "ScrollHandler"
    }
}

/// Click listener on the control
#[derive(Debug, Default)]
pub struct ScrollToTopHandler;

impl Handler for ScrollToTopHandler {
    fn is_relevant(&self, event: &PageEvent, page: &Page) -> bool {
        matches!(event, PageEvent::Click(ClickTarget::ScrollToTop)) && page.scroll_button.is_some()
    }

    fn handle(
        &self,
        _event: &PageEvent,
        context: &mut HandlerContext<'_>,
    ) -> Result<Vec<ModelEvent>> {
        let mut events = vec![ModelEvent::ScrolledToTop];
        // The smooth scroll ends at offset 0 and fires a final scroll event.
        context.page.scroll_offset = 0;
        events.extend(update_visibility(
            context.page,
            context.config.scroll_threshold_px,
        ));
        Ok(events)
    }

    fn name(&self) -> &'static str {
        "ScrollToTopHandler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::site::components::notifications::NotificationCenter;

    fn scrolled(page: &mut Page, offset: u32) -> Option<ModelEvent> {
        page.scroll_offset = offset;
        update_visibility(page, 300)
    }

    #[test]
    fn visibility_should_flip_exactly_past_threshold() {
        let mut page = Page::new("/");
        install(&mut page);

        scrolled(&mut page, 299);
        assert!(!page.scroll_button.as_ref().unwrap().visible);
        scrolled(&mut page, 300);
        assert!(!page.scroll_button.as_ref().unwrap().visible);
        assert_eq!(
            scrolled(&mut page, 301),
            Some(ModelEvent::ScrollButtonVisibilityChanged { visible: true })
        );
        assert_eq!(
            scrolled(&mut page, 299),
            Some(ModelEvent::ScrollButtonVisibilityChanged { visible: false })
        );
    }

    #[test]
    fn unchanged_visibility_should_emit_nothing() {
        let mut page = Page::new("/");
        install(&mut page);
        assert!(scrolled(&mut page, 500).is_some());
        assert!(scrolled(&mut page, 900).is_none());
    }

    #[test]
    fn install_should_be_single() {
        let mut page = Page::new("/");
        assert_eq!(install(&mut page), Some(ModelEvent::ScrollButtonInstalled));
        assert_eq!(install(&mut page), None);
    }

    #[test]
    fn click_should_scroll_to_top_and_hide_control() {
        let mut page = Page::new("/");
        install(&mut page);
        scrolled(&mut page, 1200);

        let config = SiteConfig::default();
        let mut notifications = NotificationCenter::new(&config);
        let mut context = HandlerContext::new(&mut page, &mut notifications, &config);
        let events = ScrollToTopHandler
            .handle(&PageEvent::click(ClickTarget::ScrollToTop), &mut context)
            .unwrap();

        assert_eq!(
            events,
            vec![
                ModelEvent::ScrolledToTop,
                ModelEvent::ScrollButtonVisibilityChanged { visible: false },
            ]
        );
        assert_eq!(page.scroll_offset, 0);
    }

    #[test]
    fn handlers_should_wait_for_installed_control() {
        let page = Page::new("/");
        assert!(!ScrollHandler.is_relevant(&PageEvent::Scroll { offset: 400 }, &page));
        assert!(!ScrollToTopHandler.is_relevant(&PageEvent::click(ClickTarget::ScrollToTop), &page));
    }
}
