//! # Navigation Highlighter
//!
//! Marks the navigation entries that point at the current page.

use crate::site::events::ModelEvent;
use crate::site::models::Page;

/// Page the current location refers to, falling back to `default_page`
pub fn current_page<'a>(page: &'a Page, default_page: &'a str) -> &'a str {
    match page.path_segment() {
        "" => default_page,
        segment => segment,
    }
}

/// Mark exactly the nav links whose target is the current page
///
/// Emits an event for every link that became active.
pub fn highlight(page: &mut Page, default_page: &str) -> Vec<ModelEvent> {
    let current = current_page(page, default_page).to_string();
    let Some(nav) = page.nav.as_mut() else {
        tracing::debug!("No navigation on page, nothing to highlight");
        return Vec::new();
    };

    let mut events = Vec::new();
    for link in &mut nav.links {
        let is_current = link.href == current;
        if is_current && !link.active {
            events.push(ModelEvent::NavLinkActivated {
                href: link.href.clone(),
            });
        }
        link.active = is_current;
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::models::Nav;

    fn page_at(location: &str) -> Page {
        let mut page = Page::new(location);
        page.nav = Some(Nav::with_links([
            "index.html",
            "products.html",
            "contact.html",
        ]));
        page
    }

    fn active(page: &Page) -> Vec<String> {
        page.nav
            .as_ref()
            .unwrap()
            .active_links()
            .map(|link| link.href.clone())
            .collect()
    }

    #[test]
    fn highlight_should_mark_matching_link() {
        let mut page = page_at("/site/products.html");
        let events = highlight(&mut page, "index.html");

        assert_eq!(active(&page), vec!["products.html"]);
        assert_eq!(
            events,
            vec![ModelEvent::NavLinkActivated {
                href: "products.html".to_string()
            }]
        );
    }

    #[test]
    fn empty_segment_should_fall_back_to_index() {
        let mut page = page_at("/");
        highlight(&mut page, "index.html");
        assert_eq!(active(&page), vec!["index.html"]);
    }

    #[test]
    fn highlight_should_be_idempotent() {
        let mut page = page_at("contact.html");
        highlight(&mut page, "index.html");
        let events = highlight(&mut page, "index.html");

        assert!(events.is_empty());
        assert_eq!(active(&page), vec!["contact.html"]);
    }

    #[test]
    fn unknown_page_should_leave_all_links_unmarked() {
        let mut page = page_at("/about.html");
        assert!(highlight(&mut page, "index.html").is_empty());
        assert!(active(&page).is_empty());
    }

    #[test]
    fn page_without_nav_should_be_noop() {
        let mut page = Page::new("/index.html");
        assert!(highlight(&mut page, "index.html").is_empty());
    }
}
