use std::io::Write;

use storefront::config::SiteConfig;
use storefront::site::models::{Page, PageError};
use storefront::site::replay::{self, Script};
use storefront::site::{ModelEvent, SiteController};

const PAGE_FIXTURE: &str = r#"{
    "location": "/buyers.html",
    "header": {},
    "nav": {"links": [{"href": "index.html"}, {"href": "buyers.html"}]},
    "forms": [
        {
            "id": "buyerLogin",
            "fields": [
                {"name": "email", "kind": "email", "required": true},
                {"name": "password", "kind": "password", "required": true}
            ]
        }
    ]
}"#;

const SCRIPT: &str = r#"[
    {"type": "content_loaded"},
    {"type": "submit", "form": "buyerLogin"},
    {"type": "input", "form": "buyerLogin", "field": "email", "value": "buyer@acme.co"},
    {"type": "input", "form": "buyerLogin", "field": "password", "value": "secret1"},
    {"type": "submit", "form": "buyerLogin"},
    {"type": "scroll", "offset": 640},
    {"advance_ms": 3500}
]"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Fixture and script loaded from disk replay to the expected final page
#[test]
fn test_replay_from_files() {
    let page_file = write_temp(PAGE_FIXTURE);
    let script_file = write_temp(SCRIPT);

    let page = Page::load(page_file.path()).unwrap();
    let script = Script::load(script_file.path()).unwrap();
    let report = replay::run(SiteController::new(page, SiteConfig::default()), &script).unwrap();

    assert_eq!(report.elapsed_ms, 3500);
    assert!(report.page.notifications.is_empty());
    assert!(report.page.scroll_button.as_ref().unwrap().visible);
    assert!(report.page.header.as_ref().unwrap().menu_toggle.is_some());

    let notifications: Vec<&ModelEvent> = report
        .events
        .iter()
        .filter(|event| {
            matches!(
                event,
                ModelEvent::NotificationShown { .. }
                    | ModelEvent::NotificationFading { .. }
                    | ModelEvent::NotificationRemoved { .. }
            )
        })
        .collect();
    assert_eq!(notifications.len(), 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["page"]["location"], "/buyers.html");
    assert_eq!(json["events"][0]["event"], "nav_link_activated");
}

/// A shorter display period from config shortens the lifecycle
#[test]
fn test_config_changes_timing() {
    let config: SiteConfig =
        serde_json::from_str(r#"{"notification_display_ms": 1000, "notification_fade_ms": 100}"#)
            .unwrap();
    let page = Page::from_json(
        r#"{"products": [{"id": "w", "name": "Widget", "price": "$10"}]}"#,
    )
    .unwrap();
    let script = Script::from_json(
        r#"[
            {"type": "content_loaded"},
            {"type": "click", "target": "add_to_cart", "card": "w"},
            {"advance_ms": 1100}
        ]"#,
    )
    .unwrap();

    let report = replay::run(SiteController::new(page, config), &script).unwrap();
    assert!(report.page.notifications.is_empty());
}

/// Broken fixtures are reported, not replayed
#[test]
fn test_invalid_fixture() {
    let file = write_temp(r#"{"forms": [{"id": "a"}, {"id": "a"}]}"#);
    assert!(matches!(
        Page::load(file.path()),
        Err(PageError::DuplicateForm(_))
    ));

    let file = write_temp("{ not json");
    assert!(matches!(Page::load(file.path()), Err(PageError::Json(_))));
}
