//! # Site Controller
//!
//! The controller owns the page and everything that acts on it. It applies
//! the browser's native effects of an event (typing, scrolling), runs the
//! bootstrap on `ContentLoaded`, offers every event to the registered
//! handlers and publishes the resulting model events on the event bus.

use anyhow::Result;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::site::components::{
    mobile_menu, navigation, scroll_to_top, CartHandler, FilterHandler, HandlerContext,
    HandlerRegistry, MenuToggleHandler, NotificationCenter, ScrollHandler, ScrollToTopHandler,
    SubmissionHandler,
};
use crate::site::events::{
    EventBus, FormIdentity, ModelEvent, ModelEventHandler, NotificationId, PageEvent,
    SimpleEventBus,
};
use crate::site::models::Page;

pub struct SiteController {
    page: Page,
    config: SiteConfig,
    registry: HandlerRegistry,
    notifications: NotificationCenter,
    event_bus: Box<dyn EventBus>,
    booted: bool,
}

impl SiteController {
    /// Attach the site logic to a page
    ///
    /// Only the document-level cart listener is active until the page
    /// reports `ContentLoaded`.
    pub fn new(page: Page, config: SiteConfig) -> Self {
        let mut registry = HandlerRegistry::new();
        registry.register(Arc::new(CartHandler));

        Self {
            notifications: NotificationCenter::for_page(&config, &page),
            page,
            config,
            registry,
            event_bus: Box::new(SimpleEventBus::new()),
            booted: false,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.notifications.now()
    }

    /// Replace the event bus
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = event_bus;
    }

    /// Observe every model event the controller produces
    pub fn subscribe(&mut self, handler: ModelEventHandler) {
        self.event_bus.subscribe_to_model_events(handler);
    }

    /// Run the initializers and register the page's handlers
    ///
    /// Runs once; later calls do nothing.
    pub fn bootstrap(&mut self) -> Vec<ModelEvent> {
        if self.booted {
            tracing::debug!("Page already bootstrapped");
            return Vec::new();
        }
        self.booted = true;

        let mut events = navigation::highlight(&mut self.page, &self.config.default_page);

        if !self.page.filter_buttons.is_empty() {
            self.registry.register(Arc::new(FilterHandler));
        }

        for identity in FormIdentity::ALL {
            if self.page.form(identity.element_id()).is_some() {
                self.registry
                    .register(Arc::new(SubmissionHandler::new(identity)));
            }
        }

        if let Some(event) = mobile_menu::install(&mut self.page) {
            events.push(event);
            self.registry.register(Arc::new(MenuToggleHandler));
        }

        events.extend(scroll_to_top::install(&mut self.page));
        self.registry.register(Arc::new(ScrollHandler));
        self.registry.register(Arc::new(ScrollToTopHandler));

        tracing::info!(
            "Bootstrapped '{}' with {} handlers",
            self.page.location,
            self.registry.handler_count()
        );
        self.publish(&events);
        events
    }

    /// Deliver a page event and return the model events it caused
    pub fn dispatch(&mut self, event: &PageEvent) -> Result<Vec<ModelEvent>> {
        tracing::debug!("Dispatching {:?}", event);

        if matches!(event, PageEvent::ContentLoaded) {
            return Ok(self.bootstrap());
        }

        let mut events = self.apply_native(event);
        let mut context =
            HandlerContext::new(&mut self.page, &mut self.notifications, &self.config);
        events.extend(self.registry.dispatch(event, &mut context)?);

        self.publish(&events);
        Ok(events)
    }

    /// Move virtual time forward and fire due notification timers
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ModelEvent> {
        let events = self.notifications.advance(&mut self.page, elapsed_ms);
        self.publish(&events);
        events
    }

    /// Remove a notification before its timers run out
    pub fn dismiss(&mut self, id: NotificationId) -> Option<ModelEvent> {
        let event = self.notifications.dismiss(&mut self.page, id)?;
        self.publish(std::slice::from_ref(&event));
        Some(event)
    }

    /// Effects the browser applies on its own, before any listener runs
    fn apply_native(&mut self, event: &PageEvent) -> Vec<ModelEvent> {
        match event {
            PageEvent::Input { form, field, value } => {
                let Some(target) = self
                    .page
                    .form_mut(form)
                    .and_then(|f| f.field_mut(field))
                else {
                    tracing::debug!("Input for unknown field {}.{}", form, field);
                    return Vec::new();
                };
                target.value = value.clone();
                vec![ModelEvent::FieldValueChanged {
                    form: form.clone(),
                    field: field.clone(),
                }]
            }
            PageEvent::Scroll { offset } => {
                self.page.scroll_offset = *offset;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn publish(&mut self, events: &[ModelEvent]) {
        for event in events {
            self.event_bus.publish_model_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::events::{ClickTarget, Severity};
    use crate::site::models::{Field, FieldKind, FilterButton, Form, Header, Nav, ProductCard};
    use std::sync::Mutex;

    fn storefront_page() -> Page {
        let mut page = Page::new("/products.html");
        page.header = Some(Header::default());
        page.nav = Some(Nav::with_links(["index.html", "products.html"]));
        page.filter_buttons = vec![FilterButton::new("all"), FilterButton::new("books")];
        page.products = vec![ProductCard::new("b1", Some("books"), "Atlas", "$12")];
        page.forms.push(
            Form::new("contactForm")
                .with_field(Field::new("email", FieldKind::Email).required()),
        );
        page
    }

    #[test]
    fn new_controller_should_only_listen_for_cart_clicks() {
        let controller = SiteController::new(storefront_page(), SiteConfig::default());
        assert_eq!(controller.registry().handler_count(), 1);
        assert!(controller.registry().contains("CartHandler"));
        assert!(!controller.is_booted());
    }

    #[test]
    fn content_loaded_should_bootstrap_once() {
        let mut controller = SiteController::new(storefront_page(), SiteConfig::default());

        let events = controller.dispatch(&PageEvent::ContentLoaded).unwrap();
        assert!(events.contains(&ModelEvent::NavLinkActivated {
            href: "products.html".to_string()
        }));
        assert!(events.contains(&ModelEvent::MenuToggleInstalled));
        assert!(events.contains(&ModelEvent::ScrollButtonInstalled));

        let registry = controller.registry();
        assert!(registry.contains("FilterHandler"));
        assert!(registry.contains("ContactSubmissionHandler"));
        assert!(!registry.contains("BuyerLoginSubmissionHandler"));
        assert!(registry.contains("MenuToggleHandler"));
        let count = registry.handler_count();

        assert!(controller.dispatch(&PageEvent::ContentLoaded).unwrap().is_empty());
        assert_eq!(controller.registry().handler_count(), count);
    }

    #[test]
    fn events_before_bootstrap_should_be_ignored_except_cart() {
        let mut controller = SiteController::new(storefront_page(), SiteConfig::default());

        let events = controller
            .dispatch(&PageEvent::click(ClickTarget::FilterButton { index: 1 }))
            .unwrap();
        assert!(events.is_empty());

        let events = controller
            .dispatch(&PageEvent::click(ClickTarget::AddToCart {
                card: crate::site::events::CardId::new("b1"),
            }))
            .unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn input_should_update_field_value() {
        let mut controller = SiteController::new(storefront_page(), SiteConfig::default());
        let events = controller
            .dispatch(&PageEvent::input("contactForm", "email", "me@shop.co"))
            .unwrap();

        assert_eq!(
            events,
            vec![ModelEvent::FieldValueChanged {
                form: "contactForm".to_string(),
                field: "email".to_string(),
            }]
        );
        let form = controller.page().form("contactForm").unwrap();
        assert_eq!(form.field("email").unwrap().value, "me@shop.co");

        assert!(controller
            .dispatch(&PageEvent::input("contactForm", "phone", "123"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn subscribers_should_see_every_event() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let mut controller = SiteController::new(storefront_page(), SiteConfig::default());
        controller.subscribe(Box::new(move |event| {
            sink.lock().unwrap().push(event.clone());
        }));

        let mut produced = controller.dispatch(&PageEvent::ContentLoaded).unwrap();
        produced.extend(
            controller
                .dispatch(&PageEvent::click(ClickTarget::MenuToggle))
                .unwrap(),
        );
        produced.extend(controller.advance(10));

        assert_eq!(*seen.lock().unwrap(), produced);
    }

    #[test]
    fn dismiss_should_remove_notification_early() {
        let mut controller = SiteController::new(storefront_page(), SiteConfig::default());
        controller.dispatch(&PageEvent::ContentLoaded).unwrap();
        let events = controller
            .dispatch(&PageEvent::click(ClickTarget::AddToCart {
                card: crate::site::events::CardId::new("b1"),
            }))
            .unwrap();
        let Some(ModelEvent::NotificationShown { id, severity, .. }) = events.first().cloned()
        else {
            panic!("Expected NotificationShown event");
        };
        assert_eq!(severity, Severity::Success);

        assert_eq!(
            controller.dismiss(id),
            Some(ModelEvent::NotificationRemoved { id })
        );
        assert!(controller.page().notifications.is_empty());
        assert!(controller.advance(4000).is_empty());
    }

    /// Bus that records events instead of fanning them out
    struct RecordingBus {
        published: Arc<Mutex<Vec<ModelEvent>>>,
    }

    impl EventBus for RecordingBus {
        fn publish_model_event(&mut self, event: &ModelEvent) {
            self.published.lock().unwrap().push(event.clone());
        }

        fn subscribe_to_model_events(&mut self, _handler: ModelEventHandler) {}

        fn subscriber_count(&self) -> usize {
            0
        }
    }

    #[test]
    fn replaced_event_bus_should_receive_published_events() {
        let published = Arc::new(Mutex::new(Vec::new()));
        let mut controller = SiteController::new(storefront_page(), SiteConfig::default());
        controller.set_event_bus(Box::new(RecordingBus {
            published: published.clone(),
        }));

        let mut produced = controller.dispatch(&PageEvent::ContentLoaded).unwrap();
        produced.extend(
            controller
                .dispatch(&PageEvent::click(ClickTarget::AddToCart {
                    card: crate::site::events::CardId::new("b1"),
                }))
                .unwrap(),
        );
        produced.extend(controller.advance(3000));

        assert!(!produced.is_empty());
        assert_eq!(*published.lock().unwrap(), produced);
    }
}
