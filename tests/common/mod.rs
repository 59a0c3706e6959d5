#![allow(dead_code)]

use storefront::config::SiteConfig;
use storefront::site::models::{
    Field, FieldKind, FilterButton, Form, Header, Nav, Page, ProductCard,
};
use storefront::site::{PageEvent, SiteController};

/// A page with every region the site logic touches
pub fn marketplace_page(location: &str) -> Page {
    let mut page = Page::new(location);
    page.header = Some(Header::default());
    page.nav = Some(Nav::with_links([
        "index.html",
        "products.html",
        "contact.html",
        "buyers.html",
        "suppliers.html",
    ]));
    page.filter_buttons = vec![
        FilterButton::new("all"),
        FilterButton::new("electronics"),
        FilterButton::new("books"),
    ];
    page.products = vec![
        ProductCard::new("card-1", Some("electronics"), "Widget", "$10"),
        ProductCard::new("card-2", Some("books"), "Field Guide", "$24"),
        ProductCard::new("card-3", Some("electronics"), "Gadget", "$99"),
    ];
    page.forms = vec![
        Form::new("contactForm")
            .with_field(Field::new("name", FieldKind::Text).required())
            .with_field(Field::new("email", FieldKind::Email).required())
            .with_field(Field::new("message", FieldKind::Textarea).required()),
        Form::new("buyerSignup")
            .with_field(Field::new("company", FieldKind::Text).required())
            .with_field(Field::new("email", FieldKind::Email).required())
            .with_field(Field::new("password", FieldKind::Password).required())
            .with_field(Field::new("region", FieldKind::Select).required()),
        Form::new("buyerLogin")
            .with_field(Field::new("email", FieldKind::Email).required())
            .with_field(Field::new("password", FieldKind::Password).required()),
        Form::new("supplierSignup")
            .with_field(Field::new("company", FieldKind::Text).required())
            .with_field(Field::new("email", FieldKind::Email).required())
            .with_field(Field::new("catalog_url", FieldKind::Text)),
        Form::new("supplierLogin")
            .with_field(Field::new("email", FieldKind::Email).required())
            .with_field(Field::new("password", FieldKind::Password).required()),
    ];
    page
}

/// Controller over `page` that has already handled `ContentLoaded`
pub fn booted(page: Page) -> SiteController {
    let mut controller = SiteController::new(page, SiteConfig::default());
    controller
        .dispatch(&PageEvent::ContentLoaded)
        .expect("bootstrap should succeed");
    controller
}

/// Type values into a form's fields
pub fn fill(controller: &mut SiteController, form: &str, values: &[(&str, &str)]) {
    for (field, value) in values {
        controller
            .dispatch(&PageEvent::input(form, *field, *value))
            .expect("input should succeed");
    }
}
