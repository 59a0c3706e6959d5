//! # Page Models
//!
//! Data structures for everything the site logic reads or annotates.

pub mod catalog;
pub mod chrome;
pub mod form;
pub mod notification;
pub mod page;

pub use catalog::{FilterButton, ProductCard};
pub use chrome::{Header, MenuToggle, Nav, NavLink, ScrollButton};
pub use form::{Field, FieldKind, Form};
pub use notification::Notification;
pub use page::{Page, PageError};
