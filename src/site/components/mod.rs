//! # Page Components
//!
//! The behaviours attached to the page: initializers run at bootstrap and
//! the handlers that react to page events afterwards.

pub mod cart;
pub mod handler;
pub mod mobile_menu;
pub mod navigation;
pub mod notifications;
pub mod product_filter;
pub mod registry;
pub mod scroll_to_top;
pub mod submission;
pub mod validator;

pub use cart::CartHandler;
pub use handler::{Handler, HandlerContext};
pub use mobile_menu::MenuToggleHandler;
pub use notifications::NotificationCenter;
pub use product_filter::FilterHandler;
pub use registry::HandlerRegistry;
pub use scroll_to_top::{ScrollHandler, ScrollToTopHandler};
pub use submission::SubmissionHandler;
pub use validator::{validate, FieldError};
