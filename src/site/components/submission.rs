//! # Submission Handlers
//!
//! One listener per known form. Submissions are always intercepted, never
//! sent anywhere: a valid form gets its fixed success notification and is
//! reset, an invalid one keeps the validator's annotations and nothing else
//! happens.

use anyhow::Result;

use crate::site::components::handler::{Handler, HandlerContext};
use crate::site::components::validator;
use crate::site::events::{FormIdentity, ModelEvent, PageEvent, Severity};
use crate::site::models::Page;

/// Submit listener bound to one form identity
#[derive(Debug, Clone, Copy)]
pub struct SubmissionHandler {
    identity: FormIdentity,
}

impl SubmissionHandler {
    pub fn new(identity: FormIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> FormIdentity {
        self.identity
    }
}

impl Handler for SubmissionHandler {
    fn is_relevant(&self, event: &PageEvent, page: &Page) -> bool {
        match event {
            PageEvent::Submit { form } => {
                form == self.identity.element_id() && page.form(form).is_some()
            }
            _ => false,
        }
    }

    fn handle(
        &self,
        _event: &PageEvent,
        context: &mut HandlerContext<'_>,
    ) -> Result<Vec<ModelEvent>> {
        let identity = self.identity;
        let Some(form) = context.page.form_mut(identity.element_id()) else {
            return Ok(Vec::new());
        };

        let mut events = vec![ModelEvent::SubmissionIntercepted { form: identity }];
        let (is_valid, annotations) = validator::validate_with_events(form);
        events.extend(annotations);

        if !is_valid {
            tracing::info!("Submission of {} rejected by validation", identity);
            events.push(ModelEvent::SubmissionRejected { form: identity });
            return Ok(events);
        }

        let (_, shown) = context.notifications.show(
            context.page,
            identity.success_message(),
            Severity::Success,
        );
        events.push(shown);

        if let Some(form) = context.page.form_mut(identity.element_id()) {
            form.reset();
            events.push(ModelEvent::FormReset { form: identity });
        }
        tracing::info!("Submission of {} accepted", identity);

        Ok(events)
    }

    fn name(&self) -> &'static str {
        match self.identity {
            FormIdentity::Contact => "ContactSubmissionHandler",
            FormIdentity::BuyerSignup => "BuyerSignupSubmissionHandler",
            FormIdentity::BuyerLogin => "BuyerLoginSubmissionHandler",
            FormIdentity::SupplierSignup => "SupplierSignupSubmissionHandler",
            FormIdentity::SupplierLogin => "SupplierLoginSubmissionHandler",
        }
    }
}
