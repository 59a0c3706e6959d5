//! # Notification Banner
//!
//! Shows transient messages on the page. A notification is visible for the
//! display period, then gets the fade class, then is removed once the fade
//! period has passed. Any number of notifications may be on screen at once.
//!
//! Removal happens at most once per notification: timers for a notification
//! that is already gone do nothing, and `dismiss` cancels pending timers.

use crate::config::SiteConfig;
use crate::site::events::{ModelEvent, NotificationId, Severity};
use crate::site::models::{Notification, Page};
use crate::site::scheduler::{Scheduler, TimerAction, TimerTask};

/// Owner of notification ids and their lifecycle timers
#[derive(Debug)]
pub struct NotificationCenter {
    scheduler: Scheduler,
    next_id: u64,
    display_ms: u64,
    fade_ms: u64,
}

impl NotificationCenter {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            scheduler: Scheduler::new(),
            next_id: 1,
            display_ms: config.notification_display_ms,
            fade_ms: config.notification_fade_ms,
        }
    }

    /// Center whose ids start after every notification already on the page
    pub fn for_page(config: &SiteConfig, page: &Page) -> Self {
        let mut center = Self::new(config);
        if let Some(last) = page.notifications.iter().map(|n| n.id.0).max() {
            center.next_id = last + 1;
        }
        center
    }

    /// Current virtual time in milliseconds
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Number of lifecycle timers still pending
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Append a notification to the page and start its lifecycle
    pub fn show<S: Into<String>>(
        &mut self,
        page: &mut Page,
        message: S,
        severity: Severity,
    ) -> (NotificationId, ModelEvent) {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, message, severity);
        let event = ModelEvent::NotificationShown {
            id,
            message: notification.message.clone(),
            severity,
        };
        page.notifications.push(notification);

        self.scheduler.schedule(
            self.display_ms,
            TimerTask {
                notification: id,
                action: TimerAction::Fade,
            },
        );
        tracing::info!("Notification {} shown: {:?}", id, page.notifications.last());

        (id, event)
    }

    /// Remove a notification immediately and cancel its timers
    pub fn dismiss(&mut self, page: &mut Page, id: NotificationId) -> Option<ModelEvent> {
        let cancelled = self.scheduler.cancel(id);
        tracing::debug!("Dismissing notification {}, {} timers cancelled", id, cancelled);
        page.remove_notification(id)
            .then_some(ModelEvent::NotificationRemoved { id })
    }

    /// Advance virtual time, firing every timer that comes due
    pub fn advance(&mut self, page: &mut Page, elapsed_ms: u64) -> Vec<ModelEvent> {
        let target = self.scheduler.now().saturating_add(elapsed_ms);
        let mut events = Vec::new();

        while let Some(task) = self.scheduler.pop_due(target) {
            events.extend(self.fire(page, task));
        }
        self.scheduler.set_now(target);

        events
    }

    fn fire(&mut self, page: &mut Page, task: TimerTask) -> Option<ModelEvent> {
        let id = task.notification;
        match task.action {
            TimerAction::Fade => {
                let notification = page.notification_mut(id)?;
                notification.fading = true;
                self.scheduler.schedule(
                    self.fade_ms,
                    TimerTask {
                        notification: id,
                        action: TimerAction::Remove,
                    },
                );
                Some(ModelEvent::NotificationFading { id })
            }
            TimerAction::Remove => {
                if page.remove_notification(id) {
                    tracing::debug!("Notification {} removed", id);
                    Some(ModelEvent::NotificationRemoved { id })
                } else {
                    tracing::debug!("Notification {} already removed", id);
                    None
                }
            }
        }
    }
}
