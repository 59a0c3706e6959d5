//! # Script Replay
//!
//! Drives a `SiteController` from a scripted list of page events and time
//! advances, collecting the model events and the final page state. The
//! harness binary and the integration tests both use it.
//!
//! A script is a JSON array whose steps are either a page event
//! (`{"type": "submit", "form": "contactForm"}`), a time advance
//! (`{"advance_ms": 3000}`) or an early dismissal (`{"dismiss": 1}`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::site::controller::SiteController;
use crate::site::events::{ModelEvent, NotificationId, PageEvent};
use crate::site::models::Page;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Advance { advance_ms: u64 },
    Dismiss { dismiss: NotificationId },
    Event(PageEvent),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid replay script")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::from_json(&json)
    }
}

/// Outcome of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub elapsed_ms: u64,
    pub events: Vec<ModelEvent>,
    pub page: Page,
}

/// Run every step of `script` against the controller
pub fn run(mut controller: SiteController, script: &Script) -> Result<ReplayReport> {
    let mut events = Vec::new();

    for (index, step) in script.steps.iter().enumerate() {
        tracing::debug!("Replay step {}: {:?}", index, step);
        match step {
            ScriptStep::Event(event) => {
                let produced = controller
                    .dispatch(event)
                    .with_context(|| format!("step {index} failed"))?;
                events.extend(produced);
            }
            ScriptStep::Advance { advance_ms } => events.extend(controller.advance(*advance_ms)),
            ScriptStep::Dismiss { dismiss } => events.extend(controller.dismiss(*dismiss)),
        }
    }

    Ok(ReplayReport {
        elapsed_ms: controller.now(),
        events,
        page: controller.into_page(),
    })
}
