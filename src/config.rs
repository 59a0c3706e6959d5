//! Configuration constants and utilities for storefront
//!
//! Timing and threshold constants of the page behaviour, plus a serde-backed
//! `SiteConfig` that the replay harness can load from a JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How long a notification stays fully visible, in milliseconds
pub const NOTIFICATION_DISPLAY_MS: u64 = 3000;

/// How long the fade-out lasts before a notification is removed
pub const NOTIFICATION_FADE_MS: u64 = 500;

/// Scroll offset the page must exceed for the scroll-to-top control to show
pub const SCROLL_THRESHOLD_PX: u32 = 300;

/// Page assumed when the location has no trailing segment
pub const DEFAULT_PAGE: &str = "index.html";

/// Environment variable holding the tracing filter for the harness binary
pub const LOG_FILTER_ENV_VAR: &str = "STOREFRONT_LOG";

/// Tunable behaviour of the site logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub notification_display_ms: u64,
    pub notification_fade_ms: u64,
    pub scroll_threshold_px: u32,
    pub default_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            notification_display_ms: NOTIFICATION_DISPLAY_MS,
            notification_fade_ms: NOTIFICATION_FADE_MS,
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            default_page: DEFAULT_PAGE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load a config file, filling unspecified keys with defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!("Loaded site config from '{}': {:?}", path.display(), config);
        Ok(config)
    }
}
