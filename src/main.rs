//! # Storefront Replay Harness
//!
//! Loads a page fixture, replays a script of page events against it and
//! prints the model events and final page state as JSON.

use anyhow::Result;
use storefront::cmd_args::CommandLineArgs;
use storefront::config::{SiteConfig, LOG_FILTER_ENV_VAR};
use storefront::site::replay::{self, Script};
use storefront::site::{Page, PageEvent, SiteController};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();

    let config = match args.config() {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let page = Page::load(args.page())?;
    let script = match args.script() {
        Some(path) => Script::load(path)?,
        None => Script {
            steps: vec![replay::ScriptStep::Event(PageEvent::ContentLoaded)],
        },
    };
    tracing::info!(
        "Replaying {} steps against '{}'",
        script.steps.len(),
        page.location
    );

    let report = replay::run(SiteController::new(page, config), &script)?;
    let output = if args.pretty() {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
