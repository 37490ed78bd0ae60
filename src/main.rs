#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod relay;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{LoggingConfig, SiteConfig};

/// Site configuration, set once from the command line
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Contact-form relay client, built from the form config at startup
static RELAY: OnceLock<relay::Relay> = OnceLock::new();

/// Get the site configuration (loaded at startup or the built-in default)
pub fn site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the relay client, if startup got far enough to build one
pub fn form_relay() -> Option<&'static relay::Relay> {
    RELAY.get()
}

/// Default config location: `<config dir>/portfolio/site.json`
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
        .join("site.json")
}

/// Portfolio - interactive personal portfolio page
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio page with scroll reveals, project filter and contact form")]
struct Args {
    /// Site configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directive (overrides the config; RUST_LOG overrides both)
    #[arg(short, long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("loading site config {}", path.display()))?,
        None => SiteConfig::load_or_default(default_config_path())?,
    };

    let logging = LoggingConfig {
        directive: args.log.clone().unwrap_or_else(|| config.logging.directive.clone()),
    };
    portfolio_core::logging::init(&logging)?;

    let title = format!("{} - Portfolio", config.content.owner);
    tracing::info!(
        "Starting '{}' with {} sections, {} projects",
        title,
        config.content.sections.len(),
        config.content.projects.len()
    );

    let relay = relay::Relay::new(&config.form).context("configuring the contact form relay")?;

    // Store config globally
    let _ = RELAY.set(relay);
    let _ = SITE_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
