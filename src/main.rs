//! appdesk - A terminal dashboard for an applications inventory
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use appdesk::{connect, open_storage, stored_session};
use appdesk_app::config::{default_config_dir, init_config_dir, load_settings, resolve_base_url};
use appdesk_app::{AppState, Settings};

/// appdesk - manage the applications inventory from the terminal
#[derive(Parser, Debug)]
#[command(name = "appdesk")]
#[command(about = "A terminal dashboard for an applications inventory", long_about = None)]
struct Args {
    /// API base URL (overrides APPDESK_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the session storage file
    #[arg(long, value_name = "PATH")]
    storage: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write the report (headless mode)
    #[arg(long, requires = "headless")]
    export: bool,

    /// Clear the stored session and exit
    #[arg(long, conflicts_with = "headless")]
    logout: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    appdesk_core::logging::init()?;

    let settings = load_config(args.config);
    let base_url = resolve_base_url(args.api_url.as_deref(), &settings);

    let storage = open_storage(args.storage);
    let services = connect(&base_url, storage)?;

    if args.logout {
        services.auth.logout()?;
        info!("Session cleared");
        println!("Signed out");
        return Ok(());
    }

    let stored = stored_session(services.storage.as_ref(), &services.auth);

    if args.headless {
        appdesk::run_headless(&services.applications, &stored, &settings, args.export).await?;
        return Ok(());
    }

    let state = AppState::restore(settings, &stored);
    appdesk_tui::run(state, services).await?;

    info!("appdesk exiting");
    Ok(())
}

/// Settings from `--config`, else the default location (created on first run)
fn load_config(cli: Option<PathBuf>) -> Settings {
    let path = match cli {
        Some(path) => path,
        None => match default_config_dir().map(|dir| init_config_dir(&dir)) {
            Some(Ok(path)) => path,
            Some(Err(e)) => {
                warn!("Could not create default config: {}", e);
                return Settings::default();
            }
            None => return Settings::default(),
        },
    };
    load_settings(&path)
}
