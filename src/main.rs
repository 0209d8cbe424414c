//! projboard - A terminal Kanban viewer for GitHub Projects.
//!
//! This is the main binary that loads the configuration, sets up file
//! logging and launches the TUI application.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use projboard_config::Config;
use projboard_github::GitHubClient;
use projboard_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset: debug for the projboard crates,
/// info for their dependencies.
const DEFAULT_LOG_FILTER: &str =
    "info,projboard=debug,projboard_config=debug,projboard_github=debug,projboard_tui=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.log_file)?;
    info!(organization = %config.organization, "starting projboard");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::new(config.organization, GitHubClient::new());
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Sends tracing output to the append-only log file; the terminal belongs
/// to the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;

    #[test]
    fn default_filter_keeps_item_debug_logs() {
        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "projboard_github::item", Level::DEBUG));
            assert!(tracing::enabled!(target: "projboard_tui::screen::picker", Level::DEBUG));
            assert!(tracing::enabled!(target: "hyper::client", Level::INFO));
            assert!(!tracing::enabled!(target: "hyper::client", Level::DEBUG));
        });
    }
}
