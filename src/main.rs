// immo - Property search tool
//
// Search real-estate listings by address, narrow them by property type and
// collect a shortlist, in a terminal UI or as one-shot CLI commands.
//
// Architecture:
// - Store: the search workflow state and its transitions (no I/O)
// - Search: id lookup plus concurrent detail fetches against a PropertySource
// - API: the PropertySource trait with fixture and HTTP implementations
// - TUI (ratatui): panels, key dispatch and the select! event loop
// - Event system: an mpsc channel carries fetch completions back to the TUI

mod api;
mod cli;
mod config;
mod events;
mod headless;
mod logging;
mod model;
mod search;
mod store;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogTarget};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management runs before anything reads the config file
    if let Some(Commands::Config { show, reset, path }) = cli.command {
        return cli::handle_config(show, reset, path);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    match cli.command {
        Some(Commands::Search {
            address,
            property_type,
            json,
        }) => {
            cli::validate_search_args(property_type.as_deref())?;
            let _guard = logging::init(&config.logging, LogTarget::Stderr);
            let source = api::create_source(&config.source)?;
            headless::search_command(
                source.as_ref(),
                address,
                property_type,
                json,
                &mut std::io::stdout(),
            )
            .await
        }
        Some(Commands::Types) => {
            let _guard = logging::init(&config.logging, LogTarget::Stderr);
            let source = api::create_source(&config.source)?;
            headless::types_command(source.as_ref(), &mut std::io::stdout()).await
        }
        Some(Commands::Config { .. }) => Ok(()),
        None => {
            // TUI owns the terminal: capture logs in memory instead of printing them
            let log_buffer = LogBuffer::new();
            let _guard = logging::init(&config.logging, LogTarget::Buffer(log_buffer.clone()));
            let source = api::create_source(&config.source)?;
            tui::run_tui(config, source, log_buffer).await
        }
    }
}
