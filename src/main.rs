//! Color wheel picker
//!
//! Main entry point: CLI parsing, logging setup and command dispatch.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use colorwheel::PickerConfig;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    init_logging(&cli.log_level, interactive)?;

    // Load config
    let config_path = cli.config.unwrap_or_else(PickerConfig::default_path);
    info!("Loading config from {:?}", config_path);
    let config = PickerConfig::load(&config_path)?;

    match cli.command {
        None => commands::picker::tui(config, config_path, None, false),
        Some(Commands::Tui { color, live }) => {
            commands::picker::tui(config, config_path, color, live)
        }
        Some(Commands::Render {
            out,
            color,
            layout,
            clicks,
            scale,
            live,
        }) => commands::picker::render(&config, &out, color, layout, &clicks, scale, live),
        Some(Commands::Convert { color }) => commands::utility::convert(color),
        Some(Commands::Config { path, init }) => {
            commands::utility::config(&config, &config_path, path, init)
        }
    }
}

/// Initialize tracing
///
/// The terminal UI owns the screen, so interactive runs log to a file in
/// the cache directory instead of stderr.
fn init_logging(level: &str, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if interactive {
        let path = log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("colorwheel")
        .join("colorwheel.log")
}
