//! TUI (Terminal User Interface) for the color picker
//!
//! Draws the picker with half-block pixels and feeds crossterm mouse and
//! key events to the engine.

pub mod app;
pub mod canvas;
pub mod render;

pub use app::App;

use crate::config::PickerConfig;
use colorwheel_engine::Color;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Run the picker until the user quits; returns the final selection
pub fn run(config: &PickerConfig, config_path: PathBuf) -> anyhow::Result<Color> {
    let mut app = App::new(config, config_path)?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_loop(&mut terminal, &mut app));

    // Cleanup
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result?;
    info!(color = %app.selection(), "Picker closed");
    Ok(app.selection())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(50);
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|f| render::render(f, app))?;
            dirty = false;
        }

        if event::poll(tick_rate)? {
            // Drain everything queued so a fast drag costs one frame
            loop {
                app.handle_event(event::read()?);
                if app.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
            dirty = true;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
