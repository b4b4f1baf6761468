//! Picker command handlers.

use super::CommandResult;
use crate::cli::{bake_mode, LayoutChoice};
use colorwheel::export::{self, ExportRequest};
use colorwheel::PickerConfig;
use colorwheel_engine::{Color, Point};
use std::path::{Path, PathBuf};

/// Run the interactive picker and print the chosen color
pub fn tui(
    mut config: PickerConfig,
    config_path: PathBuf,
    color: Option<Color>,
    live: bool,
) -> CommandResult {
    if let Some(color) = color {
        config.initial_color = color;
    }
    config.bake = bake_mode(live, config.bake);

    let chosen = colorwheel::tui::run(&config, config_path)?;
    print_color(chosen);
    Ok(())
}

/// Write one composed frame as PNG
pub fn render(
    config: &PickerConfig,
    out: &Path,
    color: Option<Color>,
    layout: LayoutChoice,
    clicks: &[Point],
    scale: u32,
    live: bool,
) -> CommandResult {
    let spec = match layout {
        LayoutChoice::Desktop => &config.desktop,
        LayoutChoice::Terminal => &config.terminal,
    };

    let request = ExportRequest {
        layout: spec,
        initial: color.unwrap_or(config.initial_color),
        bake: bake_mode(live, config.bake),
        clicks,
        scale,
    };
    let chosen = export::write_png(&request, out)?;

    println!("Wrote {}", out.display());
    print_color(chosen);
    Ok(())
}

fn print_color(color: Color) {
    println!("{}", color.to_hex_rgba());
    println!(
        "rgba({}, {}, {}, {:.3})",
        color.r,
        color.g,
        color.b,
        color.a as f64 / 255.0
    );
}
