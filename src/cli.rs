// CLI definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use colorwheel_engine::{BakeMode, Color, Point};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "colorwheel")]
#[command(author, version, about = "Interactive HSV color-wheel picker")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path (default: ~/.config/colorwheel/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive picker in the terminal (default)
    #[command(visible_alias = "t")]
    Tui {
        /// Start color, overrides the config (e.g. "#3366FF")
        #[arg(long, value_parser = parse_color)]
        color: Option<Color>,

        /// Darken the wheel with the value track
        #[arg(long)]
        live: bool,
    },

    /// Compose one frame and write it as PNG
    #[command(visible_aliases = ["export", "r"])]
    Render {
        /// Output file
        #[arg(short, long, default_value = "colorwheel.png")]
        out: PathBuf,

        /// Start color, overrides the config
        #[arg(long, value_parser = parse_color)]
        color: Option<Color>,

        /// Which configured layout to draw
        #[arg(long, value_enum, default_value_t = LayoutChoice::Desktop)]
        layout: LayoutChoice,

        /// Pixel click to replay before composing, "X,Y" (repeatable)
        #[arg(long = "click", value_parser = parse_point)]
        clicks: Vec<Point>,

        /// Integer upscaling factor
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=16))]
        scale: u32,

        /// Bake the current value into the wheel instead of 1.0
        #[arg(long)]
        live: bool,
    },

    /// Print the HSV reading and wheel position of a color
    #[command(visible_aliases = ["hsv", "c"])]
    Convert {
        /// Color as hex, "#RRGGBB" or "#RRGGBBAA"
        #[arg(value_parser = parse_color)]
        color: Color,
    },

    /// Print the effective configuration
    #[command(visible_alias = "cfg")]
    Config {
        /// Print only the config file path
        #[arg(long)]
        path: bool,

        /// Write the effective configuration to the config file
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Default, Debug)]
pub enum LayoutChoice {
    /// 800x600 window layout
    #[default]
    Desktop,
    /// Terminal layout, one pixel per half cell
    Terminal,
}

/// Pick the bake mode from a `--live` flag, falling back to the config
pub fn bake_mode(live: bool, configured: BakeMode) -> BakeMode {
    if live {
        BakeMode::Live
    } else {
        configured
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|_| format!("bad X in '{s}'"))?;
    let y = y.trim().parse().map_err(|_| format!("bad Y in '{s}'"))?;
    Ok(Point::new(x, y))
}
