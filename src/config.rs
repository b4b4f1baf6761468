//! Configuration for the color picker
//!
//! Supports TOML serialization for persistent config storage. Colors are
//! written as hex strings (`"#3366FF"`), layouts as plain pixel tables.

use anyhow::Context;
use colorwheel_engine::{BakeMode, Color, LayoutSpec};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Custom serde for Color: hex string both ways
// ---------------------------------------------------------------------------

fn serialize_color<S: Serializer>(color: &Color, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&color.to_hex())
}

fn deserialize_color<'de, D: Deserializer<'de>>(d: D) -> Result<Color, D::Error> {
    let text = String::deserialize(d)?;
    text.parse().map_err(serde::de::Error::custom)
}

fn default_caption() -> String {
    "Color Picker".to_string()
}

fn default_initial_color() -> Color {
    Color::WHITE
}

/// Complete picker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Title shown on the picker frame
    #[serde(default = "default_caption")]
    pub caption: String,
    /// Color selected at start-up
    #[serde(
        default = "default_initial_color",
        serialize_with = "serialize_color",
        deserialize_with = "deserialize_color"
    )]
    pub initial_color: Color,
    /// Value baked into the wheel image
    #[serde(default)]
    pub bake: BakeMode,
    /// Layout for PNG export
    #[serde(default = "LayoutSpec::desktop")]
    pub desktop: LayoutSpec,
    /// Layout for the terminal front end
    #[serde(default = "LayoutSpec::terminal")]
    pub terminal: LayoutSpec,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            caption: default_caption(),
            initial_color: default_initial_color(),
            bake: BakeMode::default(),
            desktop: LayoutSpec::desktop(),
            terminal: LayoutSpec::terminal(),
        }
    }
}

impl PickerConfig {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("colorwheel")
            .join("config.toml")
    }

    /// Load config from a file, or return default if not found
    ///
    /// Layouts are validated here, so a zero radius or track length fails
    /// before any window or terminal is touched.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: PickerConfig =
                toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
            debug!(path = %path.display(), "Loaded config");
            config
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that both layouts build
    pub fn validate(&self) -> anyhow::Result<()> {
        self.desktop.build().context("invalid [desktop] layout")?;
        self.terminal.build().context("invalid [terminal] layout")?;

        if self.terminal.track.is_none() {
            warn!("Terminal layout has no track; value can only be set from the fields");
        }
        Ok(())
    }
}
