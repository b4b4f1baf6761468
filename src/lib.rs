//! Interactive HSV color-wheel picker
//!
//! Terminal front end, configuration and PNG export around the
//! `colorwheel-engine` crate.

pub mod config;
pub mod export;
pub mod tui;

pub use colorwheel_engine as engine;
pub use config::PickerConfig;
pub use export::ExportRequest;
