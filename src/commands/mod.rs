//! Command handlers for the CLI application.
//!
//! This module organizes command handlers by category:
//! - `picker`: Commands that run the picker (tui, render)
//! - `utility`: Utility commands (convert, config)

pub mod picker;
pub mod utility;

/// Result type for command handlers
pub type CommandResult = anyhow::Result<()>;
