//! Engine error types

use crate::color::Channel;
use thiserror::Error;

/// Errors raised while building a picker
///
/// All of these are configuration problems detected at construction time.
/// Malformed user input during a session is rejected locally and never
/// reaches this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Disc radius is zero or negative
    #[error("Disc radius must be positive (got {0})")]
    DegenerateDisc(i32),

    /// Track length or thickness is zero or negative
    #[error("Track length and thickness must be positive (got length {length}, thickness {thickness})")]
    DegenerateTrack { length: i32, thickness: i32 },

    /// Disc's bounding square does not lie inside the canvas
    #[error("Disc of radius {radius} at ({center_x}, {center_y}) does not fit a {width}x{height} canvas")]
    DiscOutOfCanvas {
        center_x: i32,
        center_y: i32,
        radius: i32,
        width: u32,
        height: u32,
    },

    /// Canvas has no pixels
    #[error("Canvas must be at least 1x1 (got {width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    /// Two numeric fields share pixels, so a click could not pick one
    #[error("Fields {0} and {1} overlap")]
    FieldOverlap(Channel, Channel),

    /// Color text could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
