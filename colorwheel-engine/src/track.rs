//! Linear value/alpha track
//!
//! Maps a 1-D run of pixels to a monotonic ramp. The leading end (top or
//! left) is 1.0 and the trailing end is 0.0.

use crate::color::{polar_to_rgb, Color};
use crate::geometry::{Orientation, Point, TrackGeometry};
use serde::{Deserialize, Serialize};

/// One keyboard nudge moves the track by 1/255 of its range
pub const NUDGE_STEP: f64 = 1.0 / 255.0;

/// Which channel the track drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackMode {
    /// HSV value, keeping hue and saturation
    Value,
    /// Alpha, keeping RGB
    Alpha,
}

/// Axis coordinate → value in [0, 1], clamped
pub fn pixel_to_value(p: i32, origin: i32, length: u32) -> f64 {
    let length = length.max(1) as f64;
    (1.0 - (p - origin) as f64 / length).clamp(0.0, 1.0)
}

/// Value → axis coordinate, inverse of [`pixel_to_value`]
pub fn value_to_pixel(value: f64, origin: i32, length: u32) -> i32 {
    origin + ((1.0 - value.clamp(0.0, 1.0)) * length as f64).round() as i32
}

/// RGB at each pixel of a value ramp for a fixed hue and saturation
///
/// Entry `i` is exactly the color a click at offset `i` selects, so the
/// drawn gradient and the picked color never disagree.
pub fn sample_ramp_colors(hue: f64, saturation: f64, length: u32) -> Vec<Color> {
    (0..length)
        .map(|i| polar_to_rgb(hue, saturation, pixel_to_value(i as i32, 0, length)))
        .collect()
}

/// Convert a track value to an alpha channel
pub fn value_to_alpha(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A laid-out track together with the channel it drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTrack {
    geometry: TrackGeometry,
    mode: TrackMode,
}

impl ValueTrack {
    pub fn new(geometry: TrackGeometry, mode: TrackMode) -> Self {
        Self { geometry, mode }
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn mode(&self) -> TrackMode {
        self.mode
    }

    /// Whether a pointer at `p` grabs the track
    pub fn hit(&self, p: Point) -> bool {
        self.geometry.bounds().contains(p)
    }

    /// Track value under a pointer, clamped to [0, 1]
    pub fn value_at(&self, p: Point) -> f64 {
        pixel_to_value(
            self.geometry.axis_coord(p),
            self.geometry.axis_origin(),
            self.geometry.length(),
        )
    }

    /// Axis coordinate of the cursor for `value`
    pub fn cursor_at(&self, value: f64) -> i32 {
        value_to_pixel(value, self.geometry.axis_origin(), self.geometry.length())
    }

    /// Color selected by a click at `p` on a value track
    pub fn color_at(&self, p: Point, hue: f64, saturation: f64) -> Color {
        polar_to_rgb(hue, saturation, self.value_at(p))
    }

    /// Gradient to draw, one color per pixel along the axis
    ///
    /// A value track shows the value ramp for the current hue/saturation.
    /// An alpha track shows the current RGB fading out.
    pub fn ramp(&self, hue: f64, saturation: f64, current: Color) -> Vec<Color> {
        let length = self.geometry.length();
        match self.mode {
            TrackMode::Value => sample_ramp_colors(hue, saturation, length),
            TrackMode::Alpha => (0..length)
                .map(|i| current.with_alpha(value_to_alpha(pixel_to_value(i as i32, 0, length))))
                .collect(),
        }
    }

    /// Where the current reading is drawn: past the trailing end of the track
    pub fn readout_anchor(&self) -> Point {
        let bounds = self.geometry.bounds();
        match self.geometry.orientation() {
            Orientation::Horizontal => Point::new(bounds.right() + 15, bounds.center().y),
            Orientation::Vertical => Point::new(bounds.center().x, bounds.bottom() + 1),
        }
    }

    /// Current reading as a 0-255 level
    pub fn readout(value: f64) -> String {
        value_to_alpha(value).to_string()
    }

    /// Value after `steps` keyboard nudges (positive moves toward 1.0)
    pub fn nudge(current: f64, steps: i32) -> f64 {
        (current + steps as f64 * NUDGE_STEP).clamp(0.0, 1.0)
    }
}
