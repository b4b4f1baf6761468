//! The single authoritative color
//!
//! RGBA is the source of truth. The HSV kept alongside it is derived on
//! every write, except that hue survives achromatic colors and saturation
//! survives black, so the marker does not jump and dragging value back up
//! restores the previous chroma.

use crate::color::{polar_to_rgb, rgb_to_hsv, Color, Hsv, Polar};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    color: Color,
    hsv: Hsv,
}

impl SelectionState {
    /// Create a selection; an achromatic start color gets hue 0
    pub fn new(color: Color) -> Self {
        let hsv = rgb_to_hsv(color).with_hue_fallback(0.0);
        Self { color, hsv }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn alpha(&self) -> u8 {
        self.color.a
    }

    /// Where the marker sits on the disc
    pub fn marker_polar(&self) -> Polar {
        Polar {
            angle: self.hsv.hue,
            saturation: self.hsv.saturation,
        }
    }

    /// Replace the whole color (numeric entry)
    pub fn set_from_rgb(&mut self, color: Color) {
        let sample = rgb_to_hsv(color);
        if sample.hue.is_none() {
            trace!(hue = self.hsv.hue, "Achromatic color, retaining hue");
        }

        let saturation = if sample.value > 0.0 {
            sample.saturation
        } else {
            self.hsv.saturation
        };

        self.hsv = Hsv {
            hue: sample.hue.unwrap_or(self.hsv.hue),
            saturation,
            value: sample.value,
        };
        self.color = color;
    }

    /// Pick hue and saturation from the disc, keeping value and alpha
    pub fn set_from_polar(&mut self, polar: Polar) {
        let saturation = polar.saturation.clamp(0.0, 1.0);
        if saturation > 0.0 {
            self.hsv.hue = polar.angle;
        } else {
            trace!(hue = self.hsv.hue, "Disc center picked, retaining hue");
        }
        self.hsv.saturation = saturation;
        self.recompute_rgb();
    }

    /// Set value, keeping hue, saturation and alpha
    pub fn set_value(&mut self, value: f64) {
        self.hsv.value = value.clamp(0.0, 1.0);
        self.recompute_rgb();
    }

    /// Set alpha, keeping RGB
    pub fn set_alpha(&mut self, alpha: u8) {
        self.color.a = alpha;
    }

    fn recompute_rgb(&mut self) {
        self.color = polar_to_rgb(self.hsv.hue, self.hsv.saturation, self.hsv.value)
            .with_alpha(self.color.a);
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pick_retains_hue() {
        let mut sel = SelectionState::new(Color::new(0, 128, 0));
        assert!((sel.hsv().hue - 120.0).abs() < 1e-9);

        sel.set_from_polar(Polar {
            angle: 0.0,
            saturation: 0.0,
        });
        assert_eq!(sel.color(), Color::new(128, 128, 128));
        assert!((sel.hsv().hue - 120.0).abs() < 1e-9);
        assert_eq!(sel.hsv().saturation, 0.0);
    }

    #[test]
    fn test_polar_keeps_value_and_alpha() {
        let mut sel = SelectionState::new(Color::rgba(0, 0, 128, 77));
        sel.set_from_polar(Polar {
            angle: 0.0,
            saturation: 1.0,
        });
        assert_eq!(sel.color(), Color::rgba(128, 0, 0, 77));
    }

    #[test]
    fn test_value_keeps_hue_and_saturation() {
        let mut sel = SelectionState::new(Color::GREEN);
        sel.set_value(0.25);
        assert_eq!(sel.color(), Color::new(0, 64, 0));
        sel.set_value(0.0);
        assert_eq!(sel.color(), Color::BLACK);
        // Chroma comes back when value is raised again
        sel.set_value(1.0);
        assert_eq!(sel.color(), Color::GREEN);
    }

    #[test]
    fn test_rgb_to_grey_keeps_hue() {
        let mut sel = SelectionState::new(Color::BLUE);
        sel.set_from_rgb(Color::new(40, 40, 40));
        assert!((sel.hsv().hue - 240.0).abs() < 1e-9);
        assert_eq!(sel.hsv().saturation, 0.0);

        sel.set_from_rgb(Color::BLACK);
        assert!((sel.hsv().hue - 240.0).abs() < 1e-9);
        assert_eq!(sel.hsv().value, 0.0);
    }

    #[test]
    fn test_alpha_only_touches_alpha() {
        let mut sel = SelectionState::new(Color::new(1, 2, 3));
        let hsv = sel.hsv();
        sel.set_alpha(10);
        assert_eq!(sel.color(), Color::rgba(1, 2, 3, 10));
        assert_eq!(sel.hsv(), hsv);
    }
}
