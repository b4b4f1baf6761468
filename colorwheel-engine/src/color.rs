//! Color types and the polar-HSV ↔ RGB mapping
//!
//! Angles are degrees at the public boundary and radians internally.
//! Channel conversion rounds half away from zero so that a full sweep of
//! the wheel is not biased dark.

use crate::error::EngineError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum channel value
pub const CHANNEL_MAX: u8 = 255;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create an opaque color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same RGB, different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Read one RGB channel
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Replace one RGB channel
    pub fn with_channel(self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => Self { r: value, ..self },
            Channel::Green => Self { g: value, ..self },
            Channel::Blue => Self { b: value, ..self },
        }
    }

    /// Hex notation: `#RRGGBB` when opaque, `#RRGGBBAA` otherwise
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            self.to_hex_rgba()
        }
    }

    /// Hex notation that always carries alpha: `#RRGGBBAA`
    pub fn to_hex_rgba(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    /// Accepts `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || EngineError::InvalidColor(s.to_string());

        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

/// One of the three numeric RGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Fixed field order used by Tab navigation
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position in [`Channel::ALL`]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Next channel in R→G→B order. Blue has no successor.
    pub fn next(self) -> Option<Channel> {
        match self {
            Channel::Red => Some(Channel::Green),
            Channel::Green => Some(Channel::Blue),
            Channel::Blue => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hue/saturation/value with a concrete hue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees, [0, 360)
    pub hue: f64,
    /// Saturation, [0, 1]
    pub saturation: f64,
    /// Value, [0, 1]
    pub value: f64,
}

/// Raw RGB→HSV reading
///
/// `hue` is `None` for achromatic colors (R = G = B). Callers keep their
/// previous hue in that case instead of snapping to 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvSample {
    pub hue: Option<f64>,
    pub saturation: f64,
    pub value: f64,
}

impl HsvSample {
    /// Resolve an undefined hue with `fallback`
    pub fn with_hue_fallback(self, fallback: f64) -> Hsv {
        Hsv {
            hue: self.hue.unwrap_or(fallback),
            saturation: self.saturation,
            value: self.value,
        }
    }
}

/// Position on the disc: angle in degrees and radius fraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Degrees, [0, 360)
    pub angle: f64,
    /// Distance from center divided by radius, [0, 1]
    pub saturation: f64,
}

/// Wrap any angle into [0, 360)
pub fn normalize_angle(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Convert a unit intensity to an 8-bit channel, rounding half away from zero
fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a disc coordinate plus value to an opaque RGB color
///
/// # Arguments
/// * `angle_deg` - Hue angle, any real number (normalized to [0, 360))
/// * `saturation` - Radius fraction, clamped to [0, 1]
/// * `value` - Brightness, clamped to [0, 1]
pub fn polar_to_rgb(angle_deg: f64, saturation: f64, value: f64) -> Color {
    let h = normalize_angle(angle_deg) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Standard RGB→HSV. Alpha is ignored.
pub fn rgb_to_hsv(color: Color) -> HsvSample {
    let r = color.r as f64 / 255.0;
    let g = color.g as f64 / 255.0;
    let b = color.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    let hue = if delta == 0.0 {
        None
    } else {
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        Some(normalize_angle(sector * 60.0))
    };

    HsvSample {
        hue,
        saturation,
        value: max,
    }
}

/// Map a pixel to disc coordinates, or `None` when it lies outside the disc
///
/// Used for rasterization masking. Pointer handling uses
/// [`pixel_to_polar_clamped`] instead.
pub fn pixel_to_polar(px: i32, py: i32, center: Point, radius: u32) -> Option<Polar> {
    let dx = (px - center.x) as f64;
    let dy = (py - center.y) as f64;
    let distance = dx.hypot(dy);
    let radius = radius as f64;

    if distance > radius {
        return None;
    }

    Some(Polar {
        angle: normalize_angle(dy.atan2(dx).to_degrees()),
        saturation: (distance / radius).clamp(0.0, 1.0),
    })
}

/// Map a pointer position to disc coordinates, clamping to the rim
///
/// A pointer outside the disc selects the fully saturated color at the
/// same angle.
pub fn pixel_to_polar_clamped(px: i32, py: i32, center: Point, radius: u32) -> Polar {
    let dx = (px - center.x) as f64;
    let dy = (py - center.y) as f64;
    let distance = dx.hypot(dy).min(radius as f64);

    Polar {
        angle: normalize_angle(dy.atan2(dx).to_degrees()),
        saturation: (distance / radius.max(1) as f64).clamp(0.0, 1.0),
    }
}

/// Inverse of [`pixel_to_polar`], used to place the selection marker
pub fn polar_to_pixel(angle_deg: f64, saturation: f64, center: Point, radius: u32) -> Point {
    let theta = normalize_angle(angle_deg).to_radians();
    let distance = saturation.clamp(0.0, 1.0) * radius as f64;
    Point::new(
        center.x + (distance * theta.cos()).round() as i32,
        center.y + (distance * theta.sin()).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    #[test]
    fn test_primaries() {
        assert_eq!(polar_to_rgb(0.0, 1.0, 1.0), Color::RED);
        assert_eq!(polar_to_rgb(120.0, 1.0, 1.0), Color::GREEN);
        assert_eq!(polar_to_rgb(240.0, 1.0, 1.0), Color::BLUE);
        assert_eq!(polar_to_rgb(360.0, 1.0, 1.0), Color::RED);
        assert_eq!(polar_to_rgb(-120.0, 1.0, 1.0), Color::BLUE);
        assert_eq!(polar_to_rgb(42.0, 0.0, 1.0), Color::WHITE);
        assert_eq!(polar_to_rgb(42.0, 1.0, 0.0), Color::BLACK);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 0.25 * 255 = 63.75 -> 64, and 0.5 * 255 = 127.5 -> 128
        assert_eq!(polar_to_rgb(120.0, 1.0, 0.25), Color::new(0, 64, 0));
        assert_eq!(polar_to_rgb(0.0, 0.0, 0.5), Color::new(128, 128, 128));
    }

    #[test]
    fn test_roundtrip_recovers_angle_and_saturation() {
        for step in 0..48 {
            let angle = step as f64 * 7.5;
            for &sat in &[0.25, 0.5, 0.75, 1.0] {
                let color = polar_to_rgb(angle, sat, 1.0);
                let hsv = rgb_to_hsv(color);
                let hue = hsv.hue.expect("chromatic color has a hue");
                assert!(
                    hue_distance(hue, angle) < 2.0,
                    "angle {angle} sat {sat}: got hue {hue}"
                );
                assert!(
                    (hsv.saturation - sat).abs() < 0.01,
                    "angle {angle} sat {sat}: got sat {}",
                    hsv.saturation
                );
                assert_eq!(hsv.value, 1.0);
            }
        }
    }

    #[test]
    fn test_achromatic_hue_is_undefined() {
        assert_eq!(rgb_to_hsv(Color::new(90, 90, 90)).hue, None);
        assert_eq!(rgb_to_hsv(Color::BLACK).hue, None);
        let grey = rgb_to_hsv(Color::new(128, 128, 128)).with_hue_fallback(200.0);
        assert_eq!(grey.hue, 200.0);
        assert_eq!(grey.saturation, 0.0);
    }

    #[test]
    fn test_pixel_to_polar_masks_outside() {
        let center = Point::new(100, 100);
        assert!(pixel_to_polar(100, 100, center, 50).is_some());
        assert!(pixel_to_polar(150, 100, center, 50).is_some());
        assert!(pixel_to_polar(151, 100, center, 50).is_none());
        assert!(pixel_to_polar(136, 136, center, 50).is_none());
    }

    #[test]
    fn test_pixel_to_polar_angles() {
        let center = Point::new(0, 0);
        let east = pixel_to_polar(10, 0, center, 10).unwrap();
        assert_eq!(east.angle, 0.0);
        assert_eq!(east.saturation, 1.0);
        // Screen y grows downward, so "below" is 90 degrees
        let south = pixel_to_polar(0, 5, center, 10).unwrap();
        assert!((south.angle - 90.0).abs() < 1e-9);
        assert!((south.saturation - 0.5).abs() < 1e-9);
        let north = pixel_to_polar(0, -5, center, 10).unwrap();
        assert!((north.angle - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_click_outside_selects_rim() {
        let center = Point::new(50, 50);
        let polar = pixel_to_polar_clamped(50 + 500, 50, center, 40);
        assert_eq!(polar.saturation, 1.0);
        assert_eq!(polar.angle, 0.0);
        assert_eq!(polar_to_rgb(polar.angle, polar.saturation, 1.0), Color::RED);
    }

    #[test]
    fn test_polar_to_pixel_inverts_pixel_to_polar() {
        let center = Point::new(280, 300);
        for &(x, y) in &[(300, 310), (200, 250), (280, 100), (481, 300)] {
            let polar = pixel_to_polar(x, y, center, 250).unwrap();
            let back = polar_to_pixel(polar.angle, polar.saturation, center, 250);
            assert_eq!(back, Point::new(x, y));
        }
    }

    #[test]
    fn test_hex_roundtrip() {
        let c: Color = "#FF8000".parse().unwrap();
        assert_eq!(c, Color::new(255, 128, 0));
        assert_eq!(c.to_hex(), "#FF8000");
        let translucent: Color = "10203040".parse().unwrap();
        assert_eq!(translucent, Color::rgba(0x10, 0x20, 0x30, 0x40));
        assert_eq!(translucent.to_string(), "#10203040");
        assert_eq!(Color::new(255, 128, 0).to_hex_rgba(), "#FF8000FF");
        assert_eq!(translucent.to_hex_rgba(), "#10203040");
        assert!("#12345".parse::<Color>().is_err());
        assert!("#GG0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(Channel::Red.next(), Some(Channel::Green));
        assert_eq!(Channel::Green.next(), Some(Channel::Blue));
        assert_eq!(Channel::Blue.next(), None);
        let c = Color::new(1, 2, 3).with_channel(Channel::Green, 200);
        assert_eq!(c.channel(Channel::Green), 200);
    }
}
