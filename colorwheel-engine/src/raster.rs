//! Wheel rasterization and the cached wheel image

use crate::color::{pixel_to_polar, polar_to_rgb, Color};
use crate::geometry::{DiscGeometry, Point};
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Immutable rendering of the disc in its bounding square
///
/// The square has side `2r + 1` with the disc center at local `(r, r)`.
/// Pixels outside the circle are fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelImage {
    pixels: RgbaImage,
}

impl WheelImage {
    /// Side length in pixels
    pub fn side(&self) -> u32 {
        self.pixels.width()
    }

    /// Pixel at local coordinates, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        Some(Color::rgba(r, g, b, a))
    }

    /// Raw RGBA bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Render the disc with a fixed value and alpha
///
/// Pure: the same geometry, value and alpha always produce the same bytes.
pub fn render(disc: &DiscGeometry, fixed_value: f64, fixed_alpha: u8) -> WheelImage {
    let radius = disc.radius();
    let side = radius * 2 + 1;
    let local_center = Point::new(radius as i32, radius as i32);

    let pixels = RgbaImage::from_fn(side, side, |x, y| {
        match pixel_to_polar(x as i32, y as i32, local_center, radius) {
            Some(polar) => {
                let c = polar_to_rgb(polar.angle, polar.saturation, fixed_value);
                Rgba([c.r, c.g, c.b, fixed_alpha])
            }
            None => Rgba([0, 0, 0, 0]),
        }
    });

    WheelImage { pixels }
}

/// Cache key: everything that changes the rendered pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WheelKey {
    pub disc: DiscGeometry,
    /// Baked value in 1/255 steps
    pub value_level: u8,
    pub alpha: u8,
}

impl WheelKey {
    pub fn new(disc: DiscGeometry, value: f64, alpha: u8) -> Self {
        Self {
            disc,
            value_level: (value.clamp(0.0, 1.0) * 255.0).round() as u8,
            alpha,
        }
    }

    pub fn value(&self) -> f64 {
        self.value_level as f64 / 255.0
    }
}

/// Holds the last rendered wheel and rebuilds only when the key changes
#[derive(Debug, Default)]
pub struct WheelCache {
    entry: Option<(WheelKey, WheelImage)>,
    rebuilds: u64,
}

impl WheelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the wheel for `key`, rendering it first if the cache is stale
    pub fn get(&mut self, key: WheelKey) -> &WheelImage {
        if self.entry.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.entry = None;
        }

        let rebuilds = &mut self.rebuilds;
        let (_, image) = self.entry.get_or_insert_with(|| {
            *rebuilds += 1;
            debug!(
                radius = key.disc.radius(),
                value_level = key.value_level,
                alpha = key.alpha,
                rebuilds = *rebuilds,
                "Rebuilding wheel image"
            );
            (key, render(&key.disc, key.value(), key.alpha))
        });
        image
    }

    /// Number of times an image has been rendered
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Key of the cached image, if any
    pub fn key(&self) -> Option<WheelKey> {
        self.entry.as_ref().map(|(key, _)| *key)
    }
}
