//! Drawing surface capability
//!
//! The engine only ever draws through [`Surface`]. Implementors provide
//! `set_pixel`; everything else has a default built on it. Text is a
//! pass-through: the engine says what and where, the surface decides how
//! (or whether) to render glyphs.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use image::{Rgba, RgbaImage};

/// Source-over composite of `src` onto `dst`
pub fn blend(dst: Color, src: Color) -> Color {
    match src.a {
        255 => return src,
        0 => return dst,
        _ => {}
    }

    let sa = src.a as u32;
    let da = dst.a as u32;
    // Output alpha in 0..=255*255 fixed point
    let out_a = sa * 255 + da * (255 - sa);
    if out_a == 0 {
        return Color::TRANSPARENT;
    }

    let mix = |s: u8, d: u8| -> u8 {
        let num = s as u32 * sa * 255 + d as u32 * da * (255 - sa);
        ((num + out_a / 2) / out_a) as u8
    };

    Color::rgba(
        mix(src.r, dst.r),
        mix(src.g, dst.g),
        mix(src.b, dst.b),
        ((out_a + 127) / 255) as u8,
    )
}

/// Scale an alpha channel by a global opacity
pub fn scale_alpha(alpha: u8, global: u8) -> u8 {
    ((alpha as u32 * global as u32 + 127) / 255) as u8
}

pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Composite one pixel; writes outside the surface are dropped
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Overwrite every pixel
    fn clear(&mut self, color: Color) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        for y in 0..h {
            for x in 0..w {
                self.set_pixel(x, y, color.with_alpha(255));
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Rectangle outline drawn inward from the edge
    fn stroke_rect(&mut self, rect: Rect, width: u32, color: Color) {
        let w = width.min(rect.width / 2 + 1).min(rect.height / 2 + 1) as i32;
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let edge = x < rect.x + w
                    || x >= rect.right() - w
                    || y < rect.y + w
                    || y >= rect.bottom() - w;
                if edge {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Bresenham line, both endpoints included
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.set_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Ring of `width` pixels whose outer edge is `radius` from `center`
    fn draw_circle_outline(&mut self, center: Point, radius: u32, width: u32, color: Color) {
        let outer = radius as f64 + 0.5;
        let inner = radius as f64 - width.max(1) as f64 + 0.5;
        let (outer_sq, inner_sq) = (outer * outer, inner.max(0.0) * inner.max(0.0));
        let r = radius as i32 + 1;

        for dy in -r..=r {
            for dx in -r..=r {
                let d = (dx * dx + dy * dy) as f64;
                let on_ring = d <= outer_sq && (inner <= 0.0 || d > inner_sq);
                if on_ring {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Composite an image with its top-left at `position`
    ///
    /// `global_alpha` multiplies every source pixel's alpha.
    fn blit(&mut self, image: &RgbaImage, position: Point, global_alpha: Option<u8>) {
        for (x, y, Rgba([r, g, b, a])) in image.enumerate_pixels() {
            let a = match global_alpha {
                Some(global) => scale_alpha(*a, global),
                None => *a,
            };
            if a == 0 {
                continue;
            }
            self.set_pixel(
                position.x + x as i32,
                position.y + y as i32,
                Color::rgba(*r, *g, *b, a),
            );
        }
    }

    /// Text centered on `position`. Surfaces without glyphs ignore it.
    fn draw_text(&mut self, _text: &str, _position: Point, _color: Color) {}
}

/// A text request captured by [`RgbaSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub color: Color,
}

/// In-memory surface over an RGBA image
///
/// Text is not rasterized, only recorded, so front ends with their own
/// glyph rendering (a terminal) can overlay it.
#[derive(Debug, Clone)]
pub struct RgbaSurface {
    image: RgbaImage,
    texts: Vec<TextRun>,
}

impl RgbaSurface {
    /// Fully transparent surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            texts: Vec::new(),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|Rgba([r, g, b, a])| Color::rgba(*r, *g, *b, *a))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Text recorded since the last clear
    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }
}

impl Surface for RgbaSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(px) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            let Rgba([r, g, b, a]) = *px;
            let out = blend(Color::rgba(r, g, b, a), color);
            *px = Rgba([out.r, out.g, out.b, out.a]);
        }
    }

    fn clear(&mut self, color: Color) {
        let fill = Rgba([color.r, color.g, color.b, color.a]);
        self.image.pixels_mut().for_each(|px| *px = fill);
        self.texts.clear();
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Color) {
        self.texts.push(TextRun {
            text: text.to_string(),
            position,
            color,
        });
    }
}
