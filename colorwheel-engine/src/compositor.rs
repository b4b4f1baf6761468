//! Per-frame composition
//!
//! Draw order is fixed: background, wheel, marker, track, fields, swatch,
//! labels. The wheel comes from the cache; everything else is cheap and
//! redrawn every frame.

use crate::color::{polar_to_pixel, Channel, Color};
use crate::geometry::{Orientation, Point, Rect};
use crate::raster::{WheelCache, WheelKey};
use crate::reconciler::{ControlFocus, InputReconciler};
use crate::surface::Surface;
use crate::track::ValueTrack;
use serde::{Deserialize, Serialize};
use tracing::trace;

pub const BACKGROUND: Color = Color::BLACK;
pub const MARKER_COLOR: Color = Color::new(200, 200, 200);
pub const ACTIVE_FIELD_FILL: Color = Color::new(100, 100, 100);
pub const OUTLINE_COLOR: Color = Color::WHITE;
pub const TEXT_COLOR: Color = Color::WHITE;

/// Which value is baked into the cached wheel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BakeMode {
    /// Always value 1.0; the wheel never changes
    #[default]
    Fixed,
    /// The selection's current value, so the wheel darkens with the track
    Live,
}

#[derive(Debug, Default)]
pub struct FrameCompositor {
    bake: BakeMode,
    cache: WheelCache,
}

impl FrameCompositor {
    pub fn new(bake: BakeMode) -> Self {
        Self {
            bake,
            cache: WheelCache::new(),
        }
    }

    pub fn bake(&self) -> BakeMode {
        self.bake
    }

    pub fn cache(&self) -> &WheelCache {
        &self.cache
    }

    pub fn render_frame<S: Surface + ?Sized>(&mut self, input: &InputReconciler, surface: &mut S) {
        let layout = input.layout();
        let selection = input.selection();
        let color = selection.color();
        let hsv = selection.hsv();

        surface.clear(BACKGROUND);

        // Wheel
        let disc = layout.disc();
        let baked_value = match self.bake {
            BakeMode::Fixed => 1.0,
            BakeMode::Live => hsv.value,
        };
        let global_alpha = (color.a < 255).then_some(color.a);
        let wheel = self.cache.get(WheelKey::new(*disc, baked_value, 255));
        surface.blit(wheel.as_image(), disc.bounds().origin(), global_alpha);

        // Marker
        let marker = selection.marker_polar();
        let at = polar_to_pixel(marker.angle, marker.saturation, disc.center(), disc.radius());
        surface.draw_circle_outline(at, layout.marker_radius(), layout.marker_width(), MARKER_COLOR);

        // Track
        if let (Some(track), Some(value)) = (layout.track(), input.track_value()) {
            draw_track(surface, track, hsv.hue, hsv.saturation, color, value);
            surface.draw_text(&ValueTrack::readout(value), track.readout_anchor(), TEXT_COLOR);
        }

        // Fields
        for channel in Channel::ALL {
            let rect = layout.field_rect(channel);
            if input.focus() == ControlFocus::Field(channel) {
                surface.fill_rect(rect, ACTIVE_FIELD_FILL);
            }
            surface.stroke_rect(rect, 1, OUTLINE_COLOR);
            surface.draw_text(input.field(channel).text(), rect.center(), TEXT_COLOR);
        }

        // Swatch
        if let Some(swatch) = layout.swatch() {
            surface.fill_rect(swatch, color);
            surface.stroke_rect(swatch, 1, OUTLINE_COLOR);
            let below = Point::new(swatch.center().x, swatch.bottom() + 2);
            surface.draw_text(&color.to_hex(), below, TEXT_COLOR);
        }

        for label in layout.labels() {
            surface.draw_text(&label.text, label.position, label.color);
        }

        trace!(%color, rebuilds = self.cache.rebuilds(), "Frame composed");
    }
}

/// Ramp across the track, then a cursor one pixel wider on each side
fn draw_track<S: Surface + ?Sized>(
    surface: &mut S,
    track: &ValueTrack,
    hue: f64,
    saturation: f64,
    current: Color,
    value: f64,
) {
    let geometry = track.geometry();
    let origin = geometry.axis_origin();
    let length = geometry.length() as i32;
    let thickness = geometry.thickness();
    let cross = geometry.origin();

    let strip = |along: i32, pad: i32| match geometry.orientation() {
        Orientation::Vertical => Rect::new(cross.x - pad, along, thickness + 2 * pad as u32, 1),
        Orientation::Horizontal => Rect::new(along, cross.y - pad, 1, thickness + 2 * pad as u32),
    };

    for (i, c) in track.ramp(hue, saturation, current).into_iter().enumerate() {
        surface.fill_rect(strip(origin + i as i32, 0), c);
    }

    let cursor = track.cursor_at(value).clamp(origin, origin + length - 1);
    surface.fill_rect(strip(cursor, 1), OUTLINE_COLOR);
}
