//! Headless frame export
//!
//! Composes one picker frame on an in-memory surface and writes it as PNG.
//! Text is not rasterized, so labels and field values are absent from the
//! image.

use anyhow::Context;
use colorwheel_engine::{BakeMode, Color, InputEvent, LayoutSpec, Picker, Point, RgbaSurface};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::path::Path;
use tracing::{debug, info};

/// What to draw
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub layout: &'a LayoutSpec,
    pub initial: Color,
    pub bake: BakeMode,
    /// Primary clicks replayed before composing, in order
    pub clicks: &'a [Point],
    /// Integer upscaling factor, nearest neighbour
    pub scale: u32,
}

/// Compose a frame and return it with the final selection
pub fn compose(request: &ExportRequest<'_>) -> anyhow::Result<(RgbaImage, Color)> {
    let mut picker = Picker::new(request.layout, request.initial, request.bake)?;

    for click in request.clicks {
        debug!(x = click.x, y = click.y, "Replaying click");
        picker.handle_event(InputEvent::click(click.x, click.y));
        picker.handle_event(InputEvent::release(click.x, click.y));
    }

    let layout = picker.layout();
    let mut surface = RgbaSurface::new(layout.width(), layout.height());
    picker.render_frame(&mut surface);

    let image = match request.scale {
        0 | 1 => surface.into_image(),
        s => {
            let image = surface.into_image();
            imageops::resize(
                &image,
                image.width() * s,
                image.height() * s,
                FilterType::Nearest,
            )
        }
    };
    Ok((image, picker.selection()))
}

/// Compose a frame and write it to `path` as PNG
pub fn write_png(request: &ExportRequest<'_>, path: &Path) -> anyhow::Result<Color> {
    let (image, color) = compose(request)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        %color,
        "Frame exported"
    );
    Ok(color)
}
