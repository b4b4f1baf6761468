//! Utility command handlers.

use super::CommandResult;
use colorwheel::PickerConfig;
use colorwheel_engine::{polar_to_pixel, Color, Point, SelectionState};
use std::path::Path;

/// Print the HSV reading of a color and where it sits on a unit wheel
pub fn convert(color: Color) -> CommandResult {
    let selection = SelectionState::new(color);
    let hsv = selection.hsv();
    let marker = selection.marker_polar();

    println!("Color:      {}", color.to_hex());
    println!("RGBA:       {} {} {} {}", color.r, color.g, color.b, color.a);
    println!(
        "HSV:        h={:.1} s={:.3} v={:.3}",
        hsv.hue, hsv.saturation, hsv.value
    );
    if color.r == color.g && color.g == color.b {
        println!("            (achromatic, hue is arbitrary)");
    }

    // Offset from the center of a radius-100 wheel
    let p = polar_to_pixel(marker.angle, marker.saturation, Point::new(0, 0), 100);
    println!(
        "Wheel:      angle={:.1} radius={:.3} (dx={}, dy={} at r=100)",
        marker.angle, marker.saturation, p.x, p.y
    );
    Ok(())
}

/// Print the effective config, its path, or write it out
pub fn config(config: &PickerConfig, path: &Path, path_only: bool, init: bool) -> CommandResult {
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if init {
        config.save(path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
