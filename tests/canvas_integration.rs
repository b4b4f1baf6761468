//! Integration tests for the terminal canvas.
//!
//! A picker frame is composed with the terminal layout and drawn into a
//! ratatui buffer; cells are checked against the pixels and text the
//! engine produced.

use colorwheel::engine::{BakeMode, Color, InputEvent, Picker, Point, RgbaSurface};
use colorwheel::tui::canvas::{cell_to_pixel, pixel_to_cell, PixelCanvas};
use colorwheel::PickerConfig;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color as TermColor;
use ratatui::widgets::Widget;

fn terminal_picker(initial: Color) -> (Picker, RgbaSurface) {
    let config = PickerConfig::default();
    let picker = Picker::new(&config.terminal, initial, BakeMode::Fixed).unwrap();
    let surface = RgbaSurface::new(picker.layout().width(), picker.layout().height());
    (picker, surface)
}

fn draw(surface: &RgbaSurface, area: Rect) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, area.right(), area.bottom()));
    PixelCanvas::new(surface).render(area, &mut buf);
    buf
}

fn row_text(buf: &Buffer, row: u16) -> String {
    (0..buf.area.width).map(|x| buf[(x, row)].symbol()).collect()
}

#[test]
fn field_values_and_labels_show_as_text() {
    let (mut picker, mut surface) = terminal_picker(Color::new(12, 200, 7));
    picker.render_frame(&mut surface);

    let area = Rect::new(1, 1, 78, 18);
    let buf = draw(&surface, area);

    // Red field text is centered on pixel (58, 5): cell row 1 + 2
    assert!(row_text(&buf, 3).contains("12"));
    assert!(row_text(&buf, 3).contains("Red"));
    assert!(row_text(&buf, 8).contains("200"));
    assert!(row_text(&buf, 12).contains('7'));
    // Hex readout under the swatch
    assert!(row_text(&buf, 18).contains("#0CC807"));
}

#[test]
fn clicking_a_cell_picks_the_color_under_it() {
    let (mut picker, mut surface) = terminal_picker(Color::WHITE);
    let area = Rect::new(1, 1, 78, 18);

    // Left rim of the disc, pixel (1, 18)
    let p = cell_to_pixel(area, 2, 10);
    assert_eq!(p, Point::new(1, 18));
    picker.handle_event(InputEvent::click(p.x, p.y));
    assert_eq!(picker.selection(), Color::new(0, 255, 255));

    picker.render_frame(&mut surface);
    let buf = draw(&surface, area);
    let (col, row) = pixel_to_cell(area, Point::new(1, 18)).unwrap();
    assert_eq!(buf[(col, row)].fg, TermColor::Rgb(0, 255, 255));
}

#[test]
fn small_area_clips_without_panicking() {
    let (mut picker, mut surface) = terminal_picker(Color::WHITE);
    picker.render_frame(&mut surface);
    let buf = draw(&surface, Rect::new(0, 0, 20, 5));
    assert_eq!(buf.area.width, 20);
}
