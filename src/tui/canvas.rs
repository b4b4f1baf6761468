//! Half-block pixel canvas
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one
//! as the foreground of `▀`, the lower one as the background. Text runs
//! recorded by the surface are overlaid afterwards, one character per
//! cell, centered on their anchor.

use colorwheel_engine::{Color, Point, RgbaSurface, Surface};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color as TermColor;
use ratatui::widgets::Widget;

const UPPER_HALF: &str = "▀";

/// Terminal cell → surface pixel (top pixel of the cell)
///
/// Positions outside `area` map to pixels outside the surface, which the
/// picker treats as a press on empty space.
pub fn cell_to_pixel(area: Rect, column: u16, row: u16) -> Point {
    Point::new(
        column as i32 - area.x as i32,
        (row as i32 - area.y as i32) * 2,
    )
}

/// Surface pixel → terminal cell, `None` when it falls outside `area`
pub fn pixel_to_cell(area: Rect, p: Point) -> Option<(u16, u16)> {
    if p.x < 0 || p.y < 0 {
        return None;
    }
    let column = area.x as i32 + p.x;
    let row = area.y as i32 + p.y / 2;
    let inside = column < area.right() as i32 && row < area.bottom() as i32;
    inside.then_some((column as u16, row as u16))
}

/// Cell rows needed to show `height` pixels
pub fn rows_for(height: u32) -> u16 {
    height.div_ceil(2).min(u16::MAX as u32) as u16
}

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}

fn average(a: Color, b: Color) -> Color {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Color::new(mid(a.r, b.r), mid(a.g, b.g), mid(a.b, b.b))
}

pub struct PixelCanvas<'a> {
    surface: &'a RgbaSurface,
}

impl<'a> PixelCanvas<'a> {
    pub fn new(surface: &'a RgbaSurface) -> Self {
        Self { surface }
    }

    fn pixel_or_black(&self, x: u32, y: u32) -> Color {
        self.surface.pixel(x, y).unwrap_or(Color::BLACK)
    }
}

impl Widget for PixelCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = (area.width as u32).min(self.surface.width());
        let rows = (area.height).min(rows_for(self.surface.height()));

        for row in 0..rows {
            for col in 0..columns {
                let x = col;
                let y = row as u32 * 2;
                let top = self.pixel_or_black(x, y);
                let bottom = self.pixel_or_black(x, y + 1);
                if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row)) {
                    cell.set_symbol(UPPER_HALF)
                        .set_fg(term_color(top))
                        .set_bg(term_color(bottom));
                }
            }
        }

        for run in self.surface.texts() {
            let len = run.text.chars().count() as i32;
            let start = run.position.x - len / 2;
            for (i, ch) in run.text.chars().enumerate() {
                let p = Point::new(start + i as i32, run.position.y);
                let Some((column, row)) = pixel_to_cell(area, p) else {
                    continue;
                };
                if p.x as u32 >= self.surface.width() {
                    continue;
                }

                let y = (p.y as u32 / 2) * 2;
                let behind = average(
                    self.pixel_or_black(p.x as u32, y),
                    self.pixel_or_black(p.x as u32, y + 1),
                );
                if let Some(cell) = buf.cell_mut((column, row)) {
                    cell.set_char(ch)
                        .set_fg(term_color(run.color))
                        .set_bg(term_color(behind));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorwheel_engine::Rect as PixelRect;

    #[test]
    fn test_cell_pixel_mapping() {
        let area = Rect::new(2, 3, 10, 5);
        assert_eq!(cell_to_pixel(area, 2, 3), Point::new(0, 0));
        assert_eq!(cell_to_pixel(area, 7, 5), Point::new(5, 4));
        assert_eq!(cell_to_pixel(area, 0, 0), Point::new(-2, -6));

        assert_eq!(pixel_to_cell(area, Point::new(5, 5)), Some((7, 5)));
        assert_eq!(pixel_to_cell(area, Point::new(10, 0)), None);
        assert_eq!(pixel_to_cell(area, Point::new(0, -1)), None);
        assert_eq!(rows_for(35), 18);
    }

    #[test]
    fn test_half_blocks_carry_two_pixels() {
        let mut surface = RgbaSurface::new(4, 4);
        surface.clear(Color::BLACK);
        surface.set_pixel(1, 0, Color::RED);
        surface.set_pixel(1, 1, Color::BLUE);

        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        PixelCanvas::new(&surface).render(area, &mut buf);

        let cell = &buf[(1, 0)];
        assert_eq!(cell.symbol(), UPPER_HALF);
        assert_eq!(cell.fg, TermColor::Rgb(255, 0, 0));
        assert_eq!(cell.bg, TermColor::Rgb(0, 0, 255));
        assert_eq!(buf[(0, 1)].fg, TermColor::Rgb(0, 0, 0));
    }

    #[test]
    fn test_text_is_centered_on_anchor() {
        let mut surface = RgbaSurface::new(10, 4);
        surface.clear(Color::BLACK);
        surface.fill_rect(PixelRect::new(0, 2, 10, 2), Color::new(100, 100, 100));
        surface.draw_text("255", Point::new(5, 3), Color::WHITE);

        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        PixelCanvas::new(&surface).render(area, &mut buf);

        assert_eq!(buf[(4, 1)].symbol(), "2");
        assert_eq!(buf[(5, 1)].symbol(), "5");
        assert_eq!(buf[(6, 1)].symbol(), "5");
        assert_eq!(buf[(4, 1)].fg, TermColor::Rgb(255, 255, 255));
        assert_eq!(buf[(4, 1)].bg, TermColor::Rgb(100, 100, 100));
        assert_eq!(buf[(3, 1)].symbol(), UPPER_HALF);
    }

    #[test]
    fn test_text_off_canvas_is_dropped() {
        let mut surface = RgbaSurface::new(4, 2);
        surface.draw_text("Green", Point::new(0, 0), Color::WHITE);

        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        PixelCanvas::new(&surface).render(area, &mut buf);
        // "Green" starts two columns left of the anchor; only "een" lands
        assert_eq!(buf[(0, 0)].symbol(), "e");
        assert_eq!(buf[(2, 0)].symbol(), "n");
        assert_eq!(buf[(3, 0)].symbol(), UPPER_HALF);
    }
}
