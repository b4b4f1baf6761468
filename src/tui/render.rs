//! TUI rendering logic

use crate::tui::app::App;
use crate::tui::canvas::{rows_for, PixelCanvas};
use colorwheel_engine::{ControlFocus, Surface, TrackMode};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the entire application UI
pub fn render(frame: &mut Frame, app: &mut App) {
    app.compose();

    let canvas_rows = rows_for(app.surface.height()) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(canvas_rows), // Picker canvas
            Constraint::Min(0),              // Slack
            Constraint::Length(3),           // Status bar
        ])
        .split(frame.area());

    render_canvas(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[2]);

    if app.show_help {
        render_help_overlay(frame, app);
    }
}

/// Render the picker pixels inside a titled block
fn render_canvas(frame: &mut Frame, app: &mut App, area: Rect) {
    let width = (app.surface.width() as u16).saturating_add(2).min(area.width);
    let area = Rect { width, ..area };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.caption));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.canvas_area = Some(inner);
    frame.render_widget(PixelCanvas::new(&app.surface), inner);
}

/// Render status bar: state, color readout, key hints
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let input = app.picker.input();
    let color = app.selection();
    let hsv = app.picker.selection_state().hsv();

    let focus = match input.focus() {
        ControlFocus::None => Span::styled("Idle", Style::default().fg(Color::DarkGray)),
        ControlFocus::Disc => Span::styled("Disc", Style::default().fg(Color::Yellow)),
        ControlFocus::Track => Span::styled("Track", Style::default().fg(Color::Yellow)),
        ControlFocus::Field(channel) => Span::styled(
            format!("Edit {}", channel),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let swatch = Span::styled(
        "  ",
        Style::default().bg(Color::Rgb(color.r, color.g, color.b)),
    );

    let alpha = match input.layout().track().map(|t| t.mode()) {
        Some(TrackMode::Alpha) => format!(" a={}", color.a),
        _ => String::new(),
    };

    let help_text = app
        .status_message
        .clone()
        .unwrap_or_else(|| "? help | q quit".to_string());

    let status_line = Line::from(vec![
        Span::raw("["),
        focus,
        Span::raw("] "),
        swatch,
        Span::raw(format!(
            " {} rgba({}, {}, {}, {}) h={:.0} s={:.2} v={:.2}{}",
            color, color.r, color.g, color.b, color.a, hsv.hue, hsv.saturation, hsv.value, alpha
        )),
        Span::raw(" | "),
        Span::styled(help_text, Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let widget = Paragraph::new(status_line);
    frame.render_widget(widget, inner);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Color Picker"),
        Line::from(""),
        Line::from("Mouse        Drag on the wheel or the track"),
        Line::from("Click field  Edit a channel (0-255)"),
        Line::from("Tab          Next field / commit"),
        Line::from("Enter        Commit field"),
        Line::from("Escape       Discard field edit"),
        Line::from("Arrow keys   Nudge track under pointer"),
        Line::from("q            Quit"),
        Line::from("?            Toggle help"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Config: {}", app.config_path.display()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let widget = Paragraph::new(help_text).block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    #[test]
    fn test_render_records_canvas_area() {
        let mut app = App::new(&PickerConfig::default(), PathBuf::from("test.toml")).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        assert_eq!(app.canvas_area, Some(Rect::new(1, 1, 78, 18)));
        assert!(!app.needs_frame);

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "┌");
        // Status bar shows the hex readout of the initial color
        let status: String = (0..100u16).map(|x| buffer[(x, 28)].symbol()).collect();
        assert!(status.contains("#FFFFFF"), "{status}");
    }

    #[test]
    fn test_help_shows_config_path() {
        let mut app = App::new(&PickerConfig::default(), PathBuf::from("picker.toml")).unwrap();
        app.show_help = true;
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = (0..30u16)
            .flat_map(|y| (0..100u16).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(screen.contains("Config: picker.toml"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let mut app = App::new(&PickerConfig::default(), PathBuf::from("test.toml")).unwrap();
        app.status_message = Some("Blue: '7' rejected".to_string());
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let status: String = (0..120u16).map(|x| buffer[(x, 28)].symbol()).collect();
        assert!(status.contains("Blue: '7' rejected"), "{status}");
        assert!(!status.contains("? help"));
    }
}
