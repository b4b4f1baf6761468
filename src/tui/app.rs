//! TUI application state

use crate::config::PickerConfig;
use crate::tui::canvas;
use colorwheel_engine::{
    Color, EventOutcome, InputEvent, InteractionState, Key, Picker, PointerButton, RgbaSurface,
};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::path::PathBuf;
use tracing::debug;

/// Main application state
pub struct App {
    /// Picker engine: selection, controls, compositor
    pub picker: Picker,
    /// Last composed frame
    pub surface: RgbaSurface,
    /// Frame title
    pub caption: String,
    /// Config file the session was started from
    pub config_path: PathBuf,
    /// Screen area the canvas was last drawn into
    pub canvas_area: Option<Rect>,
    /// Status message (for errors/info)
    pub status_message: Option<String>,
    /// Show help overlay
    pub show_help: bool,
    /// Should quit
    pub should_quit: bool,
    /// Surface is stale and must be recomposed before drawing
    pub needs_frame: bool,
}

impl App {
    /// Create the app from the terminal layout in `config`
    pub fn new(config: &PickerConfig, config_path: PathBuf) -> anyhow::Result<Self> {
        let picker = Picker::new(&config.terminal, config.initial_color, config.bake)?;
        let surface = RgbaSurface::new(picker.layout().width(), picker.layout().height());
        Ok(Self {
            picker,
            surface,
            caption: config.caption.clone(),
            config_path,
            canvas_area: None,
            status_message: None,
            show_help: false,
            should_quit: false,
            needs_frame: true,
        })
    }

    pub fn selection(&self) -> Color {
        self.picker.selection()
    }

    /// Recompose the pixel frame if anything changed since the last one
    pub fn compose(&mut self) {
        if self.needs_frame {
            self.picker.render_frame(&mut self.surface);
            self.needs_frame = false;
        }
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => self.canvas_area = None,
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Help popup swallows keys until closed
        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::F(1)) {
                self.show_help = false;
            }
            return;
        }

        let editing = matches!(
            self.picker.input().state(),
            InteractionState::EditingField(_)
        );
        if !editing {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('?') | KeyCode::F(1) => {
                    self.show_help = true;
                    return;
                }
                _ => {}
            }
        }

        let Some(mapped) = map_key(key.code) else {
            return;
        };
        let outcome = self.dispatch(InputEvent::key(mapped));

        if let (InteractionState::EditingField(channel), Key::Char(c)) =
            (self.picker.input().state(), mapped)
        {
            if !outcome.redraw {
                self.status_message = Some(format!("{channel}: '{c}' rejected, 0-255 only"));
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Help popup covers the canvas
        if self.show_help {
            return;
        }
        let Some(area) = self.canvas_area else {
            return;
        };
        let position = canvas::cell_to_pixel(area, mouse.column, mouse.row);

        let event = match mouse.kind {
            MouseEventKind::Down(button) => InputEvent::PointerDown {
                position,
                button: map_button(button),
            },
            MouseEventKind::Up(button) => InputEvent::PointerUp {
                position,
                button: map_button(button),
            },
            MouseEventKind::Drag(_) | MouseEventKind::Moved => InputEvent::PointerMove { position },
            _ => return,
        };
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: InputEvent) -> EventOutcome {
        let outcome = self.picker.handle_event(event);
        if outcome.color_changed {
            debug!(color = %self.picker.selection(), "Selection changed");
            self.status_message = None;
        }
        self.needs_frame |= outcome.redraw;
        outcome
    }
}

/// Terminal key → engine key
pub fn map_key(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => return None,
    })
}

pub fn map_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}
