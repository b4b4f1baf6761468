//! Input events consumed by the reconciler
//!
//! Front ends translate their native events (crossterm, a window system,
//! a test script) into these.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A literal typed character
    Char(char),
    Backspace,
    Enter,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown {
        position: Point,
        button: PointerButton,
    },
    PointerUp {
        position: Point,
        button: PointerButton,
    },
    PointerMove {
        position: Point,
    },
    KeyDown {
        key: Key,
    },
}

impl InputEvent {
    /// Primary-button press at `(x, y)`
    pub fn click(x: i32, y: i32) -> Self {
        Self::PointerDown {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    /// Primary-button release at `(x, y)`
    pub fn release(x: i32, y: i32) -> Self {
        Self::PointerUp {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn motion(x: i32, y: i32) -> Self {
        Self::PointerMove {
            position: Point::new(x, y),
        }
    }

    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }
}
