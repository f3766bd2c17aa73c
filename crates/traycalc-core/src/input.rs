//! Input events delivered to the calculator widget.
//!
//! Host shells translate their native events (winit, DOM, test scripts)
//! into these platform-neutral types before dispatching them.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use winit::keyboard::{Key, NamedKey};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Convert a winit mouse button. Back/forward/other buttons are ignored.
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(MouseButton::Left),
            winit::event::MouseButton::Right => Some(MouseButton::Right),
            winit::event::MouseButton::Middle => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// Pointer event type for unified mouse/touch handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

impl PointerEvent {
    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => *position,
        }
    }
}

/// Keyboard event type. Keys are named the way browsers name them
/// (`"5"`, `"+"`, `"Enter"`, `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Any event a widget can receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    Key(KeyEvent),
    Pointer(PointerEvent),
}

impl UiEvent {
    /// Shorthand for a key press.
    pub fn key(name: impl Into<String>) -> Self {
        UiEvent::Key(KeyEvent::Pressed(name.into()))
    }

    pub fn pointer_down(x: f64, y: f64) -> Self {
        UiEvent::Pointer(PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        })
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        UiEvent::Pointer(PointerEvent::Move {
            position: Point::new(x, y),
        })
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        UiEvent::Pointer(PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        })
    }
}

/// Name a winit logical key the way the keyboard dispatcher expects.
///
/// Returns `None` for keys the calculator never looks at.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_string()),
        Key::Named(NamedKey::Enter) => Some("Enter".to_string()),
        Key::Named(NamedKey::Escape) => Some("Escape".to_string()),
        Key::Named(NamedKey::Backspace) => Some("Backspace".to_string()),
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp".to_string()),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown".to_string()),
        Key::Named(NamedKey::Space) => Some(" ".to_string()),
        Key::Named(NamedKey::Tab) => Some("Tab".to_string()),
        _ => None,
    }
}
