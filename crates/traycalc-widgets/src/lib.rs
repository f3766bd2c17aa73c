//! egui components for the tray calculator.
//!
//! - **Buttons**: keypad keys and the tray toggle button
//! - **Display**: the right-aligned result line
//! - **Keypad**: the full button grid, returning the pressed command
//! - **Menu**: panel and tray bar frames, the draggable panel header

pub mod buttons;
pub mod display;
pub mod keypad;
pub mod menu;

pub use buttons::{KeyButton, KeyStyle, TrayButton};
pub use display::{CalcDisplay, display_text};
pub use keypad::{KEYPAD_ROWS, Keypad};
pub use menu::{panel_frame, panel_header, tray_frame};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Keypad key edge length
    pub const KEY: f32 = 44.0;
    /// Gap between keypad keys
    pub const KEY_GAP: f32 = 6.0;
    /// Height of the result line
    pub const DISPLAY_HEIGHT: f32 = 48.0;
    /// Height of the tray toggle button
    pub const TRAY_BUTTON: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Operator and `=` color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Clear key color (red)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(235, 235, 235);
    /// Digit key background
    pub const KEY_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Tray bar background
    pub const TRAY_BG: Color32 = Color32::from_rgb(113, 75, 103);
}
