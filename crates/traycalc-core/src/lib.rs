//! Traycalc Core Library
//!
//! Platform-agnostic state and logic for the tray calculator: the
//! arithmetic state machine, pop-up drag handling, keyboard mapping,
//! listener lifecycle and the tray registry.

pub mod calculator;
pub mod config;
pub mod document;
pub mod drag;
pub mod error;
pub mod input;
pub mod keyboard;
pub mod number;
pub mod registry;
pub mod widget;

pub use calculator::{Calculator, Operator, Phase, apply};
pub use config::TrayConfig;
pub use document::{Document, EventKind, EventTarget, ListenerHandle, ListenerRegistry};
pub use drag::{CursorStyle, DragController, DragSession, translate_css};
pub use error::{TrayError, TrayResult};
pub use input::{KeyEvent, MouseButton, PointerEvent, UiEvent, key_name};
pub use keyboard::{CalcCommand, KeyBinding, dispatch_key, key_bindings};
pub use number::{format_number, parse_number};
pub use registry::{
    CALCULATOR_ITEM_ID, SYSTRAY_CATEGORY, TrayItem, TrayRegistry, register_calculator,
};
pub use widget::{CalculatorWidget, PanelState, WidgetId};
