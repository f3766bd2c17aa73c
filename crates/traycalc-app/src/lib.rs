//! Traycalc application
//!
//! The native shell: a window with a tray bar, the calculator pop-up
//! rendered with egui, and winit input routed into the core document.

mod app;
mod host;
mod ui;

pub use app::{App, AppConfig, AppError, CONFIG_ENV, load_tray_config};
pub use host::TrayHost;
pub use ui::{UiAction, UiOutput, render_ui};
