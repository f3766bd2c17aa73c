//! The calculator tray widget: state machine, pop-up panel and the
//! listeners it holds while mounted.

use std::fmt;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::Calculator;
use crate::config::TrayConfig;
use crate::document::{EventKind, EventTarget, ListenerHandle, ListenerRegistry};
use crate::drag::{CursorStyle, DragController, translate_css};
use crate::input::{KeyEvent, PointerEvent, UiEvent};
use crate::keyboard::{CalcCommand, dispatch_key};

/// Unique identifier of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility and placement of the pop-up panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    pub visible: bool,
    /// Translation from the panel's anchored position.
    pub position: Point,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            visible: false,
            position: Point::ZERO,
        }
    }
}

/// A mounted (or mountable) calculator.
#[derive(Debug)]
pub struct CalculatorWidget {
    id: WidgetId,
    title: String,
    calculator: Calculator,
    drag: DragController,
    panel: PanelState,
    keyboard_listener: Option<ListenerHandle>,
    drag_listeners: Vec<ListenerHandle>,
    /// Drag listeners go on after the next rendering pass.
    attach_pending: bool,
}

impl CalculatorWidget {
    pub fn new() -> Self {
        Self::from_config(&TrayConfig::default())
    }

    pub fn from_config(config: &TrayConfig) -> Self {
        Self {
            id: WidgetId::new(),
            title: config.title.clone(),
            calculator: Calculator::new(),
            drag: DragController::new(),
            panel: PanelState {
                visible: false,
                position: Point::new(config.initial_position.0, config.initial_position.1),
            },
            keyboard_listener: None,
            drag_listeners: Vec::new(),
            attach_pending: false,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Cursor to show over the panel.
    pub fn cursor(&self) -> CursorStyle {
        self.drag.cursor()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// CSS-style translation of the panel.
    pub fn transform_css(&self) -> String {
        translate_css(self.panel.position)
    }

    pub fn is_mounted(&self) -> bool {
        self.keyboard_listener.is_some()
    }

    /// Whether pointer listeners are currently attached.
    pub fn drag_attached(&self) -> bool {
        !self.drag_listeners.is_empty()
    }

    /// Start listening for key presses anywhere in the document.
    pub fn mount(&mut self, listeners: &mut ListenerRegistry) {
        if self.keyboard_listener.is_some() {
            return;
        }
        self.keyboard_listener =
            Some(listeners.add(EventTarget::Document, EventKind::KeyDown, self.id));
        log::info!("Calculator {} mounted", self.id);
    }

    /// Release every listener. Safe to call more than once.
    pub fn unmount(&mut self, listeners: &mut ListenerRegistry) {
        self.detach_drag(listeners);
        self.attach_pending = false;
        if let Some(handle) = self.keyboard_listener.take() {
            listeners.remove(handle);
            log::info!("Calculator {} unmounted", self.id);
        }
    }

    /// Show or hide the pop-up.
    pub fn toggle_dropdown(&mut self, listeners: &mut ListenerRegistry) {
        self.panel.visible = !self.panel.visible;
        if self.panel.visible {
            self.attach_pending = true;
        } else {
            self.attach_pending = false;
            self.detach_drag(listeners);
        }
        log::debug!("Calculator {} panel visible: {}", self.id, self.panel.visible);
    }

    /// Finish work deferred to after a rendering pass.
    pub fn after_render(&mut self, listeners: &mut ListenerRegistry) {
        if !std::mem::take(&mut self.attach_pending) {
            return;
        }
        if self.panel.visible && self.is_mounted() && self.drag_listeners.is_empty() {
            self.drag_listeners = vec![
                listeners.add(EventTarget::Panel(self.id), EventKind::PointerDown, self.id),
                listeners.add(EventTarget::Document, EventKind::PointerMove, self.id),
                listeners.add(EventTarget::Document, EventKind::PointerUp, self.id),
            ];
            log::debug!("Calculator {} drag listeners attached", self.id);
        }
    }

    fn detach_drag(&mut self, listeners: &mut ListenerRegistry) {
        if self.drag_listeners.is_empty() {
            return;
        }
        for handle in self.drag_listeners.drain(..) {
            listeners.remove(handle);
        }
        self.drag.cancel();
        log::debug!("Calculator {} drag listeners detached", self.id);
    }

    /// On-screen button click.
    pub fn press(&mut self, command: CalcCommand) {
        command.apply_to(&mut self.calculator);
    }

    /// React to an event routed by the document.
    ///
    /// Events for listeners the widget does not currently hold are ignored.
    pub fn handle_event(&mut self, target: EventTarget, event: &UiEvent) {
        match event {
            UiEvent::Key(KeyEvent::Pressed(key)) => {
                if !self.is_mounted() {
                    return;
                }
                match dispatch_key(key) {
                    Some(command) => command.apply_to(&mut self.calculator),
                    None => log::trace!("Key '{}' ignored", key),
                }
            }
            UiEvent::Key(KeyEvent::Released(_)) => {}
            UiEvent::Pointer(pointer) => {
                if !self.drag_attached() {
                    return;
                }
                match pointer {
                    PointerEvent::Down { position, .. } => {
                        if target == EventTarget::Panel(self.id) {
                            self.drag.pointer_down(*position, self.panel.position);
                        }
                    }
                    PointerEvent::Move { position } => {
                        if let Some(new_position) = self.drag.pointer_move(*position) {
                            self.panel.position = new_position;
                        }
                    }
                    PointerEvent::Up { .. } => self.drag.pointer_up(),
                }
            }
        }
    }
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new()
    }
}
