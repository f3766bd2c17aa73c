//! Tray host: registry, document and the mounted calculator.
//!
//! Window-system events arrive here already converted to points and key
//! names; the host decides which target they are aimed at and forwards
//! them to the core document.

use kurbo::{Point, Rect};
use traycalc_core::{
    CalcCommand, CalculatorWidget, Document, EventTarget, TrayConfig, TrayRegistry, TrayResult,
    UiEvent, WidgetId, register_calculator,
};

/// Owns everything the tray needs between frames.
#[derive(Debug)]
pub struct TrayHost {
    registry: TrayRegistry,
    document: Document,
    calculator: WidgetId,
    /// Panel bounds from the last rendered frame, in logical points.
    panel_rect: Option<Rect>,
}

impl TrayHost {
    /// Register the calculator and mount an instance of it.
    pub fn new(config: &TrayConfig) -> TrayResult<Self> {
        let mut registry = TrayRegistry::new();
        register_calculator(&mut registry, config)?;

        let widget = registry.get(&config.category, &config.item_id)?.instantiate();
        let mut document = Document::new();
        let calculator = document.mount(widget);

        Ok(Self {
            registry,
            document,
            calculator,
            panel_rect: None,
        })
    }

    pub fn registry(&self) -> &TrayRegistry {
        &self.registry
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The mounted calculator, if it has not been torn down.
    pub fn calculator(&self) -> Option<&CalculatorWidget> {
        self.document.widget(self.calculator)
    }

    pub fn calculator_id(&self) -> WidgetId {
        self.calculator
    }

    pub fn toggle_dropdown(&mut self) {
        self.document.toggle_dropdown(self.calculator);
        if !self.is_open() {
            self.panel_rect = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.calculator().is_some_and(|widget| widget.panel().visible)
    }

    /// Keypad click.
    pub fn press(&mut self, command: CalcCommand) {
        if let Some(widget) = self.document.widget_mut(self.calculator) {
            widget.press(command);
        }
    }

    pub fn on_key(&mut self, key: &str) {
        self.document.dispatch(EventTarget::Document, &UiEvent::key(key));
    }

    pub fn on_pointer_down(&mut self, point: Point) {
        let target = self.target_at(point);
        self.document
            .dispatch(target, &UiEvent::pointer_down(point.x, point.y));
    }

    pub fn on_pointer_move(&mut self, point: Point) {
        self.document
            .dispatch(EventTarget::Document, &UiEvent::pointer_move(point.x, point.y));
    }

    pub fn on_pointer_up(&mut self, point: Point) {
        self.document
            .dispatch(EventTarget::Document, &UiEvent::pointer_up(point.x, point.y));
    }

    /// Record where the panel was drawn and run deferred work.
    pub fn after_render(&mut self, panel_rect: Option<Rect>) {
        self.panel_rect = panel_rect;
        self.document.after_render();
    }

    /// Tear the calculator down.
    pub fn shutdown(&mut self) {
        self.document.unmount_all();
        self.panel_rect = None;
        log::info!("Tray host shut down, {} listeners left", self.document.listener_count());
    }

    fn target_at(&self, point: Point) -> EventTarget {
        match self.panel_rect {
            Some(rect) if rect.contains(point) => EventTarget::Panel(self.calculator),
            _ => EventTarget::Document,
        }
    }
}
