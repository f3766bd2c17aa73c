//! Button components: keypad keys and the tray toggle.

use egui::{vec2, Align2, Color32, CornerRadius, CursorIcon, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{sizing, theme};

/// Visual role of a keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStyle {
    /// Digits, decimal point and sign toggle.
    #[default]
    Digit,
    /// Binary operators; solid when pending.
    Operator,
    /// The `=` key.
    Equals,
    /// The `C` key.
    Clear,
}

impl KeyStyle {
    fn colors(self, selected: bool, hovered: bool) -> (Color32, Color32) {
        match self {
            KeyStyle::Digit => {
                let bg = if hovered { theme::HOVER_BG } else { theme::KEY_BG };
                (bg, theme::TEXT)
            }
            KeyStyle::Operator if selected => (theme::ACCENT, Color32::WHITE),
            KeyStyle::Operator => {
                let bg = if hovered {
                    Color32::from_rgb(219, 234, 254)
                } else {
                    Color32::from_rgb(235, 245, 255)
                };
                (bg, theme::ACCENT)
            }
            KeyStyle::Equals => {
                let bg = if hovered {
                    Color32::from_rgb(37, 99, 235)
                } else {
                    theme::ACCENT
                };
                (bg, Color32::WHITE)
            }
            KeyStyle::Clear => {
                let bg = if hovered {
                    Color32::from_rgb(254, 226, 226)
                } else {
                    Color32::from_rgb(254, 242, 242)
                };
                (bg, theme::DANGER)
            }
        }
    }
}

/// A single keypad key.
pub struct KeyButton<'a> {
    label: &'a str,
    style: KeyStyle,
    selected: bool,
    span: usize,
}

impl<'a> KeyButton<'a> {
    /// Create a new key.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: KeyStyle::default(),
            selected: false,
            span: 1,
        }
    }

    pub fn style(mut self, style: KeyStyle) -> Self {
        self.style = style;
        self
    }

    /// Highlight the key (pending operator).
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Number of grid columns the key covers.
    pub fn span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Size the key occupies.
    pub fn size(&self) -> Vec2 {
        let columns = self.span as f32;
        vec2(
            sizing::KEY * columns + sizing::KEY_GAP * (columns - 1.0),
            sizing::KEY,
        )
    }

    /// Show the key and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(self.size(), Sense::click());

        if ui.is_rect_visible(rect) {
            let (bg_color, text_color) = self.style.colors(self.selected, response.hovered());
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, bg_color);
            if self.style == KeyStyle::Digit {
                ui.painter().rect_stroke(
                    rect,
                    radius,
                    Stroke::new(1.0, theme::BORDER),
                    StrokeKind::Inside,
                );
            }
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(18.0),
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// The tray entry that opens and closes the pop-up.
pub struct TrayButton<'a> {
    label: &'a str,
    open: bool,
}

impl<'a> TrayButton<'a> {
    pub fn new(label: &'a str, open: bool) -> Self {
        Self { label, open }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(13.0);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER,
        );
        let size = vec2(galley.size().x + 20.0, sizing::TRAY_BUTTON);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.open {
                Color32::from_white_alpha(40)
            } else if response.hovered() {
                Color32::from_white_alpha(20)
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                Color32::WHITE,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(if self.open { "Close calculator" } else { "Open calculator" })
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
