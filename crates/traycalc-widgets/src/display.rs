//! The calculator's result line.

use egui::{vec2, Align2, CornerRadius, Sense, Stroke, StrokeKind, Ui};

use crate::{sizing, theme};

/// Text to draw for a display value; an empty display shows `0`.
pub fn display_text(value: &str) -> &str {
    if value.is_empty() { "0" } else { value }
}

/// Right-aligned, single-line readout.
pub struct CalcDisplay<'a> {
    value: &'a str,
}

impl<'a> CalcDisplay<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }

    pub fn show(self, ui: &mut Ui) {
        let size = vec2(ui.available_width(), sizing::DISPLAY_HEIGHT);
        let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
        if !ui.is_rect_visible(rect) {
            return;
        }

        let radius = CornerRadius::same(sizing::CORNER_RADIUS);
        ui.painter().rect_filled(rect, radius, egui::Color32::WHITE);
        ui.painter()
            .rect_stroke(rect, radius, Stroke::new(1.0, theme::BORDER), StrokeKind::Inside);

        let color = if self.value.is_empty() {
            theme::TEXT_MUTED
        } else {
            theme::TEXT
        };
        // Long results shrink instead of overflowing the panel
        let font_size = if self.value.chars().count() > 14 { 16.0 } else { 24.0 };
        ui.painter().text(
            egui::Pos2::new(rect.right() - 10.0, rect.center().y),
            Align2::RIGHT_CENTER,
            display_text(self.value),
            egui::FontId::monospace(font_size),
            color,
        );
    }
}
