//! Frames for the pop-up panel and tray bar, and the panel header.

use egui::{vec2, Color32, CornerRadius, CursorIcon, Frame, Margin, Response, Sense, Stroke, Ui};

use crate::{sizing, theme};

/// Create the pop-up panel frame with shadow.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(10))
}

/// Create the tray bar frame.
pub fn tray_frame() -> Frame {
    Frame::new()
        .fill(theme::TRAY_BG)
        .inner_margin(Margin::symmetric(12, 4))
}

/// Panel title strip. Shows a grab or grabbing cursor while hovered.
pub fn panel_header(ui: &mut Ui, title: &str, grabbing: bool) -> Response {
    let size = vec2(ui.available_width(), 22.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

    if ui.is_rect_visible(rect) {
        ui.painter().text(
            egui::Pos2::new(rect.left(), rect.center().y),
            egui::Align2::LEFT_CENTER,
            title,
            egui::FontId::proportional(12.0),
            theme::TEXT_MUTED,
        );
        // Grip dots on the right
        for i in 0..3 {
            let x = rect.right() - 4.0 - i as f32 * 6.0;
            ui.painter()
                .circle_filled(egui::Pos2::new(x, rect.center().y), 1.5, Color32::from_gray(170));
        }
    }

    let cursor = if grabbing {
        CursorIcon::Grabbing
    } else {
        CursorIcon::Grab
    };
    response.on_hover_cursor(cursor)
}
