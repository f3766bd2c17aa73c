//! Tray bar and pop-up rendering with egui.

use egui::{Context, Pos2};
use kurbo::Rect;
use traycalc_core::{CalcCommand, CalculatorWidget, CursorStyle};
use traycalc_widgets::sizing;
use traycalc_widgets::{CalcDisplay, Keypad, TrayButton, panel_frame, panel_header, tray_frame};

/// Something the user did in the UI this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ToggleDropdown,
    Press(CalcCommand),
}

/// What the frame produced.
#[derive(Debug, Clone, Default)]
pub struct UiOutput {
    pub action: Option<UiAction>,
    /// Pop-up bounds in logical points, when shown.
    pub panel_rect: Option<Rect>,
}

/// Gap between the tray bar and the pop-up's anchored position.
const PANEL_MARGIN: f32 = 6.0;

/// Render the tray bar and, when open, the calculator pop-up.
pub fn render_ui(ctx: &Context, widget: &CalculatorWidget, tray_height: f32) -> UiOutput {
    let mut output = UiOutput::default();
    let screen = ctx.screen_rect();

    egui::TopBottomPanel::top("tray_bar")
        .exact_height(tray_height)
        .frame(tray_frame())
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if TrayButton::new(widget.title(), widget.panel().visible).show(ui) {
                    output.action = Some(UiAction::ToggleDropdown);
                }
            });
        });

    if !widget.panel().visible {
        return output;
    }

    let panel = widget.panel();
    let anchor = Pos2::new(screen.right() - 240.0, tray_height + PANEL_MARGIN);
    let position = anchor + egui::vec2(panel.position.x as f32, panel.position.y as f32);
    let grabbing = widget.cursor() == CursorStyle::Grabbing;
    let calc = widget.calculator();

    let area = egui::Area::new(egui::Id::new("calculator_panel"))
        .fixed_pos(position)
        .movable(false)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(4.0 * sizing::KEY + 3.0 * sizing::KEY_GAP);
                panel_header(ui, widget.title(), grabbing);
                CalcDisplay::new(calc.display_value()).show(ui);
                ui.add_space(8.0);
                if let Some(command) = Keypad::new().pending(calc.phase().operator()).show(ui) {
                    output.action = Some(UiAction::Press(command));
                }
            });
        });

    let rect = area.response.rect;
    output.panel_rect = Some(Rect::new(
        rect.left() as f64,
        rect.top() as f64,
        rect.right() as f64,
        rect.bottom() as f64,
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use traycalc_core::ListenerRegistry;

    fn run_frame(widget: &CalculatorWidget) -> UiOutput {
        let ctx = egui::Context::default();
        let mut output = UiOutput::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            output = render_ui(ctx, widget, 36.0);
        });
        output
    }

    #[test]
    fn test_closed_panel_has_no_rect() {
        let widget = CalculatorWidget::new();
        let output = run_frame(&widget);
        assert!(output.panel_rect.is_none());
        assert!(output.action.is_none());
    }

    #[test]
    fn test_open_panel_reports_rect() {
        let mut listeners = ListenerRegistry::new();
        let mut widget = CalculatorWidget::new();
        widget.mount(&mut listeners);
        widget.toggle_dropdown(&mut listeners);

        let output = run_frame(&widget);
        let rect = output.panel_rect.expect("panel should be drawn");
        assert!(rect.width() > 0.0);
        assert!(rect.y0 >= 36.0);
    }
}
