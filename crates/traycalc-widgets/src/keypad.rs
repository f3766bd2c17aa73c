//! The keypad grid.

use egui::Ui;
use traycalc_core::{CalcCommand, Operator};

use crate::buttons::{KeyButton, KeyStyle};
use crate::sizing;

/// Keypad rows, top to bottom. Each entry is a command and its column span.
pub const KEYPAD_ROWS: [&[(CalcCommand, usize)]; 5] = [
    &[
        (CalcCommand::Clear, 1),
        (CalcCommand::ToggleSign, 1),
        (CalcCommand::Operator(Operator::Percent), 1),
        (CalcCommand::Operator(Operator::Divide), 1),
    ],
    &[
        (CalcCommand::Digit('7'), 1),
        (CalcCommand::Digit('8'), 1),
        (CalcCommand::Digit('9'), 1),
        (CalcCommand::Operator(Operator::Multiply), 1),
    ],
    &[
        (CalcCommand::Digit('4'), 1),
        (CalcCommand::Digit('5'), 1),
        (CalcCommand::Digit('6'), 1),
        (CalcCommand::Operator(Operator::Subtract), 1),
    ],
    &[
        (CalcCommand::Digit('1'), 1),
        (CalcCommand::Digit('2'), 1),
        (CalcCommand::Digit('3'), 1),
        (CalcCommand::Operator(Operator::Add), 1),
    ],
    &[
        (CalcCommand::Digit('0'), 2),
        (CalcCommand::Decimal, 1),
        (CalcCommand::Equals, 1),
    ],
];

fn key_style(command: CalcCommand) -> KeyStyle {
    match command {
        CalcCommand::Operator(_) => KeyStyle::Operator,
        CalcCommand::Equals => KeyStyle::Equals,
        CalcCommand::Clear => KeyStyle::Clear,
        _ => KeyStyle::Digit,
    }
}

/// Calculator keypad. Highlights the pending operator.
#[derive(Default)]
pub struct Keypad {
    pending: Option<Operator>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(mut self, operator: Option<Operator>) -> Self {
        self.pending = operator;
        self
    }

    /// Show the keypad and return the command of the clicked key.
    pub fn show(self, ui: &mut Ui) -> Option<CalcCommand> {
        let mut pressed = None;
        ui.spacing_mut().item_spacing = egui::vec2(sizing::KEY_GAP, sizing::KEY_GAP);
        for row in KEYPAD_ROWS {
            ui.horizontal(|ui| {
                for &(command, span) in row {
                    let selected = matches!(
                        command,
                        CalcCommand::Operator(op) if Some(op) == self.pending
                    );
                    let label = command.label();
                    let clicked = KeyButton::new(&label)
                        .style(key_style(command))
                        .selected(selected)
                        .span(span)
                        .show(ui);
                    if clicked {
                        pressed = Some(command);
                    }
                }
            });
        }
        pressed
    }
}
