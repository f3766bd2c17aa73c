//! Keyboard mapping onto calculator operations.

use crate::calculator::{Calculator, Operator};

/// A single calculator operation, whether it came from a key or a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcCommand {
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Decimal,
    ToggleSign,
}

impl CalcCommand {
    /// Run the command against `calc`.
    pub fn apply_to(self, calc: &mut Calculator) {
        match self {
            CalcCommand::Digit(digit) => calc.enter_digit(digit),
            CalcCommand::Operator(operator) => calc.enter_operator(operator),
            CalcCommand::Equals => calc.enter_equals(),
            CalcCommand::Clear => calc.clear(),
            CalcCommand::Decimal => calc.enter_decimal(),
            CalcCommand::ToggleSign => calc.toggle_sign(),
        }
    }

    /// Button caption for the on-screen keypad.
    pub fn label(self) -> String {
        match self {
            CalcCommand::Digit(digit) => digit.to_string(),
            CalcCommand::Operator(Operator::Multiply) => "×".to_string(),
            CalcCommand::Operator(Operator::Divide) => "÷".to_string(),
            CalcCommand::Operator(operator) => operator.symbol().to_string(),
            CalcCommand::Equals => "=".to_string(),
            CalcCommand::Clear => "C".to_string(),
            CalcCommand::Decimal => ".".to_string(),
            CalcCommand::ToggleSign => "±".to_string(),
        }
    }
}

/// Map a key name to the command it triggers, if any.
pub fn dispatch_key(key: &str) -> Option<CalcCommand> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_digit() {
            return Some(CalcCommand::Digit(c));
        }
        if let Some(operator) = Operator::from_symbol(c) {
            return Some(CalcCommand::Operator(operator));
        }
    }

    match key {
        "Enter" | "=" => Some(CalcCommand::Equals),
        "Escape" | "Backspace" => Some(CalcCommand::Clear),
        "." => Some(CalcCommand::Decimal),
        "ArrowUp" => Some(CalcCommand::ToggleSign),
        _ => None,
    }
}

/// A documented key binding.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// All key bindings, for help output.
pub fn key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding {
            keys: "0-9",
            description: "Enter digit",
        },
        KeyBinding {
            keys: "+ - * / %",
            description: "Choose operator",
        },
        KeyBinding {
            keys: "Enter, =",
            description: "Show result",
        },
        KeyBinding {
            keys: "Escape, Backspace",
            description: "Clear everything",
        },
        KeyBinding {
            keys: ".",
            description: "Decimal point",
        },
        KeyBinding {
            keys: "ArrowUp",
            description: "Toggle sign",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, keys: &[&str]) {
        for key in keys {
            if let Some(command) = dispatch_key(key) {
                command.apply_to(calc);
            }
        }
    }

    #[test]
    fn test_digits() {
        for digit in '0'..='9' {
            assert_eq!(dispatch_key(&digit.to_string()), Some(CalcCommand::Digit(digit)));
        }
    }

    #[test]
    fn test_operators() {
        assert_eq!(dispatch_key("+"), Some(CalcCommand::Operator(Operator::Add)));
        assert_eq!(dispatch_key("-"), Some(CalcCommand::Operator(Operator::Subtract)));
        assert_eq!(dispatch_key("*"), Some(CalcCommand::Operator(Operator::Multiply)));
        assert_eq!(dispatch_key("/"), Some(CalcCommand::Operator(Operator::Divide)));
        assert_eq!(dispatch_key("%"), Some(CalcCommand::Operator(Operator::Percent)));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(dispatch_key("Enter"), Some(CalcCommand::Equals));
        assert_eq!(dispatch_key("="), Some(CalcCommand::Equals));
        assert_eq!(dispatch_key("Escape"), Some(CalcCommand::Clear));
        assert_eq!(dispatch_key("Backspace"), Some(CalcCommand::Clear));
        assert_eq!(dispatch_key("."), Some(CalcCommand::Decimal));
        assert_eq!(dispatch_key("ArrowUp"), Some(CalcCommand::ToggleSign));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(dispatch_key(" "), None);
        assert_eq!(dispatch_key("a"), None);
        assert_eq!(dispatch_key("ArrowDown"), None);
        assert_eq!(dispatch_key("Tab"), None);
        assert_eq!(dispatch_key("٣"), None);
        assert_eq!(dispatch_key(""), None);
    }

    #[test]
    fn test_key_stream() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "2", "+", "3", "Enter"]);
        assert_eq!(calc.display_value(), "15");

        press_all(&mut calc, &["Escape", "7", "ArrowUp", "*", "2", "="]);
        assert_eq!(calc.display_value(), "-14");
    }

    #[test]
    fn test_labels() {
        assert_eq!(CalcCommand::Digit('7').label(), "7");
        assert_eq!(CalcCommand::Operator(Operator::Divide).label(), "÷");
        assert_eq!(CalcCommand::ToggleSign.label(), "±");
    }

    #[test]
    fn test_key_bindings_listed() {
        let bindings = key_bindings();
        assert_eq!(bindings.len(), 6);
        assert!(bindings.iter().any(|b| b.keys == "ArrowUp" && b.description == "Toggle sign"));
    }
}
