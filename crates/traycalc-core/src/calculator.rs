//! Four-function calculator state machine.
//!
//! The calculator keeps a raw input buffer, a [`Phase`] describing what the
//! accumulator is doing, and a cached display string. Operations never fail:
//! divide-by-zero and unparsable operands turn into `Infinity`/`NaN`, which
//! keep propagating until [`Calculator::clear`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrayError;
use crate::number::{format_number, parse_number};

/// Binary operators available on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// `a % b` is `b` percent of `a`, i.e. `(a / 100) * b`.
    Percent,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Percent,
    ];

    /// The symbol shown on the display and used as a key name.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Percent => "%",
        }
    }

    /// Map a single-character symbol to an operator.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Percent),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = TrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_symbol(c).ok_or_else(|| TrayError::UnknownOperator(s.to_string()))
            }
            _ => Err(TrayError::UnknownOperator(s.to_string())),
        }
    }
}

/// Apply `operator` to `a` and `b`. Without an operator, `b` is returned.
pub fn apply(a: f64, b: f64, operator: Option<Operator>) -> f64 {
    match operator {
        Some(Operator::Add) => a + b,
        Some(Operator::Subtract) => a - b,
        Some(Operator::Multiply) => a * b,
        Some(Operator::Divide) => a / b,
        Some(Operator::Percent) => (a / 100.0) * b,
        None => b,
    }
}

/// Where the calculator is in a calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing accumulated yet (the accumulator is zero).
    #[default]
    AwaitingFirstOperand,
    /// An operator was chosen and waits for its second operand.
    OperatorPending { operator: Operator, accumulated: f64 },
    /// `=` produced `value`, which stays as the accumulator.
    ResultDisplayed { value: f64 },
}

impl Phase {
    /// The running accumulator.
    pub fn accumulator(&self) -> f64 {
        match *self {
            Phase::AwaitingFirstOperand => 0.0,
            Phase::OperatorPending { accumulated, .. } => accumulated,
            Phase::ResultDisplayed { value } => value,
        }
    }

    /// The pending operator, if any.
    pub fn operator(&self) -> Option<Operator> {
        match *self {
            Phase::OperatorPending { operator, .. } => Some(operator),
            _ => None,
        }
    }
}

/// Calculator state: input buffer, phase and cached display text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculator {
    input: String,
    phase: Phase,
    display: String,
}

impl Calculator {
    /// Create a cleared calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw, unparsed input buffer.
    pub fn current_input(&self) -> &str {
        &self.input
    }

    /// Pending operator symbol, or `""` when none is pending.
    pub fn current_operator(&self) -> &'static str {
        self.phase.operator().map(Operator::symbol).unwrap_or("")
    }

    /// The running accumulator.
    pub fn result(&self) -> f64 {
        self.phase.accumulator()
    }

    /// Text shown on the display.
    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Append a digit to the input buffer.
    ///
    /// Any character is accepted as-is except a second `.`, which would
    /// break the single-decimal-point rule and is dropped.
    pub fn enter_digit(&mut self, digit: char) {
        if digit == '.' && self.input.contains('.') {
            log::trace!("Ignoring second decimal point");
            return;
        }

        if self.phase.operator().is_some() && self.input.is_empty() {
            self.input.push(digit);
            self.display.push(digit);
            return;
        }

        self.input.push(digit);
        if self.display == "0" || self.display == format_number(self.result()) {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Choose the next operator, folding any pending one first.
    pub fn enter_operator(&mut self, operator: Operator) {
        let accumulator = self.result();

        if !self.input.is_empty() || accumulator != 0.0 {
            let accumulated = match self.phase.operator() {
                // Repeated operator press: replace it without re-applying
                Some(_) if self.input.is_empty() => accumulator,
                Some(pending) => apply(accumulator, parse_number(&self.input), Some(pending)),
                None if !self.input.is_empty() => parse_number(&self.input),
                None => accumulator,
            };
            self.input.clear();
            self.phase = Phase::OperatorPending {
                operator,
                accumulated,
            };
            self.display = format!("{} {} ", format_number(accumulated), operator);
            log::debug!("Operator {} pending, accumulator {}", operator, accumulated);
        } else if operator == Operator::Subtract {
            // Start typing a negative number; a pending operator stays pending
            self.input.push('-');
            self.display = self.input.clone();
        } else {
            log::trace!("Operator {} ignored: nothing to operate on", operator);
        }
    }

    /// Apply the pending operator and show the result.
    pub fn enter_equals(&mut self) {
        let pending = self.phase.operator();
        if self.input.is_empty() && pending.is_none() {
            log::trace!("Equals ignored: no input and no pending operator");
            return;
        }

        let accumulator = self.result();
        let second = if self.input.is_empty() {
            accumulator
        } else {
            parse_number(&self.input)
        };
        let value = apply(accumulator, second, pending);

        self.phase = Phase::ResultDisplayed { value };
        self.display = format_number(value);
        self.input.clear();
        log::debug!("Result {}", self.display);
    }

    /// Add a decimal point unless the buffer already has one.
    pub fn enter_decimal(&mut self) {
        if !self.input.contains('.') {
            self.input.push('.');
            self.display = self.input.clone();
        }
    }

    /// Flip the sign of the number being typed.
    pub fn toggle_sign(&mut self) {
        if self.input.is_empty() {
            return;
        }
        if let Some(rest) = self.input.strip_prefix('-') {
            self.input = rest.to_string();
        } else {
            self.input.insert(0, '-');
        }
        self.display = self.input.clone();
    }

    /// Full reset.
    pub fn clear(&mut self) {
        self.input.clear();
        self.phase = Phase::AwaitingFirstOperand;
        self.display.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(calc: &mut Calculator, digits: &str) {
        for digit in digits.chars() {
            calc.enter_digit(digit);
        }
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.result(), 0.0);
        assert_eq!(calc.current_input(), "");
        assert_eq!(calc.current_operator(), "");
        assert_eq!(calc.display_value(), "");
        assert_eq!(Phase::default(), Phase::AwaitingFirstOperand);
        assert_eq!(calc.phase(), Phase::AwaitingFirstOperand);
    }

    #[test]
    fn test_digits_concatenate_on_display() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "1234");
        assert_eq!(calc.current_input(), "1234");
        assert_eq!(calc.display_value(), "1234");
    }

    #[test]
    fn test_leading_zero_replaced_on_display() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "05");
        assert_eq!(calc.display_value(), "5");
        // The buffer keeps the raw keystrokes
        assert_eq!(calc.current_input(), "05");
    }

    #[test]
    fn test_addition_round_trip() {
        let mut calc = Calculator::new();
        calc.enter_digit('5');
        calc.enter_operator(Operator::Add);
        calc.enter_digit('3');
        calc.enter_equals();
        assert_eq!(calc.result(), 8.0);
        assert_eq!(calc.display_value(), "8");
        assert_eq!(calc.current_input(), "");
        assert_eq!(calc.current_operator(), "");
    }

    #[test]
    fn test_operator_display_and_second_operand() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "12");
        calc.enter_operator(Operator::Multiply);
        assert_eq!(calc.display_value(), "12 * ");
        assert_eq!(calc.current_operator(), "*");
        type_digits(&mut calc, "3");
        assert_eq!(calc.display_value(), "12 * 3");
        calc.enter_equals();
        assert_eq!(calc.display_value(), "36");
    }

    #[test]
    fn test_chained_operators_fold() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "2");
        calc.enter_operator(Operator::Add);
        type_digits(&mut calc, "3");
        calc.enter_operator(Operator::Multiply);
        assert_eq!(calc.result(), 5.0);
        assert_eq!(calc.display_value(), "5 * ");
        type_digits(&mut calc, "4");
        calc.enter_equals();
        // Left to right, no precedence
        assert_eq!(calc.result(), 20.0);
    }

    #[test]
    fn test_repeated_operator_does_not_double_apply() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "5");
        calc.enter_operator(Operator::Add);
        calc.enter_operator(Operator::Add);
        assert_eq!(calc.result(), 5.0);
        assert_eq!(calc.display_value(), "5 + ");

        calc.enter_operator(Operator::Multiply);
        assert_eq!(calc.result(), 5.0);
        assert_eq!(calc.current_operator(), "*");
        assert_eq!(calc.display_value(), "5 * ");
    }

    #[test]
    fn test_minus_starts_negative_entry() {
        let mut calc = Calculator::new();
        calc.enter_operator(Operator::Subtract);
        assert_eq!(calc.current_input(), "-");
        assert_eq!(calc.display_value(), "-");
        assert_eq!(calc.current_operator(), "");

        type_digits(&mut calc, "4");
        assert_eq!(calc.display_value(), "-4");
        calc.enter_operator(Operator::Add);
        assert_eq!(calc.result(), -4.0);
    }

    #[test]
    fn test_minus_after_operator_on_zero_negates_operand() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "0");
        calc.enter_operator(Operator::Add);
        calc.enter_operator(Operator::Subtract);
        assert_eq!(calc.current_input(), "-");
        assert_eq!(calc.display_value(), "-");
        assert_eq!(calc.current_operator(), "+");

        type_digits(&mut calc, "5");
        calc.enter_equals();
        assert_eq!(calc.result(), -5.0);
        assert_eq!(calc.display_value(), "-5");
    }

    #[test]
    fn test_minus_after_fold_to_zero_negates_operand() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "3");
        calc.enter_operator(Operator::Subtract);
        type_digits(&mut calc, "3");
        calc.enter_operator(Operator::Multiply);
        calc.enter_operator(Operator::Subtract);
        assert_eq!(calc.current_input(), "-");
        assert_eq!(calc.current_operator(), "*");

        type_digits(&mut calc, "2");
        calc.enter_equals();
        assert_eq!(calc.display_value(), "0");
    }

    #[test]
    fn test_other_operators_ignored_when_empty() {
        let mut calc = Calculator::new();
        calc.enter_operator(Operator::Multiply);
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_percent_of_accumulator() {
        assert_eq!(apply(50.0, 10.0, Some(Operator::Percent)), 5.0);

        let mut calc = Calculator::new();
        type_digits(&mut calc, "200");
        calc.enter_operator(Operator::Percent);
        type_digits(&mut calc, "15");
        calc.enter_equals();
        assert_eq!(calc.result(), 30.0);
    }

    #[test]
    fn test_apply_operators() {
        assert_eq!(apply(6.0, 3.0, Some(Operator::Add)), 9.0);
        assert_eq!(apply(6.0, 3.0, Some(Operator::Subtract)), 3.0);
        assert_eq!(apply(6.0, 3.0, Some(Operator::Multiply)), 18.0);
        assert_eq!(apply(6.0, 3.0, Some(Operator::Divide)), 2.0);
        assert_eq!(apply(6.0, 3.0, None), 3.0);
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "1");
        calc.enter_operator(Operator::Divide);
        type_digits(&mut calc, "0");
        calc.enter_equals();
        assert_eq!(calc.display_value(), "Infinity");

        calc.enter_operator(Operator::Subtract);
        type_digits(&mut calc, "1");
        calc.enter_equals();
        assert_eq!(calc.display_value(), "Infinity");

        calc.clear();
        assert_eq!(calc.result(), 0.0);
    }

    #[test]
    fn test_zero_divided_by_zero_is_nan() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "0");
        calc.enter_operator(Operator::Divide);
        type_digits(&mut calc, "0");
        calc.enter_equals();
        assert_eq!(calc.display_value(), "NaN");
        assert!(calc.result().is_nan());
    }

    #[test]
    fn test_equals_without_input_reuses_accumulator() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "4");
        calc.enter_operator(Operator::Multiply);
        calc.enter_equals();
        assert_eq!(calc.result(), 16.0);
    }

    #[test]
    fn test_equals_ignored_when_idle() {
        let mut calc = Calculator::new();
        calc.enter_equals();
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn test_digit_after_result_replaces_display() {
        let mut calc = Calculator::new();
        calc.enter_digit('5');
        calc.enter_operator(Operator::Add);
        calc.enter_digit('3');
        calc.enter_equals();
        calc.enter_digit('2');
        assert_eq!(calc.display_value(), "2");
        calc.enter_operator(Operator::Add);
        // The typed number replaces the previous result
        assert_eq!(calc.result(), 2.0);
    }

    #[test]
    fn test_operator_after_result_continues() {
        let mut calc = Calculator::new();
        calc.enter_digit('5');
        calc.enter_operator(Operator::Add);
        calc.enter_digit('3');
        calc.enter_equals();
        calc.enter_operator(Operator::Subtract);
        assert_eq!(calc.display_value(), "8 - ");
        calc.enter_digit('1');
        calc.enter_equals();
        assert_eq!(calc.display_value(), "7");
    }

    #[test]
    fn test_decimal_only_once() {
        let mut calc = Calculator::new();
        calc.enter_digit('1');
        calc.enter_decimal();
        calc.enter_decimal();
        calc.enter_digit('5');
        calc.enter_digit('.');
        assert_eq!(calc.current_input(), "1.5");
        assert_eq!(calc.display_value(), "1.5");
    }

    #[test]
    fn test_decimal_shows_buffer() {
        let mut calc = Calculator::new();
        calc.enter_decimal();
        assert_eq!(calc.current_input(), ".");
        assert_eq!(calc.display_value(), ".");
        calc.enter_digit('5');
        calc.enter_operator(Operator::Add);
        assert_eq!(calc.result(), 0.5);
    }

    #[test]
    fn test_toggle_sign() {
        let mut calc = Calculator::new();
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "");

        type_digits(&mut calc, "42");
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "-42");
        assert_eq!(calc.display_value(), "-42");
        calc.toggle_sign();
        assert_eq!(calc.current_input(), "42");
        assert_eq!(calc.display_value(), "42");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "9");
        calc.enter_operator(Operator::Divide);
        type_digits(&mut calc, "3");
        calc.clear();
        assert_eq!(calc.result(), 0.0);
        assert_eq!(calc.current_input(), "");
        assert_eq!(calc.current_operator(), "");
        assert_eq!(calc.display_value(), "");
    }

    #[test]
    fn test_digits_concatenate_after_clear() {
        let mut calc = Calculator::new();
        type_digits(&mut calc, "7");
        calc.enter_operator(Operator::Multiply);
        type_digits(&mut calc, "6");
        calc.enter_equals();
        assert_eq!(calc.display_value(), "42");

        calc.clear();
        type_digits(&mut calc, "315");
        assert_eq!(calc.current_input(), "315");
        assert_eq!(calc.display_value(), "315");
        calc.enter_decimal();
        type_digits(&mut calc, "25");
        assert_eq!(calc.display_value(), "315.25");
    }

    #[test]
    fn test_unparsable_operand_becomes_nan() {
        let mut calc = Calculator::new();
        calc.enter_operator(Operator::Subtract);
        calc.enter_operator(Operator::Add);
        assert!(calc.result().is_nan());
        assert_eq!(calc.display_value(), "NaN + ");
    }

    #[test]
    fn test_operator_from_str() {
        assert_eq!("+".parse::<Operator>().ok(), Some(Operator::Add));
        assert_eq!("%".parse::<Operator>().ok(), Some(Operator::Percent));
        assert!(matches!(
            "^".parse::<Operator>(),
            Err(TrayError::UnknownOperator(op)) if op == "^"
        ));
        assert!("++".parse::<Operator>().is_err());
    }
}
