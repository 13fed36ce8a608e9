//! Four-function calculator engine.
//!
//! Models a pocket calculator: digits build the display, an operator stores
//! the displayed value and waits for the next operand, and `=` folds the two
//! together. Chained operators apply immediately, left to right, without
//! precedence (`2 + 3 × 4 =` is `20`).

use std::fmt;
use tracing::debug;

/// Arithmetic action awaiting its right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Map a typed key to an operator. `*`, `x` and `/` stand in for the
    /// symbols a keyboard does not have.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// IEEE arithmetic. Division by zero is not guarded and yields an
    /// infinite or NaN value.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Render a result for the display.
///
/// Finite values use the shortest decimal form that round-trips; negative
/// zero shows as `0`. Non-finite values are spelled out so they parse back
/// as operands.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    previous_value: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_new_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            pending_operator: None,
            awaiting_new_operand: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// The half-finished expression shown above the display, e.g. `12 ×`.
    pub fn pending_expression(&self) -> Option<String> {
        match (self.previous_value, self.pending_operator) {
            (Some(prev), Some(op)) => Some(format!("{} {}", format_number(prev), op)),
            _ => None,
        }
    }

    /// Digits above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let c = char::from(b'0' + digit);
        if self.awaiting_new_operand {
            self.display = c.to_string();
            self.awaiting_new_operand = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    pub fn input_decimal_point(&mut self) {
        if self.awaiting_new_operand {
            self.display = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn set_operator(&mut self, op: Operator) {
        let input = self.current_value();
        match (self.previous_value, self.pending_operator) {
            (Some(prev), Some(pending)) => {
                let result = pending.apply(prev, input);
                debug!(%pending, prev, input, result, "chained operator applied");
                self.display = format_number(result);
                self.previous_value = Some(result);
            }
            (None, _) => self.previous_value = Some(input),
            (Some(_), None) => {}
        }
        self.pending_operator = Some(op);
        self.awaiting_new_operand = true;
    }

    /// The `=` key. Does nothing unless an operand and operator are pending.
    pub fn evaluate(&mut self) {
        let (Some(prev), Some(op)) = (self.previous_value, self.pending_operator) else {
            return;
        };
        let input = self.current_value();
        let result = op.apply(prev, input);
        debug!(%op, prev, input, result, "evaluated");
        self.display = format_number(result);
        self.previous_value = None;
        self.pending_operator = None;
        self.awaiting_new_operand = true;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn current_value(&self) -> f64 {
        // "Infinity" and "NaN" parse back, and "0." is a valid literal.
        self.display.parse().unwrap_or(f64::NAN)
    }
}
