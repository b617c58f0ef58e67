//! Command tokens produced by the UI layer
//!
//! Buttons and keys are turned into a [`Command`] once, at the boundary.
//! Everything below this point works on the enum, never on raw labels.

use std::fmt;

/// Label of the backspace button.
pub const BACKSPACE_LABEL: &str = "←";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// `*` and `/` are resolved in the first pass.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn is_operator_char(c: char) -> bool {
    Operator::from_char(c).is_some()
}

/// One unit of user input.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Command {
    /// Always 0..=9; build through [`Command::digit`] when the value is untrusted.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Command {
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Command::Digit(d))
    }

    /// Map a button caption to its command. Blank grid cells map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "." => Some(Command::DecimalPoint),
            "=" => Some(Command::Equals),
            "C" => Some(Command::Clear),
            BACKSPACE_LABEL => Some(Command::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        if let Some(d) = c.to_digit(10) {
                            Some(Command::Digit(d as u8))
                        } else {
                            Operator::from_char(c).map(Command::Operator)
                        }
                    }
                    _ => None,
                }
            }
        }
    }

    /// Map typed text to a command. Enter, Escape and Backspace arrive as
    /// key codes rather than text and are handled by the UI.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Command::Digit(d as u8)),
            '.' => Some(Command::DecimalPoint),
            '=' => Some(Command::Equals),
            'c' | 'C' => Some(Command::Clear),
            _ => Operator::from_char(c).map(Command::Operator),
        }
    }

    /// Button caption for this command.
    pub fn label(&self) -> String {
        match self {
            Command::Digit(d) => d.to_string(),
            Command::DecimalPoint => ".".to_string(),
            Command::Operator(op) => op.symbol().to_string(),
            Command::Equals => "=".to_string(),
            Command::Clear => "C".to_string(),
            Command::Backspace => BACKSPACE_LABEL.to_string(),
        }
    }
}
