//! Expression builder
//!
//! [`apply`] is the whole editing model: given the current expression text
//! and one command, it returns the next text. Text always has the shape
//! `numeral ( " op " numeral )*`, apart from the transient states that
//! backspace leaves behind while deleting an operator.

use crate::command::{is_operator_char, Command};
use crate::error::CalcError;
use crate::eval::evaluate;

/// What a command did to the text.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Edited,
    /// A guard rejected the command, or there was nothing to act on.
    Unchanged,
    Evaluated(f64),
    Failed(CalcError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub text: String,
    pub outcome: Outcome,
}

impl Transition {
    fn edited(text: String) -> Self {
        Self { text, outcome: Outcome::Edited }
    }

    fn unchanged(text: &str) -> Self {
        Self { text: text.to_string(), outcome: Outcome::Unchanged }
    }
}

pub fn apply(text: &str, command: Command) -> Transition {
    match command {
        Command::Digit(d) => {
            let mut next = text.to_string();
            next.push(char::from(b'0' + d.min(9)));
            Transition::edited(next)
        }
        Command::DecimalPoint => {
            if current_numeral(text).contains('.') {
                return Transition::unchanged(text);
            }
            Transition::edited(format!("{}.", text))
        }
        Command::Operator(op) => {
            if !accepts_operator(text) {
                return Transition::unchanged(text);
            }
            Transition::edited(format!("{} {} ", text, op.symbol()))
        }
        Command::Equals => {
            if text.is_empty() {
                return Transition::unchanged(text);
            }
            match evaluate(text) {
                Ok(value) => Transition {
                    text: format_result(value),
                    outcome: Outcome::Evaluated(value),
                },
                Err(e) => Transition {
                    text: String::new(),
                    outcome: Outcome::Failed(e),
                },
            }
        }
        Command::Clear => Transition::edited(String::new()),
        Command::Backspace => {
            let mut next = text.to_string();
            if next.pop().is_none() {
                return Transition::unchanged(text);
            }
            Transition::edited(next)
        }
    }
}

/// The numeral being typed: everything after the last operator character.
fn current_numeral(text: &str) -> &str {
    text.rsplit(is_operator_char).next().unwrap_or(text)
}

fn accepts_operator(text: &str) -> bool {
    match text.chars().last() {
        None | Some(' ') => false,
        Some(c) => !is_operator_char(c),
    }
}

/// Render a result so it can be edited and evaluated again.
///
/// Uses the shortest form that parses back to the same value and never
/// switches to exponent notation, so the text stays within what the
/// tokenizer accepts. Integral values have no trailing `.0`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // Drop the sign of -0.
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Operator;

    fn run(text: &str, commands: &[Command]) -> String {
        commands
            .iter()
            .fold(text.to_string(), |acc, cmd| apply(&acc, *cmd).text)
    }

    #[test]
    fn test_digits_append() {
        assert_eq!(run("", &[Command::Digit(1), Command::Digit(2)]), "12");
        assert_eq!(run("5 + ", &[Command::Digit(0)]), "5 + 0");
    }

    #[test]
    fn test_decimal_guard() {
        let t = apply("3.", Command::DecimalPoint);
        assert_eq!(t.text, "3.");
        assert_eq!(t.outcome, Outcome::Unchanged);

        assert_eq!(apply("", Command::DecimalPoint).text, ".");
        assert_eq!(apply("3.5 + 2", Command::DecimalPoint).text, "3.5 + 2.");
        assert_eq!(apply("3.5 + 2.1", Command::DecimalPoint).text, "3.5 + 2.1");
        assert_eq!(apply("-6", Command::DecimalPoint).text, "-6.");
    }

    #[test]
    fn test_operator_guard() {
        let add = Command::Operator(Operator::Add);
        let mul = Command::Operator(Operator::Multiply);

        assert_eq!(apply("5", add).text, "5 + ");
        assert_eq!(apply("5", add).outcome, Outcome::Edited);

        let t = apply("5 + ", mul);
        assert_eq!(t.text, "5 + ");
        assert_eq!(t.outcome, Outcome::Unchanged);

        assert_eq!(apply("", add).text, "");
        assert_eq!(apply("5 ", mul).text, "5 ");
        assert_eq!(apply("5 +", mul).text, "5 +");
        assert_eq!(apply("-", mul).text, "-");
        assert_eq!(apply("3.", mul).text, "3. * ");
    }

    #[test]
    fn test_equals() {
        let t = apply("2 + 3 * 4", Command::Equals);
        assert_eq!(t.text, "14");
        assert_eq!(t.outcome, Outcome::Evaluated(14.0));

        let t = apply("7 / 2", Command::Equals);
        assert_eq!(t.text, "3.5");

        let t = apply("", Command::Equals);
        assert_eq!(t.text, "");
        assert_eq!(t.outcome, Outcome::Unchanged);
    }

    #[test]
    fn test_equals_failure_clears_text() {
        let t = apply("5 / 0", Command::Equals);
        assert_eq!(t.text, "");
        assert_eq!(t.outcome, Outcome::Failed(CalcError::DivisionByZero));

        let t = apply("5 + ", Command::Equals);
        assert_eq!(t.text, "");
        assert_eq!(t.outcome, Outcome::Failed(CalcError::InvalidExpression));
    }

    #[test]
    fn test_chaining_off_result() {
        let add = Command::Operator(Operator::Add);
        let text = run(
            "",
            &[
                Command::Digit(2),
                Command::Operator(Operator::Subtract),
                Command::Digit(8),
                Command::Equals,
                add,
                Command::Digit(1),
                Command::Equals,
            ],
        );
        assert_eq!(text, "-5");
    }

    #[test]
    fn test_clear_and_backspace() {
        assert_eq!(apply("12 + 3", Command::Clear).text, "");
        assert_eq!(apply("", Command::Clear).text, "");

        let t = apply("", Command::Backspace);
        assert_eq!(t.text, "");
        assert_eq!(t.outcome, Outcome::Unchanged);

        assert_eq!(apply("12", Command::Backspace).text, "1");
        // An operator takes three presses to remove.
        assert_eq!(run("5 + ", &[Command::Backspace]), "5 +");
        assert_eq!(
            run("5 + ", &[Command::Backspace, Command::Backspace, Command::Backspace]),
            "5"
        );
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(-4.0), "-4");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(1e20), "100000000000000000000");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_result_text_is_stable() {
        // Feeding a result back in (with a neutral operation) yields the same text.
        for expr in ["2 + 3 * 4", "1 / 3", "0.1 + 0.2", "2 - 8", "123456789 * 1000"] {
            let first = apply(expr, Command::Equals).text;
            let again = apply(&format!("{} + 0", first), Command::Equals).text;
            assert_eq!(first, again, "{}", expr);
            assert_eq!(first.parse::<f64>().ok(), crate::eval::evaluate(expr).ok());
        }
    }
}
