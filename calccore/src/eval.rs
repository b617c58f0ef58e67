//! Expression evaluator
//!
//! Works on the space-delimited infix text the builder produces, e.g.
//! `"12.5 * 3 - 4"`. There is no precedence parser: `*` and `/` are folded
//! left to right in a first pass, then `+` and `-` in a second.

use crate::command::Operator;
use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

/// Split expression text into numerals and operators.
///
/// Spaces are skipped without ending a numeral, so `"5 3"` reads as `53`.
/// A `-` directly in front of the very first numeral is taken as its sign,
/// which lets a negative result be used as the start of a new expression.
pub fn tokenize(text: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut num = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' => continue,
            '0'..='9' | '.' => num.push(c),
            '-' if tokens.is_empty()
                && num.is_empty()
                && chars.peek().is_some_and(|n| n.is_ascii_digit() || *n == '.') =>
            {
                num.push(c);
            }
            _ => match Operator::from_char(c) {
                Some(op) => {
                    flush_number(&mut num, &mut tokens)?;
                    tokens.push(Token::Operator(op));
                }
                None => return Err(CalcError::UnexpectedCharacter(c)),
            },
        }
    }
    flush_number(&mut num, &mut tokens)?;

    Ok(tokens)
}

fn flush_number(num: &mut String, tokens: &mut Vec<Token>) -> Result<(), CalcError> {
    if num.is_empty() {
        return Ok(());
    }
    let value = num
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(num.clone()))?;
    tokens.push(Token::Number(value));
    num.clear();
    Ok(())
}

/// Evaluate expression text to a number.
///
/// A well-formed expression is `n` numerals separated by `n - 1`
/// operators with `n >= 2`; anything else is [`CalcError::InvalidExpression`].
pub fn evaluate(text: &str) -> Result<f64, CalcError> {
    let result = tokenize(text).and_then(|tokens| reduce(&tokens));
    match &result {
        Ok(value) => tracing::debug!(expression = text, value, "evaluated"),
        Err(e) => tracing::debug!(expression = text, error = %e, "evaluation failed"),
    }
    result
}

fn reduce(tokens: &[Token]) -> Result<f64, CalcError> {
    if tokens.len() < 3 || tokens.len() % 2 == 0 {
        return Err(CalcError::InvalidExpression);
    }

    // Pass 1: fold * and / into the preceding term as they are met.
    let mut iter = tokens.iter();
    let mut terms = vec![expect_number(iter.next())?];
    let mut additive = Vec::new();
    while let Some(token) = iter.next() {
        let op = match token {
            Token::Operator(op) => *op,
            Token::Number(_) => return Err(CalcError::InvalidExpression),
        };
        let rhs = expect_number(iter.next())?;
        if op.is_multiplicative() {
            let lhs = terms.last_mut().ok_or(CalcError::InvalidExpression)?;
            *lhs = multiply_or_divide(op, *lhs, rhs)?;
        } else {
            additive.push(op);
            terms.push(rhs);
        }
    }

    // Pass 2: + and - over what is left.
    let result = additive
        .iter()
        .zip(&terms[1..])
        .fold(terms[0], |acc, (op, rhs)| match op {
            Operator::Add => acc + rhs,
            _ => acc - rhs,
        });

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::NonFinite)
    }
}

fn expect_number(token: Option<&Token>) -> Result<f64, CalcError> {
    match token {
        Some(Token::Number(n)) => Ok(*n),
        _ => Err(CalcError::InvalidExpression),
    }
}

fn multiply_or_divide(op: Operator, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Multiply => Ok(lhs * rhs),
        _ => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
    }
}
