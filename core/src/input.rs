//! Numeric input validation.
//!
//! Button-driven callers accumulate one numeric literal at a time; these
//! helpers validate and parse that literal before it enters a calculation.

use crate::error::MathError;

/// Whether `input` is a well-formed, finite numeric literal:
/// optional sign, then `digit+ ('.' digit*)?` or `'.' digit+`, then an
/// optional `e`/`E` exponent with its own optional sign.
///
/// Rejects empty input, a lone `.`, multiple decimal points, stray
/// characters, and values that overflow to infinity.
pub fn is_valid_number(input: &str) -> bool {
    let mut chars = input.chars().peekable();

    if matches!(chars.peek(), Some('+' | '-')) {
        chars.next();
    }

    let mut int_digits = 0usize;
    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        chars.next();
        int_digits += 1;
    }

    let mut frac_digits = 0usize;
    if chars.peek() == Some(&'.') {
        chars.next();
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            frac_digits += 1;
        }
        // `.5` is fine, `.` and `+.` are not; `5.` is tolerated.
        if int_digits == 0 && frac_digits == 0 {
            return false;
        }
    } else if int_digits == 0 {
        return false;
    }

    if matches!(chars.peek(), Some('e' | 'E')) {
        chars.next();
        if matches!(chars.peek(), Some('+' | '-')) {
            chars.next();
        }
        let mut exp_digits = 0usize;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            chars.next();
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }

    if chars.next().is_some() {
        return false;
    }

    input.parse::<f64>().is_ok_and(|v| v.is_finite())
}

/// Parse a validated numeric literal.
///
/// Errors:
/// - `InvalidNumberInput` if [`is_valid_number`] rejects the input
pub fn parse_input(input: &str) -> Result<f64, MathError> {
    if !is_valid_number(input) {
        return Err(MathError::InvalidNumberInput);
    }
    input.parse::<f64>().map_err(|_| MathError::InvalidNumberInput)
}

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;
