//! The expression engine.
//!
//! Evaluates free-form arithmetic strings with parentheses, implicit
//! multiplication, unary sign, and standard operator precedence. The
//! pipeline runs each stage over the whole input in turn:
//!
//! 1. strip whitespace;
//! 2. validate parenthesis balance;
//! 3. rewrite implicit multiplication (`2(3+4)` -> `2*(3+4)`);
//! 4. parse and evaluate by recursive descent;
//! 5. require a finite result.

mod parser;

use tracing::{debug, trace};

use crate::error::{EngineError, EngineErrorKind};
use parser::Parser;

/// Evaluate an arithmetic expression.
///
/// ```
/// use tally_core::engine::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)(4+5)").unwrap(), 45.0);
/// assert!(evaluate("(2+3").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EngineError> {
    let cleaned = strip_whitespace(expression);

    if !parentheses_balanced(&cleaned) {
        return Err(EngineErrorKind::MismatchedParentheses.into());
    }

    let rewritten = insert_implicit_multiplication(&cleaned);
    debug!(%rewritten, "evaluating expression");

    let value = Parser::new(&rewritten).parse()?;
    trace!(value, "parse complete");

    if !value.is_finite() {
        return Err(EngineErrorKind::InvalidExpressionResult.into());
    }
    Ok(value)
}

/// Whether an expression is ready to evaluate: parentheses balance and the
/// last non-whitespace character is a digit or `)`. Lets callers tell
/// "still typing" apart from "ready" without evaluating.
pub fn is_complete(expression: &str) -> bool {
    let cleaned = strip_whitespace(expression);
    if !parentheses_balanced(&cleaned) {
        return false;
    }
    cleaned
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_digit() || c == ')')
}

/// Echo an expression for display: implicit multiplication made explicit
/// and single spaces inserted around every operator. Never used for
/// evaluation.
pub fn format_for_display(expression: &str) -> String {
    let cleaned = strip_whitespace(expression);
    let rewritten = insert_implicit_multiplication(&cleaned);

    let mut out = String::with_capacity(rewritten.len() * 2);
    for c in rewritten.chars() {
        if matches!(c, '+' | '-' | '*' | '/' | '^') {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out.trim().to_string()
}

fn strip_whitespace(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Scan left to right keeping an open-parenthesis count; the count must
/// never go negative and must end at zero.
fn parentheses_balanced(expression: &str) -> bool {
    let mut open = 0i32;
    for c in expression.chars() {
        match c {
            '(' => open += 1,
            ')' => {
                open -= 1;
                if open < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    open == 0
}

/// Insert an explicit `*` where multiplication is implied: digit before
/// `(`, `)` before `(`, `)` before digit, and two digits separated only by
/// whitespace.
fn insert_implicit_multiplication(expression: &str) -> String {
    let chars: Vec<char> = expression.chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);

        // Collapse a whitespace run between two digits into `*`.
        if c.is_ascii_digit() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j > i + 1 && chars.get(j).is_some_and(|d| d.is_ascii_digit()) {
                out.push('*');
                i = j;
                continue;
            }
        }

        if let Some(&next) = chars.get(i + 1) {
            let implied = (c.is_ascii_digit() && next == '(')
                || (c == ')' && next == '(')
                || (c == ')' && next.is_ascii_digit());
            if implied {
                out.push('*');
            }
        }
        i += 1;
    }
    out
}
