//! Public error types for the tally core.
//!
//! The display strings are part of the contract callers present to users
//! and must not change: front ends show them verbatim.

use thiserror::Error;

/// Domain failure from an arithmetic primitive or numeric-input parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Divisor was exactly zero.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// `sqrt` of a negative number.
    #[error("Square root of negative number is not allowed")]
    NegativeSquareRoot,

    /// `factorial` of a negative or non-integer value.
    #[error("Factorial is only defined for non-negative integers")]
    InvalidFactorialInput,

    /// `log`/`log10` of a non-positive value.
    #[error("Logarithm is only defined for positive numbers")]
    InvalidLogarithmInput,

    /// A raw numeric string failed the literal grammar.
    #[error("Invalid number input")]
    InvalidNumberInput,
}

/// Failure from [`crate::engine::evaluate`].
///
/// Displays as `Expression Error: <cause>` so callers can surface a single
/// alert string; the underlying cause stays introspectable through `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Expression Error: {kind}")]
pub struct EngineError {
    pub kind: EngineErrorKind,
}

/// The distinct causes an expression evaluation can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorKind {
    /// A primitive raised a domain error mid-evaluation (e.g. the `/`
    /// operator hit a zero right operand, or a literal failed to parse).
    Math(MathError),

    /// Parenthesis count went negative or did not return to zero.
    MismatchedParentheses,

    /// A character the grammar cannot start from, or input that ended
    /// before a complete expression was parsed (`found` is `None`).
    UnexpectedTrailingInput {
        position: usize,
        found: Option<char>,
    },

    /// The parse succeeded but the numeric result is not finite.
    InvalidExpressionResult,
}

impl core::fmt::Display for EngineErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            EngineErrorKind::Math(cause) => write!(f, "{}", cause),
            EngineErrorKind::MismatchedParentheses => write!(f, "Mismatched parentheses"),
            EngineErrorKind::UnexpectedTrailingInput {
                position,
                found: Some(c),
            } => {
                write!(f, "Unexpected character at position {}: {}", position, c)
            }
            EngineErrorKind::UnexpectedTrailingInput { found: None, .. } => {
                write!(f, "Unexpected end of expression")
            }
            EngineErrorKind::InvalidExpressionResult => write!(f, "Invalid expression result"),
        }
    }
}

impl From<EngineErrorKind> for EngineError {
    fn from(kind: EngineErrorKind) -> Self {
        EngineError { kind }
    }
}

impl From<MathError> for EngineError {
    fn from(cause: MathError) -> Self {
        EngineError {
            kind: EngineErrorKind::Math(cause),
        }
    }
}
