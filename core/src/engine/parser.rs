//! Recursive-descent parser/evaluator for normalized expressions.
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! expression := term (('+' | '-') term)*          left-associative
//! term       := power (('*' | '/') power)*        left-associative
//! power      := primary ('^' primary)*            folded left-to-right
//! primary    := '(' expression ')' | '-' primary | '+' primary | number
//! number     := digit+ ('.' digit+)?
//! ```
//!
//! The cursor advances monotonically; there is no backtracking. Values are
//! computed as the grammar is consumed, so no AST is built.

use crate::error::{EngineError, EngineErrorKind, MathError};
use crate::math;

/// One evaluation pass over a normalized (whitespace-free, implicit-`*`
/// rewritten) expression string.
pub(crate) struct Parser<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Parser<'input> {
    pub(crate) fn new(input: &'input str) -> Self {
        Parser { input, pos: 0 }
    }

    /// Parse the whole input and return its value. Leftover characters
    /// after the top-level expression are an error.
    pub(crate) fn parse(mut self) -> Result<f64, EngineError> {
        let value = self.expression()?;
        if let Some(c) = self.peek() {
            return Err(self.unexpected(Some(c)));
        }
        Ok(value)
    }

    fn expression(&mut self) -> Result<f64, EngineError> {
        let mut left = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.bump();
            let right = self.term()?;
            left = match op {
                '+' => math::add(left, right),
                _ => math::subtract(left, right),
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<f64, EngineError> {
        let mut left = self.power()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.bump();
            let right = self.power()?;
            left = match op {
                '*' => math::multiply(left, right),
                _ => math::divide(left, right)?,
            };
        }
        Ok(left)
    }

    // Each `^` applies immediately to the accumulated value, so the chain
    // folds left-to-right: `2^3^2` is `(2^3)^2 = 64`, not `2^(3^2)`.
    fn power(&mut self) -> Result<f64, EngineError> {
        let mut left = self.primary()?;
        while self.eat('^') {
            let right = self.primary()?;
            left = math::power(left, right);
        }
        Ok(left)
    }

    fn primary(&mut self) -> Result<f64, EngineError> {
        match self.peek() {
            None => Err(self.unexpected(None)),
            Some('(') => {
                self.bump();
                let value = self.expression()?;
                // Balance is validated up front, but a nested close can
                // still be consumed early by a malformed sub-expression.
                if !self.eat(')') {
                    return Err(EngineErrorKind::MismatchedParentheses.into());
                }
                Ok(value)
            }
            Some('-') => {
                self.bump();
                Ok(-self.primary()?)
            }
            Some('+') => {
                self.bump();
                self.primary()
            }
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(c) => Err(self.unexpected(Some(c))),
        }
    }

    /// Scan a numeric literal greedily over digits and `.`, then parse it.
    /// A scan the literal grammar rejects (e.g. `1.2.3`) surfaces as
    /// `InvalidNumberInput`.
    fn number(&mut self) -> Result<f64, EngineError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.bump();
        }
        self.input[start..self.pos]
            .parse::<f64>()
            .map_err(|_| MathError::InvalidNumberInput.into())
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, found: Option<char>) -> EngineError {
        EngineErrorKind::UnexpectedTrailingInput {
            position: self.pos,
            found,
        }
        .into()
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;
