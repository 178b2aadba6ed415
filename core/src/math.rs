//! Arithmetic primitives.
//!
//! Pure functions over `f64` with explicit domain checks.
//!
//! Constants: PI, E
//! Functions: add, subtract, multiply, divide, power, sqrt, square, cube,
//!            factorial, abs, sin, cos, tan, log, log10, exp, round

use crate::error::MathError;

// ============================================================================
// Constants
// ============================================================================

/// The mathematical constant π (pi)
pub const PI: f64 = core::f64::consts::PI;

/// Euler's number e
pub const E: f64 = core::f64::consts::E;

// ============================================================================
// Basic Operations
// ============================================================================

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// Errors:
/// - `DivisionByZero` if `b == 0.0`
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

// ============================================================================
// Exponentiation
// ============================================================================

/// Power function - base^exp, standard `powf` semantics including
/// fractional and negative exponents. Non-finite results surface at the
/// formatting stage rather than here.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Principal square root.
///
/// Errors:
/// - `NegativeSquareRoot` if `n < 0.0`
pub fn sqrt(n: f64) -> Result<f64, MathError> {
    if n < 0.0 {
        return Err(MathError::NegativeSquareRoot);
    }
    Ok(n.sqrt())
}

pub fn square(n: f64) -> f64 {
    n * n
}

pub fn cube(n: f64) -> f64 {
    n * n * n
}

/// Factorial of a non-negative integer value, computed iteratively.
/// `factorial(0.0)` and `factorial(1.0)` are both `1.0`.
///
/// Errors:
/// - `InvalidFactorialInput` if `n` is negative, non-integer, or non-finite
pub fn factorial(n: f64) -> Result<f64, MathError> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(MathError::InvalidFactorialInput);
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

/// Exponential function (e^x)
pub fn exp(n: f64) -> f64 {
    n.exp()
}

// ============================================================================
// Trigonometry (radians)
// ============================================================================

pub fn sin(n: f64) -> f64 {
    n.sin()
}

pub fn cos(n: f64) -> f64 {
    n.cos()
}

pub fn tan(n: f64) -> f64 {
    n.tan()
}

// ============================================================================
// Logarithms
// ============================================================================

/// Natural logarithm (base e).
///
/// Errors:
/// - `InvalidLogarithmInput` if `n <= 0.0`
pub fn log(n: f64) -> Result<f64, MathError> {
    if n <= 0.0 {
        return Err(MathError::InvalidLogarithmInput);
    }
    Ok(n.ln())
}

/// Base-10 logarithm.
///
/// Errors:
/// - `InvalidLogarithmInput` if `n <= 0.0`
pub fn log10(n: f64) -> Result<f64, MathError> {
    if n <= 0.0 {
        return Err(MathError::InvalidLogarithmInput);
    }
    Ok(n.log10())
}

// ============================================================================
// Utilities
// ============================================================================

/// Absolute value
pub fn abs(n: f64) -> f64 {
    n.abs()
}

/// Round `value` to `decimals` decimal places:
/// `(value * 10^decimals).round() / 10^decimals`.
pub fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;
