//! Tests for the arithmetic primitives

use super::*;
use crate::error::MathError;
use pretty_assertions::assert_eq;

#[test]
fn test_basic_operations() {
    assert_eq!(add(2.0, 3.0), 5.0);
    assert_eq!(subtract(2.0, 3.0), -1.0);
    assert_eq!(multiply(4.0, 2.5), 10.0);
    assert_eq!(divide(10.0, 4.0).unwrap(), 2.5);
}

#[test]
fn test_divide_by_zero() {
    let err = divide(5.0, 0.0).unwrap_err();
    assert_eq!(err, MathError::DivisionByZero);
    assert_eq!(err.to_string(), "Division by zero is not allowed");

    // -0.0 compares equal to 0.0 and is rejected too
    assert_eq!(divide(5.0, -0.0).unwrap_err(), MathError::DivisionByZero);
}

#[test]
fn test_multiply_divide_round_trip() {
    let cases = [(3.0, 7.0), (-2.5, 0.125), (1e12, 3.0), (0.1, 0.3)];
    for (a, b) in cases {
        let back = divide(multiply(a, b), b).unwrap();
        assert!(
            (back - a).abs() <= f64::EPSILON * a.abs().max(1.0),
            "divide(multiply({a}, {b}), {b}) = {back}"
        );
    }
}

#[test]
fn test_power() {
    assert_eq!(power(2.0, 10.0), 1024.0);
    assert_eq!(power(4.0, 0.5), 2.0);
    assert_eq!(power(2.0, -1.0), 0.5);
    // Non-finite results are not an error here; the formatter flags them.
    assert!(power(10.0, 1000.0).is_infinite());
}

#[test]
fn test_sqrt() {
    assert_eq!(sqrt(9.0).unwrap(), 3.0);
    assert_eq!(sqrt(0.0).unwrap(), 0.0);
    let err = sqrt(-1.0).unwrap_err();
    assert_eq!(err, MathError::NegativeSquareRoot);
    assert_eq!(err.to_string(), "Square root of negative number is not allowed");
}

#[test]
fn test_square_cube_abs() {
    assert_eq!(square(-3.0), 9.0);
    assert_eq!(cube(-3.0), -27.0);
    assert_eq!(abs(-3.5), 3.5);
    assert_eq!(abs(3.5), 3.5);
}

#[test]
fn test_factorial() {
    assert_eq!(factorial(0.0).unwrap(), 1.0);
    assert_eq!(factorial(1.0).unwrap(), 1.0);
    assert_eq!(factorial(5.0).unwrap(), 120.0);
    assert_eq!(factorial(10.0).unwrap(), 3628800.0);
}

#[test]
fn test_factorial_recurrence() {
    // n! = n * (n-1)! for integers up to the exact-f64 range
    for n in 2..=20 {
        let n = n as f64;
        assert_eq!(factorial(n).unwrap(), n * factorial(n - 1.0).unwrap());
    }
}

#[test]
fn test_factorial_domain() {
    let err = factorial(-1.0).unwrap_err();
    assert_eq!(err, MathError::InvalidFactorialInput);
    assert_eq!(
        err.to_string(),
        "Factorial is only defined for non-negative integers"
    );
    assert_eq!(factorial(2.5).unwrap_err(), MathError::InvalidFactorialInput);
    assert_eq!(
        factorial(f64::NAN).unwrap_err(),
        MathError::InvalidFactorialInput
    );
    assert_eq!(
        factorial(f64::INFINITY).unwrap_err(),
        MathError::InvalidFactorialInput
    );
}

#[test]
fn test_trig() {
    assert_eq!(sin(0.0), 0.0);
    assert_eq!(cos(0.0), 1.0);
    assert!((sin(PI / 2.0) - 1.0).abs() < 1e-15);
    assert!((tan(PI / 4.0) - 1.0).abs() < 1e-15);
}

#[test]
fn test_logarithms() {
    assert_eq!(log(E).unwrap(), 1.0);
    assert_eq!(log10(1000.0).unwrap(), 3.0);
    assert_eq!(log(1.0).unwrap(), 0.0);

    let err = log(0.0).unwrap_err();
    assert_eq!(err, MathError::InvalidLogarithmInput);
    assert_eq!(err.to_string(), "Logarithm is only defined for positive numbers");
    assert_eq!(log(-1.0).unwrap_err(), MathError::InvalidLogarithmInput);
    assert_eq!(log10(0.0).unwrap_err(), MathError::InvalidLogarithmInput);
    assert_eq!(log10(-5.0).unwrap_err(), MathError::InvalidLogarithmInput);
}

#[test]
fn test_exp() {
    assert_eq!(exp(0.0), 1.0);
    assert!((exp(1.0) - E).abs() < 1e-15);
}

#[test]
fn test_constants() {
    assert_eq!(PI, core::f64::consts::PI);
    assert_eq!(E, core::f64::consts::E);
}

#[test]
fn test_round() {
    assert_eq!(round(0.1 + 0.2, 10), 0.3);
    assert_eq!(round(1.23456, 2), 1.23);
    assert_eq!(round(1.0 / 3.0, 4), 0.3333);
    assert_eq!(round(-1.5, 0), -2.0);
}
