//! Tests for numeric input validation

use super::{is_valid_number, parse_input};
use crate::error::MathError;
use pretty_assertions::assert_eq;

#[test]
fn test_accepts_plain_literals() {
    assert!(is_valid_number("0"));
    assert!(is_valid_number("42"));
    assert!(is_valid_number("3.14"));
    assert!(is_valid_number(".5"));
    assert!(is_valid_number("5."));
    assert!(is_valid_number("-2.5"));
    assert!(is_valid_number("+7"));
}

#[test]
fn test_accepts_exponent_notation() {
    assert!(is_valid_number("1e3"));
    assert!(is_valid_number("1.5E-4"));
    assert!(is_valid_number("2e+10"));
}

#[test]
fn test_rejects_malformed_literals() {
    assert!(!is_valid_number(""));
    assert!(!is_valid_number("."));
    assert!(!is_valid_number("+."));
    assert!(!is_valid_number("1.2.3"));
    assert!(!is_valid_number("1e"));
    assert!(!is_valid_number("e5"));
    assert!(!is_valid_number("1e2.5"));
    assert!(!is_valid_number("12a"));
    assert!(!is_valid_number("--5"));
    assert!(!is_valid_number("2+3"));
}

#[test]
fn test_rejects_overflow() {
    // Parses syntactically but overflows to infinity.
    assert!(!is_valid_number("1e400"));
}

#[test]
fn test_parse_input() {
    assert_eq!(parse_input("2.5").unwrap(), 2.5);
    assert_eq!(parse_input("-4").unwrap(), -4.0);
    assert_eq!(parse_input("1e3").unwrap(), 1000.0);
    assert_eq!(parse_input("abc").unwrap_err(), MathError::InvalidNumberInput);
    assert_eq!(
        parse_input("abc").unwrap_err().to_string(),
        "Invalid number input"
    );
}
