//! Number formatting.
//!
//! Converts an `f64` result into the canonical string shown to a user or
//! stored in history: magnitude-based exponential notation, suppression of
//! binary floating-point noise, and no trailing `.0` on integers.

use crate::math;

/// Magnitude above which results switch to exponential notation.
const EXP_UPPER_BOUND: f64 = 1e15;

/// Non-zero magnitude below which results switch to exponential notation.
const EXP_LOWER_BOUND: f64 = 1e-10;

/// Format a result for display.
///
/// - Non-finite values (NaN, ±∞) render as `"Error"`.
/// - `|value| > 1e15` or `0 < |value| < 1e-10` render in exponential
///   notation with six mantissa digits, e.g. `1.000000e+16`.
/// - Everything else is rounded to 10 decimal places and rendered as the
///   shortest round-trippable decimal string.
///
/// ```
/// use tally_core::format::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(1e16), "1.000000e+16");
/// assert_eq!(format_number(f64::NAN), "Error");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }

    if value.abs() > EXP_UPPER_BOUND || (value != 0.0 && value.abs() < EXP_LOWER_BOUND) {
        return to_exponential(value, 6);
    }

    let rounded = math::round(value, 10);
    if rounded == 0.0 {
        // Avoid rendering negative zero as "-0".
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Exponential notation with `digits` mantissa digits and an explicit
/// exponent sign: `1.000000e+16`, `-2.500000e-11`.
fn to_exponential(value: f64, digits: usize) -> String {
    let formatted = format!("{value:.digits$e}");
    // Rust's `LowerExp` omits the `+` on non-negative exponents.
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
