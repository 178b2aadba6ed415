//! Tally - a calculator core.
//!
//! # Overview
//!
//! Tally provides the numeric engine behind a calculator front end:
//!
//! - [`math`] - the fixed set of arithmetic and transcendental primitives
//!   with explicit domain checks (division by zero, negative square root,
//!   factorial of a non-integer, logarithm of a non-positive number).
//! - [`engine`] - a recursive-descent evaluator for free-form expression
//!   strings with parentheses, implicit multiplication, unary sign, and
//!   operator precedence.
//! - [`format`] - canonical display rendering of `f64` results, stable
//!   under floating-point noise and magnitude-based notation switching.
//! - [`input`] / [`ops`] - numeric-literal validation and the
//!   operation-id/display-symbol tables used by button-driven callers.
//!
//! The core is synchronous, stateless between calls, and never panics on
//! malformed input: every failure maps to [`MathError`] or [`EngineError`].
//!
//! # Quick Start
//!
//! ```
//! use tally_core::{engine, format};
//!
//! let value = engine::evaluate("2(3+4)").unwrap();
//! assert_eq!(value, 14.0);
//! assert_eq!(format::format_number(value), "14");
//!
//! // Floating-point noise is suppressed at the display boundary.
//! assert_eq!(format::format_number(0.1 + 0.2), "0.3");
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod math;
pub mod ops;

pub use error::{EngineError, EngineErrorKind, MathError};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
