//! Error handling utilities for the CLI.

use nu_ansi_term::Color;
use tally_core::EngineError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, EngineError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: EngineError, no_color: bool) -> ! {
    render(&error, no_color);
    std::process::exit(1);
}

/// Render an error to stderr.
pub fn render(error: &EngineError, no_color: bool) {
    if no_color {
        eprintln!("{error}");
    } else {
        eprintln!("{}", Color::Red.paint(error.to_string()));
    }
}
