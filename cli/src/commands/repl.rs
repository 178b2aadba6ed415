//! The `repl` command - interactive calculator.

use std::time::{SystemTime, UNIX_EPOCH};

use nu_ansi_term::Style;
use reedline::{
    DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal, ValidationResult,
};
use tally_core::{EngineErrorKind, engine, format};

use crate::cli::ReplArgs;
use crate::common::{self, CliResult};
use crate::history::{History, HistoryItem};

/// A `reedline` validator that uses the engine to determine input
/// completeness.
///
/// If parentheses are still open, or the expression ends mid-parse
/// (`2 +`), the REPL waits for more input. Anything else - including a
/// syntax error - is considered complete so evaluation can surface the
/// error instead of trapping the user in continuation mode.
struct CompletenessValidator;

impl reedline::Validator for CompletenessValidator {
    fn validate(&self, input: &str) -> ValidationResult {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.starts_with(':') {
            return ValidationResult::Complete;
        }
        if engine::is_complete(trimmed) {
            return ValidationResult::Complete;
        }

        // Unclosed parentheses can still be closed by further input. An
        // early `)` can never be fixed, so that case falls through.
        let mut open = 0i32;
        for c in trimmed.chars() {
            match c {
                '(' => open += 1,
                ')' => open -= 1,
                _ => {}
            }
            if open < 0 {
                return ValidationResult::Complete;
            }
        }
        if open > 0 {
            return ValidationResult::Incomplete;
        }

        match engine::evaluate(trimmed) {
            Err(e)
                if matches!(
                    e.kind,
                    EngineErrorKind::UnexpectedTrailingInput { found: None, .. }
                ) =>
            {
                ValidationResult::Incomplete
            }
            _ => ValidationResult::Complete,
        }
    }
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let history: Box<dyn reedline::History> = match dirs::config_dir()
        .map(|p| p.join("tally/history"))
        .and_then(|p| FileBackedHistory::with_file(10000, p).ok())
    {
        Some(h) => Box::new(h),
        None => {
            eprintln!("Warning: Could not initialize history file, using in-memory history");
            Box::new(FileBackedHistory::new(1000).unwrap())
        }
    };

    let line_editor = Reedline::create()
        .with_history(history)
        .with_validator(Box::new(CompletenessValidator));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("  ".into()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Wall-clock time of day (UTC), good enough to label a history entry.
fn timestamp_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Run the REPL command.
pub fn run(_args: ReplArgs, no_color: bool) -> CliResult<()> {
    let (mut line_editor, prompt) = setup_reedline();
    let mut history = History::new();

    let dimmed = if no_color {
        Style::new()
    } else {
        Style::new().dimmed()
    };
    println!(
        "Tally. {}",
        dimmed.paint(":history lists recent calculations; Ctrl+D to exit; Ctrl+C to abort entry")
    );

    loop {
        let sig = match line_editor.read_line(&prompt) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Reedline error: {e}");
                return Ok(());
            }
        };

        match sig {
            Signal::Success(buffer) => {
                let line = buffer.trim();
                match line {
                    "" => {}
                    ":history" => print_history(&history, dimmed),
                    ":clear" => history.clear(),
                    ":quit" | ":exit" => {
                        println!("Goodbye!");
                        return Ok(());
                    }
                    _ => match engine::evaluate(line) {
                        Ok(value) => {
                            println!("{}", format::format_number(value));
                            history.record(HistoryItem {
                                expression: engine::format_for_display(line),
                                result: value,
                                timestamp: timestamp_now(),
                            });
                        }
                        Err(e) => common::error::render(&e, no_color),
                    },
                }
            }
            Signal::CtrlD => {
                println!("\nGoodbye!");
                return Ok(());
            }
            Signal::CtrlC => {
                continue;
            }
        }
    }
}

fn print_history(history: &History, dimmed: Style) {
    if history.is_empty() {
        println!("No calculations yet.");
        return;
    }
    for item in history.iter() {
        println!(
            "{}  {} = {}",
            dimmed.paint(&item.timestamp),
            item.expression,
            format::format_number(item.result)
        );
    }
}
