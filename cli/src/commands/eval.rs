//! The `eval` command - evaluate an expression and print the result.

use tally_core::{engine, format};
use tracing::debug;

use crate::cli::EvalArgs;
use crate::common::CliResult;

/// Run the eval command.
pub fn run(args: EvalArgs) -> CliResult<()> {
    debug!(expression = %args.expression, "eval");
    let value = engine::evaluate(&args.expression)?;
    let rendered = format::format_number(value);

    if args.echo {
        println!("{} = {}", engine::format_for_display(&args.expression), rendered);
    } else {
        println!("{rendered}");
    }
    Ok(())
}
