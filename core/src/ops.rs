//! Operation identifiers and display symbols.
//!
//! Callers drive two-operand and single-operand flows by operation id
//! (`"add"`, `"sqrt"`, ...). The set is closed, so it is modeled as an
//! enum and matched exhaustively; unknown ids fall through unchanged when
//! rendering symbols, which is a display fallback and not an error.

/// The fixed, closed set of operations a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Square,
    Cube,
    Factorial,
    Abs,
    Sin,
    Cos,
    Tan,
    Log,
    Log10,
    Exp,
    Pi,
    E,
}

impl Operation {
    /// Look up an operation by its string identifier.
    pub fn from_id(id: &str) -> Option<Operation> {
        match id {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" => Some(Operation::Divide),
            "power" => Some(Operation::Power),
            "sqrt" => Some(Operation::Sqrt),
            "square" => Some(Operation::Square),
            "cube" => Some(Operation::Cube),
            "factorial" => Some(Operation::Factorial),
            "abs" => Some(Operation::Abs),
            "sin" => Some(Operation::Sin),
            "cos" => Some(Operation::Cos),
            "tan" => Some(Operation::Tan),
            "log" => Some(Operation::Log),
            "log10" => Some(Operation::Log10),
            "exp" => Some(Operation::Exp),
            "pi" => Some(Operation::Pi),
            "e" => Some(Operation::E),
            _ => None,
        }
    }

    /// The string identifier for this operation.
    pub fn id(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Square => "square",
            Operation::Cube => "cube",
            Operation::Factorial => "factorial",
            Operation::Abs => "abs",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Tan => "tan",
            Operation::Log => "log",
            Operation::Log10 => "log10",
            Operation::Exp => "exp",
            Operation::Pi => "pi",
            Operation::E => "e",
        }
    }

    /// The display symbol for this operation. Binary operators have
    /// dedicated glyphs; everything else displays as its identifier.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Power => "^",
            other => other.id(),
        }
    }
}

/// Display symbol for an operation id; unrecognized ids pass through
/// unchanged.
pub fn operation_symbol(id: &str) -> &str {
    match Operation::from_id(id) {
        Some(op) => op.symbol(),
        None => id,
    }
}

/// Render a two-operand calculation as `"{first} {symbol} {second}"`, the
/// form callers store in history.
pub fn create_expression(first: f64, operation: &str, second: f64) -> String {
    format!("{first} {} {second}", operation_symbol(operation))
}

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;
