use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while executing a program.
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned or read.
    #[error("Error on line {line}: Use of undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that has not been defined (yet).
    #[error("Error on line {line}: Function '{name}' is not defined.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to define a function that already exists.
    #[error("Error on line {line}: Function '{name}' is already defined.")]
    DuplicateFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal or an input token that is not a valid 64-bit integer.
    #[error("Error on line {line}: Invalid number '{text}'.")]
    InvalidNumber {
        /// The text that failed to parse.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `read` found no more input.
    #[error("Error on line {line}: Unexpected end of input while reading '{name}'.")]
    EndOfInput {
        /// The variable being read.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call would re-enter a function whose body is still being evaluated.
    #[error("Error on line {line}: Recursion is not supported, '{name}' is already running.")]
    RecursiveCall {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A hand-built tree broke the arity rules of its node kinds.
    #[error("Error on line {line}: Malformed program tree.")]
    MalformedTree {
        /// The source line of the offending node.
        line: usize,
    },
    /// Reading input or writing output failed.
    #[error("Error on line {line}: I/O failure: {source}")]
    Io {
        /// The underlying error.
        #[source]
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::UndefinedFunction { line, .. }
            | Self::DuplicateFunction { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::EndOfInput { line, .. }
            | Self::RecursiveCall { line, .. }
            | Self::MalformedTree { line }
            | Self::Io { line, .. } => *line,
        }
    }
}
