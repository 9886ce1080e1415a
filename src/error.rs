use thiserror::Error;

/// Syntax errors.
///
/// Defines all error types that can occur while validating tokens and building
/// the AST: unknown symbols, tokens in the wrong place, malformed statements
/// and self-recursive function definitions.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution, such as
/// undefined names, invalid numbers, division by zero and overflow.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error produced by running a program, from reading the source file to
/// the last executed statement.
#[derive(Debug, Error)]
pub enum Error {
    /// The source file could not be read.
    #[error("Couldn't open '{path}' for reading: {source}")]
    Io {
        /// The path that failed.
        path:   String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The program was rejected before execution.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Execution stopped at the first failing statement.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
