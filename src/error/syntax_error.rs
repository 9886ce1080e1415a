use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while compiling tokens into an AST.
pub enum SyntaxError {
    /// A character the language does not know about.
    #[error("Error on line {line}, column {column}: Unexpected symbol '{symbol}'.")]
    UnexpectedSymbol {
        /// The offending character.
        symbol: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A token that may not follow the one before it.
    #[error("Error on line {line}, column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered, as written in the source.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A line ended where an operand was still required.
    #[error("Error on line {line}: Unexpected end of line.")]
    UnexpectedEndOfLine {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement starting with a variable is not an assignment.
    #[error("Error on line {line}: Expected '=' after variable '{name}'.")]
    ExpectedEquals {
        /// The variable that starts the statement.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The function definition syntax was invalid.
    #[error("Error on line {line}: Invalid function definition syntax. Example: F[x] = x * x")]
    InvalidFunctionDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `read` was not followed by exactly one variable.
    #[error("Error on line {line}: read accepts exactly one variable.")]
    InvalidRead {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A bracket or parenthesis without its partner.
    #[error("Error on line {line}: Mismatched bracket or parenthesis.")]
    MismatchedBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The expression did not reduce to a single value.
    #[error("Error on line {line}: Invalid syntax.")]
    InvalidSyntax {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function definition calls the function it defines.
    #[error("Error on line {line}, column {column}: Recursion is not supported, '{name}' calls itself.")]
    RecursiveDefinition {
        /// The function name.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column of the recursive call.
        column: usize,
    },
}

impl SyntaxError {
    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedSymbol { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfLine { line }
            | Self::ExpectedEquals { line, .. }
            | Self::InvalidFunctionDefinition { line }
            | Self::InvalidRead { line }
            | Self::MismatchedBracket { line }
            | Self::InvalidSyntax { line }
            | Self::RecursiveDefinition { line, .. } => *line,
        }
    }

    /// The source column, for errors tied to a single token.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        match self {
            Self::UnexpectedSymbol { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::RecursiveDefinition { column, .. } => Some(*column),
            _ => None,
        }
    }
}
