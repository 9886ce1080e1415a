use tracing::trace;

use crate::{
    error::SyntaxError,
    interpreter::{
        compiler::core::CompileResult,
        lexer::{Token, TokenKind},
    },
};

/// Tokens that can never directly follow an operand (a variable, a number or
/// a closing bracket): the language has no implicit multiplication.
const NOT_AFTER_OPERAND: [TokenKind; 7] = [TokenKind::Variable,
                                           TokenKind::Function,
                                           TokenKind::LBracket,
                                           TokenKind::LParen,
                                           TokenKind::Number,
                                           TokenKind::Print,
                                           TokenKind::Read];

/// Tokens that may begin a statement, checked after every end of line.
const STATEMENT_START: [TokenKind; 5] = [TokenKind::Variable,
                                         TokenKind::Function,
                                         TokenKind::Print,
                                         TokenKind::Read,
                                         TokenKind::EndOfLine];

/// Validates the token sequence against the adjacency table.
///
/// Every token restricts which token kinds may immediately follow it. The
/// first violation is reported; nothing is built here.
///
/// # Errors
/// - `UnexpectedSymbol` for any [`TokenKind::Undefined`] token.
/// - `UnexpectedToken` when a token is followed by one it does not allow.
/// - `UnexpectedEndOfLine` when a token that needs an operand ends its line.
///
/// # Example
/// ```
/// use numscript::{
///     error::SyntaxError,
///     interpreter::{compiler::syntax::validate, lexer::tokenize},
/// };
///
/// assert!(validate(&tokenize(&["a = 1", "print a * 2"])).is_ok());
///
/// let err = validate(&tokenize(&["a = 1", "b 2 3"])).unwrap_err();
/// assert_eq!(err,
///            SyntaxError::UnexpectedToken { token:  "2".to_string(),
///                                           line:   2,
///                                           column: 3, });
/// ```
pub fn validate(tokens: &[Token]) -> CompileResult<()> {
    for (index, token) in tokens.iter().enumerate() {
        let next = tokens.get(index + 1);
        let starts_line = index == 0 || tokens[index - 1].kind == TokenKind::EndOfLine;

        check_token(token, next, starts_line)?;
    }

    trace!(count = tokens.len(), "token adjacency validated");
    Ok(())
}

fn check_token(token: &Token, next: Option<&Token>, starts_line: bool) -> CompileResult<()> {
    match token.kind {
        TokenKind::Undefined => Err(SyntaxError::UnexpectedSymbol { symbol: token.text.clone(),
                                                                    line:   token.line,
                                                                    column: token.column, }),
        TokenKind::Function => {
            let next = require_next(token, next)?;
            if next.kind == TokenKind::LBracket { Ok(()) } else { Err(unexpected(next)) }
        },
        TokenKind::Variable => match next {
            Some(next) if NOT_AFTER_OPERAND.contains(&next.kind) => Err(unexpected(next)),
            Some(next) if next.kind == TokenKind::Equals && !starts_line => Err(unexpected(next)),
            _ => Ok(()),
        },
        TokenKind::Number | TokenKind::RParen => match next {
            Some(next)
                if NOT_AFTER_OPERAND.contains(&next.kind) || next.kind == TokenKind::Equals =>
            {
                Err(unexpected(next))
            },
            _ => Ok(()),
        },
        // `]=` is how a function definition header ends.
        TokenKind::RBracket => match next {
            Some(next) if NOT_AFTER_OPERAND.contains(&next.kind) => Err(unexpected(next)),
            _ => Ok(()),
        },
        TokenKind::Equals
        | TokenKind::Add
        | TokenKind::Subtract
        | TokenKind::Multiply
        | TokenKind::Divide
        | TokenKind::Modulo
        | TokenKind::LBracket
        | TokenKind::LParen
        | TokenKind::Print => {
            let next = require_next(token, next)?;
            if next.kind.starts_value() { Ok(()) } else { Err(unexpected(next)) }
        },
        TokenKind::Read => {
            let next = require_next(token, next)?;
            if next.kind == TokenKind::Variable { Ok(()) } else { Err(unexpected(next)) }
        },
        TokenKind::EndOfLine => match next {
            Some(next) if !STATEMENT_START.contains(&next.kind) => Err(unexpected(next)),
            _ => Ok(()),
        },
    }
}

/// Returns the following token, or an end-of-line error if there is none.
fn require_next<'a>(token: &Token, next: Option<&'a Token>) -> CompileResult<&'a Token> {
    next.ok_or(SyntaxError::UnexpectedEndOfLine { line: token.line })
}

/// Builds the error for a token that is not allowed where it appears.
pub(in crate::interpreter::compiler) fn unexpected(token: &Token) -> SyntaxError {
    match token.kind {
        TokenKind::EndOfLine => SyntaxError::UnexpectedEndOfLine { line: token.line },
        TokenKind::Undefined => SyntaxError::UnexpectedSymbol { symbol: token.text.clone(),
                                                                line:   token.line,
                                                                column: token.column, },
        _ => SyntaxError::UnexpectedToken { token:  token.text.clone(),
                                            line:   token.line,
                                            column: token.column, },
    }
}
