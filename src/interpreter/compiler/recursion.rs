use crate::{
    error::SyntaxError,
    interpreter::{
        compiler::core::CompileResult,
        lexer::{Token, TokenKind},
    },
};

/// Rejects function definitions whose body calls the function being defined.
///
/// A function name at the start of a line is a definition; any later
/// occurrence of the same name before the end of that line is a recursive
/// call. Calls between different functions are left to the executor.
///
/// # Errors
/// Returns `RecursiveDefinition` pointing at the first recursive call.
///
/// # Example
/// ```
/// use numscript::interpreter::{compiler::recursion::reject_self_recursion, lexer::tokenize};
///
/// assert!(reject_self_recursion(&tokenize(&["F[x] = G[x] + 1"])).is_ok());
/// assert!(reject_self_recursion(&tokenize(&["F[x] = F[x - 1]"])).is_err());
/// ```
pub fn reject_self_recursion(tokens: &[Token]) -> CompileResult<()> {
    let mut at_line_start = true;

    for (index, token) in tokens.iter().enumerate() {
        if at_line_start && token.kind == TokenKind::Function {
            let body = tokens[index + 1..].iter()
                                          .take_while(|t| t.kind != TokenKind::EndOfLine);

            for call in body {
                if call.kind == TokenKind::Function && call.text == token.text {
                    return Err(SyntaxError::RecursiveDefinition { name:   call.text.clone(),
                                                                  line:   call.line,
                                                                  column: call.column, });
                }
            }
        }

        at_line_start = token.kind == TokenKind::EndOfLine;
    }

    Ok(())
}
