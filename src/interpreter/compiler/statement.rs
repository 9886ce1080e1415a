use crate::{
    ast::{Node, NodeKind},
    error::SyntaxError,
    interpreter::{
        compiler::{core::CompileResult, syntax::unexpected},
        lexer::{Token, TokenKind},
    },
};

/// What a statement header turned into.
#[derive(Debug)]
pub(in crate::interpreter::compiler) enum Opened {
    /// The statement is complete and needs no expression (`read x`, or an
    /// empty line, which yields no node at all).
    Complete(Option<Node>),
    /// The statement waits for an expression; it becomes the node's last
    /// child once the line ends.
    AwaitingExpression(Node),
}

/// Interprets the tokens at the start of a line.
///
/// Returns the opened statement and how many tokens its header consumed.
/// Headers are:
///
/// ```text
///     x =            assignment, expression follows
///     F [ x ] =      function definition, body expression follows
///     read x <eol>   read statement, complete
///     print          print statement, expression follows
///     <eol>          empty line, complete
/// ```
///
/// # Errors
/// - `ExpectedEquals` when a line starts with a variable not followed by `=`.
/// - `InvalidFunctionDefinition` for a malformed `F[x] =` header.
/// - `InvalidRead` unless `read` is followed by one variable and the line end.
/// - `UnexpectedToken` for anything else at the start of a line.
pub(in crate::interpreter::compiler) fn open_statement(tokens: &[Token],
                                                       start: usize)
                                                       -> CompileResult<(Opened, usize)> {
    let first = &tokens[start];
    let kind_at = |offset: usize| tokens.get(start + offset).map(|t| t.kind);

    match first.kind {
        TokenKind::Variable => {
            if kind_at(1) != Some(TokenKind::Equals) {
                return Err(SyntaxError::ExpectedEquals { name: first.text.clone(),
                                                         line: first.line, });
            }

            let target = Node::leaf(NodeKind::Variable, &first.text, first.line);
            let assignment =
                Node::with_children(NodeKind::Assignment, "", first.line, vec![target]);

            Ok((Opened::AwaitingExpression(assignment), 2))
        },
        TokenKind::Function => {
            let well_formed = kind_at(1) == Some(TokenKind::LBracket)
                              && kind_at(2) == Some(TokenKind::Variable)
                              && kind_at(3) == Some(TokenKind::RBracket)
                              && kind_at(4) == Some(TokenKind::Equals)
                              && kind_at(5).is_some();
            if !well_formed {
                return Err(SyntaxError::InvalidFunctionDefinition { line: first.line });
            }

            let parameter = &tokens[start + 2];
            let definition =
                Node::with_children(NodeKind::FunctionDefinition,
                                    &first.text,
                                    first.line,
                                    vec![Node::leaf(NodeKind::Variable,
                                                    &parameter.text,
                                                    parameter.line)]);

            Ok((Opened::AwaitingExpression(definition), 5))
        },
        TokenKind::Read => {
            if kind_at(1) != Some(TokenKind::Variable) || kind_at(2) != Some(TokenKind::EndOfLine)
            {
                return Err(SyntaxError::InvalidRead { line: first.line });
            }

            let target = &tokens[start + 1];
            let read = Node::with_children(NodeKind::Read,
                                           "",
                                           first.line,
                                           vec![Node::leaf(NodeKind::Variable,
                                                           &target.text,
                                                           target.line)]);

            Ok((Opened::Complete(Some(read)), 3))
        },
        TokenKind::Print => {
            let print = Node::with_children(NodeKind::Print, "", first.line, Vec::new());
            Ok((Opened::AwaitingExpression(print), 1))
        },
        TokenKind::EndOfLine => Ok((Opened::Complete(None), 1)),
        _ => Err(unexpected(first)),
    }
}
