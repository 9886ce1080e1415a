use tracing::debug;

use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        compiler::{
            expression::ExpressionBuilder,
            recursion::reject_self_recursion,
            statement::{Opened, open_statement},
            syntax::validate,
        },
        lexer::{Token, TokenKind},
    },
};

/// Result type used by the compiler.
pub type CompileResult<T> = Result<T, SyntaxError>;

/// Where the compiler is within the current line.
enum Mode<'a> {
    /// Expecting a statement header.
    StatementStart,
    /// Feeding tokens to the shunting-yard builder on behalf of a statement.
    Expression(Node, ExpressionBuilder<'a>),
}

/// Compiles a token sequence into a program tree.
///
/// The tokens are first checked against the adjacency table and for
/// self-recursive definitions. The tree is then built line by line: each line
/// opens a statement, and statements that take an expression collect it with
/// an [`ExpressionBuilder`] until the end of the line.
///
/// The returned root has one child per non-empty line.
///
/// # Errors
/// Returns the first [`SyntaxError`] found, in token order for adjacency
/// problems and in line order for everything else.
///
/// # Example
/// ```
/// use numscript::{
///     ast::NodeKind,
///     interpreter::{compiler::core::compile, lexer::tokenize},
/// };
///
/// let root = compile(&tokenize(&["a = 2", "read b", "print a + b"])).unwrap();
/// let kinds: Vec<_> = root.children.iter().map(|n| n.kind).collect();
///
/// assert_eq!(kinds, [NodeKind::Assignment, NodeKind::Read, NodeKind::Print]);
/// assert_eq!(root.children[2].children[0].kind, NodeKind::Add);
/// ```
pub fn compile(tokens: &[Token]) -> CompileResult<Node> {
    validate(tokens)?;
    reject_self_recursion(tokens)?;

    let mut root = Node::root();
    let mut mode = Mode::StatementStart;
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];

        mode = match mode {
            Mode::StatementStart => {
                let (opened, consumed) = open_statement(tokens, index)?;
                index += consumed;

                match opened {
                    Opened::Complete(statement) => {
                        root.children.extend(statement);
                        Mode::StatementStart
                    },
                    Opened::AwaitingExpression(statement) => {
                        Mode::Expression(statement, ExpressionBuilder::new())
                    },
                }
            },
            Mode::Expression(mut statement, mut builder) => {
                index += 1;

                if token.kind == TokenKind::EndOfLine {
                    statement.children.push(builder.finish(token)?);
                    root.children.push(statement);
                    Mode::StatementStart
                } else {
                    builder.push(token)?;
                    Mode::Expression(statement, builder)
                }
            },
        };
    }

    if let Mode::Expression(statement, _) = mode {
        return Err(SyntaxError::UnexpectedEndOfLine { line: statement.line });
    }

    debug!(statements = root.children.len(), "compiled program");
    Ok(root)
}
