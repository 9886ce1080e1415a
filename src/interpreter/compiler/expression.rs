use crate::{
    ast::{Node, NodeKind},
    error::SyntaxError,
    interpreter::{
        compiler::{core::CompileResult, syntax::unexpected},
        lexer::{Token, TokenKind},
    },
};

/// Returns the binding tightness of an operator token; lower binds tighter.
///
/// Function calls are prefix operators and bind tightest. Brackets only ever
/// sit on the operator stack as markers and get the loosest value.
///
/// # Example
/// ```
/// use numscript::interpreter::{compiler::expression::precedence, lexer::TokenKind};
///
/// assert!(precedence(TokenKind::Function) < precedence(TokenKind::Multiply));
/// assert!(precedence(TokenKind::Multiply) < precedence(TokenKind::Add));
/// assert_eq!(precedence(TokenKind::Divide), precedence(TokenKind::Modulo));
/// ```
#[must_use]
pub const fn precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Function => 0,
        TokenKind::Multiply | TokenKind::Divide | TokenKind::Modulo => 1,
        TokenKind::Add | TokenKind::Subtract => 2,
        _ => 3,
    }
}

/// Maps an operator token to the AST node it reduces to.
const fn operator_node_kind(kind: TokenKind) -> Option<NodeKind> {
    match kind {
        TokenKind::Function => Some(NodeKind::FunctionCall),
        TokenKind::Add => Some(NodeKind::Add),
        TokenKind::Subtract => Some(NodeKind::Subtract),
        TokenKind::Multiply => Some(NodeKind::Multiply),
        TokenKind::Divide => Some(NodeKind::Divide),
        TokenKind::Modulo => Some(NodeKind::Modulo),
        _ => None,
    }
}

const fn is_open_marker(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::LParen | TokenKind::LBracket)
}

/// Builds one expression tree directly from infix tokens with the
/// shunting-yard algorithm.
///
/// Operands go straight to the output stack. Operators wait on the operator
/// stack until an operator of looser or equal precedence, a closing bracket
/// or the end of the line forces them out; each reduction pops its operands
/// from the output stack and pushes the combined node back. Reducing on equal
/// precedence makes every binary operator left-associative.
///
/// # Example
/// ```
/// use numscript::{
///     ast::NodeKind,
///     interpreter::{compiler::expression::ExpressionBuilder, lexer::tokenize},
/// };
///
/// let tokens = tokenize(&["10 - 3 - 2"]);
/// let mut builder = ExpressionBuilder::new();
/// for token in &tokens[..tokens.len() - 1] {
///     builder.push(token).unwrap();
/// }
/// let tree = builder.finish(&tokens[tokens.len() - 1]).unwrap();
///
/// // (10 - 3) - 2
/// assert_eq!(tree.kind, NodeKind::Subtract);
/// assert_eq!(tree.children[0].kind, NodeKind::Subtract);
/// assert_eq!(tree.children[1].text, "2");
/// ```
#[derive(Debug, Default)]
pub struct ExpressionBuilder<'a> {
    output:    Vec<Node>,
    operators: Vec<&'a Token>,
}

impl<'a> ExpressionBuilder<'a> {
    /// Creates a builder with empty stacks.
    #[must_use]
    pub const fn new() -> Self {
        Self { output:    Vec::new(),
               operators: Vec::new(), }
    }

    /// Feeds the next token of the expression.
    ///
    /// # Errors
    /// - `MismatchedBracket` when a closing bracket has no matching opener.
    /// - `InvalidSyntax` when an operator is missing an operand.
    /// - `UnexpectedToken` for tokens that cannot appear inside an expression.
    pub fn push(&mut self, token: &'a Token) -> CompileResult<()> {
        match token.kind {
            TokenKind::Variable => {
                self.output.push(Node::leaf(NodeKind::Variable, &token.text, token.line));
            },
            TokenKind::Number => {
                self.output.push(Node::leaf(NodeKind::Number, &token.text, token.line));
            },
            TokenKind::Function | TokenKind::LParen | TokenKind::LBracket => {
                self.operators.push(token);
            },
            kind if kind.is_binary_operator() => {
                while let Some(&top) = self.operators.last()
                      && !is_open_marker(top.kind)
                      && precedence(top.kind) <= precedence(kind)
                {
                    self.reduce(token.line)?;
                }
                self.operators.push(token);
            },
            TokenKind::RParen | TokenKind::RBracket => self.close(token)?,
            _ => return Err(unexpected(token)),
        }

        Ok(())
    }

    /// Reduces everything left on the operator stack and returns the single
    /// finished expression. The builder is empty afterwards and can be reused.
    ///
    /// # Errors
    /// - `MismatchedBracket` when an opening bracket was never closed.
    /// - `InvalidSyntax` unless exactly one node remains on the output stack.
    pub fn finish(&mut self, end: &Token) -> CompileResult<Node> {
        while let Some(&top) = self.operators.last() {
            if is_open_marker(top.kind) {
                return Err(SyntaxError::MismatchedBracket { line: end.line });
            }
            self.reduce(end.line)?;
        }

        match self.output.pop() {
            Some(node) if self.output.is_empty() => Ok(node),
            _ => {
                self.output.clear();
                Err(SyntaxError::InvalidSyntax { line: end.line })
            },
        }
    }

    /// Pops operators until the opener matching `closing` is found, then
    /// drops it. Brackets leave no trace in the tree.
    fn close(&mut self, closing: &Token) -> CompileResult<()> {
        let opener = if closing.kind == TokenKind::RBracket {
            TokenKind::LBracket
        } else {
            TokenKind::LParen
        };

        loop {
            match self.operators.last() {
                Some(&top) if top.kind == opener => {
                    self.operators.pop();
                    return Ok(());
                },
                Some(&top) if !is_open_marker(top.kind) => self.reduce(closing.line)?,
                _ => return Err(SyntaxError::MismatchedBracket { line: closing.line }),
            }
        }
    }

    /// Pops one operator and combines its operands into a new node.
    ///
    /// A function call takes one operand; binary operators take two, the
    /// second popped being the left operand.
    fn reduce(&mut self, line: usize) -> CompileResult<()> {
        let invalid = SyntaxError::InvalidSyntax { line };

        let operator = self.operators.pop().ok_or_else(|| invalid.clone())?;
        let kind = operator_node_kind(operator.kind).ok_or_else(|| invalid.clone())?;

        let node = if kind == NodeKind::FunctionCall {
            let argument = self.output.pop().ok_or_else(|| invalid.clone())?;
            Node::with_children(kind, &operator.text, operator.line, vec![argument])
        } else {
            let right = self.output.pop().ok_or_else(|| invalid.clone())?;
            let left = self.output.pop().ok_or(invalid)?;
            Node::with_children(kind, "", operator.line, vec![left, right])
        };

        self.output.push(node);
        Ok(())
    }
}
