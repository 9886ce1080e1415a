/// The kind of an AST node.
///
/// Every kind has a fixed number of children, see [`NodeKind::arity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The whole program; one child per top-level statement.
    Root,
    /// A call `F[expr]`, tagged with the function name.
    FunctionCall,
    /// A reference to a variable or function parameter.
    Variable,
    /// An unsigned integer literal, kept as raw source text.
    Number,
    /// `F[x] = body`, tagged with the function name.
    FunctionDefinition,
    /// `read x`
    Read,
    /// `print expr`
    Print,
    /// `x = expr`
    Assignment,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
}

impl NodeKind {
    /// Returns the number of children a node of this kind must have, or `None`
    /// for [`NodeKind::Root`], which holds any number of statements.
    ///
    /// ## Example
    /// ```
    /// use numscript::ast::NodeKind;
    ///
    /// assert_eq!(NodeKind::Assignment.arity(), Some(2));
    /// assert_eq!(NodeKind::FunctionCall.arity(), Some(1));
    /// assert_eq!(NodeKind::Number.arity(), Some(0));
    /// assert_eq!(NodeKind::Root.arity(), None);
    /// ```
    #[must_use]
    pub const fn arity(self) -> Option<usize> {
        match self {
            Self::Root => None,
            Self::Variable | Self::Number => Some(0),
            Self::FunctionCall | Self::Read | Self::Print => Some(1),
            Self::FunctionDefinition
            | Self::Assignment
            | Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Modulo => Some(2),
        }
    }

    /// Whether the kind is one of the five binary arithmetic operators.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        matches!(self,
                 Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Modulo)
    }
}

/// A node of the abstract syntax tree.
///
/// Children are owned by value, so a program is a strict tree with no sharing.
/// `text` holds the variable or function name, or the literal digits; it is
/// empty for structural nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// What the node represents.
    pub kind:     NodeKind,
    /// Name or literal text.
    pub text:     String,
    /// Source line the node was built from. The root uses `0`.
    pub line:     usize,
    /// Ordered children.
    pub children: Vec<Self>,
}

impl Node {
    /// Creates an empty program root.
    #[must_use]
    pub const fn root() -> Self {
        Self { kind:     NodeKind::Root,
               text:     String::new(),
               line:     0,
               children: Vec::new(), }
    }

    /// Creates a childless node.
    #[must_use]
    pub fn leaf(kind: NodeKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               children: Vec::new() }
    }

    /// Creates a node with the given children.
    ///
    /// ## Example
    /// ```
    /// use numscript::ast::{Node, NodeKind};
    ///
    /// let sum = Node::with_children(NodeKind::Add,
    ///                               "",
    ///                               1,
    ///                               vec![Node::leaf(NodeKind::Variable, "a", 1),
    ///                                    Node::leaf(NodeKind::Number, "3", 1)]);
    ///
    /// assert_eq!(sum.children.len(), 2);
    /// assert!(sum.is_well_formed());
    /// ```
    #[must_use]
    pub fn with_children(kind: NodeKind,
                         text: impl Into<String>,
                         line: usize,
                         children: Vec<Self>)
                         -> Self {
        Self { kind,
               text: text.into(),
               line,
               children }
    }

    /// Checks the arity invariant for this node and every descendant.
    ///
    /// The walk uses an explicit stack, so arbitrarily deep trees are fine.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            if let Some(arity) = node.kind.arity()
               && arity != node.children.len()
            {
                return false;
            }
            pending.extend(node.children.iter());
        }

        true
    }
}

impl Drop for Node {
    /// Frees the subtree with an explicit work list, so dropping a deeply
    /// nested program cannot exhaust the native stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);

        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
