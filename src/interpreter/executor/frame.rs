use crate::ast::Node;

/// One entry of the executor's work stack: a node being evaluated and the
/// index of the next child to visit.
///
/// For most nodes `next_child` simply counts evaluated children. A function
/// call uses it as a phase counter: `0` evaluates the argument, `1` enters the
/// body and `2` leaves the call.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The node this frame evaluates.
    pub node:       &'a Node,
    /// How many times the frame has been stepped so far.
    pub next_child: usize,
}

impl<'a> Frame<'a> {
    /// Creates a frame that has not visited any child yet.
    #[must_use]
    pub const fn new(node: &'a Node) -> Self {
        Self { node,
               next_child: 0 }
    }
}

/// What a single step asks the traversal loop to do next.
#[derive(Debug)]
pub enum Step<'a> {
    /// Push a frame for this node and evaluate it before resuming.
    Visit(&'a Node),
    /// The frame is finished; any value it produced is on the value stack.
    Done,
}
