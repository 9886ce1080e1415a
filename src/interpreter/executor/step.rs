use std::io::{BufRead, Write};

use tracing::trace;

use crate::{
    ast::{Node, NodeKind},
    error::RuntimeError,
    interpreter::executor::{
        core::{EvalResult, Executor},
        frame::Step,
    },
    util::num::{apply_binary, parse_input, parse_literal},
};

impl<'a, W: Write, R: BufRead> Executor<'a, W, R> {
    /// Advances the evaluation of `node` by one step.
    ///
    /// `next_child` is the number of times the node's frame has been stepped
    /// before. Nodes with operands return [`Step::Visit`] until every operand
    /// is on the value stack, then consume them and return [`Step::Done`].
    /// Expressions leave exactly one value on the stack; statements leave
    /// none.
    pub(in crate::interpreter::executor) fn step(&mut self,
                                                 node: &'a Node,
                                                 next_child: usize)
                                                 -> EvalResult<Step<'a>> {
        match node.kind {
            NodeKind::Root => {
                if let Some(statement) = node.children.get(next_child) {
                    trace!(line = statement.line, kind = ?statement.kind, "statement");
                    Ok(Step::Visit(statement))
                } else {
                    Ok(Step::Done)
                }
            },
            NodeKind::Assignment => {
                // Only the right-hand side is evaluated; the left child is
                // the target name.
                if next_child == 0 {
                    return Ok(Step::Visit(&node.children[1]));
                }
                let value = self.pop_value(node)?;
                self.context.assign(&node.children[0].text, value);
                Ok(Step::Done)
            },
            NodeKind::Variable => {
                let value = self.context.resolve(&node.text, node.line)?;
                self.values.push(value);
                Ok(Step::Done)
            },
            NodeKind::Number => {
                self.values.push(parse_literal(&node.text, node.line)?);
                Ok(Step::Done)
            },
            kind if kind.is_binary_operator() => {
                if let Some(operand) = node.children.get(next_child) {
                    return Ok(Step::Visit(operand));
                }
                let right = self.pop_value(node)?;
                let left = self.pop_value(node)?;
                self.values.push(apply_binary(kind, left, right, node.line)?);
                Ok(Step::Done)
            },
            NodeKind::Print => {
                if next_child == 0 {
                    return Ok(Step::Visit(&node.children[0]));
                }
                let value = self.pop_value(node)?;
                writeln!(self.output, "{value}").map_err(|source| RuntimeError::Io { source,
                                                                                     line: node.line })?;
                Ok(Step::Done)
            },
            NodeKind::Read => {
                let name = &node.children[0].text;
                let value = self.read_value(name, node.line)?;
                self.context.assign(name, value);
                Ok(Step::Done)
            },
            NodeKind::FunctionDefinition => {
                self.context.define_function(node)?;
                Ok(Step::Done)
            },
            NodeKind::FunctionCall => match next_child {
                0 => Ok(Step::Visit(&node.children[0])),
                1 => {
                    let argument = self.pop_value(node)?;
                    let body = self.context.enter_call(&node.text, argument, node.line)?;
                    trace!(name = %node.text, argument, "call");
                    Ok(Step::Visit(body))
                },
                _ => {
                    self.context.leave_call();
                    Ok(Step::Done)
                },
            },
            _ => Err(RuntimeError::MalformedTree { line: node.line }),
        }
    }

    /// Pops an operand produced by a child of `node`.
    fn pop_value(&mut self, node: &Node) -> EvalResult<i64> {
        self.values
            .pop()
            .ok_or(RuntimeError::MalformedTree { line: node.line })
    }

    /// Reads and parses the next input word for `read name`.
    ///
    /// Pending output is flushed first so prompts printed before a `read` are
    /// visible while it blocks.
    fn read_value(&mut self, name: &str, line: usize) -> EvalResult<i64> {
        self.flush(line)?;

        let word = self.input
                       .next_word()
                       .map_err(|source| RuntimeError::Io { source, line })?
                       .ok_or_else(|| RuntimeError::EndOfInput { name: name.to_string(),
                                                                 line })?;

        parse_input(&word, line)
    }

    /// Flushes the output sink.
    pub(in crate::interpreter::executor) fn flush(&mut self, line: usize) -> EvalResult<()> {
        self.output
            .flush()
            .map_err(|source| RuntimeError::Io { source, line })
    }
}
