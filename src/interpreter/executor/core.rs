use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use tracing::{debug, trace};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::executor::{
        frame::{Frame, Step},
        input::WordReader,
    },
};

/// Result type used by the executor.
///
/// All execution functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A function parameter bound to the argument of an active call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    /// The function being called.
    pub function:  &'a str,
    /// Its formal parameter name.
    pub parameter: &'a str,
    /// The argument value.
    pub value:     i64,
}

/// Stores the runtime state of one program run.
///
/// Variables are global and created on first assignment or `read`. Functions
/// are kept as references to their definition nodes, so a context never
/// outlives the tree it runs. Active calls push a [`Binding`]; only the
/// innermost binding is visible to variable lookups.
#[derive(Debug, Default)]
pub struct Context<'a> {
    /// Global variables by name.
    pub variables: HashMap<String, i64>,
    /// Function definitions by name.
    pub functions: HashMap<&'a str, &'a Node>,
    /// Parameter bindings of the calls currently being evaluated.
    pub bindings:  Vec<Binding<'a>>,
}

impl<'a> Context<'a> {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a global variable, if it exists.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Resolves a variable reference.
    ///
    /// The innermost active binding wins when its parameter has this name;
    /// otherwise the global variable is used.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if neither holds the name.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::executor::core::{Binding, Context};
    ///
    /// let mut context = Context::new();
    /// context.assign("x", 1);
    /// assert_eq!(context.resolve("x", 1).unwrap(), 1);
    ///
    /// context.bindings.push(Binding { function:  "D",
    ///                                 parameter: "x",
    ///                                 value:     5, });
    /// assert_eq!(context.resolve("x", 1).unwrap(), 5);
    /// assert!(context.resolve("y", 1).is_err());
    /// ```
    pub fn resolve(&self, name: &str, line: usize) -> EvalResult<i64> {
        if let Some(binding) = self.bindings.last()
           && binding.parameter == name
        {
            return Ok(binding.value);
        }

        self.variable(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Creates or overwrites a global variable.
    pub fn assign(&mut self, name: &str, value: i64) {
        trace!(name, value, "assign");

        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Records a function definition node.
    ///
    /// # Errors
    /// Returns `DuplicateFunction` if the name is already defined.
    pub fn define_function(&mut self, definition: &'a Node) -> EvalResult<()> {
        let name = definition.text.as_str();

        if self.functions.contains_key(name) {
            return Err(RuntimeError::DuplicateFunction { name: name.to_string(),
                                                         line: definition.line, });
        }

        debug!(name, line = definition.line, "defined function");
        self.functions.insert(name, definition);
        Ok(())
    }

    /// Activates a call to `name` with the given argument and returns the
    /// body to evaluate.
    ///
    /// # Errors
    /// - `UndefinedFunction` if there is no such function.
    /// - `RecursiveCall` if the function already has an active binding.
    /// - `MalformedTree` if the definition node lacks a parameter or body.
    pub fn enter_call(&mut self, name: &str, argument: i64, line: usize) -> EvalResult<&'a Node> {
        let definition = *self.functions
                              .get(name)
                              .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                               line })?;

        if self.bindings.iter().any(|b| b.function == name) {
            return Err(RuntimeError::RecursiveCall { name: name.to_string(),
                                                     line });
        }

        let [parameter, body] = definition.children.as_slice() else {
            return Err(RuntimeError::MalformedTree { line: definition.line });
        };

        self.bindings.push(Binding { function: definition.text.as_str(),
                                     parameter: parameter.text.as_str(),
                                     value: argument });
        Ok(body)
    }

    /// Deactivates the innermost call.
    pub fn leave_call(&mut self) {
        self.bindings.pop();
    }
}

/// The traversal machine: the context plus the stacks and I/O handles needed
/// to step through the tree.
pub(in crate::interpreter::executor) struct Executor<'a, W, R> {
    pub context: Context<'a>,
    pub values:  Vec<i64>,
    pub output:  W,
    pub input:   WordReader<R>,
}

/// Executes a program tree.
///
/// Statements run in order, writing `print` results to `output` and taking
/// `read` values from `input`. The tree is walked with an explicit stack of
/// [`Frame`]s rather than host recursion, so nesting depth is limited only by
/// memory.
///
/// Returns the final context so callers can inspect the variables.
///
/// # Errors
/// Stops at the first [`RuntimeError`]. Output written before the error stays
/// written.
///
/// # Example
/// ```
/// use numscript::{
///     interpreter::{compiler::core::compile, executor::core::execute, lexer::tokenize},
/// };
///
/// let root = compile(&tokenize(&["read b", "c = b - 1", "print c * 2"])).unwrap();
/// let mut output = Vec::new();
///
/// let context = execute(&root, &mut output, "7".as_bytes()).unwrap();
///
/// assert_eq!(output, b"12\n");
/// assert_eq!(context.variable("c"), Some(6));
/// ```
pub fn execute<'a, W: Write, R: BufRead>(root: &'a Node,
                                         output: W,
                                         input: R)
                                         -> EvalResult<Context<'a>> {
    if !root.is_well_formed() {
        return Err(RuntimeError::MalformedTree { line: root.line });
    }

    let mut executor = Executor { context: Context::new(),
                                  values: Vec::new(),
                                  output,
                                  input: WordReader::new(input) };
    let mut frames = vec![Frame::new(root)];

    while let Some(frame) = frames.last_mut() {
        let Frame { node, next_child } = *frame;
        frame.next_child += 1;

        match executor.step(node, next_child)? {
            Step::Visit(child) => frames.push(Frame::new(child)),
            Step::Done => {
                frames.pop();
            },
        }
    }

    executor.flush(root.line)?;
    debug!(variables = executor.context.variables.len(),
           functions = executor.context.functions.len(),
           "execution finished");
    Ok(executor.context)
}
