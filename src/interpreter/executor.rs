/// Runtime context and the traversal loop.
///
/// Holds variables, function definitions and active parameter bindings, and
/// drives execution with an explicit stack of frames.
pub mod core;

/// Work stack entries and step outcomes of the traversal.
pub mod frame;

/// Whitespace-delimited word input for `read`.
pub mod input;

/// Per-node evaluation steps.
///
/// Implements what each node kind does when its frame is stepped: visiting
/// operands, combining values, assigning, printing, reading, defining and
/// calling functions.
mod step;
