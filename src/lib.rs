//! # numscript
//!
//! numscript is an interpreter for a tiny line-oriented integer language,
//! written in Rust. Programs assign variables, define single-parameter
//! functions, and `read` and `print` integers:
//!
//! ```text
//! a = 2
//! read b
//! D[x] = (x + 4) * 2 / b
//! print D[a + 5]
//! ```
//!
//! Source lines go through three stages: the lexer turns them into tokens, the
//! compiler validates the tokens and builds an AST, and the executor walks the
//! AST without recursion.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    io::{BufRead, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        compiler::core::compile, executor::core::execute, lexer::tokenize,
        reader::read_all_lines,
    },
};

/// Defines the structure of compiled programs.
///
/// This module declares the `Node` tree and the `NodeKind` enum that represent
/// a program after compilation. The tree is built by the compiler and
/// traversed by the executor.
///
/// # Responsibilities
/// - Defines one node kind per statement, operand and operator.
/// - Fixes the number of children each kind must have.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for compiling and executing.
///
/// This module defines all errors that can be raised while reading, compiling
/// or executing a program. Every error carries the source line it refers to,
/// and the column where a single token is to blame.
///
/// # Responsibilities
/// - Defines error enums for the compiler and the executor.
/// - Wraps both, plus file access failures, in one crate-level error.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together the lexer, the compiler, the executor and the
/// source reader.
///
/// # Responsibilities
/// - Coordinates all stages: reading, lexing, compiling and executing.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// Numeric helpers for literal parsing and checked arithmetic.
pub mod util;

/// Runs a program given as source lines.
///
/// The lines are tokenized, compiled and executed in turn. `print` writes to
/// `output`; `read` takes whitespace-separated integers from `input`.
///
/// # Errors
/// Returns the first syntax or runtime error. Nothing runs if compilation
/// fails; on a runtime error, output already written is kept.
///
/// # Examples
/// ```
/// use numscript::run;
///
/// let program = ["a = 2",
///                "read b",
///                "c = b - 1",
///                "D[x] = (x + 4) * 2 / b + c",
///                "print c",
///                "print D[a + 5]"];
/// let mut output = Vec::new();
///
/// run(&program, &mut output, "7".as_bytes()).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "6\n9\n");
///
/// // `y` is never assigned.
/// assert!(run(&["x = y + 1"], Vec::new(), "".as_bytes()).is_err());
/// ```
pub fn run<S: AsRef<str>>(lines: &[S],
                          output: impl Write,
                          input: impl BufRead)
                          -> Result<(), Error> {
    let tokens = tokenize(lines);
    let root = compile(&tokens)?;
    debug!(statements = root.children.len(), "starting execution");

    execute(&root, output, input)?;
    Ok(())
}

/// Runs a program given as one string, split into lines.
///
/// # Errors
/// See [`run`].
pub fn run_source(source: &str, output: impl Write, input: impl BufRead) -> Result<(), Error> {
    let lines: Vec<&str> = source.lines().collect();
    run(&lines, output, input)
}

/// Reads the program at `path` and runs it.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, otherwise see [`run`].
pub fn run_file(path: impl AsRef<Path>,
                output: impl Write,
                input: impl BufRead)
                -> Result<(), Error> {
    let lines = read_all_lines(path)?;
    run(&lines, output, input)
}
