/// Compiler entry point and result type.
///
/// Runs the validation passes and drives statement and expression building
/// over the whole token sequence.
pub mod core;

/// Shunting-yard expression construction.
///
/// Builds expression trees straight from infix token order using an operand
/// stack and an operator stack, with function calls as prefix operators.
pub mod expression;

/// Static rejection of self-recursive function definitions.
pub mod recursion;

/// Statement headers: assignments, function definitions, `read` and `print`.
mod statement;

/// Token adjacency validation.
///
/// Checks, for every token, which token kinds may immediately follow it. This
/// catches unknown symbols, implicit multiplication, dangling operators and
/// misplaced keywords before any tree is built.
pub mod syntax;
