use crate::{ast::NodeKind, error::RuntimeError, interpreter::executor::core::EvalResult};

/// Parses an unsigned decimal literal, as written in source code, into an
/// `i64`.
///
/// Only ASCII digits are accepted; the value must fit in `i64`.
///
/// ## Errors
/// Returns `RuntimeError::InvalidNumber` for empty text, non-digit characters
/// or values above `i64::MAX`.
///
/// ## Example
/// ```
/// use numscript::{error::RuntimeError, util::num::parse_literal};
///
/// assert_eq!(parse_literal("007", 1).unwrap(), 7);
///
/// let err = parse_literal("9223372036854775808", 3).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidNumber { line: 3, .. }));
/// ```
pub fn parse_literal(text: &str, line: usize) -> EvalResult<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_number(text, line));
    }

    text.parse().map_err(|_| invalid_number(text, line))
}

/// Parses a whitespace-delimited input token into an `i64`.
///
/// Unlike source literals, input may carry a leading `+` or `-` sign.
///
/// ## Errors
/// Returns `RuntimeError::InvalidNumber` if the token is not a decimal
/// integer that fits in `i64`.
///
/// ## Example
/// ```
/// use numscript::util::num::parse_input;
///
/// assert_eq!(parse_input("-12", 1).unwrap(), -12);
/// assert!(parse_input("12abc", 1).is_err());
/// ```
pub fn parse_input(text: &str, line: usize) -> EvalResult<i64> {
    text.parse().map_err(|_| invalid_number(text, line))
}

fn invalid_number(text: &str, line: usize) -> RuntimeError {
    RuntimeError::InvalidNumber { text: text.to_string(),
                                  line }
}

/// Applies a binary arithmetic operator with overflow and zero checks.
///
/// Division and remainder truncate toward zero, like Rust's `/` and `%` on
/// integers.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` for `/` or `%` with a zero right operand.
/// - `RuntimeError::Overflow` if the result does not fit in `i64`.
///
/// ## Example
/// ```
/// use numscript::{ast::NodeKind, error::RuntimeError, util::num::apply_binary};
///
/// assert_eq!(apply_binary(NodeKind::Divide, 22, 7, 1).unwrap(), 3);
/// assert_eq!(apply_binary(NodeKind::Modulo, -7, 2, 1).unwrap(), -1);
///
/// let err = apply_binary(NodeKind::Divide, 1, 0, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::DivisionByZero { line: 4 }));
/// ```
pub fn apply_binary(kind: NodeKind, left: i64, right: i64, line: usize) -> EvalResult<i64> {
    if matches!(kind, NodeKind::Divide | NodeKind::Modulo) && right == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let result = match kind {
        NodeKind::Add => left.checked_add(right),
        NodeKind::Subtract => left.checked_sub(right),
        NodeKind::Multiply => left.checked_mul(right),
        NodeKind::Divide => left.checked_div(right),
        NodeKind::Modulo => left.checked_rem(right),
        _ => return Err(RuntimeError::MalformedTree { line }),
    };

    result.ok_or(RuntimeError::Overflow { line })
}
