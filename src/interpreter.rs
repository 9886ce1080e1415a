/// The compiler module validates tokens and builds the abstract syntax tree.
///
/// The compiler first checks that every token may follow the one before it
/// and rejects function definitions that call themselves. It then builds the
/// AST statement by statement, constructing expressions with the
/// shunting-yard algorithm.
///
/// # Responsibilities
/// - Rejects unknown symbols and invalid token sequences with line and column.
/// - Recognizes assignments, function definitions, `read` and `print`.
/// - Builds expression trees honoring precedence and left associativity.
pub mod compiler;
/// The executor module runs a compiled program.
///
/// The executor walks the AST with an explicit work stack instead of
/// recursion, keeps variables and function definitions in a runtime context,
/// and performs `read` and `print` against the given input and output.
///
/// # Responsibilities
/// - Evaluates expressions with checked 64-bit integer arithmetic.
/// - Binds function parameters for the duration of a call.
/// - Reports runtime errors such as undefined names or division by zero.
pub mod executor;
/// The lexer module tokenizes source lines for the compiler.
///
/// The lexer reads each source line and produces tokens for names, numbers,
/// operators, brackets and keywords, each with its line and column. Unknown
/// characters become `Undefined` tokens instead of errors.
///
/// # Responsibilities
/// - Converts the source lines into tokens with type and source location.
/// - Marks the end of every line with an explicit token.
pub mod lexer;
/// The reader module loads program text.
///
/// Reads a file or any buffered stream into an ordered list of lines without
/// line terminators.
pub mod reader;
