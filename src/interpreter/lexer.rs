use logos::Logos;
use tracing::trace;

/// The kind of a lexical token.
///
/// Every variant except [`TokenKind::EndOfLine`] is produced by the `logos`
/// scanner; end-of-line tokens are appended by [`tokenize`] after each line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// A single character the language does not recognize, such as `$`.
    /// Rejected later by the compiler, never by the lexer.
    #[regex(r"[^a-zA-Z0-9=+\-*/%\[\]()\s]")]
    Undefined,
    /// Function names are runs of uppercase letters, such as `D` or `SQ`.
    #[regex(r"[A-Z]+")]
    Function,
    /// Variable names are runs of lowercase letters, such as `x` or `total`.
    #[regex(r"[a-z]+")]
    Variable,
    /// Unsigned integer literal tokens, such as `42`. The digits are kept as
    /// text; they are parsed by the executor.
    #[regex(r"[0-9]+")]
    Number,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Subtract,
    /// `*`
    #[token("*")]
    Multiply,
    /// `/`
    #[token("/")]
    Divide,
    /// `%`
    #[token("%")]
    Modulo,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `print`
    #[token("print")]
    Print,
    /// `read`
    #[token("read")]
    Read,
    /// End of a source line.
    EndOfLine,
}

impl TokenKind {
    /// Whether a token of this kind can begin an operand: a variable, a
    /// number, a function call or a parenthesized expression.
    #[must_use]
    pub const fn starts_value(self) -> bool {
        matches!(self, Self::Variable | Self::Function | Self::Number | Self::LParen)
    }

    /// Whether the kind is one of `+ - * / %`.
    #[must_use]
    pub const fn is_binary_operator(self) -> bool {
        matches!(self,
                 Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Modulo)
    }
}

/// A classified lexeme together with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The raw source text; empty for end-of-line tokens.
    pub text:   String,
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               text: text.into(),
               line,
               column }
    }
}

/// Converts source lines into a flat token sequence.
///
/// Each line is scanned left to right; whitespace separates tokens but is not
/// itself a token. Every line, including an empty one, ends with an
/// [`TokenKind::EndOfLine`] token positioned one column past its last
/// character. Unrecognized characters become [`TokenKind::Undefined`] tokens,
/// so this function never fails.
///
/// # Example
/// ```
/// use numscript::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize(&["D[x] = 1 + x"]);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Function,
///             TokenKind::LBracket,
///             TokenKind::Variable,
///             TokenKind::RBracket,
///             TokenKind::Equals,
///             TokenKind::Number,
///             TokenKind::Add,
///             TokenKind::Variable,
///             TokenKind::EndOfLine]);
/// assert_eq!(tokens[4].column, 6);
/// ```
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        tokenize_line(line.as_ref(), index + 1, &mut tokens);
    }

    trace!(count = tokens.len(), lines = lines.len(), "tokenized source");
    tokens
}

fn tokenize_line(source: &str, line: usize, tokens: &mut Vec<Token>) {
    let mut lexer = TokenKind::lexer(source);

    // Logos reports byte offsets; columns are counted in characters.
    let mut byte_offset = 0;
    let mut char_offset = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        char_offset += source[byte_offset..span.start].chars().count();
        byte_offset = span.start;

        let slice = lexer.slice();
        // Every non-whitespace character is matched by some pattern, so the
        // error arm is only reachable through a logos bug.
        let kind = result.unwrap_or(TokenKind::Undefined);
        tokens.push(Token::new(kind, slice, line, char_offset + 1));
    }

    char_offset += source[byte_offset..].chars().count();
    tokens.push(Token::new(TokenKind::EndOfLine, "", line, char_offset + 1));
}
