use numscript::interpreter::lexer::{Token, TokenKind, tokenize};
use pretty_assertions::assert_eq;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn whole_program_tokens() {
    use TokenKind::{
        Add, Divide, EndOfLine, Equals, Function, LBracket, LParen, Modulo, Multiply, Number,
        Print, RBracket, RParen, Read, Subtract, Variable,
    };

    let lines = ["a = 2",
                 "read b",
                 "c = b - 1",
                 "D[x] = (x + 4) * 2 / b % 10",
                 "print c",
                 "print D[3]"];
    let tokens = tokenize(&lines);

    assert_eq!(tokens.len(), 39);
    assert_eq!(kinds(&tokens),
               [Variable, Equals, Number, EndOfLine, Read, Variable, EndOfLine, Variable,
                Equals, Variable, Subtract, Number, EndOfLine, Function, LBracket, Variable,
                RBracket, Equals, LParen, Variable, Add, Number, RParen, Multiply, Number,
                Divide, Variable, Modulo, Number, EndOfLine, Print, Variable, EndOfLine, Print,
                Function, LBracket, Number, RBracket, EndOfLine]);

    assert_eq!(tokens[13].text, "D");
    assert_eq!(tokens[28].text, "10");
    assert_eq!(tokens[31].text, "c");
}

#[test]
fn positions_are_one_based_characters() {
    let tokens = tokenize(&["a = 2", "  print  a+10"]);

    let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions,
               [(1, 1), (1, 3), (1, 5), (1, 6), (2, 3), (2, 10), (2, 11), (2, 12), (2, 14)]);
}

#[test]
fn runs_split_on_case_and_digit_changes() {
    let tokens = tokenize(&["abcDEF12x"]);

    assert_eq!(tokens,
               [Token::new(TokenKind::Variable, "abc", 1, 1),
                Token::new(TokenKind::Function, "DEF", 1, 4),
                Token::new(TokenKind::Number, "12", 1, 7),
                Token::new(TokenKind::Variable, "x", 1, 9),
                Token::new(TokenKind::EndOfLine, "", 1, 10)]);
}

#[test]
fn keywords_need_the_whole_run() {
    let tokens = tokenize(&["read reader printx print"]);

    assert_eq!(kinds(&tokens),
               [TokenKind::Read,
                TokenKind::Variable,
                TokenKind::Variable,
                TokenKind::Print,
                TokenKind::EndOfLine]);
}

#[test]
fn unknown_symbols_become_undefined_tokens() {
    let tokens = tokenize(&["$"]);

    assert_eq!(tokens,
               [Token::new(TokenKind::Undefined, "$", 1, 1),
                Token::new(TokenKind::EndOfLine, "", 1, 2)]);
}

#[test]
fn each_unknown_character_is_its_own_token() {
    let tokens = tokenize(&["a = é€ 1"]);

    assert_eq!(tokens,
               [Token::new(TokenKind::Variable, "a", 1, 1),
                Token::new(TokenKind::Equals, "=", 1, 3),
                Token::new(TokenKind::Undefined, "é", 1, 5),
                Token::new(TokenKind::Undefined, "€", 1, 6),
                Token::new(TokenKind::Number, "1", 1, 8),
                Token::new(TokenKind::EndOfLine, "", 1, 9)]);
}

#[test]
fn empty_lines_still_end() {
    let tokens = tokenize(&["", "   "]);

    assert_eq!(tokens,
               [Token::new(TokenKind::EndOfLine, "", 1, 1),
                Token::new(TokenKind::EndOfLine, "", 2, 4)]);
}

#[test]
fn tokenizing_is_repeatable() {
    let lines = ["x = 1", "F[y] = y * x", "print F[2] % 3 $"];

    assert_eq!(tokenize(&lines), tokenize(&lines));
}
