//! End-to-end tokenisation scenarios through the public lexer API.

use rotor_core::error::RotorError;
use rotor_core::lexer::{Lexer, LexicalGoal, Token, TokenKind};

fn expect(tokens: &[Token], expected: &[(TokenKind, &str, usize)]) {
    let actual: Vec<(TokenKind, &str, usize)> = tokens
        .iter()
        .map(|t| (t.kind, t.value.as_str(), t.pos))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn class_declaration_with_comments() {
    let source =
        "//Some comment\nclass MyAwesomeClass\n { /* Constructor */\nconstructor() {} }";
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise(source, LexicalGoal::InputElementDiv)
        .unwrap();
    expect(
        tokens,
        &[
            (TokenKind::LineTerminator, "\n", 14),
            (TokenKind::Keyword, "class", 15),
            (TokenKind::IdentifierName, "MyAwesomeClass", 21),
            (TokenKind::LineTerminator, "\n", 35),
            (TokenKind::Punctuator, "{", 37),
            (TokenKind::LineTerminator, "\n", 56),
            (TokenKind::IdentifierName, "constructor", 57),
            (TokenKind::Punctuator, "(", 68),
            (TokenKind::Punctuator, ")", 69),
            (TokenKind::Punctuator, "{", 71),
            (TokenKind::RightBracePunctuator, "}", 72),
            (TokenKind::RightBracePunctuator, "}", 74),
        ],
    );
}

#[test]
fn regexp_string_and_brace_under_regexp_goal() {
    let source = "/ab*.+\\+?/g \"My string literal \\n value\"}";
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise(source, LexicalGoal::InputElementRegExp)
        .unwrap();
    expect(
        tokens,
        &[
            (TokenKind::RegularExpressionLiteral, "/ab*.+\\+?/g", 0),
            (TokenKind::StringLiteral, "My string literal \\n value", 12),
            (TokenKind::RightBracePunctuator, "}", 40),
        ],
    );
}

#[test]
fn division_under_div_goal() {
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise("let myVar = 23 / 4;", LexicalGoal::InputElementDiv)
        .unwrap();
    expect(
        tokens,
        &[
            (TokenKind::IdentifierName, "let", 0),
            (TokenKind::IdentifierName, "myVar", 4),
            (TokenKind::Punctuator, "=", 10),
            (TokenKind::DecimalLiteral, "23", 12),
            (TokenKind::DivPunctuator, "/", 15),
            (TokenKind::DecimalLiteral, "4", 17),
            (TokenKind::Punctuator, ";", 18),
        ],
    );
}

#[test]
fn regexp_under_regexp_or_template_tail_goal() {
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise(
            "let aVar = /^awQ+[A-Za-z]$/i;",
            LexicalGoal::InputElementRegExpOrTemplateTail,
        )
        .unwrap();
    expect(
        tokens,
        &[
            (TokenKind::IdentifierName, "let", 0),
            (TokenKind::IdentifierName, "aVar", 4),
            (TokenKind::Punctuator, "=", 9),
            (TokenKind::RegularExpressionLiteral, "/^awQ+[A-Za-z]$/i", 11),
            (TokenKind::Punctuator, ";", 28),
        ],
    );
}

#[test]
fn template_literal_lexed_across_goal_switches() {
    // Drive the lexer the way a parser would: template heads under the
    // default goal, substitution expressions under Div, and the closing
    // fragments under a template-tail goal.
    let source = "`one${a}two${b}three`";
    let mut lexer = Lexer::new();

    let after_head = lexer
        .tokenise_up_to_type(source, TokenKind::TemplateHead, LexicalGoal::InputElementDiv)
        .unwrap();
    assert_eq!(lexer.tokens().last().unwrap().value, "one");
    assert_eq!(after_head, 6);

    let rest = &source[after_head..];
    let after_expr = lexer
        .tokenise_up_to_type(rest, TokenKind::IdentifierName, LexicalGoal::InputElementDiv)
        .unwrap();
    assert_eq!(lexer.tokens().last().unwrap().value, "a");

    let rest = &rest[after_expr..];
    let after_middle = lexer
        .tokenise_up_to_type(
            rest,
            TokenKind::TemplateMiddle,
            LexicalGoal::InputElementTemplateTail,
        )
        .unwrap();
    assert_eq!(lexer.tokens().last().unwrap().value, "two");

    let rest = &rest[after_middle..];
    let after_expr = lexer
        .tokenise_up_to_type(rest, TokenKind::IdentifierName, LexicalGoal::InputElementDiv)
        .unwrap();
    assert_eq!(lexer.tokens().last().unwrap().value, "b");

    let rest = &rest[after_expr..];
    let tokens = lexer
        .tokenise(rest, LexicalGoal::InputElementRegExpOrTemplateTail)
        .unwrap();
    let tail = tokens.last().unwrap();
    assert_eq!(tail.kind, TokenKind::TemplateTail);
    assert_eq!(tail.value, "three");
}

#[test]
fn no_substitution_template() {
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise("`just text` ;", LexicalGoal::InputElementDiv)
        .unwrap();
    expect(
        tokens,
        &[
            (TokenKind::NoSubstitionTemplate, "just text", 0),
            (TokenKind::Punctuator, ";", 12),
        ],
    );
}

#[test]
fn every_reserved_word_category() {
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise(
            "if (enum) { return null; } else { yield true; }",
            LexicalGoal::InputElementDiv,
        )
        .unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,              // if
            TokenKind::Punctuator,           // (
            TokenKind::FutureReservedWord,   // enum
            TokenKind::Punctuator,           // )
            TokenKind::Punctuator,           // {
            TokenKind::Keyword,              // return
            TokenKind::NullLiteral,          // null
            TokenKind::Punctuator,           // ;
            TokenKind::RightBracePunctuator, // }
            TokenKind::Keyword,              // else
            TokenKind::Punctuator,           // {
            TokenKind::Keyword,              // yield
            TokenKind::BooleanLiteral,       // true
            TokenKind::Punctuator,           // ;
            TokenKind::RightBracePunctuator, // }
        ],
    );
}

#[test]
fn identifier_escapes_are_decoded() {
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise("var \\u0061w\\u{65}some = 1;", LexicalGoal::InputElementDiv)
        .unwrap();
    assert_eq!(tokens[1].kind, TokenKind::IdentifierName);
    assert_eq!(tokens[1].value, "awesome");
    assert_eq!(tokens[1].pos, 4);
}

#[test]
fn escaped_keyword_is_an_identifier() {
    // `class` spells "class" but the escape keeps it an identifier.
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise("cl\\u0061ss", LexicalGoal::InputElementDiv)
        .unwrap();
    expect(tokens, &[(TokenKind::IdentifierName, "class", 0)]);
}

#[test]
fn numeric_literal_kinds() {
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise(
            "12.5e-3 0b101 0o17 0xFF 0.25",
            LexicalGoal::InputElementDiv,
        )
        .unwrap();
    expect(
        tokens,
        &[
            (TokenKind::DecimalLiteral, "12.5e-3", 0),
            (TokenKind::BinaryIntegerLiteral, "101", 8),
            (TokenKind::OctalIntegerLiteral, "17", 14),
            (TokenKind::HexIntegerLiteral, "FF", 19),
            (TokenKind::DecimalLiteral, "0.25", 24),
        ],
    );
}

#[test]
fn unterminated_string_keeps_earlier_tokens() {
    let mut lexer = Lexer::new();
    let err = lexer
        .tokenise("a = 'oops", LexicalGoal::InputElementDiv)
        .unwrap_err();
    assert_eq!(err, RotorError::UnterminatedString(4));
    assert_eq!(lexer.tokens().len(), 2);
}

#[test]
fn unicode_format_control_characters_continue_identifiers() {
    // ZWNJ / ZWJ join identifier parts.
    let source = "a\u{200C}b c\u{200D}d";
    let mut lexer = Lexer::new();
    let tokens = lexer
        .tokenise(source, LexicalGoal::InputElementDiv)
        .unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "a\u{200C}b");
    assert_eq!(tokens[1].value, "c\u{200D}d");
    assert_eq!(tokens[1].pos, 4);
}
