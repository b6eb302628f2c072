use lox_lexer::{tokenize, LexError, Literal, Token, TokenKind};

const PROGRAMS: &[&str] = &[
    "",
    "print 1 + 2;",
    "var a = \"multi\nline\";\nprint a;",
    "fun add(a, b) {\n  return a + b; // sum\n}\n",
    "class Point {\n  init(x, y) { this.x = x; this.y = y; }\n}",
    "/* header\n * block\n */\nwhile (i <= 10) { i = i + 1; }",
    "if (!done and count != 0) print count * 2.5 / 3;",
    "a>=b<=c==d!=e>f<g=h",
    "123.",
    "\t\r\n   \n",
];

fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}: {}", t.line, t).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn every_scan_ends_with_one_eof() {
    for source in PROGRAMS {
        let (tokens, _) = tokenize(source);
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Eof, "{source:?}");
        assert_eq!(last.lexeme, "");
        assert!(last.literal.is_none());
        assert_eq!(last.span, source.len()..source.len());
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }
}

#[test]
fn lexemes_are_ordered_source_slices() {
    for source in PROGRAMS {
        let (tokens, errors) = tokenize(source);
        assert!(errors.is_empty(), "{source:?}: {errors:?}");

        let mut pos = 0;
        for token in &tokens {
            assert!(token.span.start >= pos, "{source:?}: overlap at {token:?}");
            assert_eq!(&source[token.span.clone()], token.lexeme.as_str());

            // Whatever lies between two tokens is whitespace or a comment.
            let gap = source[pos..token.span.start].trim_start();
            assert!(
                gap.is_empty() || gap.starts_with("//") || gap.starts_with("/*"),
                "{source:?}: unexpected gap {gap:?}"
            );
            pos = token.span.end;
        }
    }
}

#[test]
fn line_numbers_never_decrease() {
    for source in PROGRAMS {
        let (tokens, _) = tokenize(source);
        assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
        let newlines = source.matches('\n').count();
        assert_eq!(tokens.last().unwrap().line, newlines + 1);
    }
}

#[test]
fn errors_do_not_stop_the_scan() {
    let (tokens, errors) = tokenize("1 @ 2 # \"open");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
    assert_eq!(tokens[0].literal, Some(Literal::Number(1.0)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(2.0)));

    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], LexError::UnexpectedChar { ch: '@', .. }));
    assert!(matches!(errors[1], LexError::UnexpectedChar { ch: '#', .. }));
    assert!(matches!(errors[2], LexError::UnterminatedString { line: 1, .. }));
    assert_eq!(errors[0].to_string(), "Unexpected character");
    assert_eq!(errors[2].to_string(), "Unterminated string");
}

#[test]
fn token_dump() {
    let source = "var greeting = \"hi\";\n// comment\nif (n >= 10.5) print n;\n";
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty());

    insta::assert_snapshot!(dump(&tokens), @r#"
    1: VAR var
    1: IDENTIFIER greeting
    1: EQUAL =
    1: STRING "hi" hi
    1: SEMICOLON ;
    3: IF if
    3: LEFT_PAREN (
    3: IDENTIFIER n
    3: GREATER_EQUAL >=
    3: NUMBER 10.5 10.5
    3: RIGHT_PAREN )
    3: PRINT print
    3: IDENTIFIER n
    3: SEMICOLON ;
    4: EOF
    "#);
}

#[test]
fn token_dump_with_errors() {
    let (tokens, errors) = tokenize("x = 3.;\n$y");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), 2);

    insta::assert_snapshot!(dump(&tokens), @r"
    1: IDENTIFIER x
    1: EQUAL =
    1: NUMBER 3 3.0
    1: DOT .
    1: SEMICOLON ;
    2: IDENTIFIER y
    2: EOF
    ");
}
