use pretty_assertions::assert_eq;
use rulex_lexer_core::{LexerConfig, Location, SourceBuffer, Span, Token, TokenKind};

use super::*;

fn render(config: &LexerConfig, text: &[u8]) -> (String, Summary) {
    let buf = SourceBuffer::from_bytes(text);
    let mut out = Vec::new();
    let summary = render_tokens(Lexer::new(config, "r.lex", &buf), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn lists_tokens_with_locations() {
    let (out, summary) = render(&LexerConfig::default(), b"a, b;\n(c)");
    let want = "\
r.lex:1:1: INVALID a
r.lex:1:2: PUNCT , #1
r.lex:1:4: INVALID b
r.lex:1:5: PUNCT ; #4
r.lex:2:1: PUNCT ( #2
r.lex:2:2: INVALID c
r.lex:2:3: PUNCT ) #3
r.lex:2:4: END
";
    assert_eq!(out, want);
    assert_eq!(summary, Summary { tokens: 7, invalid: 3 });
}

#[test]
fn empty_source_prints_only_end() {
    let (out, summary) = render(&LexerConfig::default(), b"");
    assert_eq!(out, "r.lex:1:1: END\n");
    assert_eq!(summary, Summary::default());
}

#[test]
fn control_and_non_utf8_bytes_are_escaped() {
    let (out, summary) = render(&LexerConfig::default(), b"\x00\xff");
    assert_eq!(
        out,
        "r.lex:1:1: INVALID \\x00\nr.lex:1:2: INVALID \\xff\nr.lex:1:3: END\n"
    );
    assert_eq!(summary.invalid, 2);
}

fn line_for(kind: TokenKind, table_index: Option<u32>) -> String {
    let token = Token {
        kind,
        span: Span::new(0, 2),
        location: Location::new("r.lex", 1, 1),
        table_index,
    };
    let mut out = Vec::new();
    write_token(&mut out, &token, b"ab").unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn index_shown_only_for_table_kinds() {
    assert_eq!(line_for(TokenKind::Keyword, Some(3)), "r.lex:1:1: KEYWORD ab #3\n");
    assert_eq!(line_for(TokenKind::Punct, Some(0)), "r.lex:1:1: PUNCT ab #0\n");
    assert_eq!(line_for(TokenKind::Symbol, Some(3)), "r.lex:1:1: SYMBOL ab\n");
    assert_eq!(line_for(TokenKind::Int, Some(1)), "r.lex:1:1: INT ab\n");
}

#[test]
fn summary_display() {
    let summary = Summary {
        tokens: 12,
        invalid: 0,
    };
    assert_eq!(summary.to_string(), "12 tokens, 0 invalid");
}
