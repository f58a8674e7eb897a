use super::*;

#[test]
fn span_len_and_empty() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::empty(5).is_empty());
    assert_eq!(Span::empty(5).len(), 0);
}

#[test]
fn span_slice_in_range() {
    let bytes = b"a, b";
    assert_eq!(Span::new(1, 2).slice(bytes), Some(&b","[..]));
    assert_eq!(Span::empty(4).slice(bytes), Some(&b""[..]));
}

#[test]
fn span_slice_out_of_range_is_none() {
    assert_eq!(Span::new(2, 9).slice(b"abc"), None);
}

#[test]
fn span_formats_as_range() {
    assert_eq!(format!("{}", Span::new(1, 4)), "1..4");
    assert_eq!(format!("{:?}", Span::new(0, 0)), "0..0");
}

#[test]
fn location_display() {
    let loc = Location::new("rules.lex", 3, 14);
    assert_eq!(loc.to_string(), "rules.lex:3:14");
}

#[test]
fn end_token_is_zero_length_and_not_a_match() {
    let tok = Token::end(9, Location::new("f", 2, 1));
    assert_eq!(tok.kind, TokenKind::End);
    assert!(tok.span.is_empty());
    assert_eq!(tok.span.start, 9);
    assert!(tok.is_end());
    assert!(!tok.is_match());
    assert_eq!(tok.table_index, None);
}

#[test]
fn is_match_by_kind() {
    let loc = Location::new("f", 1, 1);
    let make = |kind| Token {
        kind,
        span: Span::new(0, 1),
        location: loc,
        table_index: None,
    };
    assert!(make(TokenKind::Punct).is_match());
    assert!(make(TokenKind::Int).is_match());
    assert!(!make(TokenKind::Invalid).is_match());
    assert!(!make(TokenKind::End).is_match());
}

#[test]
fn lexeme_reads_span_back() {
    let source = b"x | y";
    let tok = Token {
        kind: TokenKind::Punct,
        span: Span::new(2, 3),
        location: Location::new("f", 1, 3),
        table_index: Some(0),
    };
    assert_eq!(tok.lexeme(source), Some(&b"|"[..]));
    assert_eq!(tok.lexeme(b"x"), None);
}
