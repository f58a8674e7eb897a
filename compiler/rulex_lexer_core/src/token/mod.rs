//! Spans, locations and tokens.

use std::fmt;

use crate::TokenKind;

/// Half-open byte range `start..end` into a [`SourceBuffer`](crate::SourceBuffer).
///
/// Layout: 8 bytes total.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn empty(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The bytes this span covers in `bytes`, or `None` if out of range.
    pub fn slice(self, bytes: &[u8]) -> Option<&[u8]> {
        bytes.get(self.start as usize..self.end as usize)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Human-facing position: file identifier, 1-based row and column.
///
/// Columns count bytes, not characters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Location<'a> {
    pub file: &'a str,
    pub row: u32,
    pub column: u32,
}

impl<'a> Location<'a> {
    #[inline]
    pub const fn new(file: &'a str, row: u32, column: u32) -> Self {
        Location { file, row, column }
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.row, self.column)
    }
}

/// One lexed span.
///
/// Tokens record positions, never bytes; read the text back with
/// [`lexeme`](Self::lexeme). The `'a` lifetime is shared with the
/// [`Lexer`](crate::Lexer) that produced the token, so a token cannot
/// outlive the buffer it describes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    pub location: Location<'a>,
    /// Index of the matched table entry. Set for `Punct` and `Keyword`
    /// tokens produced by a [`Lexer`](crate::Lexer); `None` otherwise.
    pub table_index: Option<u32>,
}

impl<'a> Token<'a> {
    /// Zero-length End token at `offset`.
    pub const fn end(offset: u32, location: Location<'a>) -> Self {
        Token {
            kind: TokenKind::End,
            span: Span::empty(offset),
            location,
            table_index: None,
        }
    }

    /// Returns `true` for a complete, non-terminal match: every kind except
    /// `End` and `Invalid`.
    ///
    /// This is the only "success" signal the lexer offers. Branch on
    /// [`kind`](Self::kind) to tell `End` from `Invalid`.
    #[inline]
    pub const fn is_match(&self) -> bool {
        !matches!(self.kind, TokenKind::End | TokenKind::Invalid)
    }

    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::End)
    }

    /// The token's bytes within `source`.
    ///
    /// Returns `None` if `source` is shorter than the span, which can only
    /// happen when it is not the buffer the token was lexed from.
    pub fn lexeme<'s>(&self, source: &'s [u8]) -> Option<&'s [u8]> {
        self.span.slice(source)
    }
}

/// Size assertion: the kind, span and index fit beside the file pointer.
/// &str = 16, row/col = 8, span = 8, Option<u32> = 8, kind = 1 (+ padding).
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<Token<'static>>() <= 48);

#[cfg(test)]
mod tests;
