//! Token kind taxonomy.
//!
//! The set is closed: seven kinds, one byte each. Only `Invalid`, `End`
//! and `Punct` are produced by the built-in recognizer. `Int`, `String`,
//! `Keyword` and `Symbol` exist so that installed
//! [`Classifier`](crate::Classifier)s and downstream parsers share one
//! vocabulary.

use std::fmt;

/// Classification of a lexed span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// Byte nothing recognized. Always one byte long.
    Invalid = 0,
    /// End of input. Always zero-length.
    End = 1,
    /// Integer literal.
    Int = 2,
    /// Quoted string literal.
    String = 3,
    /// Entry of the keyword table.
    Keyword = 4,
    /// Identifier-like symbol.
    Symbol = 5,
    /// Entry of the punctuation table.
    Punct = 6,
}

impl TokenKind {
    /// Number of kinds.
    pub const COUNT: usize = 7;

    /// All kinds in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Invalid,
        TokenKind::End,
        TokenKind::Int,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Symbol,
        TokenKind::Punct,
    ];

    /// Upper-case display name (`"PUNCT"`, `"END"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Invalid => "INVALID",
            TokenKind::End => "END",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Punct => "PUNCT",
        }
    }

    /// Kinds that index into a [`LiteralTable`](crate::LiteralTable).
    pub const fn is_table_backed(self) -> bool {
        matches!(self, TokenKind::Keyword | TokenKind::Punct)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
const _: () = assert!(TokenKind::ALL.len() == TokenKind::Punct as usize + 1);
