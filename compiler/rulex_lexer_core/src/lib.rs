//! Low-level tokenizer for rulex rule-definition files.
//!
//! A [`SourceBuffer`] holds the input, terminated by a `0x00` sentinel. A
//! [`Lexer`] walks it with a line-tracking [`Cursor`] and produces
//! [`Token`]s: punctuation from the configured [`LiteralTable`], whatever
//! the installed [`Classifier`]s accept, `Invalid` for any other byte, and
//! finally a repeatable zero-length `End`.
//!
//! Tokens carry spans and locations, never copies of the text.
//!
//! ```
//! use rulex_lexer_core::{Lexer, LexerConfig, SourceBuffer, TokenKind};
//!
//! let config = LexerConfig::default();
//! let source = SourceBuffer::new("a, b");
//! let kinds: Vec<TokenKind> = Lexer::new(&config, "rules.lex", &source)
//!     .map(|tok| tok.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Invalid, TokenKind::Punct, TokenKind::Invalid, TokenKind::End]
//! );
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod classify;
mod config;
mod cursor;
mod lexer;
mod source_buffer;
mod table;
mod tag;
mod token;

pub use classify::{Classified, Classifier, ClassifierChain};
pub use config::LexerConfig;
pub use cursor::{is_whitespace, Cursor};
pub use lexer::Lexer;
pub use source_buffer::{LoadError, SourceBuffer};
pub use table::{LiteralTable, MatchPolicy, Punct, TableError};
pub use tag::TokenKind;
pub use token::{Location, Span, Token};
