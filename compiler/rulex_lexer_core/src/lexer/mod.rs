//! Token production.
//!
//! [`Lexer::next_token`] skips whitespace, then tries punctuation, then the
//! installed classifiers, and finally falls back to a one-byte `Invalid`
//! token. Scanning never fails: every call consumes at least one byte or
//! returns `End`.

use std::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::{Cursor, LexerConfig, Location, SourceBuffer, Span, Token, TokenKind};

/// Tokenizer over one [`SourceBuffer`].
///
/// The lexer borrows both the buffer and its [`LexerConfig`] for `'a`, so
/// the buffer cannot be appended to while the lexer or any token it
/// produced is alive.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    source: &'a SourceBuffer,
    file: &'a str,
    config: &'a LexerConfig,
    /// Set once the iterator has yielded `End`.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Start lexing `source` from offset 0. `file` is the identifier every
    /// token's [`Location`] carries.
    ///
    /// Logs a warning when the configuration has a punctuation literal that
    /// can never match (see [`LexerConfig::shadowed_literal`]).
    pub fn new(config: &'a LexerConfig, file: &'a str, source: &'a SourceBuffer) -> Self {
        debug!(
            file,
            len = source.len(),
            punctuation = config.punctuation().len(),
            policy = ?config.policy(),
            classifiers = config.classifiers().len(),
            "lexer created"
        );
        if let Some((short, long)) = config.shadowed_literal() {
            let literal = |index| {
                config
                    .punctuation()
                    .get(index)
                    .unwrap_or_default()
                    .escape_ascii()
                    .to_string()
            };
            warn!(
                file,
                short = %literal(short),
                long = %literal(long),
                "punctuation literal #{long} can never match; #{short} is a prefix of it"
            );
        }
        Self {
            cursor: source.cursor(),
            source,
            file,
            config,
            finished: false,
        }
    }

    /// Location of the cursor (before any pending whitespace is skipped).
    pub fn location(&self) -> Location<'a> {
        Location::new(self.file, self.cursor.row() + 1, self.cursor.column())
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    pub fn source(&self) -> &'a SourceBuffer {
        self.source
    }

    pub fn config(&self) -> &'a LexerConfig {
        self.config
    }

    /// Produce the next token.
    ///
    /// Returns a zero-length `End` token once the buffer is exhausted, and
    /// keeps returning the same `End` on every later call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.eat_whitespace();
        let location = self.location();
        let start = self.cursor.pos();

        if self.cursor.is_eof() {
            trace!(offset = start, "end");
            return Token::end(start, location);
        }

        let (kind, table_index) = self.scan();
        let span = Span::new(start, self.cursor.pos());
        trace!(%kind, start = span.start, end = span.end, ?table_index, "token");
        Token {
            kind,
            span,
            location,
            table_index,
        }
    }

    /// Consume one token's bytes. The cursor is past whitespace and not at
    /// the end.
    fn scan(&mut self) -> (TokenKind, Option<u32>) {
        let rest = self.cursor.rest();

        if let Some((index, len)) = self
            .config
            .punctuation()
            .match_at(rest, self.config.policy())
        {
            self.cursor.advance_n(len);
            return (TokenKind::Punct, Some(index));
        }

        if let Some(found) = self
            .config
            .classifiers()
            .classify(rest, self.config.keywords())
        {
            self.cursor.advance_n(found.len);
            return (found.kind, found.table_index);
        }

        self.cursor.advance();
        (TokenKind::Invalid, None)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token up to and including the first `End`.
    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_end();
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
