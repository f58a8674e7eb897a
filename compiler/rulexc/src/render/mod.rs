//! Token listing output.

use std::fmt;
use std::io::{self, Write};

use rulex_lexer_core::{Lexer, Token, TokenKind};

/// Counts printed after the token listing. `End` is not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub tokens: usize,
    pub invalid: usize,
}

impl Summary {
    fn record(&mut self, token: &Token<'_>) {
        if token.is_end() {
            return;
        }
        self.tokens += 1;
        if token.kind == TokenKind::Invalid {
            self.invalid += 1;
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tokens, {} invalid", self.tokens, self.invalid)
    }
}

/// Write one line per token through `End`.
///
/// Line format: `<file>:<row>:<col>: <KIND> <lexeme> #<index>`. The lexeme
/// is ASCII-escaped and omitted when empty; the index only appears for
/// table-backed tokens.
pub fn render_tokens<W: Write>(lexer: Lexer<'_>, out: &mut W) -> io::Result<Summary> {
    let source = lexer.source().as_bytes();
    let mut summary = Summary::default();
    for token in lexer {
        write_token(out, &token, source)?;
        summary.record(&token);
    }
    Ok(summary)
}

fn write_token<W: Write>(out: &mut W, token: &Token<'_>, source: &[u8]) -> io::Result<()> {
    write!(out, "{}: {}", token.location, token.kind)?;
    let lexeme = token.lexeme(source).unwrap_or_default();
    if !lexeme.is_empty() {
        write!(out, " {}", lexeme.escape_ascii())?;
    }
    if let Some(index) = token.table_index.filter(|_| token.kind.is_table_backed()) {
        write!(out, " #{index}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests;
