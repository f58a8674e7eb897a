//! Ordered literal tables.
//!
//! A [`LiteralTable`] is an ordered list of byte literals. An entry's
//! position is its stable index, which tokens carry as
//! [`Token::table_index`](crate::Token::table_index) so callers can
//! classify a match without comparing bytes.
//!
//! Tables are plain values bound into a [`LexerConfig`](crate::LexerConfig),
//! so several lexers with different vocabularies can coexist.

use crate::cursor::starts_with_bounded;

/// Failure building a [`LiteralTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// An empty literal matches everywhere without consuming input.
    #[error("literal #{index} is empty")]
    EmptyLiteral { index: usize },
    /// Indices are carried as `u32`.
    #[error("table has {count} literals (limit is {})", u32::MAX)]
    TooManyLiterals { count: usize },
}

/// How the lexer chooses among literals that match at the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// First matching entry in table order wins.
    ///
    /// Unambiguous only while no entry is a prefix of a later entry; see
    /// [`LiteralTable::shadowed_literal`].
    #[default]
    FirstInTable,
    /// Longest matching entry wins; equal lengths fall back to table order.
    Longest,
}

/// Ordered, non-empty byte literals with stable indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LiteralTable {
    literals: Vec<Box<[u8]>>,
}

impl LiteralTable {
    /// Build a table from literals in index order.
    pub fn new<I, L>(literals: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let literals: Vec<Box<[u8]>> = literals
            .into_iter()
            .map(|lit| Box::from(lit.as_ref()))
            .collect();
        if let Some(index) = literals.iter().position(|lit| lit.is_empty()) {
            return Err(TableError::EmptyLiteral { index });
        }
        if u32::try_from(literals.len()).is_err() {
            return Err(TableError::TooManyLiterals {
                count: literals.len(),
            });
        }
        Ok(Self { literals })
    }

    /// The rule-file punctuation table: `|` `,` `(` `)` `;`.
    ///
    /// Indices match [`Punct`].
    pub fn rule_punctuation() -> Self {
        Self {
            literals: Punct::ALL
                .iter()
                .map(|p| Box::from(p.lexeme().as_bytes()))
                .collect(),
        }
    }

    /// Literal at `index`.
    pub fn get(&self, index: u32) -> Option<&[u8]> {
        self.literals.get(index as usize).map(|lit| &**lit)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Literals in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.literals.iter().map(|lit| &**lit)
    }

    /// Find the entry matching a prefix of `bytes`.
    ///
    /// Returns `(index, len)`. A literal longer than `bytes` never matches.
    pub fn match_at(&self, bytes: &[u8], policy: MatchPolicy) -> Option<(u32, u32)> {
        let mut matches = self
            .literals
            .iter()
            .enumerate()
            .filter(|(_, lit)| starts_with_bounded(bytes, lit));

        let (index, literal) = match policy {
            MatchPolicy::FirstInTable => matches.next()?,
            // Equal lengths rank the lower index higher.
            MatchPolicy::Longest => matches.max_by(|(ia, a), (ib, b)| {
                a.len().cmp(&b.len()).then_with(|| ib.cmp(ia))
            })?,
        };
        Some((
            u32::try_from(index).ok()?,
            u32::try_from(literal.len()).ok()?,
        ))
    }

    /// First pair `(i, j)` with `i < j` where entry `i` is a proper prefix of
    /// entry `j`.
    ///
    /// Under [`MatchPolicy::FirstInTable`] entry `j` can then never match
    /// where entry `i` also does. Reorder longest-first or switch to
    /// [`MatchPolicy::Longest`].
    pub fn shadowed_literal(&self) -> Option<(u32, u32)> {
        for (i, short) in self.literals.iter().enumerate() {
            for (j, long) in self.literals.iter().enumerate().skip(i + 1) {
                if long.len() > short.len() && long.starts_with(short) {
                    return Some((u32::try_from(i).ok()?, u32::try_from(j).ok()?));
                }
            }
        }
        None
    }
}

/// Entries of [`LiteralTable::rule_punctuation`], by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Punct {
    /// `|`
    Bar = 0,
    /// `,`
    Comma = 1,
    /// `(`
    OpenParen = 2,
    /// `)`
    CloseParen = 3,
    /// `;`
    Semicolon = 4,
}

impl Punct {
    pub const ALL: [Punct; 5] = [
        Punct::Bar,
        Punct::Comma,
        Punct::OpenParen,
        Punct::CloseParen,
        Punct::Semicolon,
    ];

    /// Table index.
    pub const fn index(self) -> u32 {
        self as u32
    }

    pub const fn lexeme(self) -> &'static str {
        match self {
            Punct::Bar => "|",
            Punct::Comma => ",",
            Punct::OpenParen => "(",
            Punct::CloseParen => ")",
            Punct::Semicolon => ";",
        }
    }
}
