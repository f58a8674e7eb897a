//! Pluggable recognizers tried after punctuation matching fails.
//!
//! The core ships no classifiers: without any installed, every byte that is
//! neither whitespace nor punctuation becomes a one-byte `Invalid` token.
//! Literal, string and symbol grammars plug in here.

use std::fmt;

use crate::{LiteralTable, TokenKind};

/// Result of a classifier accepting a prefix of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Classified {
    pub kind: TokenKind,
    /// Bytes to consume. Zero is treated as a refusal.
    pub len: u32,
    /// Index into the keyword table. Required for `Keyword`, must be `None`
    /// for every other kind.
    pub table_index: Option<u32>,
}

impl Classified {
    pub const fn new(kind: TokenKind, len: u32) -> Self {
        Classified {
            kind,
            len,
            table_index: None,
        }
    }

    #[must_use]
    pub const fn with_table_index(mut self, index: u32) -> Self {
        self.table_index = Some(index);
        self
    }
}

/// Recognizer consulted with the unconsumed input.
///
/// `rest` is never empty and never starts with whitespace. Return the
/// longest prefix the classifier recognizes, or `None` to pass.
///
/// # Contract
///
/// `len` is clamped to `rest.len()`. The chain then treats a result as a
/// refusal when:
///
/// - `len` is zero;
/// - the kind is `End`, `Invalid` or `Punct` (those come only from the lexer);
/// - the kind is `Keyword` and `table_index` does not name a keyword equal
///   to the accepted bytes;
/// - any other kind carries a `table_index`.
pub trait Classifier: Send + Sync {
    fn classify(&self, rest: &[u8]) -> Option<Classified>;

    /// Name used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> Classifier for F
where
    F: Fn(&[u8]) -> Option<Classified> + Send + Sync,
{
    fn classify(&self, rest: &[u8]) -> Option<Classified> {
        self(rest)
    }
}

/// Ordered classifiers; the first acceptance wins.
#[derive(Default)]
pub struct ClassifierChain {
    classifiers: Vec<Box<dyn Classifier>>,
}

impl ClassifierChain {
    pub fn push(&mut self, classifier: impl Classifier + 'static) {
        self.classifiers.push(Box::new(classifier));
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }

    /// Offer `rest` to each classifier in order.
    ///
    /// Returns the first well-formed result with `len` clamped to
    /// `rest.len()`. `keywords` is the table `Keyword` indices refer to.
    pub fn classify(&self, rest: &[u8], keywords: &LiteralTable) -> Option<Classified> {
        let available = u32::try_from(rest.len()).unwrap_or(u32::MAX);
        self.classifiers.iter().find_map(|classifier| {
            let mut found = classifier.classify(rest)?;
            found.len = found.len.min(available);
            if !is_well_formed(found, rest, keywords) {
                tracing::debug!(
                    classifier = classifier.name(),
                    kind = %found.kind,
                    len = found.len,
                    table_index = ?found.table_index,
                    "ignoring unusable classification"
                );
                return None;
            }
            Some(found)
        })
    }
}

/// `found.len` is already clamped to `rest.len()`.
fn is_well_formed(found: Classified, rest: &[u8], keywords: &LiteralTable) -> bool {
    if found.len == 0 {
        return false;
    }
    match found.kind {
        TokenKind::End | TokenKind::Invalid | TokenKind::Punct => false,
        TokenKind::Keyword => found
            .table_index
            .and_then(|index| keywords.get(index))
            .is_some_and(|keyword| *keyword == rest[..found.len as usize]),
        kind => {
            debug_assert!(!kind.is_table_backed());
            found.table_index.is_none()
        }
    }
}

impl fmt::Debug for ClassifierChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.classifiers.iter().map(|c| c.name()))
            .finish()
    }
}
