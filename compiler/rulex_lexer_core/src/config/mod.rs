//! Lexer configuration.
//!
//! A [`LexerConfig`] is built once and then only borrowed: every
//! [`Lexer`](crate::Lexer) created from it sees the same tables for its
//! whole lifetime. The config is `Send + Sync`, so lexers over independent
//! buffers may share one across threads.

use crate::{Classifier, ClassifierChain, LiteralTable, MatchPolicy};

/// Classification tables and policies for a [`Lexer`](crate::Lexer).
#[derive(Debug)]
pub struct LexerConfig {
    punctuation: LiteralTable,
    keywords: LiteralTable,
    policy: MatchPolicy,
    classifiers: ClassifierChain,
}

impl LexerConfig {
    /// Config with the given punctuation table and nothing else.
    pub fn new(punctuation: LiteralTable) -> Self {
        Self {
            punctuation,
            keywords: LiteralTable::default(),
            policy: MatchPolicy::default(),
            classifiers: ClassifierChain::default(),
        }
    }

    /// Replace the keyword table.
    ///
    /// The built-in recognizer does not consult keywords; installed
    /// classifiers and parsers read them through [`keywords()`](Self::keywords).
    #[must_use]
    pub fn with_keywords(mut self, keywords: LiteralTable) -> Self {
        self.keywords = keywords;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a classifier, tried after punctuation and after every
    /// classifier added before it.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Classifier + 'static) -> Self {
        self.classifiers.push(classifier);
        self
    }

    pub fn punctuation(&self) -> &LiteralTable {
        &self.punctuation
    }

    pub fn keywords(&self) -> &LiteralTable {
        &self.keywords
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn classifiers(&self) -> &ClassifierChain {
        &self.classifiers
    }

    /// Punctuation entries `(i, j)` where `j` is unreachable because the
    /// policy is [`MatchPolicy::FirstInTable`] and entry `i` is a proper
    /// prefix of entry `j`.
    ///
    /// Always `None` under [`MatchPolicy::Longest`].
    pub fn shadowed_literal(&self) -> Option<(u32, u32)> {
        match self.policy {
            MatchPolicy::FirstInTable => self.punctuation.shadowed_literal(),
            MatchPolicy::Longest => None,
        }
    }
}

impl Default for LexerConfig {
    /// Rule-file punctuation, no keywords, first-in-table matching.
    fn default() -> Self {
        Self::new(LiteralTable::rule_punctuation())
    }
}

#[cfg(test)]
mod tests;
