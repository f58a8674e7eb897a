use super::*;
use crate::{Classified, TokenKind};

#[test]
fn default_uses_rule_punctuation() {
    let config = LexerConfig::default();
    assert_eq!(config.punctuation(), &LiteralTable::rule_punctuation());
    assert!(config.keywords().is_empty());
    assert_eq!(config.policy(), MatchPolicy::FirstInTable);
    assert!(config.classifiers().is_empty());
}

#[test]
fn builders_replace_fields() {
    let keywords = LiteralTable::new(["rule", "token"]).unwrap();
    let config = LexerConfig::default()
        .with_keywords(keywords.clone())
        .with_policy(MatchPolicy::Longest)
        .with_classifier(|_: &[u8]| Some(Classified::new(TokenKind::Symbol, 1)));
    assert_eq!(config.keywords(), &keywords);
    assert_eq!(config.policy(), MatchPolicy::Longest);
    assert_eq!(config.classifiers().len(), 1);
}

#[test]
fn shadowing_reported_only_for_first_in_table() {
    let table = LiteralTable::new(["-", "->"]).unwrap();
    let config = LexerConfig::new(table.clone());
    assert_eq!(config.shadowed_literal(), Some((0, 1)));

    let config = LexerConfig::new(table).with_policy(MatchPolicy::Longest);
    assert_eq!(config.shadowed_literal(), None);
}

#[test]
fn config_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LexerConfig>();
}
