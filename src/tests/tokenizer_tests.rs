use std::collections::BTreeSet;

use map_macro::btree_set;

use crate::{
    sql92_wildcard_operators, unix_wildcard_operators, OperatorSet, Token, TokenKind, Tokenizer,
    NO_ESCAPE, REGEX_OPERATORS, UNIX_WILDCARD_ESCAPE,
};

fn tokens(text: &str, escape: Option<char>) -> Vec<Token> {
    Tokenizer::new(text, escape, unix_wildcard_operators()).collect()
}

#[test]
fn test_operator_constants() {
    assert_eq!(
        unix_wildcard_operators().iter().collect::<BTreeSet<_>>(),
        btree_set! { '*', '?', '[', ']', '"' }
    );
    assert_eq!(
        sql92_wildcard_operators().iter().collect::<BTreeSet<_>>(),
        btree_set! { '%', '_' }
    );
    assert!(REGEX_OPERATORS.contains(&'.'));
    assert!(!REGEX_OPERATORS.contains(&'\\'));
}

#[test]
fn test_operator_set_union_leaves_original() {
    let base = OperatorSet::from(&['a', 'b'][..]);
    let extended = base.union(['c', 'a']);
    assert_eq!(base.len(), 2);
    assert_eq!(extended.len(), 3);
    assert!(extended.contains('c'));
    assert!(!base.contains('c'));
    assert!(OperatorSet::default().is_empty());
    assert_eq!("ba".chars().collect::<OperatorSet>(), base);
}

#[test]
fn test_tokenize_operators_and_text() {
    assert_eq!(
        tokens("ab*c?", Some(UNIX_WILDCARD_ESCAPE)),
        vec![
            Token::char_sequence("ab"),
            Token::operator('*'),
            Token::char_sequence("c"),
            Token::operator('?'),
        ]
    );
}

#[test]
fn test_tokenize_consecutive_operators() {
    let kinds: Vec<TokenKind> = tokens("**", Some(UNIX_WILDCARD_ESCAPE))
        .into_iter()
        .map(|token| token.kind)
        .collect();
    assert_eq!(kinds, vec![TokenKind::Operator, TokenKind::Operator]);
}

#[test]
fn test_tokenize_escaped_operator() {
    assert_eq!(tokens("a\\*b", Some('\\')), vec![Token::char_sequence("a*b")]);
    assert_eq!(tokens("\\*", Some('\\')), vec![Token::char_sequence("*")]);
    assert_eq!(tokens("a\\\\", Some('\\')), vec![Token::char_sequence("a\\")]);
}

#[test]
fn test_tokenize_trailing_escape() {
    assert_eq!(tokens("ab\\", Some('\\')), vec![Token::char_sequence("ab\\")]);
}

#[test]
fn test_tokenize_without_escape() {
    assert_eq!(
        tokens("a\\*", NO_ESCAPE),
        vec![Token::char_sequence("a\\"), Token::operator('*')]
    );
}

#[test]
fn test_escape_takes_precedence_over_operator() {
    let operators = OperatorSet::from(&['+', '*'][..]);
    let tokens: Vec<Token> = Tokenizer::new("+*+a", Some('+'), &operators).collect();
    assert_eq!(tokens, vec![Token::char_sequence("*a")]);
}

#[test]
fn test_current_and_advance() {
    let mut tokenizer = Tokenizer::new("a*", None, unix_wildcard_operators());
    assert_eq!(tokenizer.current(), Some(&Token::char_sequence("a")));
    // current does not move the cursor
    assert_eq!(tokenizer.current(), Some(&Token::char_sequence("a")));
    tokenizer.advance();
    assert_eq!(tokenizer.current(), Some(&Token::operator('*')));
    tokenizer.advance();
    assert_eq!(tokenizer.current(), None);
    tokenizer.advance();
    assert_eq!(tokenizer.current(), None);
}

#[test]
fn test_empty_input() {
    assert!(tokens("", Some('\\')).is_empty());
}
