//! Token stream shared by the parsers and the escaping utility.
//!
//! Raw text is split into maximal runs of ordinary characters and single
//! operator characters. An escape character, when configured, makes the
//! character following it ordinary.

use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

/// An immutable set of characters treated as operators by a [`Tokenizer`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorSet(BTreeSet<char>);

impl OperatorSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self(chars.into_iter().collect())
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    /// Returns a new set holding the characters of both `self` and `chars`.
    pub fn union(&self, chars: impl IntoIterator<Item = char>) -> Self {
        let mut set = self.0.clone();
        set.extend(chars);
        Self(set)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[char]> for OperatorSet {
    fn from(chars: &[char]) -> Self {
        Self::new(chars.iter().copied())
    }
}

impl FromIterator<char> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    CharSequence,
    Operator,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub data: String,
}

impl Token {
    pub fn char_sequence(data: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::CharSequence,
            data: data.into(),
        }
    }

    pub fn operator(ch: char) -> Self {
        Self {
            kind: TokenKind::Operator,
            data: ch.to_string(),
        }
    }
}

/// Lazy token stream with one token of lookahead.
///
/// [`current`](Tokenizer::current) peeks at the token under the cursor and
/// [`advance`](Tokenizer::advance) moves past it. The type is also an
/// [`Iterator`] yielding the remaining tokens.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    escape: Option<char>,
    operators: &'a OperatorSet,
    current: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, escape: Option<char>, operators: &'a OperatorSet) -> Self {
        let mut tokenizer = Self {
            chars: text.chars().peekable(),
            escape,
            operators,
            current: None,
        };
        tokenizer.advance();
        tokenizer
    }

    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn advance(&mut self) {
        self.current = self.scan();
        log::trace!("token: {:?}", self.current);
    }

    fn scan(&mut self) -> Option<Token> {
        let first = *self.chars.peek()?;
        if Some(first) != self.escape && self.operators.contains(first) {
            self.chars.next();
            return Some(Token::operator(first));
        }

        let mut data = String::new();
        while let Some(&ch) = self.chars.peek() {
            if Some(ch) == self.escape {
                self.chars.next();
                // A trailing escape stands for itself.
                data.push(self.chars.next().unwrap_or(ch));
            } else if self.operators.contains(ch) {
                break;
            } else {
                data.push(ch);
                self.chars.next();
            }
        }
        Some(Token::char_sequence(data))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.current.take()?;
        self.advance();
        Some(token)
    }
}
