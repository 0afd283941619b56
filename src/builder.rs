//! Builders turn a pattern tree into a concrete textual dialect.
//!
//! [`Pattern::render`](crate::Pattern::render) calls [`Builder::begin`] on
//! entering every node, [`Builder::end`] on leaving it and
//! [`Builder::finalize`] once the whole tree has been visited.

use crate::constants::{
    REGEX_ESCAPE, REGEX_OPERATORS, SQL92_ESCAPE, SQL92_WILDCARD_OPERATORS, UNIX_WILDCARD_ESCAPE,
    UNIX_WILDCARD_OPERATORS,
};
use crate::error::{Error, Result};
use crate::pattern::PatternKind;
use crate::tokenizer::{OperatorSet, TokenKind, Tokenizer};

/// Visitor driven by a depth-first traversal of a pattern tree.
///
/// `count` is only set for `AtLeast` nodes and `chars` only for
/// `CharSequence` and `OneOf` nodes. A builder serves a single traversal.
pub trait Builder {
    type Output;

    fn begin(&mut self, kind: PatternKind, count: Option<usize>, chars: Option<&str>) -> Result<()>;
    fn end(&mut self, kind: PatternKind) -> Result<()>;
    fn finalize(self) -> Result<Self::Output>;
}

/// Prefixes every character of `chars` found in `specials` with `escape`.
///
/// Without an escape character the text is returned unchanged.
pub fn escape(chars: &str, escape: Option<char>, specials: &OperatorSet) -> String {
    let Some(escape) = escape else {
        return chars.to_owned();
    };
    let mut buffer = String::with_capacity(chars.len());
    for token in Tokenizer::new(chars, None, specials) {
        if token.kind == TokenKind::Operator {
            buffer.push(escape);
        }
        buffer.push_str(&token.data);
    }
    buffer
}

/// Escape character and special characters of a dialect.
#[derive(Clone, Debug)]
struct Escaping {
    escape: Option<char>,
    specials: OperatorSet,
}

impl Escaping {
    /// The dialect's canonical specials, plus `extra` when given, plus the
    /// escape character itself.
    fn resolve(canonical: &[char], escape: Option<char>, extra: Option<&[char]>) -> Self {
        let specials = OperatorSet::from(canonical)
            .union(extra.unwrap_or_default().iter().copied())
            .union(escape);
        Self { escape, specials }
    }

    fn apply(&self, chars: Option<&str>) -> String {
        escape(chars.unwrap_or_default(), self.escape, &self.specials)
    }
}

fn required_count(count: Option<usize>) -> Result<usize> {
    count.ok_or(Error::MalformedAttributes("at least pattern without count"))
}

/// Byte length of `len` bytes repeated `count` times, if a `String` can hold it.
pub(crate) fn repeated_len(len: usize, count: usize) -> Result<usize> {
    len.checked_mul(count)
        .filter(|total| *total <= isize::MAX as usize)
        .ok_or_else(|| {
            Error::InvalidArgument(format!("repeating {len} bytes {count} times overflows"))
        })
}

/// Output buffer with a stack of marks, one per open scope.
///
/// Closing a scope splits off everything written since its mark so that the
/// fragment can be repeated or wrapped before being written back.
#[derive(Debug, Default)]
struct ScopedBuffer {
    text: String,
    marks: Vec<(usize, Option<usize>)>,
}

impl ScopedBuffer {
    fn open(&mut self, count: Option<usize>) {
        self.marks.push((self.text.len(), count));
    }

    fn close(&mut self) -> Result<(String, Option<usize>)> {
        let (start, count) = self
            .marks
            .pop()
            .ok_or(Error::MalformedAttributes("scope closed before it was opened"))?;
        Ok((self.text.split_off(start), count))
    }

    fn close_repeated(&mut self, tail: char) -> Result<()> {
        let (fragment, count) = self.close()?;
        let count = required_count(count)?;
        repeated_len(fragment.len(), count)?;
        self.text.push_str(&fragment.repeat(count));
        self.text.push(tail);
        Ok(())
    }

    fn close_transparent(&mut self) -> Result<()> {
        let (fragment, _) = self.close()?;
        self.text.push_str(&fragment);
        Ok(())
    }
}

/// Renders a pattern as anchored regular expression source.
#[derive(Debug)]
pub struct RegexSourceBuilder {
    buffer: String,
    scopes: Vec<Option<usize>>,
    escaping: Escaping,
}

impl RegexSourceBuilder {
    pub fn new() -> Self {
        Self {
            buffer: String::from("^"),
            scopes: Vec::new(),
            escaping: Escaping::resolve(REGEX_OPERATORS, Some(REGEX_ESCAPE), None),
        }
    }

    fn in_repetition(&self) -> bool {
        matches!(self.scopes.last(), Some(Some(_)))
    }
}

impl Default for RegexSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for RegexSourceBuilder {
    type Output = String;

    fn begin(
        &mut self,
        kind: PatternKind,
        count: Option<usize>,
        chars: Option<&str>,
    ) -> Result<()> {
        match kind {
            PatternKind::AnyChar => self.buffer.push('.'),
            PatternKind::CharSequence => {
                let literal = self.escaping.apply(chars);
                // a quantifier must apply to the literal as a whole
                if self.in_repetition() && chars.unwrap_or_default().chars().count() != 1 {
                    self.buffer.push_str("(?:");
                    self.buffer.push_str(&literal);
                    self.buffer.push(')');
                } else {
                    self.buffer.push_str(&literal);
                }
            }
            PatternKind::Empty => {
                if self.in_repetition() {
                    self.buffer.push_str("(?:)");
                }
            }
            PatternKind::OneOf => match chars.unwrap_or_default() {
                // no candidates, so nothing can match
                "" => self.buffer.push_str("[^\\x00-\\x{10FFFF}"),
                _ => {
                    self.buffer.push('[');
                    self.buffer.push_str(&self.escaping.apply(chars));
                }
            },
            PatternKind::Group => {
                self.scopes.push(None);
                self.buffer.push('(');
            }
            PatternKind::AtLeast => self.scopes.push(Some(required_count(count)?)),
        }
        Ok(())
    }

    fn end(&mut self, kind: PatternKind) -> Result<()> {
        match kind {
            PatternKind::Group => {
                self.scopes.pop();
                self.buffer.push(')');
            }
            PatternKind::OneOf => self.buffer.push(']'),
            PatternKind::AtLeast => {
                let count = self
                    .scopes
                    .pop()
                    .ok_or(Error::MalformedAttributes("scope closed before it was opened"))?;
                match required_count(count)? {
                    0 => self.buffer.push('*'),
                    1 => self.buffer.push('+'),
                    n => self.buffer.push_str(&format!("{{{n},}}")),
                }
            }
            PatternKind::Empty | PatternKind::AnyChar | PatternKind::CharSequence => {}
        }
        Ok(())
    }

    fn finalize(mut self) -> Result<String> {
        self.buffer.push('$');
        Ok(self.buffer)
    }
}

/// Renders a pattern as a Unix wildcard (`*`, `?`, `[...]`).
#[derive(Debug)]
pub struct UnixWildcardBuilder {
    buffer: ScopedBuffer,
    escaping: Escaping,
}

impl UnixWildcardBuilder {
    pub fn new() -> Self {
        Self::with_escape(UNIX_WILDCARD_ESCAPE)
    }

    pub fn with_escape(escape: char) -> Self {
        Self::build(escape, None)
    }

    /// Escapes `specials` in addition to the wildcard operators.
    pub fn with_specials(escape: char, specials: &[char]) -> Self {
        Self::build(escape, Some(specials))
    }

    fn build(escape: char, specials: Option<&[char]>) -> Self {
        Self {
            buffer: ScopedBuffer::default(),
            escaping: Escaping::resolve(UNIX_WILDCARD_OPERATORS, Some(escape), specials),
        }
    }
}

impl Default for UnixWildcardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for UnixWildcardBuilder {
    type Output = String;

    fn begin(
        &mut self,
        kind: PatternKind,
        count: Option<usize>,
        chars: Option<&str>,
    ) -> Result<()> {
        match kind {
            PatternKind::AnyChar => self.buffer.text.push('?'),
            PatternKind::CharSequence => self.buffer.text.push_str(&self.escaping.apply(chars)),
            PatternKind::Group => self.buffer.open(None),
            PatternKind::OneOf => {
                self.buffer.open(None);
                self.buffer.text.push('[');
                self.buffer.text.push_str(&self.escaping.apply(chars));
            }
            PatternKind::AtLeast => self.buffer.open(Some(required_count(count)?)),
            PatternKind::Empty => {}
        }
        Ok(())
    }

    fn end(&mut self, kind: PatternKind) -> Result<()> {
        match kind {
            PatternKind::Group => self.buffer.close_transparent(),
            PatternKind::OneOf => {
                self.buffer.text.push(']');
                self.buffer.close_transparent()
            }
            PatternKind::AtLeast => self.buffer.close_repeated('*'),
            PatternKind::Empty | PatternKind::AnyChar | PatternKind::CharSequence => Ok(()),
        }
    }

    fn finalize(self) -> Result<String> {
        Ok(self.buffer.text)
    }
}

/// Renders a pattern as an SQL92 `LIKE` expression (`%`, `_`).
///
/// SQL92 has no character classes, so `OneOf` degrades to `_`.
#[derive(Debug)]
pub struct Sql92Builder {
    buffer: ScopedBuffer,
    escaping: Escaping,
}

impl Sql92Builder {
    pub fn new() -> Self {
        Self::with_escape(SQL92_ESCAPE)
    }

    pub fn with_escape(escape: char) -> Self {
        Self::build(escape, None)
    }

    /// Escapes `specials` in addition to `%` and `_`.
    pub fn with_specials(escape: char, specials: &[char]) -> Self {
        Self::build(escape, Some(specials))
    }

    fn build(escape: char, specials: Option<&[char]>) -> Self {
        Self {
            buffer: ScopedBuffer::default(),
            escaping: Escaping::resolve(SQL92_WILDCARD_OPERATORS, Some(escape), specials),
        }
    }
}

impl Default for Sql92Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for Sql92Builder {
    type Output = String;

    fn begin(
        &mut self,
        kind: PatternKind,
        count: Option<usize>,
        chars: Option<&str>,
    ) -> Result<()> {
        match kind {
            PatternKind::AnyChar | PatternKind::OneOf => self.buffer.text.push('_'),
            PatternKind::CharSequence => self.buffer.text.push_str(&self.escaping.apply(chars)),
            PatternKind::Group => self.buffer.open(None),
            PatternKind::AtLeast => self.buffer.open(Some(required_count(count)?)),
            PatternKind::Empty => {}
        }
        Ok(())
    }

    fn end(&mut self, kind: PatternKind) -> Result<()> {
        match kind {
            PatternKind::Group => self.buffer.close_transparent(),
            PatternKind::AtLeast => self.buffer.close_repeated('%'),
            PatternKind::Empty
            | PatternKind::AnyChar
            | PatternKind::CharSequence
            | PatternKind::OneOf => Ok(()),
        }
    }

    fn finalize(self) -> Result<String> {
        Ok(self.buffer.text)
    }
}

/// Renders patterns that denote a single fixed string.
///
/// Any wildcard construct aborts the render with
/// [`Error::UnsupportedConstruct`]. Nothing is escaped unless an escape
/// character is configured.
#[derive(Debug)]
pub struct SimplePatternBuilder {
    buffer: String,
    escaping: Escaping,
}

impl SimplePatternBuilder {
    pub fn new() -> Self {
        Self::build(None, None)
    }

    pub fn with_escape(escape: char) -> Self {
        Self::build(Some(escape), None)
    }

    pub fn with_specials(escape: char, specials: &[char]) -> Self {
        Self::build(Some(escape), Some(specials))
    }

    fn build(escape: Option<char>, specials: Option<&[char]>) -> Self {
        Self {
            buffer: String::new(),
            escaping: Escaping::resolve(&[], escape, specials),
        }
    }
}

impl Default for SimplePatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for SimplePatternBuilder {
    type Output = String;

    fn begin(
        &mut self,
        kind: PatternKind,
        _count: Option<usize>,
        chars: Option<&str>,
    ) -> Result<()> {
        match kind {
            PatternKind::AnyChar | PatternKind::OneOf | PatternKind::AtLeast => {
                return Err(Error::UnsupportedConstruct(kind.as_str()));
            }
            PatternKind::CharSequence => self.buffer.push_str(&self.escaping.apply(chars)),
            PatternKind::Empty | PatternKind::Group => {}
        }
        Ok(())
    }

    fn end(&mut self, _kind: PatternKind) -> Result<()> {
        Ok(())
    }

    fn finalize(self) -> Result<String> {
        Ok(self.buffer)
    }
}
