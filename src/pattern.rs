use std::collections::BTreeSet;
use std::fmt;
use std::slice;
use std::str::FromStr;

use crate::builder::{repeated_len, Builder, UnixWildcardBuilder};
use crate::error::{Error, Result};
use crate::matcher::{Matcher, MatcherBuilder};
use crate::parser::parse_unix_wildcard;

/// Kind tag of a [`Pattern`] node, passed to builders during rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Empty,
    AnyChar,
    CharSequence,
    OneOf,
    Group,
    AtLeast,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Empty => "empty",
            PatternKind::AnyChar => "any char",
            PatternKind::CharSequence => "char sequence",
            PatternKind::OneOf => "one of",
            PatternKind::Group => "group",
            PatternKind::AtLeast => "at least",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable wildcard pattern tree.
///
/// Trees are built by the parsers or composed directly with [`Pattern::of`],
/// [`Pattern::one_of`], [`Pattern::group`], [`Pattern::then`] and
/// [`Pattern::at_least`], and rendered into concrete dialects with
/// [`Pattern::render`].
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches the empty string only.
    Empty,
    /// Matches exactly one arbitrary character.
    AnyChar,
    /// Matches exactly the given literal.
    CharSequence(String),
    /// Matches one character drawn from the given candidates.
    OneOf(String),
    /// Matches the concatenation of its elements, in order.
    Group(Vec<Pattern>),
    /// Matches `pattern` repeated `count` times followed by anything.
    AtLeast { pattern: Box<Pattern>, count: usize },
}

pub const ANY_CHAR: Pattern = Pattern::AnyChar;
pub const EMPTY: Pattern = Pattern::Empty;

/// Pattern matching any string, `ANY_CHAR` repeated zero or more times.
pub fn any_string() -> Pattern {
    Pattern::AtLeast {
        pattern: Box::new(ANY_CHAR),
        count: 0,
    }
}

impl Pattern {
    pub fn of(chars: impl Into<String>) -> Pattern {
        Pattern::CharSequence(chars.into())
    }

    pub fn one_of(chars: impl Into<String>) -> Pattern {
        Pattern::OneOf(chars.into())
    }

    /// Concatenates `elements`.
    ///
    /// A single element is returned as is and no elements yield [`EMPTY`],
    /// so parsing `?` produces exactly [`ANY_CHAR`].
    pub fn group(elements: impl IntoIterator<Item = Pattern>) -> Pattern {
        let mut elements: Vec<Pattern> = elements.into_iter().collect();
        match elements.len() {
            0 => EMPTY,
            1 => elements.pop().unwrap_or(EMPTY),
            _ => Pattern::Group(elements),
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            Pattern::Empty => PatternKind::Empty,
            Pattern::AnyChar => PatternKind::AnyChar,
            Pattern::CharSequence(_) => PatternKind::CharSequence,
            Pattern::OneOf(_) => PatternKind::OneOf,
            Pattern::Group(_) => PatternKind::Group,
            Pattern::AtLeast { .. } => PatternKind::AtLeast,
        }
    }

    /// Immediate children: none for leaves, the repeated pattern for
    /// `AtLeast` and the elements, in order, for `Group`.
    pub fn children(&self) -> Children<'_> {
        let children: &[Pattern] = match self {
            Pattern::Group(elements) => elements,
            Pattern::AtLeast { pattern, .. } => slice::from_ref(&**pattern),
            _ => &[],
        };
        Children(children.iter())
    }

    /// Literal payload of `CharSequence` and `OneOf` nodes.
    pub fn chars(&self) -> Option<&str> {
        match self {
            Pattern::CharSequence(chars) | Pattern::OneOf(chars) => Some(chars),
            _ => None,
        }
    }

    /// Repetition count of `AtLeast` nodes.
    pub fn count(&self) -> Option<usize> {
        match self {
            Pattern::AtLeast { count, .. } => Some(*count),
            _ => None,
        }
    }

    /// Returns `true` if the pattern matches exactly one fixed string.
    pub fn is_simple(&self) -> bool {
        match self {
            Pattern::Empty | Pattern::CharSequence(_) => true,
            Pattern::AnyChar | Pattern::OneOf(_) | Pattern::AtLeast { .. } => false,
            Pattern::Group(elements) => elements.iter().all(Pattern::is_simple),
        }
    }

    /// Smallest string that any match of this pattern starts with.
    ///
    /// Every string matching the pattern compares greater than or equal to
    /// the bound, which lets callers restrict a sorted search range.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow for an `AtLeast` node built directly
    /// with a count too large for its repeated bound. [`Pattern::at_least`]
    /// rejects such counts.
    pub fn lower_bound(&self) -> String {
        match self {
            Pattern::Empty | Pattern::AnyChar => String::new(),
            Pattern::CharSequence(chars) => chars.clone(),
            Pattern::OneOf(chars) => chars.chars().min().map(String::from).unwrap_or_default(),
            Pattern::Group(elements) => {
                let mut bound = String::new();
                for element in elements {
                    bound.push_str(&element.lower_bound());
                    if !element.is_simple() {
                        break;
                    }
                }
                bound
            }
            Pattern::AtLeast { pattern, count } => {
                if pattern.is_simple() {
                    pattern.lower_bound().repeat(*count)
                } else if *count == 0 {
                    String::new()
                } else {
                    pattern.lower_bound()
                }
            }
        }
    }

    /// Pattern matching `self` followed by `next`.
    pub fn then(self, next: Pattern) -> Pattern {
        Pattern::Group(vec![self, next])
    }

    /// Pattern matching `self` repeated `count` times followed by anything.
    ///
    /// Fails with [`Error::InvalidArgument`] when `count` is negative, or
    /// when the repeated lower bound would not fit in a `String`.
    pub fn at_least<N>(self, count: N) -> Result<Pattern>
    where
        N: TryInto<usize> + Copy + fmt::Display,
    {
        let count = count.try_into().map_err(|_| {
            Error::InvalidArgument(format!("repetition count must be non-negative, got {count}"))
        })?;
        if self.is_simple() {
            repeated_len(self.lower_bound().len(), count)?;
        }
        Ok(Pattern::AtLeast {
            pattern: Box::new(self),
            count,
        })
    }

    /// Drives `builder` through a depth-first traversal of the tree and
    /// returns what it produces.
    pub fn render<B: Builder>(&self, mut builder: B) -> Result<B::Output> {
        self.render_fragment(&mut builder)?;
        builder.finalize()
    }

    fn render_fragment<B: Builder>(&self, builder: &mut B) -> Result<()> {
        log::trace!("rendering {}", self.kind());
        builder.begin(self.kind(), self.count(), self.chars())?;
        for child in self.children() {
            child.render_fragment(builder)?;
        }
        builder.end(self.kind())
    }

    /// Renders the pattern as a Unix wildcard with a custom escape character
    /// and additional characters to escape.
    pub fn to_unix_wildcard_with(&self, escape: char, specials: &[char]) -> Result<String> {
        self.render(UnixWildcardBuilder::with_specials(escape, specials))
    }

    /// Compiles the pattern into a regex-backed [`Matcher`].
    pub fn matcher(&self) -> Result<Matcher> {
        self.render(MatcherBuilder::new())
    }

    /// Tests whether `target` matches the pattern as a whole.
    pub fn test(&self, target: &str) -> Result<bool> {
        Ok(self.matcher()?.test(target))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pattern::Empty, Pattern::Empty) | (Pattern::AnyChar, Pattern::AnyChar) => true,
            (Pattern::CharSequence(a), Pattern::CharSequence(b)) => a == b,
            // candidates form a set, their order only matters for rendering
            (Pattern::OneOf(a), Pattern::OneOf(b)) => {
                a.chars().collect::<BTreeSet<_>>() == b.chars().collect::<BTreeSet<_>>()
            }
            (Pattern::Group(a), Pattern::Group(b)) => a == b,
            (
                Pattern::AtLeast { pattern: a, count: m },
                Pattern::AtLeast { pattern: b, count: n },
            ) => m == n && a == b,
            _ => false,
        }
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.render(UnixWildcardBuilder::new()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(parse_unix_wildcard(s))
    }
}

/// Iterator over the immediate children of a [`Pattern`].
#[derive(Clone, Debug)]
pub struct Children<'a>(slice::Iter<'a, Pattern>);

impl<'a> Iterator for Children<'a> {
    type Item = &'a Pattern;

    fn next(&mut self) -> Option<&'a Pattern> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Children<'_> {}
