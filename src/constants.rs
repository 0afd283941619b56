//! Operator alphabets and escape characters of the supported dialects.

use std::sync::LazyLock;

use crate::tokenizer::OperatorSet;

pub const UNIX_WILDCARD_OPERATORS: &[char] = &['*', '?', '[', ']', '"'];
pub const SQL92_WILDCARD_OPERATORS: &[char] = &['%', '_'];
pub const REGEX_OPERATORS: &[char] = &[
    '[', ']', '(', ')', '*', '+', '?', '|', '.', ',', '^', '$', '{', '}', '#', '&', '-', '~',
];

pub const UNIX_WILDCARD_ESCAPE: char = '\\';
pub const SQL92_ESCAPE: char = '\\';
pub const REGEX_ESCAPE: char = '\\';
pub const NO_ESCAPE: Option<char> = None;

static UNIX_WILDCARD_SET: LazyLock<OperatorSet> =
    LazyLock::new(|| OperatorSet::from(UNIX_WILDCARD_OPERATORS));
static SQL92_WILDCARD_SET: LazyLock<OperatorSet> =
    LazyLock::new(|| OperatorSet::from(SQL92_WILDCARD_OPERATORS));

/// Default operator alphabet of the Unix wildcard parser.
pub fn unix_wildcard_operators() -> &'static OperatorSet {
    &UNIX_WILDCARD_SET
}

/// Operator alphabet of the SQL92 `LIKE` parser.
pub fn sql92_wildcard_operators() -> &'static OperatorSet {
    &SQL92_WILDCARD_SET
}
