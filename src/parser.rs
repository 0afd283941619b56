use crate::constants::{sql92_wildcard_operators, unix_wildcard_operators, UNIX_WILDCARD_ESCAPE};
use crate::error::{Error, Result};
use crate::pattern::{any_string, Pattern, ANY_CHAR};
use crate::tokenizer::{OperatorSet, Token, TokenKind, Tokenizer};

/// Parses a Unix wildcard with the default escape character and operators.
pub fn parse_unix_wildcard(text: &str) -> Pattern {
    parse_unix_wildcard_with(text, Some(UNIX_WILDCARD_ESCAPE), unix_wildcard_operators())
}

pub fn parse_unix_wildcard_with(
    text: &str,
    escape: Option<char>,
    operators: &OperatorSet,
) -> Pattern {
    let mut tokens = Tokenizer::new(text, escape, operators);
    let pattern = parse_unix_wildcard_tokens(&mut tokens);
    log::debug!("Parsed unix wildcard {:?}: {:?}", text, pattern);
    pattern
}

/// Parses a Unix wildcard from a token stream.
///
/// Parsing stops, leaving the token in place, at the end of the stream or at
/// an operator other than `*`, `?`, `[` or `"`. This allows a wildcard to be
/// embedded in a larger grammar that adds its own operators to the stream.
///
/// Example:
/// - Tokens of `a?b*c|d` with `|` as an extra operator → `a?b*c`, stream left at `|`
pub fn parse_unix_wildcard_tokens(tokens: &mut Tokenizer<'_>) -> Pattern {
    let mut patterns = Vec::new();
    while let Some(Token { kind, data }) = tokens.current().cloned() {
        let pattern = match kind {
            TokenKind::CharSequence => {
                tokens.advance();
                Pattern::of(data)
            }
            TokenKind::Operator => match data.as_str() {
                "*" => {
                    tokens.advance();
                    any_string()
                }
                "?" => {
                    tokens.advance();
                    ANY_CHAR
                }
                "[" => {
                    tokens.advance();
                    Pattern::one_of(collect_until(tokens, "]"))
                }
                "\"" => {
                    tokens.advance();
                    Pattern::of(collect_until(tokens, "\""))
                }
                _ => {
                    log::trace!("Stopping at operator {:?}", data);
                    break;
                }
            },
        };
        patterns.push(pattern);
    }
    Pattern::group(patterns)
}

/// Collects the text of every token up to the `terminator` operator, which is
/// consumed. An unterminated run extends to the end of the stream.
fn collect_until(tokens: &mut Tokenizer<'_>, terminator: &str) -> String {
    let mut buffer = String::new();
    while let Some(token) = tokens.current() {
        if token.kind == TokenKind::Operator && token.data == terminator {
            tokens.advance();
            break;
        }
        buffer.push_str(&token.data);
        tokens.advance();
    }
    buffer
}

/// Parses an SQL92 `LIKE` expression.
pub fn parse_sql92(text: &str, escape: Option<char>) -> Result<Pattern> {
    let mut tokens = Tokenizer::new(text, escape, sql92_wildcard_operators());
    let pattern = parse_sql92_tokens(&mut tokens)?;
    log::debug!("Parsed sql92 expression {:?}: {:?}", text, pattern);
    Ok(pattern)
}

/// Parses an SQL92 `LIKE` expression from a token stream, consuming all of it.
///
/// Operators other than `%` and `_` fail with [`Error::UnknownOperator`].
pub fn parse_sql92_tokens(tokens: &mut Tokenizer<'_>) -> Result<Pattern> {
    let mut patterns = Vec::new();
    while let Some(token) = tokens.current() {
        let pattern = match token.kind {
            TokenKind::CharSequence => Pattern::of(token.data.as_str()),
            TokenKind::Operator => match token.data.as_str() {
                "%" => any_string(),
                "_" => ANY_CHAR,
                other => return Err(Error::UnknownOperator(other.to_owned())),
            },
        };
        patterns.push(pattern);
        tokens.advance();
    }
    Ok(Pattern::group(patterns))
}
