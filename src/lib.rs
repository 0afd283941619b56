mod builder;
mod cli;
mod constants;
mod error;
mod matcher;
mod parser;
mod pattern;
mod tokenizer;

pub use builder::{
    escape, Builder, RegexSourceBuilder, SimplePatternBuilder, Sql92Builder, UnixWildcardBuilder,
};
pub use cli::{render, Dialect, Options, USAGE};
pub use constants::*;
pub use error::{Error, Result};
pub use matcher::{Matcher, MatcherBuilder};
pub use parser::{
    parse_sql92, parse_sql92_tokens, parse_unix_wildcard, parse_unix_wildcard_tokens,
    parse_unix_wildcard_with,
};
pub use pattern::{any_string, Children, Pattern, PatternKind, ANY_CHAR, EMPTY};
pub use tokenizer::{OperatorSet, Token, TokenKind, Tokenizer};

use std::env;
use std::io::{self, Read};

/// Runs the command line tool, returning whether anything matched.
pub fn run() -> anyhow::Result<bool> {
    let options = Options::parse(env::args().skip(1))?;
    log::debug!("Options: {:?}", options);

    let pattern = options.parse_pattern()?;
    log::debug!("Parsed pattern: {:?}", pattern);
    log::debug!("Lower bound: {:?}", pattern.lower_bound());

    if let Some(dialect) = options.render {
        println!("{}", render(&pattern, dialect, options.escape)?);
        return Ok(true);
    }

    let matcher = pattern.matcher()?;

    // Read input
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut matched = false;
    for line in input.lines() {
        if matcher.test(line) {
            println!("{line}");
            matched = true;
        }
    }
    log::debug!("Match result: {}", matched);
    Ok(matched)
}
