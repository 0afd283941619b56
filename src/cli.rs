use std::str::FromStr;

use crate::builder::{RegexSourceBuilder, SimplePatternBuilder, Sql92Builder, UnixWildcardBuilder};
use crate::constants::{unix_wildcard_operators, UNIX_WILDCARD_ESCAPE};
use crate::error::{Error, Result};
use crate::parser::{parse_sql92, parse_unix_wildcard_with};
use crate::pattern::Pattern;

pub const USAGE: &str = "usage: wildcard [-s|--sql92] [-e|--escape C | --no-escape] \
                         [-t|--to unix|sql92|regex|simple] <PATTERN>

--no-escape can not be combined with --to unix or --to sql92";

/// Textual dialect a pattern is read from or rendered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    UnixWildcard,
    Sql92,
    Regex,
    Simple,
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unix" => Ok(Dialect::UnixWildcard),
            "sql92" => Ok(Dialect::Sql92),
            "regex" => Ok(Dialect::Regex),
            "simple" => Ok(Dialect::Simple),
            _ => Err(Error::Usage(format!(
                "unknown dialect {s:?}, use any of unix, sql92, regex, simple"
            ))),
        }
    }
}

/// Command line options of the `wildcard` binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub dialect: Dialect,
    pub escape: Option<char>,
    pub render: Option<Dialect>,
    pub pattern: String,
}

impl Options {
    /// Parses arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut dialect = Dialect::UnixWildcard;
        let mut escape = Some(UNIX_WILDCARD_ESCAPE);
        let mut render = None;
        let mut pattern = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-s" | "--sql92" => dialect = Dialect::Sql92,
                "--no-escape" => escape = None,
                "-e" | "--escape" => {
                    let value = args.next().ok_or_else(|| usage("missing escape character"))?;
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => escape = Some(ch),
                        _ => {
                            return Err(usage(&format!(
                                "escape must be a single character, got {value:?}"
                            )))
                        }
                    }
                }
                "-t" | "--to" => {
                    let value = args.next().ok_or_else(|| usage("missing target dialect"))?;
                    render = Some(value.parse()?);
                }
                _ if pattern.is_none() => pattern = Some(arg),
                _ => return Err(usage(&format!("unexpected argument {arg:?}"))),
            }
        }

        Ok(Self {
            dialect,
            escape,
            render,
            pattern: pattern.ok_or_else(|| usage("no pattern provided"))?,
        })
    }

    pub fn parse_pattern(&self) -> Result<Pattern> {
        match self.dialect {
            Dialect::UnixWildcard => Ok(parse_unix_wildcard_with(
                &self.pattern,
                self.escape,
                unix_wildcard_operators(),
            )),
            Dialect::Sql92 => parse_sql92(&self.pattern, self.escape),
            Dialect::Regex | Dialect::Simple => {
                Err(usage("patterns can only be read as unix or sql92"))
            }
        }
    }
}

fn usage(message: &str) -> Error {
    Error::Usage(format!("{message}\n{USAGE}"))
}

/// Renders `pattern` in `dialect`, escaping literals with `escape` if given.
///
/// Unix wildcards and SQL92 need an escape character to express literal
/// operators, so they reject `None`.
pub fn render(pattern: &Pattern, dialect: Dialect, escape: Option<char>) -> Result<String> {
    match (dialect, escape) {
        (Dialect::UnixWildcard, Some(escape)) => {
            pattern.render(UnixWildcardBuilder::with_escape(escape))
        }
        (Dialect::Sql92, Some(escape)) => pattern.render(Sql92Builder::with_escape(escape)),
        (Dialect::UnixWildcard | Dialect::Sql92, None) => {
            Err(usage("--no-escape can not be combined with --to unix or --to sql92"))
        }
        (Dialect::Regex, _) => pattern.render(RegexSourceBuilder::new()),
        (Dialect::Simple, Some(escape)) => {
            pattern.render(SimplePatternBuilder::with_escape(escape))
        }
        (Dialect::Simple, None) => pattern.render(SimplePatternBuilder::new()),
    }
}
