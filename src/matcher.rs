use regex::Regex;

use crate::builder::{Builder, RegexSourceBuilder};
use crate::error::Result;
use crate::pattern::PatternKind;

/// Compiled pattern testing whole strings.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compiles anchored regular expression source, as produced by
    /// [`RegexSourceBuilder`].
    pub fn new(source: &str) -> Result<Self> {
        let regex = regex::RegexBuilder::new(source)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self { regex })
    }

    pub fn test(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Renders a pattern through [`RegexSourceBuilder`] and compiles the result.
#[derive(Debug, Default)]
pub struct MatcherBuilder {
    source: RegexSourceBuilder,
}

impl MatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for MatcherBuilder {
    type Output = Matcher;

    fn begin(
        &mut self,
        kind: PatternKind,
        count: Option<usize>,
        chars: Option<&str>,
    ) -> Result<()> {
        self.source.begin(kind, count, chars)
    }

    fn end(&mut self, kind: PatternKind) -> Result<()> {
        self.source.end(kind)
    }

    fn finalize(self) -> Result<Matcher> {
        let source = self.source.finalize()?;
        log::debug!("Compiling regex: {:?}", source);
        Matcher::new(&source)
    }
}
