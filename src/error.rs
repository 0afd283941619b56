use thiserror::Error;

/// Error is an error which may occur while building, parsing or rendering a pattern.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown operator {0:?}")]
    UnknownOperator(String),
    #[error("{0} cannot be rendered as a simple pattern")]
    UnsupportedConstruct(&'static str),
    #[error("malformed attributes: {0}")]
    MalformedAttributes(&'static str),
    #[error("wrong regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
