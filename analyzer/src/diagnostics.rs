//! Static error types. Both are plain data — collected into a `Vec` and
//! returned, never thrown — a data struct
//! rather than an error trait object.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub key: String,
    pub error: String,
}

impl ParseError {
    pub fn new(key: impl Into<String>, error: impl Into<String>) -> ParseError {
        ParseError { key: key.into(), error: error.into() }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeError {
    pub key: String,
    pub error: String,
}

impl TypeError {
    pub fn new(key: impl Into<String>, error: impl Into<String>) -> TypeError {
        TypeError { key: key.into(), error: error.into() }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.error)
    }
}
