//! Runtime error taxonomy. Unlike the analyzer's static `ParseError`/`TypeError`
//! (plain data, collected into a list), these are raised and propagated with `?` through
//! the evaluator's closures, so a `thiserror`-derived enum is the idiomatic fit.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("Property '{0}' not found in feature.properties")]
    PropertyNotFound(String),
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("Expected value to be of type {expected}, but found {found} instead.")]
    TypeAssertion { expected: String, found: String },
    #[error("Could not parse color from value '{0}'")]
    ColorParse(String),
    #[error("Unknown runtime type '{0}'")]
    UnknownRuntimeType(String),
}
