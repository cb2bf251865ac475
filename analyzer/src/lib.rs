//! Expression language core: parsing and type checking for map style expressions.
//!
//! Pipeline: `raw_json → parse → untyped Expr → typecheck(registry, expected) → resolved
//! Expr`. Evaluation lives in the separate `evaluator` crate, which depends on this one.
pub mod check;
pub mod diagnostics;
pub mod expr;
pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;

use diagnostics::{ParseError, TypeError};
use expr::Expr;
use registry::Registry;
use types::Ty;

/// Either a parse error or (if parsing succeeded) a list of type errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeError {
    Parse(Vec<ParseError>),
    Type(Vec<TypeError>),
}

/// Parse and type-check a style expression in one call, against the process-wide default
/// registry — evaluation is added by `evaluator::compile`.
pub fn analyze(json: &serde_json::Value, expected: &Ty) -> Result<Expr, AnalyzeError> {
    analyze_with(json, expected, &registry::DEFAULT_REGISTRY)
}

pub fn analyze_with(json: &serde_json::Value, expected: &Ty, registry: &Registry) -> Result<Expr, AnalyzeError> {
    let mut errors = Vec::new();
    let Some(parsed) = parser::parse(json, "", registry, &mut errors) else {
        return Err(AnalyzeError::Parse(errors));
    };
    if !errors.is_empty() {
        return Err(AnalyzeError::Parse(errors));
    }
    check::typecheck(expected, parsed).map_err(AnalyzeError::Type)
}

mod parser;
pub use parser::parse;
