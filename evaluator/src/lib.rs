//! Evaluator/compiler half of the expression language core.
//!
//! `compile` runs the `analyzer` crate's parse + typecheck pipeline, then walks the
//! resolved expression into a closure tree. Depends on `analyzer` for everything static;
//! owns only runtime values, the curve engine, and the evaluation half of the registry.
pub mod color;
pub mod curve;
pub mod error;
pub mod eval;
pub mod value;

mod registry;

#[cfg(test)]
mod tests;

use analyzer::types::Ty;
use error::RuntimeError;
use eval::{compile_expr, Compiled, EvalCtx};
use value::{Feature, Value};

/// A compiled expression, ready to be evaluated against any number of `(zoom, feature)`
/// pairs without re-parsing or re-type-checking.
pub struct Callable {
    compiled: Compiled,
    pub is_feature_constant: bool,
    pub is_zoom_constant: bool,
}

impl Callable {
    /// Evaluate against a zoom level and feature, unwrapping the result to a JSON-ish value.
    /// `Ok(None)` means the expression evaluated to `null` ("undefined" at the API
    /// boundary); `Err` surfaces a runtime error such as a missing property.
    pub fn evaluate(&self, zoom: f64, feature: &Feature) -> Result<Option<serde_json::Value>, RuntimeError> {
        let ctx = EvalCtx { zoom, feature };
        let result = self.compiled.eval(&ctx)?;
        Ok(value::unwrap(&result))
    }

    /// Evaluate without unwrapping, for callers that want the tagged runtime `Value`
    /// (e.g. a `Color` rather than its JSON array form).
    pub fn evaluate_raw(&self, zoom: f64, feature: &Feature) -> Result<Value, RuntimeError> {
        let ctx = EvalCtx { zoom, feature };
        self.compiled.eval(&ctx)
    }
}

/// Either the compiled expression or the list of static errors that kept it from compiling
/// (the `compile` result shape).
#[derive(Debug)]
pub enum CompileError {
    Parse(Vec<analyzer::diagnostics::ParseError>),
    Type(Vec<analyzer::diagnostics::TypeError>),
}

impl From<analyzer::AnalyzeError> for CompileError {
    fn from(e: analyzer::AnalyzeError) -> CompileError {
        match e {
            analyzer::AnalyzeError::Parse(errors) => CompileError::Parse(errors),
            analyzer::AnalyzeError::Type(errors) => CompileError::Type(errors),
        }
    }
}

/// Parse, type-check against `expected`, and compile a style expression in one call (spec
/// §6). Uses the process-wide default registry shared with `analyzer`.
pub fn compile(json: &serde_json::Value, expected: &Ty) -> Result<Callable, CompileError> {
    let resolved = analyzer::analyze(json, expected)?;
    tracing::debug!(key = %resolved.key(), "compiling expression");
    let compiled = compile_expr(&resolved);
    Ok(Callable {
        is_feature_constant: compiled.is_feature_constant,
        is_zoom_constant: compiled.is_zoom_constant,
        compiled,
    })
}
