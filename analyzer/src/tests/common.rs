use crate::{analyze, AnalyzeError};
use crate::expr::Expr;
use crate::types::Ty;
use serde_json::json;

/// Parse+typecheck a JSON literal expression (written with `serde_json::json!`) against
/// `expected`, panicking with a readable message on failure. A small wrapper around
/// `run_semantic` test helper.
pub fn ok(json: serde_json::Value, expected: &Ty) -> Expr {
    match analyze(&json, expected) {
        Ok(e) => e,
        Err(err) => panic!("expected success, got {err:?}"),
    }
}

pub fn err(json: serde_json::Value, expected: &Ty) -> AnalyzeError {
    analyze(&json, expected).expect_err("expected an error")
}

#[test]
fn test_ok_helper_smoke() {
    ok(json!(["+", 1, 2]), &Ty::Number);
}
