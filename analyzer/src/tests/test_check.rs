use super::common::{err, ok};
use crate::types::{self, Ty};
use crate::AnalyzeError;
use serde_json::json;

#[test]
fn test_arithmetic_resolves_to_number() {
    let e = ok(json!(["+", 1, 2, 3]), &Ty::Number);
    assert!(!types::is_generic(e.result_type()));
    assert_eq!(e.result_type(), &Ty::Number);
}

#[test]
fn test_result_type_mismatch_is_reported() {
    // Scenario 5: typecheck(String, parse(["+", 1, 2])) yields a TypeMismatch on the root.
    let e = err(json!(["+", 1, 2]), &Ty::String);
    let AnalyzeError::Type(errors) = e else { panic!("expected type errors, got {e:?}") };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].error.contains("number"));
    assert!(errors[0].error.contains("string"));
}

#[test]
fn test_get_resolves_to_declared_expected_type() {
    let e = ok(json!(["get", "name"]), &Ty::String);
    assert_eq!(e.result_type(), &Ty::String);
}

#[test]
fn test_coalesce_unifies_generic_across_arguments() {
    let e = ok(json!(["coalesce", ["get", "a"], ["get", "b"], "none"]), &Ty::String);
    assert_eq!(e.result_type(), &Ty::String);
}

#[test]
fn test_case_requires_odd_arity() {
    // cond, val, cond, default (even; missing a val) must fail arity expansion.
    let e = err(json!(["case", true, 1, false, 2]), &Ty::Number);
    assert!(matches!(e, AnalyzeError::Type(_)));
}

#[test]
fn test_unresolved_generic_is_reported() {
    // With no concrete `expected` and no arguments to infer from, `coalesce`'s result
    // typename can never be bound to a concrete type.
    let e = err(json!(["coalesce"]), &Ty::TypeName("X".into()));
    let AnalyzeError::Type(errors) = e else { panic!("expected type errors, got {e:?}") };
    assert!(errors.iter().any(|e| e.error.contains("Could not resolve")));
}

#[test]
fn test_match_output_type_unifies_across_branches() {
    let e = ok(json!(["match", ["get", "t"], "a", 1, ["b", "c"], 2, 0]), &Ty::Number);
    assert_eq!(e.result_type(), &Ty::Number);
}

#[test]
fn test_array_literal_length_is_checked() {
    let e = ok(json!(["array", 1, 2, 3]), &Ty::Array(Box::new(Ty::Number), 3));
    assert_eq!(e.result_type(), &Ty::Array(Box::new(Ty::Number), 3));

    let mismatch = err(json!(["array", 1, 2, 3]), &Ty::Array(Box::new(Ty::Number), 4));
    assert!(matches!(mismatch, AnalyzeError::Type(_)));
}

#[test]
fn test_curve_result_resolves_to_expected_type() {
    let e = ok(
        json!(["curve", ["exponential", 2], ["zoom"], 0, 0, 10, 100]),
        &Ty::Number,
    );
    assert_eq!(e.result_type(), &Ty::Number);
}

#[test]
fn test_color_literal_wrong_type() {
    let e = err(json!(["color", 1]), &Ty::Color);
    assert!(matches!(e, AnalyzeError::Type(_)));
}
