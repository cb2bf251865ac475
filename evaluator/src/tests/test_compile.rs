use super::common::feature_with;
use crate::error::RuntimeError;
use crate::value::Value;
use crate::{compile, CompileError};
use analyzer::types::Ty;
use serde_json::json;

#[test]
fn test_get_not_feature_constant_and_property_not_found() {
    let callable = compile(&json!(["get", "name"]), &Ty::String).unwrap();
    assert!(!callable.is_feature_constant);

    let present = feature_with(&[("name", Value::String("x".into()))]);
    assert_eq!(callable.evaluate(0.0, &present).unwrap(), Some(json!("x")));

    let absent = feature_with(&[]);
    assert_eq!(callable.evaluate_raw(0.0, &absent), Err(RuntimeError::PropertyNotFound("name".to_string())));
}

#[test]
fn test_curve_exponential_zoom_scenario() {
    let callable = compile(
        &json!(["curve", ["exponential", 2], ["zoom"], 0, 0, 10, 100]),
        &Ty::Number,
    )
    .unwrap();
    assert!(!callable.is_zoom_constant);

    let feature = feature_with(&[]);
    let Value::Number(got) = callable.evaluate_raw(5.0, &feature).unwrap() else {
        panic!("expected a number")
    };
    let want = (2f64.powf(5.0) - 1.0) / (2f64.powf(10.0) - 1.0) * 100.0;
    assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
}

#[test]
fn test_match_scenario() {
    let callable = compile(
        &json!(["match", ["get", "t"], "a", 1, ["b", "c"], 2, 0]),
        &Ty::Number,
    )
    .unwrap();

    let hit = feature_with(&[("t", Value::String("b".into()))]);
    assert_eq!(callable.evaluate(0.0, &hit).unwrap(), Some(json!(2.0)));

    let miss = feature_with(&[("t", Value::String("z".into()))]);
    assert_eq!(callable.evaluate(0.0, &miss).unwrap(), Some(json!(0.0)));
}

#[test]
fn test_match_rejects_non_literal_input() {
    let err = compile(&json!(["match", ["get", "t"], ["get", "x"], 1, 0]), &Ty::Number).unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
}

#[test]
fn test_typecheck_root_mismatch() {
    let err = compile(&json!(["+", 1, 2]), &Ty::String).unwrap_err();
    let CompileError::Type(errors) = err else { panic!("expected type errors") };
    assert!(errors.iter().any(|e| e.error.contains("Expected")));
}

#[test]
fn test_coalesce_scenario() {
    let callable = compile(
        &json!(["coalesce", ["get", "a"], ["get", "b"], "none"]),
        &Ty::String,
    )
    .unwrap();

    let neither = feature_with(&[]);
    assert_eq!(callable.evaluate(0.0, &neither).unwrap(), Some(json!("none")));

    let a_null = feature_with(&[("a", Value::Null), ("b", Value::String("x".into()))]);
    assert_eq!(callable.evaluate(0.0, &a_null).unwrap(), Some(json!("x")));
}

#[test]
fn test_curve_single_stop_returns_its_output_without_panicking() {
    let callable = compile(&json!(["curve", ["linear"], ["zoom"], 5, 42]), &Ty::Number).unwrap();
    let feature = feature_with(&[]);
    assert_eq!(callable.evaluate(0.0, &feature).unwrap(), Some(json!(42.0)));
    assert_eq!(callable.evaluate(5.0, &feature).unwrap(), Some(json!(42.0)));
    assert_eq!(callable.evaluate(100.0, &feature).unwrap(), Some(json!(42.0)));
}

#[test]
fn test_curve_step_at_last_stop_returns_last_output() {
    let callable = compile(&json!(["curve", ["step"], ["zoom"], 0, "low", 5, "mid", 10, "high"]), &Ty::String).unwrap();
    let feature = feature_with(&[]);
    assert_eq!(callable.evaluate(10.0, &feature).unwrap(), Some(json!("high")));
    assert_eq!(callable.evaluate(100.0, &feature).unwrap(), Some(json!("high")));
}

#[test]
fn test_curve_rejects_non_literal_stop_input() {
    let err = compile(&json!(["curve", ["linear"], ["zoom"], ["get", "x"], 0, 10, 100]), &Ty::Number).unwrap_err();
    let CompileError::Type(errors) = err else { panic!("expected type errors") };
    assert!(errors.iter().any(|e| e.error.contains("literal numeric values")));
}

#[test]
fn test_curve_rejects_non_ascending_stops() {
    let err = compile(&json!(["curve", ["linear"], ["zoom"], 10, 0, 0, 100]), &Ty::Number).unwrap_err();
    let CompileError::Type(errors) = err else { panic!("expected type errors") };
    assert!(errors.iter().any(|e| e.error.contains("strictly ascending")));
}

#[test]
fn test_curve_rejects_non_literal_exponential_base() {
    let err = compile(&json!(["curve", ["exponential", ["zoom"]], ["zoom"], 0, 0, 10, 100]), &Ty::Number).unwrap_err();
    let CompileError::Type(errors) = err else { panic!("expected type errors") };
    assert!(errors.iter().any(|e| e.error.contains("exponential")));
}

#[test]
fn test_constant_folding_flags() {
    let callable = compile(&json!(["+", 1, 2]), &Ty::Number).unwrap();
    assert!(callable.is_feature_constant);
    assert!(callable.is_zoom_constant);
    assert_eq!(callable.evaluate(0.0, &feature_with(&[])).unwrap(), Some(json!(3.0)));
}
