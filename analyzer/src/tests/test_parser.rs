use crate::diagnostics::ParseError;
use crate::expr::{Expr, LitValue};
use crate::registry::DEFAULT_REGISTRY;
use serde_json::json;

fn parse(json: serde_json::Value) -> Result<Expr, Vec<ParseError>> {
    let mut errors = Vec::new();
    match crate::parser::parse(&json, "", &DEFAULT_REGISTRY, &mut errors) {
        Some(e) if errors.is_empty() => Ok(e),
        _ => Err(errors),
    }
}

#[test]
fn test_literal_null() {
    let e = parse(json!(null)).unwrap();
    assert!(matches!(e, Expr::Literal(l) if l.value == LitValue::Null));
}

#[test]
fn test_literal_number() {
    let e = parse(json!(3.5)).unwrap();
    assert!(matches!(e, Expr::Literal(l) if l.value == LitValue::Number(3.5)));
}

#[test]
fn test_simple_call() {
    let e = parse(json!(["+", 1, 2, 3])).unwrap();
    let Expr::Call(call) = e else { panic!("expected call") };
    assert_eq!(call.name, "+");
    assert_eq!(call.arguments.len(), 3);
}

#[test]
fn test_unknown_function() {
    let errors = parse(json!(["definitely_not_a_function", 1])).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error, "Unknown function definitely_not_a_function");
}

#[test]
fn test_non_string_operator() {
    let errors = parse(json!([1, 2])).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key, "0");
}

#[test]
fn test_array_signature_tracks_arg_count() {
    let e = parse(json!(["array", 1, 2, 3])).unwrap();
    let Expr::Call(call) = e else { panic!("expected call") };
    let (result, _) = call.ty.as_lambda().unwrap();
    assert_eq!(crate::types::name(result), "Array<T, 3>");
}

#[test]
fn test_match_literal_labels() {
    let e = parse(json!(["match", ["get", "t"], "a", 1, ["b", "c"], 2, 0])).unwrap();
    let Expr::Call(call) = e else { panic!("expected call") };
    assert_eq!(call.name, "match");
    let groups = call.match_inputs.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 1);
    assert_eq!(groups[1].len(), 2);
    // input, out1, out2, otherwise
    assert_eq!(call.arguments.len(), 4);
}

#[test]
fn test_match_rejects_non_literal_label() {
    let errors = parse(json!(["match", ["get", "t"], ["get", "x"], 1, 0])).unwrap_err();
    assert!(errors.iter().any(|e| e.error.contains("Match inputs must be literal")));
}

#[test]
fn test_match_rejects_empty_label_group() {
    let errors = parse(json!(["match", ["get", "t"], [], 1, 0])).unwrap_err();
    assert!(errors.iter().any(|e| e.error.contains("at least one input value")));
}

#[test]
fn test_match_requires_minimum_arity() {
    let errors = parse(json!(["match", ["get", "t"], 0])).unwrap_err();
    assert_eq!(errors.len(), 1);
}
