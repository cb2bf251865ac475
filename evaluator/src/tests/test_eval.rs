use super::common::{eval_ok, no_properties};
use crate::value::Value;
use analyzer::types::Ty;
use serde_json::json;

#[test]
fn test_arithmetic_variadic() {
    assert_eq!(eval_ok(json!(["+", 1, 2, 3]), &Ty::Number, 0.0, &no_properties()), Value::Number(6.0));
    assert_eq!(eval_ok(json!(["*", 2, 3, 4]), &Ty::Number, 0.0, &no_properties()), Value::Number(24.0));
}

#[test]
fn test_comparison_and_logic() {
    assert_eq!(eval_ok(json!([">", 3, 2]), &Ty::Boolean, 0.0, &no_properties()), Value::Boolean(true));
    assert_eq!(
        eval_ok(json!(["&&", true, true, false]), &Ty::Boolean, 0.0, &no_properties()),
        Value::Boolean(false)
    );
    assert_eq!(eval_ok(json!(["!", false]), &Ty::Boolean, 0.0, &no_properties()), Value::Boolean(true));
}

#[test]
fn test_string_ops() {
    assert_eq!(
        eval_ok(json!(["upcase", "abc"]), &Ty::String, 0.0, &no_properties()),
        Value::String("ABC".into())
    );
    assert_eq!(
        eval_ok(json!(["concat", "a", "b", 1]), &Ty::String, 0.0, &no_properties()),
        Value::String("ab1".into())
    );
}

#[test]
fn test_case_short_circuits_lazily() {
    // The second condition's branch references a missing property; it must never be
    // evaluated once the first condition wins.
    let v = eval_ok(
        json!(["case", true, "first", ["get", "missing"], "second", "default"]),
        &Ty::String,
        0.0,
        &no_properties(),
    );
    assert_eq!(v, Value::String("first".into()));
}

#[test]
fn test_color_builtins() {
    let v = eval_ok(json!(["rgb", 255, 0, 0]), &Ty::Color, 0.0, &no_properties());
    assert_eq!(v, Value::Color([1.0, 0.0, 0.0, 1.0]));
}

#[test]
fn test_at_and_length() {
    assert_eq!(
        eval_ok(json!(["at", 1, ["vector", 10, 20, 30]]), &Ty::Number, 0.0, &no_properties()),
        Value::Number(20.0)
    );
    assert_eq!(
        eval_ok(json!(["length", ["vector", 10, 20, 30]]), &Ty::Number, 0.0, &no_properties()),
        Value::Number(3.0)
    );
}
