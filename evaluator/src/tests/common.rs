use crate::value::{Feature, Value};
use crate::compile;
use analyzer::types::Ty;
use serde_json::json;
use std::collections::BTreeMap;

pub fn feature_with(properties: &[(&str, Value)]) -> Feature {
    let mut map = BTreeMap::new();
    for (k, v) in properties {
        map.insert(k.to_string(), v.clone());
    }
    Feature { properties: map, geometry_type: None, id: None }
}

/// Compile and evaluate a JSON expression at `zoom` against `feature`, panicking with a
/// readable message on either failure.
pub fn eval_ok(expr: serde_json::Value, expected: &Ty, zoom: f64, feature: &Feature) -> Value {
    let callable = match compile(&expr, expected) {
        Ok(c) => c,
        Err(e) => panic!("expected compile success, got {e:?}"),
    };
    match callable.evaluate_raw(zoom, feature) {
        Ok(v) => v,
        Err(e) => panic!("expected evaluate success, got {e:?}"),
    }
}

pub fn no_properties() -> Feature {
    feature_with(&[])
}

#[test]
fn test_eval_ok_helper_smoke() {
    assert_eq!(eval_ok(json!(["+", 1, 2]), &Ty::Number, 0.0, &no_properties()), Value::Number(3.0));
}
