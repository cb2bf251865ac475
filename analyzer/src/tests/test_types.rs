use crate::types::{self, ArgCount, Ty, Variant, value_type};
use std::collections::HashMap;

#[test]
fn test_primitive_names() {
    assert_eq!(types::name(&Ty::Number), "number");
    assert_eq!(types::name(&Ty::Color), "color");
    assert_eq!(types::name(&Ty::Null), "null");
}

#[test]
fn test_value_type_is_not_generic_and_terminates() {
    let v = value_type();
    assert!(!types::is_generic(&v));
    // Printing must terminate despite the self-reference.
    assert_eq!(types::name(&v), "Value");
}

#[test]
fn test_variant_identity_not_structural() {
    let a = Variant::new(None, vec![Ty::Number, Ty::String]);
    let b = Variant::new(None, vec![Ty::Number, Ty::String]);
    assert_ne!(Ty::Variant(a.clone()), Ty::Variant(b));
    assert_eq!(Ty::Variant(a.clone()), Ty::Variant(a));
}

#[test]
fn test_is_generic() {
    let t = Ty::TypeName("T".into());
    assert!(types::is_generic(&t));
    assert!(types::is_generic(&Ty::Vector(Box::new(t.clone()))));
    assert!(!types::is_generic(&Ty::Vector(Box::new(Ty::Number))));
    assert!(types::is_generic(&Ty::lambda(Ty::Number, vec![t])));
}

#[test]
fn test_resolve_substitutes_typenames() {
    let t = Ty::TypeName("T".into());
    let mut bindings = HashMap::new();
    bindings.insert("T".to_string(), Ty::String);
    let resolved = types::resolve(&Ty::Vector(Box::new(t)), &bindings);
    assert_eq!(resolved, Ty::Vector(Box::new(Ty::String)));
}

#[test]
fn test_resolve_skips_concrete_value_type() {
    let bindings = HashMap::new();
    let resolved = types::resolve(&value_type(), &bindings);
    assert!(!types::is_generic(&resolved));
}

#[test]
fn test_expand_params_fixed() {
    let params = vec![Ty::Number, Ty::Number];
    assert_eq!(types::expand_params(&params, 2), Some(vec![Ty::Number, Ty::Number]));
    assert_eq!(types::expand_params(&params, 3), None);
}

#[test]
fn test_expand_params_unbounded_nargs() {
    let params = vec![Ty::NArgs(vec![Ty::Number], ArgCount::Unbounded)];
    assert_eq!(types::expand_params(&params, 0), Some(vec![]));
    assert_eq!(types::expand_params(&params, 3), Some(vec![Ty::Number; 3]));
}

#[test]
fn test_expand_params_with_tail() {
    // case-shaped: (bool, T) repeated, then a trailing T default.
    let t = Ty::String;
    let params = vec![Ty::NArgs(vec![Ty::Boolean, t.clone()], ArgCount::Unbounded), t.clone()];
    // cond, val, default -> 3 args: one repeat group (2) + tail (1).
    assert_eq!(
        types::expand_params(&params, 3),
        Some(vec![Ty::Boolean, t.clone(), t.clone()])
    );
    // Even count (cond, default) with no val is rejected.
    assert_eq!(types::expand_params(&params, 2), None);
}

#[test]
fn test_expand_params_finite_nargs_caps_repeat() {
    let params = vec![Ty::String, Ty::NArgs(vec![Ty::Object], ArgCount::Finite(1))];
    assert_eq!(types::expand_params(&params, 1), Some(vec![Ty::String]));
    assert_eq!(types::expand_params(&params, 2), Some(vec![Ty::String, Ty::Object]));
    assert_eq!(types::expand_params(&params, 3), None);
}
