use crate::registry::Registry;

#[test]
fn test_registry_contains_core_operators() {
    let r = Registry::new();
    for name in ["+", "-", "get", "has", "match", "case", "curve", "coalesce", "array", "vector", "color", "zoom"] {
        assert!(r.get(name).is_some(), "missing builtin `{name}`");
    }
}

#[test]
fn test_registry_unknown_name() {
    let r = Registry::new();
    assert!(r.get("definitely_not_a_builtin").is_none());
}

#[test]
fn test_registry_names_are_unique() {
    let names: Vec<_> = crate::registry::builtins().into_iter().map(|s| s.name).collect();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names.len(), sorted.len(), "duplicate builtin name in registry");
}
