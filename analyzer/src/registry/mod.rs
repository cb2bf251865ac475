//! The expression registry (component R): a static table of built-in operator/function
//! declarations, keyed by name. Each entry carries only the declared `Lambda` signature —
//! the corresponding *evaluation* rule lives in the `evaluator` crate's own registry (see
//! `evaluator::registry`), keeping this crate usable for static validation alone (mirroring
//! a separate analysis-only consumer that links `analyzer` without ever evaluating anything).
use crate::types::Ty;
use std::collections::HashMap;
use std::sync::LazyLock;

#[macro_use]
mod macros;

mod color_ops;
mod container;
mod control;
mod logic;
mod math;
mod property;
mod string_ops;

/// A single registry entry: `name` plus its declared signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub name: &'static str,
    /// Always `Ty::Lambda(result, params)`.
    pub ty: Ty,
}

/// Deterministic category order, matching the historical grouping used by builtin
/// definitions below: property access, math, logic, string, color, container, control.
pub fn builtins() -> Vec<Signature> {
    let mut out = Vec::new();
    out.extend(property::builtins());
    out.extend(math::builtins());
    out.extend(logic::builtins());
    out.extend(string_ops::builtins());
    out.extend(color_ops::builtins());
    out.extend(container::builtins());
    out.extend(control::builtins());
    out
}

/// The registry used by the parser and type checker: a name → `Signature` table built once
/// from [`builtins`].
pub struct Registry {
    by_name: HashMap<&'static str, Signature>,
}

impl Registry {
    pub fn new() -> Registry {
        let mut by_name = HashMap::new();
        for sig in builtins() {
            by_name.insert(sig.name, sig);
        }
        Registry { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.by_name.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}

/// Process-wide default registry. Style expressions never define their own operators, so a
/// single shared table (rather than one per `compile` call) treats
/// `builtins_functions()` as effectively static.
pub static DEFAULT_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);
