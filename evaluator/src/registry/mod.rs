//! The evaluation half of the expression registry (component R's `compile` rule, spec
//! §4.4). The *declared signature* half lives in `analyzer::registry` — this module only
//! ever sees already type-checked `Call` nodes, so it does not re-validate arity or types.
use crate::eval::Compiled;
use analyzer::expr::Call;

mod color_ops;
mod container;
mod control;
mod logic;
mod math;
mod property;
mod string_ops;

/// Dispatch a resolved `Call` to its compile rule. Panics on an unknown name — that can
/// only happen if a `Call` reached the evaluator without having gone through
/// `analyzer::check::typecheck` against `analyzer::registry::DEFAULT_REGISTRY` first.
pub fn build(call: &Call, args: Vec<Compiled>) -> Compiled {
    if let Some(c) = property::build(call, &args) {
        return c;
    }
    if let Some(c) = math::build(call, &args) {
        return c;
    }
    if let Some(c) = logic::build(call, &args) {
        return c;
    }
    if let Some(c) = string_ops::build(call, &args) {
        return c;
    }
    if let Some(c) = color_ops::build(call, &args) {
        return c;
    }
    if let Some(c) = container::build(call, &args) {
        return c;
    }
    if let Some(c) = control::build(call, &args) {
        return c;
    }
    panic!("evaluator registry has no compile rule for `{}` — was this expression type-checked against analyzer::registry first?", call.name);
}
