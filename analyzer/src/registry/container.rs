use super::Signature;
use crate::types::{ArgCount, Ty};

pub(super) fn builtins() -> Vec<Signature> {
    let t = || Ty::TypeName("T".into());
    vec![
        // Placeholder signature: the parser overrides `array`'s declared type per call so
        // its output length matches the number of provided elements.
        sig!(
            "array",
            variadic!(Ty::Array(Box::new(t()), 0), [t()], ArgCount::Unbounded)
        ),
        sig!("vector", variadic!(Ty::Vector(Box::new(t())), [t()], ArgCount::Unbounded)),
        sig!("coalesce", variadic!(t(), [t()], ArgCount::Unbounded)),
    ]
}
