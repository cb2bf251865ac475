use super::Signature;
use crate::types::{ArgCount, Ty};

pub(super) fn builtins() -> Vec<Signature> {
    vec![
        sig!("upcase", fixed!(Ty::String, [Ty::String])),
        sig!("downcase", fixed!(Ty::String, [Ty::String])),
        sig!(
            "concat",
            variadic!(Ty::String, [crate::types::value_type()], ArgCount::Unbounded)
        ),
        sig!("string", fixed!(Ty::String, [crate::types::value_type()])),
        sig!("number", fixed!(Ty::Number, [crate::types::value_type()])),
        sig!("boolean", fixed!(Ty::Boolean, [crate::types::value_type()])),
        sig!("object", fixed!(Ty::Object, [crate::types::value_type()])),
        sig!(
            "json_array",
            fixed!(
                Ty::Vector(Box::new(crate::types::value_type())),
                [crate::types::value_type()]
            )
        ),
    ]
}
