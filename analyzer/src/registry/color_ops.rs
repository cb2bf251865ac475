use super::Signature;
use crate::types::Ty;

pub(super) fn builtins() -> Vec<Signature> {
    vec![
        sig!("color", fixed!(Ty::Color, [Ty::String])),
        sig!("rgb", fixed!(Ty::Color, [Ty::Number, Ty::Number, Ty::Number])),
        sig!(
            "rgba",
            fixed!(Ty::Color, [Ty::Number, Ty::Number, Ty::Number, Ty::Number])
        ),
        sig!(
            "color_to_array",
            fixed!(Ty::Array(Box::new(Ty::Number), 4), [Ty::Color])
        ),
    ]
}
