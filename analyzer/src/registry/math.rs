use super::Signature;
use crate::types::{ArgCount, Ty};

pub(super) fn builtins() -> Vec<Signature> {
    let unary = |name: &'static str| sig!(name, fixed!(Ty::Number, [Ty::Number]));
    vec![
        sig!("pi", fixed!(Ty::Number, [])),
        sig!("e", fixed!(Ty::Number, [])),
        sig!("ln2", fixed!(Ty::Number, [])),
        sig!("+", variadic!(Ty::Number, [Ty::Number], ArgCount::Unbounded)),
        sig!("*", variadic!(Ty::Number, [Ty::Number], ArgCount::Unbounded)),
        sig!("-", fixed!(Ty::Number, [Ty::Number, Ty::Number])),
        sig!("/", fixed!(Ty::Number, [Ty::Number, Ty::Number])),
        sig!("%", fixed!(Ty::Number, [Ty::Number, Ty::Number])),
        sig!("^", fixed!(Ty::Number, [Ty::Number, Ty::Number])),
        unary("log10"),
        unary("ln"),
        unary("log2"),
        unary("sin"),
        unary("cos"),
        unary("tan"),
        unary("asin"),
        unary("acos"),
        unary("atan"),
    ]
}
