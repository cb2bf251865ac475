use super::Signature;
use crate::types::{ArgCount, Ty};

pub(super) fn builtins() -> Vec<Signature> {
    let t = || Ty::TypeName("T".into());
    let cmp = |name: &'static str| sig!(name, fixed!(Ty::Boolean, [t(), t()]));
    vec![
        cmp("=="),
        cmp("!="),
        cmp(">"),
        cmp("<"),
        cmp(">="),
        cmp("<="),
        sig!("&&", variadic!(Ty::Boolean, [Ty::Boolean], ArgCount::Unbounded)),
        sig!("||", variadic!(Ty::Boolean, [Ty::Boolean], ArgCount::Unbounded)),
        sig!("!", fixed!(Ty::Boolean, [Ty::Boolean])),
    ]
}
