use super::Signature;
use crate::types::{ArgCount, Ty};

pub(super) fn builtins() -> Vec<Signature> {
    let t = || Ty::TypeName("T".into());
    vec![
        // case(cond, val, cond, val, ..., default). The repeat group's `NArgs` arity rule
        // forces an odd total argument count, rejecting even-argument forms at the type
        // checker's parameter-expansion step rather than at runtime.
        sig!(
            "case",
            Ty::lambda(
                t(),
                vec![Ty::NArgs(vec![Ty::Boolean, t()], ArgCount::Unbounded), t()],
            )
        ),
        // match(input, out1, ..., outn, otherwise). Label groups are stored out-of-band in
        // `Call::match_inputs`, not as positional arguments.
        sig!(
            "match",
            Ty::lambda(
                t(),
                vec![
                    crate::types::value_type(),
                    Ty::NArgs(vec![t()], ArgCount::Unbounded),
                    t(),
                ],
            )
        ),
        // curve(interpolation, input, stop0_in, stop0_out, stop1_in, stop1_out, ...).
        sig!(
            "curve",
            Ty::lambda(
                t(),
                vec![
                    Ty::InterpolationType,
                    Ty::Number,
                    Ty::NArgs(vec![Ty::Number, t()], ArgCount::Unbounded),
                ],
            )
        ),
        sig!("step", fixed!(Ty::InterpolationType, [])),
        sig!("linear", fixed!(Ty::InterpolationType, [])),
        sig!("exponential", fixed!(Ty::InterpolationType, [Ty::Number])),
    ]
}
