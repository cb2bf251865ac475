use super::Signature;
use crate::types::{ArgCount, Ty, Variant};

fn collection_of(t: Ty) -> Ty {
    Ty::Variant(Variant::new(
        None,
        vec![Ty::Vector(Box::new(t.clone())), Ty::AnyArray(Box::new(t))],
    ))
}

pub(super) fn builtins() -> Vec<Signature> {
    let t = || Ty::TypeName("T".into());
    vec![
        // get(key, obj?) / has(key, obj?): the object argument is optional, encoded as an
        // `NArgs` group capped at one repetition (NArgs is general repeat sugar;
        // an optional slot is simply a repeat bounded to at most one).
        sig!(
            "get",
            Ty::lambda(
                crate::types::value_type(),
                vec![Ty::String, Ty::NArgs(vec![Ty::Object], ArgCount::Finite(1))],
            )
        ),
        sig!(
            "has",
            Ty::lambda(
                Ty::Boolean,
                vec![Ty::String, Ty::NArgs(vec![Ty::Object], ArgCount::Finite(1))],
            )
        ),
        sig!("at", fixed!(t(), [Ty::Number, collection_of(t())])),
        sig!(
            "length",
            fixed!(
                Ty::Number,
                [Ty::Variant(Variant::new(None, vec![Ty::Vector(Box::new(t())), Ty::String]))]
            )
        ),
        sig!("typeof", fixed!(Ty::String, [crate::types::value_type()])),
        sig!("properties", fixed!(Ty::Object, [])),
        sig!("geometry_type", fixed!(Ty::String, [])),
        sig!("id", fixed!(crate::types::value_type(), [])),
        sig!("zoom", fixed!(Ty::Number, [])),
    ]
}
