/// Build a [`super::Signature`] with a fixed-arity or `NArgs`-bearing `Lambda` type.
macro_rules! sig {
    ($name:literal, $ty:expr $(,)?) => {
        $crate::registry::Signature {
            name: $name,
            ty: $ty,
        }
    };
}

/// Shorthand for a fixed-arity lambda: `fixed!(Ty::Number, [Ty::Number, Ty::Number])`.
macro_rules! fixed {
    ($result:expr, [$($param:expr),* $(,)?] $(,)?) => {
        $crate::types::Ty::lambda($result, vec![$($param),*])
    };
}

/// Shorthand for a variadic lambda using `NArgs`: repeats `$types` up to `$n` times.
macro_rules! variadic {
    ($result:expr, [$($types:expr),+ $(,)?], $n:expr $(,)?) => {
        $crate::types::Ty::lambda(
            $result,
            vec![$crate::types::Ty::NArgs(vec![$($types),+], $n)],
        )
    };
}
