use crate::eval::{combine_flags, Compiled};
use crate::error::RuntimeError;
use crate::value::Value;
use analyzer::expr::Call;
use std::cmp::Ordering;

fn order(a: &Value, b: &Value) -> Result<Ordering, RuntimeError> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            Ok(a.partial_cmp(b).unwrap_or(Ordering::Equal))
        }
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
        _ => Err(RuntimeError::TypeAssertion {
            expected: "Number or String".to_string(),
            found: format!("{} and {}", a.type_of(), b.type_of()),
        }),
    }
}

fn binary_bool(args: &[Compiled], op: fn(&Value, &Value) -> Result<bool, RuntimeError>) -> Compiled {
    let (fc, zc) = combine_flags(args, None, None);
    let a = args[0].thunk.clone();
    let b = args[1].thunk.clone();
    let thunk = std::rc::Rc::new(move |ctx: &crate::eval::EvalCtx| Ok(Value::Boolean(op(&a(ctx)?, &b(ctx)?)?)));
    Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
}

fn variadic_bool(args: &[Compiled], identity: bool, short_circuit: bool, op: fn(bool, bool) -> bool) -> Compiled {
    let (fc, zc) = combine_flags(args, None, None);
    let thunks: Vec<_> = args.iter().map(|a| a.thunk.clone()).collect();
    let thunk = std::rc::Rc::new(move |ctx: &crate::eval::EvalCtx| {
        let mut acc = identity;
        for t in &thunks {
            let v = t(ctx)?.as_bool().ok_or_else(|| RuntimeError::TypeAssertion {
                expected: "Boolean".to_string(),
                found: "non-boolean".to_string(),
            })?;
            acc = op(acc, v);
            if acc == short_circuit {
                return Ok(Value::Boolean(acc));
            }
        }
        Ok(Value::Boolean(acc))
    });
    Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
}

pub(super) fn build(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    Some(match call.name.as_str() {
        "==" => binary_bool(args, |a, b| Ok(a == b)),
        "!=" => binary_bool(args, |a, b| Ok(a != b)),
        ">" => binary_bool(args, |a, b| Ok(order(a, b)? == Ordering::Greater)),
        "<" => binary_bool(args, |a, b| Ok(order(a, b)? == Ordering::Less)),
        ">=" => binary_bool(args, |a, b| Ok(order(a, b)? != Ordering::Less)),
        "<=" => binary_bool(args, |a, b| Ok(order(a, b)? != Ordering::Greater)),
        "&&" => variadic_bool(args, true, false, |a, b| a && b),
        "||" => variadic_bool(args, false, true, |a, b| a || b),
        "!" => {
            let (fc, zc) = combine_flags(args, None, None);
            let a = args[0].thunk.clone();
            let thunk = std::rc::Rc::new(move |ctx: &crate::eval::EvalCtx| {
                let v = a(ctx)?.as_bool().ok_or_else(|| RuntimeError::TypeAssertion {
                    expected: "Boolean".to_string(),
                    found: "non-boolean".to_string(),
                })?;
                Ok(Value::Boolean(!v))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        _ => return None,
    })
}
