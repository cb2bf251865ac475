//! `case`/`match`/`curve` and the three interpolation-type builtins.
//!
//! `case` and `match` stay lazy by construction: each branch is a [`Compiled`] thunk that
//! is only invoked once its condition/label wins, never eagerly evaluated up front.
use crate::curve::{binary_search, interpolate, interpolation_factor};
use crate::eval::{combine_flags, Compiled, EvalCtx};
use crate::error::RuntimeError;
use crate::value::Value;
use analyzer::expr::{Call, LitValue};
use std::collections::HashMap;
use std::rc::Rc;

fn literal_value(lit: &LitValue) -> Value {
    match lit {
        LitValue::Null => Value::Null,
        LitValue::Number(n) => Value::Number(*n),
        LitValue::String(s) => Value::String(s.clone()),
        LitValue::Boolean(b) => Value::Boolean(*b),
    }
}

fn number(v: Value) -> Result<f64, RuntimeError> {
    v.as_number().ok_or_else(|| RuntimeError::TypeAssertion {
        expected: "Number".to_string(),
        found: v.type_of().to_string(),
    })
}

/// Interpolation spec value: `[kind, base]`, `kind` one of `"step"`/`"linear"`/`"exponential"`.
/// An internal encoding — never observable outside the `curve` builtin.
fn build_interpolation(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    Some(match call.name.as_str() {
        "step" => Compiled::constant(Value::Vector(vec![Value::String("step".into()), Value::Number(0.0)])),
        "linear" => Compiled::constant(Value::Vector(vec![Value::String("linear".into()), Value::Number(1.0)])),
        "exponential" => {
            let (fc, zc) = combine_flags(args, None, None);
            let base = args[0].thunk.clone();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                Ok(Value::Vector(vec![Value::String("exponential".into()), Value::Number(number(base(ctx)?)?)]))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        _ => return None,
    })
}

pub(super) fn build(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    if let Some(c) = build_interpolation(call, args) {
        return Some(c);
    }
    Some(match call.name.as_str() {
        "case" => {
            let (fc, zc) = combine_flags(args, None, None);
            let branches: Vec<_> = args.iter().map(|a| a.thunk.clone()).collect();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let mut i = 0;
                while i + 1 < branches.len() {
                    let cond = branches[i](ctx)?.as_bool().ok_or_else(|| RuntimeError::TypeAssertion {
                        expected: "Boolean".to_string(),
                        found: "non-boolean".to_string(),
                    })?;
                    if cond {
                        return branches[i + 1](ctx);
                    }
                    i += 2;
                }
                branches[branches.len() - 1](ctx)
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "match" => {
            let match_inputs = call.match_inputs.as_ref().expect("match call without match_inputs");
            let mut table: HashMap<String, usize> = HashMap::new();
            for (output_index, labels) in match_inputs.iter().enumerate() {
                for label in labels {
                    table.insert(literal_value(&label.value).match_key(), output_index);
                }
            }
            let (fc, zc) = combine_flags(args, None, None);
            let input = args[0].thunk.clone();
            let default_index = args.len() - 1;
            let outputs: Vec<_> = args[1..default_index].iter().map(|a| a.thunk.clone()).collect();
            let default = args[default_index].thunk.clone();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let key = input(ctx)?.match_key();
                match table.get(&key) {
                    Some(&i) => outputs[i](ctx),
                    None => default(ctx),
                }
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "curve" => {
            let (fc, zc) = combine_flags(args, None, None);
            let interpolation = args[0].thunk.clone();
            let input = args[1].thunk.clone();
            let stop_ins: Vec<_> = args[2..].iter().step_by(2).map(|a| a.thunk.clone()).collect();
            let stop_outs: Vec<_> = args[3..].iter().step_by(2).map(|a| a.thunk.clone()).collect();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let spec = interpolation(ctx)?;
                let spec = spec.as_vector().expect("interpolation spec is always a 2-element Vector");
                let kind = spec[0].as_str().expect("interpolation spec kind is always a String");
                let base = spec[1].as_number().expect("interpolation spec base is always a Number");

                let x = number(input(ctx)?)?;
                let stops: Vec<f64> = stop_ins.iter().map(|t| number(t(ctx)?)).collect::<Result<_, _>>()?;

                if stops.len() == 1 {
                    return stop_outs[0](ctx);
                }
                let last = stops.len() - 1;
                if x <= stops[0] {
                    return stop_outs[0](ctx);
                }
                if x >= stops[last] {
                    return stop_outs[last](ctx);
                }

                let idx = binary_search(&stops, x);
                if kind == "step" {
                    return stop_outs[idx](ctx);
                }
                let t = interpolation_factor(x, base, stops[idx], stops[idx + 1]);
                interpolate(t, &stop_outs[idx](ctx)?, &stop_outs[idx + 1](ctx)?)
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        _ => return None,
    })
}
