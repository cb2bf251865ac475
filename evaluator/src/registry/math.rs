use crate::eval::{combine_flags, Compiled};
use crate::error::RuntimeError;
use crate::value::Value;
use analyzer::expr::Call;

fn number(v: Value) -> Result<f64, RuntimeError> {
    v.as_number().ok_or_else(|| RuntimeError::TypeAssertion {
        expected: "Number".to_string(),
        found: v.type_of().to_string(),
    })
}

fn variadic(args: &[Compiled], identity: f64, op: fn(f64, f64) -> f64) -> Compiled {
    let (fc, zc) = combine_flags(args, None, None);
    let thunks: Vec<_> = args.iter().map(|a| a.thunk.clone()).collect();
    let thunk = std::rc::Rc::new(move |ctx: &crate::eval::EvalCtx| {
        let mut acc = identity;
        for t in &thunks {
            acc = op(acc, number(t(ctx)?)?);
        }
        Ok(Value::Number(acc))
    });
    Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
}

fn binary(args: &[Compiled], op: fn(f64, f64) -> f64) -> Compiled {
    let (fc, zc) = combine_flags(args, None, None);
    let a = args[0].thunk.clone();
    let b = args[1].thunk.clone();
    let thunk = std::rc::Rc::new(move |ctx: &crate::eval::EvalCtx| Ok(Value::Number(op(number(a(ctx)?)?, number(b(ctx)?)?))));
    Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
}

fn unary(args: &[Compiled], op: fn(f64) -> f64) -> Compiled {
    let (fc, zc) = combine_flags(args, None, None);
    let a = args[0].thunk.clone();
    let thunk = std::rc::Rc::new(move |ctx: &crate::eval::EvalCtx| Ok(Value::Number(op(number(a(ctx)?)?))));
    Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
}

pub(super) fn build(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    Some(match call.name.as_str() {
        "pi" => Compiled::constant(Value::Number(std::f64::consts::PI)),
        "e" => Compiled::constant(Value::Number(std::f64::consts::E)),
        "ln2" => Compiled::constant(Value::Number(std::f64::consts::LN_2)),
        "+" => variadic(args, 0.0, |a, b| a + b),
        "*" => variadic(args, 1.0, |a, b| a * b),
        "-" => binary(args, |a, b| a - b),
        "/" => binary(args, |a, b| a / b),
        "%" => binary(args, |a, b| a % b),
        "^" => binary(args, f64::powf),
        "log10" => unary(args, f64::log10),
        "ln" => unary(args, f64::ln),
        "log2" => unary(args, f64::log2),
        "sin" => unary(args, f64::sin),
        "cos" => unary(args, f64::cos),
        "tan" => unary(args, f64::tan),
        "asin" => unary(args, f64::asin),
        "acos" => unary(args, f64::acos),
        "atan" => unary(args, f64::atan),
        _ => return None,
    })
}
