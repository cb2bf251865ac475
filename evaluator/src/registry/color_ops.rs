use crate::color::{from_components, parse_color_or_err};
use crate::eval::{combine_flags, Compiled, EvalCtx};
use crate::error::RuntimeError;
use crate::value::Value;
use analyzer::expr::Call;
use std::rc::Rc;

fn number(v: Value) -> Result<f64, RuntimeError> {
    v.as_number().ok_or_else(|| RuntimeError::TypeAssertion {
        expected: "Number".to_string(),
        found: v.type_of().to_string(),
    })
}

pub(super) fn build(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    Some(match call.name.as_str() {
        "color" => {
            let (fc, zc) = combine_flags(args, None, None);
            let a = args[0].thunk.clone();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let s = a(ctx)?;
                let s = s.as_str().ok_or_else(|| RuntimeError::TypeAssertion {
                    expected: "String".to_string(),
                    found: s.type_of().to_string(),
                })?;
                Ok(Value::Color(parse_color_or_err(s)?))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "rgb" | "rgba" => {
            let (fc, zc) = combine_flags(args, None, None);
            let r = args[0].thunk.clone();
            let g = args[1].thunk.clone();
            let b = args[2].thunk.clone();
            let a = args.get(3).map(|c| c.thunk.clone());
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let r = number(r(ctx)?)?;
                let g = number(g(ctx)?)?;
                let b = number(b(ctx)?)?;
                let alpha = match &a {
                    Some(t) => number(t(ctx)?)?,
                    None => 1.0,
                };
                Ok(Value::Color(from_components(r, g, b, alpha)))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "color_to_array" => {
            let (fc, zc) = combine_flags(args, None, None);
            let a = args[0].thunk.clone();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let c = a(ctx)?;
                let c = c.as_color().ok_or_else(|| RuntimeError::TypeAssertion {
                    expected: "Color".to_string(),
                    found: c.type_of().to_string(),
                })?;
                Ok(Value::Vector(c.iter().map(|x| Value::Number(*x)).collect()))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        _ => return None,
    })
}
