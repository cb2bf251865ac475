//! `get`/`has`/`at`/`length`/`typeof` and the feature/zoom accessors.
//!
//! `zoom`, and `properties`/`geometry_type`/`id`/`get`/`has` without an explicit object
//! argument, force their purity flag false regardless of their (nonexistent, or
//! feature-independent) children — the one place the `combine_flags` explicit-override
//! parameters matter.
use crate::eval::{combine_flags, Compiled, EvalCtx};
use crate::error::RuntimeError;
use crate::value::Value;
use analyzer::expr::Call;
use std::rc::Rc;

fn as_string(v: &Value) -> Result<String, RuntimeError> {
    v.as_str().map(str::to_string).ok_or_else(|| RuntimeError::TypeAssertion {
        expected: "String".to_string(),
        found: v.type_of().to_string(),
    })
}

fn as_object(v: Value) -> Result<std::collections::BTreeMap<String, Value>, RuntimeError> {
    match v {
        Value::Object(m) => Ok(m),
        other => Err(RuntimeError::TypeAssertion { expected: "Object".to_string(), found: other.type_of().to_string() }),
    }
}

pub(super) fn build(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    Some(match call.name.as_str() {
        "get" => {
            let key = args[0].thunk.clone();
            if args.len() == 1 {
                let (fc, zc) = combine_flags(args, Some(false), None);
                let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                    let k = as_string(&key(ctx)?)?;
                    ctx.feature.properties.get(&k).cloned().ok_or_else(|| RuntimeError::PropertyNotFound(k))
                });
                Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
            } else {
                let (fc, zc) = combine_flags(args, None, None);
                let obj = args[1].thunk.clone();
                let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                    let k = as_string(&key(ctx)?)?;
                    let map = as_object(obj(ctx)?)?;
                    map.get(&k).cloned().ok_or_else(|| RuntimeError::PropertyNotFound(k))
                });
                Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
            }
        }
        "has" => {
            let key = args[0].thunk.clone();
            if args.len() == 1 {
                let (fc, zc) = combine_flags(args, Some(false), None);
                let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                    let k = as_string(&key(ctx)?)?;
                    Ok(Value::Boolean(ctx.feature.properties.contains_key(&k)))
                });
                Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
            } else {
                let (fc, zc) = combine_flags(args, None, None);
                let obj = args[1].thunk.clone();
                let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                    let k = as_string(&key(ctx)?)?;
                    let map = as_object(obj(ctx)?)?;
                    Ok(Value::Boolean(map.contains_key(&k)))
                });
                Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
            }
        }
        "at" => {
            let (fc, zc) = combine_flags(args, None, None);
            let index = args[0].thunk.clone();
            let collection = args[1].thunk.clone();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let i = index(ctx)?.as_number().ok_or_else(|| RuntimeError::TypeAssertion {
                    expected: "Number".to_string(),
                    found: "non-number index".to_string(),
                })? as i64;
                let c = collection(ctx)?;
                let items = c.as_vector().ok_or_else(|| RuntimeError::TypeAssertion {
                    expected: "Vector".to_string(),
                    found: c.type_of().to_string(),
                })?;
                if i < 0 || i as usize >= items.len() {
                    return Err(RuntimeError::IndexOutOfBounds { index: i, len: items.len() });
                }
                Ok(items[i as usize].clone())
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "length" => {
            let (fc, zc) = combine_flags(args, None, None);
            let a = args[0].thunk.clone();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let v = a(ctx)?;
                let len = match &v {
                    Value::Vector(items) => items.len(),
                    Value::String(s) => s.chars().count(),
                    other => {
                        return Err(RuntimeError::TypeAssertion {
                            expected: "Vector or String".to_string(),
                            found: other.type_of().to_string(),
                        })
                    }
                };
                Ok(Value::Number(len as f64))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "typeof" => {
            let (fc, zc) = combine_flags(args, None, None);
            let a = args[0].thunk.clone();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| Ok(Value::String(a(ctx)?.type_of().to_string())));
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "properties" => {
            let (fc, zc) = combine_flags(args, Some(false), None);
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(|ctx| Ok(Value::Object(ctx.feature.properties.clone())));
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "geometry_type" => {
            let (fc, zc) = combine_flags(args, Some(false), None);
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> =
                Rc::new(|ctx| Ok(Value::String(ctx.feature.geometry_type.clone().unwrap_or_else(|| "Unknown".to_string()))));
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "id" => {
            let (fc, zc) = combine_flags(args, Some(false), None);
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(|ctx| Ok(ctx.feature.id.clone().unwrap_or(Value::Null)));
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "zoom" => {
            let (fc, zc) = combine_flags(args, None, Some(false));
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(|ctx| Ok(Value::Number(ctx.zoom)));
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        _ => return None,
    })
}
