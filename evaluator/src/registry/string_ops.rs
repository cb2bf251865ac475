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

pub(super) fn build(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    Some(match call.name.as_str() {
        "upcase" | "downcase" => {
            let (fc, zc) = combine_flags(args, None, None);
            let a = args[0].thunk.clone();
            let upper = call.name == "upcase";
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let s = as_string(&a(ctx)?)?;
                Ok(Value::String(if upper { s.to_uppercase() } else { s.to_lowercase() }))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "concat" => {
            let (fc, zc) = combine_flags(args, None, None);
            let thunks: Vec<_> = args.iter().map(|a| a.thunk.clone()).collect();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let mut out = String::new();
                for t in &thunks {
                    out.push_str(&t(ctx)?.to_string());
                }
                Ok(Value::String(out))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "string" => coerce(args, |v| Ok(Value::String(v.to_string()))),
        "number" => coerce(args, |v| match v {
            Value::Number(_) => Ok(v.clone()),
            Value::String(s) => s
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|_| RuntimeError::TypeAssertion { expected: "Number".to_string(), found: "non-numeric string".to_string() }),
            other => Err(RuntimeError::TypeAssertion { expected: "Number".to_string(), found: other.type_of().to_string() }),
        }),
        "boolean" => coerce(args, |v| match v {
            Value::Boolean(_) => Ok(v.clone()),
            other => Err(RuntimeError::TypeAssertion { expected: "Boolean".to_string(), found: other.type_of().to_string() }),
        }),
        "object" => coerce(args, |v| match v {
            Value::Object(_) => Ok(v.clone()),
            other => Err(RuntimeError::TypeAssertion { expected: "Object".to_string(), found: other.type_of().to_string() }),
        }),
        "json_array" => coerce(args, |v| match v {
            Value::Vector(_) => Ok(v.clone()),
            other => Err(RuntimeError::TypeAssertion { expected: "Vector".to_string(), found: other.type_of().to_string() }),
        }),
        _ => return None,
    })
}

fn coerce(args: &[Compiled], convert: fn(&Value) -> Result<Value, RuntimeError>) -> Compiled {
    let (fc, zc) = combine_flags(args, None, None);
    let a = args[0].thunk.clone();
    let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| convert(&a(ctx)?));
    Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
}
