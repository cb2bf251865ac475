use crate::eval::{combine_flags, Compiled, EvalCtx};
use crate::error::RuntimeError;
use crate::value::Value;
use analyzer::expr::Call;
use std::rc::Rc;

pub(super) fn build(call: &Call, args: &[Compiled]) -> Option<Compiled> {
    Some(match call.name.as_str() {
        "array" | "vector" => {
            let (fc, zc) = combine_flags(args, None, None);
            let thunks: Vec<_> = args.iter().map(|a| a.thunk.clone()).collect();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let items = thunks.iter().map(|t| t(ctx)).collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Vector(items))
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        "coalesce" => {
            let (fc, zc) = combine_flags(args, None, None);
            let thunks: Vec<_> = args.iter().map(|a| a.thunk.clone()).collect();
            let thunk: Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>> = Rc::new(move |ctx| {
                let last_index = thunks.len() - 1;
                for (i, t) in thunks.iter().enumerate() {
                    match t(ctx) {
                        Ok(v) if v != Value::Null => return Ok(v),
                        Ok(_) => continue,
                        Err(e) if i == last_index => return Err(e),
                        Err(e) => {
                            tracing::trace!(index = i, error = %e, "coalesce thunk fallthrough");
                            continue;
                        }
                    }
                }
                Ok(Value::Null)
            });
            Compiled { thunk, is_feature_constant: fc, is_zoom_constant: zc }
        }
        _ => return None,
    })
}
