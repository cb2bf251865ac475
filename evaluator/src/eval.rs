//! Evaluator/Compiler.
//!
//! Walks a fully-resolved [`analyzer::expr::Expr`] and produces a tree of closures — a
//! [`Compiled`] value per node — rather than emitting and `eval`-ing a source string (spec
//! §9 "Compilation strategy"). Laziness for `case`/`match`/`coalesce`/`curve` branches falls
//! out naturally: a child's [`Thunk`] is itself a closure, so holding it without calling it
//! *is* the boxed thunk the design note asks for.
use crate::error::RuntimeError;
use crate::value::{Feature, Value};
use analyzer::expr::Expr;
use std::rc::Rc;

pub struct EvalCtx<'a> {
    pub zoom: f64,
    pub feature: &'a Feature,
}

pub type Thunk = Rc<dyn Fn(&EvalCtx) -> Result<Value, RuntimeError>>;

/// One compiled node: its thunk plus the two purity flags, propagated bottom-up (spec
/// §4.5). Both start `true` at literals, are conjoined across children, then conjoined
/// with any explicit flag a registry entry sets (e.g. `zoom()` forces `is_zoom_constant =
/// false` regardless of its — nonexistent — children).
#[derive(Clone)]
pub struct Compiled {
    pub thunk: Thunk,
    pub is_feature_constant: bool,
    pub is_zoom_constant: bool,
}

impl Compiled {
    pub fn constant(value: Value) -> Compiled {
        Compiled {
            thunk: Rc::new(move |_ctx| Ok(value.clone())),
            is_feature_constant: true,
            is_zoom_constant: true,
        }
    }

    pub fn eval(&self, ctx: &EvalCtx) -> Result<Value, RuntimeError> {
        (self.thunk)(ctx)
    }
}

/// Conjoin purity flags across `children`, then apply any explicit override (`None` means
/// "no additional constraint").
pub fn combine_flags(children: &[Compiled], explicit_fc: Option<bool>, explicit_zc: Option<bool>) -> (bool, bool) {
    let fc = children.iter().all(|c| c.is_feature_constant) && explicit_fc.unwrap_or(true);
    let zc = children.iter().all(|c| c.is_zoom_constant) && explicit_zc.unwrap_or(true);
    (fc, zc)
}

fn literal_compiled(lit: &analyzer::expr::Literal) -> Compiled {
    use analyzer::expr::LitValue;
    let value = match &lit.value {
        LitValue::Null => Value::Null,
        LitValue::Number(n) => Value::Number(*n),
        LitValue::String(s) => Value::String(s.clone()),
        LitValue::Boolean(b) => Value::Boolean(*b),
    };
    Compiled::constant(value)
}

/// Compile a fully type-checked expression into a callable closure tree.
pub fn compile_expr(expr: &Expr) -> Compiled {
    match expr {
        Expr::Literal(lit) => literal_compiled(lit),
        Expr::Call(call) => {
            let args: Vec<Compiled> = call.arguments.iter().map(compile_expr).collect();
            crate::registry::build(call, args)
        }
    }
}
