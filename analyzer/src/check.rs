//! Type checker.
//!
//! Two-pass, top-down: an outer `expected` type drives [`typecheck`], which (1) unifies the
//! call's declared result against `expected` to bind typenames, (2) expands the declared
//! parameter list against the actual argument count (step 2 / [`crate::types::expand_params`]),
//! (3) shallowly matches each argument's own declared result type against the expanded
//! parameter (never looking into the argument's subtree — "Generic inference
//! scope"), (4) resolves the result type and rejects it if still generic, then (5)
//! recurses into each argument with its now-resolved expected type.
use crate::diagnostics::TypeError;
use crate::expr::{Call, Expr, Literal, LitValue};
use crate::types::{self, Ty};
use std::collections::HashMap;

pub type Bindings = HashMap<String, Ty>;

const NON_NUMERIC_CURVE_STOP: &str =
    "Input/output pairs for \"curve\" expressions must be defined using literal numeric values.";
const NON_ASCENDING_CURVE_STOPS: &str =
    "Input/output pairs for \"curve\" expressions must be arranged with input values in strictly ascending order.";
const NON_LITERAL_EXPONENTIAL_BASE: &str =
    "The base of an \"exponential\" curve interpolation must be a literal number.";

/// `true` for the output types a `curve` may interpolate between (step accepts any type and
/// is checked separately by the caller).
fn is_interpolatable(ty: &Ty) -> bool {
    match ty {
        Ty::Number | Ty::Color => true,
        Ty::Array(inner, _) => matches!(inner.as_ref(), Ty::Number),
        _ => false,
    }
}

/// Compile-time validation for `curve` that the declared parameter types can't express:
/// every stop input must be a literal number, stop inputs must be strictly ascending, the
/// output type must be interpolatable unless the interpolation is `step`, and an
/// `exponential` base must be a literal number.
fn validate_curve(call_key: &str, args: &[Expr], result_ty: &Ty) -> Vec<TypeError> {
    let mut errors = Vec::new();
    let mut stop_values = Vec::new();

    for arg in args[2..].iter().step_by(2) {
        match arg {
            Expr::Literal(Literal { value: LitValue::Number(n), .. }) => stop_values.push(*n),
            other => errors.push(TypeError::new(other.key().to_string(), NON_NUMERIC_CURVE_STOP)),
        }
    }

    if errors.is_empty() && !stop_values.windows(2).all(|w| w[0] < w[1]) {
        errors.push(TypeError::new(call_key.to_string(), NON_ASCENDING_CURVE_STOPS));
    }

    let is_step = matches!(&args[0], Expr::Call(c) if c.name == "step");
    if !is_step && !is_interpolatable(result_ty) {
        errors.push(TypeError::new(
            call_key.to_string(),
            format!("Type {} is not interpolatable, and cannot be used as a \"curve\" output type.", types::name(result_ty)),
        ));
    }

    if let Expr::Call(c) = &args[0] {
        if c.name == "exponential" {
            let base_is_literal = matches!(c.arguments.first(), Some(Expr::Literal(Literal { value: LitValue::Number(_), .. })));
            if !base_is_literal {
                errors.push(TypeError::new(c.key.clone(), NON_LITERAL_EXPONENTIAL_BASE));
            }
        }
    }

    errors
}

/// `match(expected, t, bindings)`. Mutates `bindings` on success; on
/// failure `bindings` may have been partially mutated by the caller's own copy-on-branch
/// discipline (see the `Ty::Variant` arm), never by this function directly past the point
/// of failure for any single non-variant comparison.
pub fn match_ty(expected: &Ty, actual: &Ty, bindings: &mut Bindings) -> Result<(), String> {
    // A lambda in argument position evaluates to its result.
    let actual = actual.result_type();

    if let Ty::TypeName(name) = expected {
        if !bindings.contains_key(name) && !matches!(actual, Ty::TypeName(_) | Ty::Null) {
            bindings.insert(name.clone(), actual.clone());
        }
        return Ok(());
    }

    if let Ty::TypeName(name) = actual {
        // `t` is a free typename and `expected` is concrete: bind symmetrically and
        // proceed as if `t` had been `expected` all along. This is what lets a bare `T`
        // result (e.g. `coalesce`, `case`, `array`) pick up a concrete type from the
        // caller's `expected` during step 1 of `typecheck_call`.
        if !types::is_generic(expected) {
            bindings.entry(name.clone()).or_insert_with(|| expected.clone());
        }
        return Ok(());
    }

    if matches!(actual, Ty::Null) {
        // null is bottom: compatible with every type.
        return Ok(());
    }

    if let Ty::Variant(v) = expected {
        if let Ty::Variant(actual_variant) = actual {
            for member in actual_variant.members() {
                match_ty(expected, &member, bindings)?;
            }
            return Ok(());
        }
        for member in v.members() {
            let mut attempt = bindings.clone();
            if match_ty(&member, actual, &mut attempt).is_ok() {
                *bindings = attempt;
                return Ok(());
            }
        }
        return Err(format!("Expected {} but found {} instead.", types::name(expected), types::name(actual)));
    }

    match (expected, actual) {
        (Ty::Null, Ty::Null)
        | (Ty::Number, Ty::Number)
        | (Ty::String, Ty::String)
        | (Ty::Boolean, Ty::Boolean)
        | (Ty::Color, Ty::Color)
        | (Ty::Object, Ty::Object)
        | (Ty::InterpolationType, Ty::InterpolationType) => Ok(()),
        (Ty::Vector(e), Ty::Vector(a)) => match_ty(e, a, bindings),
        (Ty::Array(e, en), Ty::Array(a, an)) => {
            if en != an {
                return Err(format!("Expected {} but found {} instead.", types::name(expected), types::name(actual)));
            }
            match_ty(e, a, bindings)
        }
        (Ty::AnyArray(e), Ty::Array(a, _)) => match_ty(e, a, bindings),
        _ => Err(format!("Expected {} but found {} instead.", types::name(expected), types::name(actual))),
    }
}

/// Type-check `e` against `expected`, returning a fully-resolved replacement expression or
/// the list of errors collected while trying.
pub fn typecheck(expected: &Ty, e: Expr) -> Result<Expr, Vec<TypeError>> {
    match e {
        Expr::Literal(lit) => typecheck_literal(expected, lit),
        Expr::Call(call) => typecheck_call(expected, call),
    }
}

fn typecheck_literal(expected: &Ty, lit: Literal) -> Result<Expr, Vec<TypeError>> {
    let mut bindings = Bindings::new();
    match match_ty(expected, &lit.ty, &mut bindings) {
        Ok(()) => Ok(Expr::Literal(lit)),
        Err(msg) => Err(vec![TypeError::new(lit.key.clone(), msg)]),
    }
}

fn typecheck_call(expected: &Ty, call: Call) -> Result<Expr, Vec<TypeError>> {
    tracing::debug!(name = %call.name, key = %call.key, "typecheck call");

    let Some((decl_result, decl_params)) = call.ty.as_lambda() else {
        unreachable!("Call::ty is always a Lambda");
    };
    let decl_result = decl_result.clone();
    let decl_params = decl_params.to_vec();

    let mut bindings = Bindings::new();
    let step1 = match expected.as_lambda() {
        Some((exp_result, _)) => match_ty(exp_result, &decl_result, &mut bindings),
        None => match_ty(expected, &decl_result, &mut bindings),
    };
    if let Err(msg) = step1 {
        return Err(vec![TypeError::new(call.key.clone(), msg)]);
    }

    let Some(expanded_params) = types::expand_params(&decl_params, call.arguments.len()) else {
        return Err(vec![TypeError::new(
            call.key.clone(),
            format!("Expected {} arguments, but found {} instead.", decl_params.len(), call.arguments.len()),
        )]);
    };

    let mut errors = Vec::new();
    for (param, arg) in expanded_params.iter().zip(call.arguments.iter()) {
        let resolved_param = types::resolve(param, &bindings);
        if let Err(msg) = match_ty(&resolved_param, arg.result_type(), &mut bindings) {
            errors.push(TypeError::new(arg.key().to_string(), msg));
        }
    }

    let result_ty = types::resolve(&decl_result, &bindings);
    if types::is_generic(&result_ty) {
        errors.push(TypeError::new(
            call.key.clone(),
            format!(
                "Could not resolve {}. This expression must be wrapped in a type conversion, e.g. [\"string\", ...].",
                types::name(&decl_result)
            ),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut resolved_args = Vec::with_capacity(call.arguments.len());
    let mut resolved_params = Vec::with_capacity(expanded_params.len());
    for (param, arg) in expanded_params.into_iter().zip(call.arguments.into_iter()) {
        let resolved_param = types::resolve(&param, &bindings);
        match typecheck(&resolved_param, arg) {
            Ok(resolved_arg) => resolved_args.push(resolved_arg),
            Err(e) => errors.extend(e),
        }
        resolved_params.push(resolved_param);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if call.name == "curve" {
        errors.extend(validate_curve(&call.key, &resolved_args, &result_ty));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let match_inputs = match call.match_inputs {
        Some(groups) => {
            let input_ty = resolved_args.first().map(|a| a.result_type().clone()).unwrap_or(Ty::Null);
            let mut rechecked = Vec::with_capacity(groups.len());
            for group in groups {
                let mut out_group = Vec::with_capacity(group.len());
                for lit in group {
                    let mut label_bindings = Bindings::new();
                    if let Err(msg) = match_ty(&input_ty, &lit.ty, &mut label_bindings) {
                        errors.push(TypeError::new(lit.key.clone(), msg));
                    }
                    out_group.push(lit);
                }
                rechecked.push(out_group);
            }
            if !errors.is_empty() {
                return Err(errors);
            }
            Some(rechecked)
        }
        None => None,
    };

    Ok(Expr::Call(Call {
        name: call.name,
        ty: Ty::lambda(result_ty, resolved_params),
        arguments: resolved_args,
        key: call.key,
        match_inputs,
    }))
}
