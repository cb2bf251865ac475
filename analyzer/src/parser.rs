//! JSON tree → untyped AST.
//!
//! The parser never performs type inference; it attaches each definition's declared
//! signature verbatim (except `array`, whose declared output length is patched to match
//! the number of provided elements) and leaves generic resolution to [`crate::check`].
use crate::diagnostics::ParseError;
use crate::expr::{Call, Expr, LitValue, Literal};
use crate::registry::Registry;
use crate::types::Ty;
use serde_json::Value;

fn child_key(key: &str, index: usize) -> String {
    if key.is_empty() {
        index.to_string()
    } else {
        format!("{key}.{index}")
    }
}

/// Parse a JSON expression tree rooted at `json`. On success returns `Some(expr)`; on
/// failure appends one or more [`ParseError`]s to `errors` and returns `None`. Callers that
/// need to keep collecting sibling errors (e.g. while parsing a call's argument list)
/// should continue iterating even after a `None` — this mirrors a common
/// `diags: &mut Vec<Diagnostic>` accumulator pattern.
pub fn parse(json: &Value, key: &str, registry: &Registry, errors: &mut Vec<ParseError>) -> Option<Expr> {
    match json {
        Value::Null => Some(Expr::Literal(Literal::from_value(LitValue::Null, key))),
        Value::Bool(b) => Some(Expr::Literal(Literal::from_value(LitValue::Boolean(*b), key))),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Some(Expr::Literal(Literal::from_value(LitValue::Number(f), key))),
            None => {
                errors.push(ParseError::new(key, "Number is not representable as a float"));
                None
            }
        },
        Value::String(s) => Some(Expr::Literal(Literal::from_value(LitValue::String(s.clone()), key))),
        Value::Array(items) => parse_call(items, key, registry, errors),
        Value::Object(_) => {
            errors.push(ParseError::new(
                key,
                "Expected an array, literal primitive, or null, but found an object instead.",
            ));
            None
        }
    }
}

fn parse_call(items: &[Value], key: &str, registry: &Registry, errors: &mut Vec<ParseError>) -> Option<Expr> {
    let Some(Value::String(op)) = items.first() else {
        errors.push(ParseError::new(child_key(key, 0), "Expected a string operator."));
        return None;
    };

    if op == "match" {
        return parse_match(items, key, registry, errors);
    }

    let Some(def) = registry.get(op.as_str()) else {
        errors.push(ParseError::new(key, format!("Unknown function {op}")));
        return None;
    };

    let mut arguments = Vec::with_capacity(items.len() - 1);
    let mut ok = true;
    for (i, raw) in items[1..].iter().enumerate() {
        match parse(raw, &child_key(key, i + 1), registry, errors) {
            Some(arg) => arguments.push(arg),
            None => ok = false,
        }
    }
    if !ok {
        return None;
    }

    let ty = if op == "array" {
        array_signature(arguments.len())
    } else {
        def.ty.clone()
    };

    Some(Expr::Call(Call {
        name: op.clone(),
        ty,
        arguments,
        key: key.to_string(),
        match_inputs: None,
    }))
}

/// `array`'s declared output length must match the number of provided elements, so its
/// signature is rebuilt per call rather than taken verbatim from the registry.
fn array_signature(arg_count: usize) -> Ty {
    let t = Ty::TypeName("T".into());
    Ty::lambda(
        Ty::Array(Box::new(t.clone()), arg_count),
        vec![Ty::NArgs(vec![t], crate::types::ArgCount::Finite(arg_count))],
    )
}

/// `["match", input, label₁, out₁, label₂, out₂, …, otherwise]`.
fn parse_match(items: &[Value], key: &str, registry: &Registry, errors: &mut Vec<ParseError>) -> Option<Expr> {
    if items.len() < 4 {
        errors.push(ParseError::new(
            key,
            "Expected at least 3 arguments, but found only ".to_string() + &(items.len().saturating_sub(1)).to_string() + ".",
        ));
        return None;
    }
    // items[0] = "match", items[1] = input, then (label, out) pairs, then otherwise.
    let remainder = &items[2..];
    if remainder.len() % 2 != 1 {
        errors.push(ParseError::new(key, "Missing otherwise clause for match expression."));
        return None;
    }
    let pair_count = (remainder.len() - 1) / 2;

    let input = parse(&items[1], &child_key(key, 1), registry, errors)?;

    let mut match_inputs: Vec<Vec<Literal>> = Vec::with_capacity(pair_count);
    let mut outputs: Vec<Expr> = Vec::with_capacity(pair_count);
    let mut ok = true;

    for i in 0..pair_count {
        let label_idx = 2 + i * 2;
        let out_idx = label_idx + 1;
        let label_key = child_key(key, label_idx);

        let labels = match &remainder[i * 2] {
            Value::Array(group) => {
                if group.is_empty() {
                    errors.push(ParseError::new(&label_key, "Expected at least one input value."));
                    ok = false;
                    continue;
                }
                group.iter().enumerate().map(|(j, v)| (v, child_key(&label_key, j))).collect::<Vec<_>>()
            }
            single => vec![(single, label_key.clone())],
        };

        let mut group_literals = Vec::with_capacity(labels.len());
        for (value, lkey) in labels {
            match literal_only(value, &lkey, errors) {
                Some(lit) => group_literals.push(lit),
                None => ok = false,
            }
        }
        match_inputs.push(group_literals);

        match parse(&remainder[i * 2 + 1], &child_key(key, out_idx), registry, errors) {
            Some(out) => outputs.push(out),
            None => ok = false,
        }
    }

    let otherwise_idx = items.len() - 1;
    let otherwise = parse(&items[otherwise_idx], &child_key(key, otherwise_idx), registry, errors);

    if !ok {
        return None;
    }
    let otherwise = otherwise?;

    let t = Ty::TypeName("T".into());
    let ty = Ty::lambda(
        t.clone(),
        vec![
            crate::types::value_type(),
            Ty::NArgs(vec![t.clone()], crate::types::ArgCount::Finite(pair_count)),
            t,
        ],
    );

    let mut arguments = Vec::with_capacity(2 + pair_count);
    arguments.push(input);
    arguments.extend(outputs);
    arguments.push(otherwise);

    Some(Expr::Call(Call {
        name: "match".to_string(),
        ty,
        arguments,
        key: key.to_string(),
        match_inputs: Some(match_inputs),
    }))
}

fn literal_only(value: &Value, key: &str, errors: &mut Vec<ParseError>) -> Option<Literal> {
    let lit = match value {
        Value::Null => LitValue::Null,
        Value::Bool(b) => LitValue::Boolean(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => LitValue::Number(f),
            None => {
                errors.push(ParseError::new(key, "Match inputs must be literal primitive values or arrays of literal primitive values."));
                return None;
            }
        },
        Value::String(s) => LitValue::String(s.clone()),
        _ => {
            errors.push(ParseError::new(
                key,
                "Match inputs must be literal primitive values or arrays of literal primitive values.",
            ));
            return None;
        }
    };
    Some(Literal::from_value(lit, key))
}
