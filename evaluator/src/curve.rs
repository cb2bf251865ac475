//! Curve engine: binary search over stops plus step / linear /
//! exponential interpolation.
use crate::error::RuntimeError;
use crate::value::Value;

/// Returns the greatest index `i` such that `stops[i] <= x`, clamped to `[0, stops.len() -
/// 2]`. Requires `stops.len() >= 2` and strictly ascending (guaranteed by the compile-time
/// validation at compile time).
pub fn binary_search(stops: &[f64], x: f64) -> usize {
    debug_assert!(stops.len() >= 2);
    let mut lo = 0usize;
    let mut hi = stops.len() - 1;
    while lo < hi {
        let mid = (lo + hi).div_ceil(2);
        if stops[mid] <= x {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    tracing::trace!(x, index = lo, "curve binary search");
    lo.min(stops.len() - 2)
}

/// `base = 1` is linear; otherwise exponential.
pub fn interpolation_factor(x: f64, base: f64, x0: f64, x1: f64) -> f64 {
    let d = x1 - x0;
    if d == 0.0 {
        return 0.0;
    }
    if base == 1.0 {
        (x - x0) / d
    } else {
        (base.powf(x - x0) - 1.0) / (base.powf(d) - 1.0)
    }
}

/// Interpolate between `a` and `b` at factor `t`, for the allowed output types:
/// `Number`, `Color`, or `Array<Number, N>`.
pub fn interpolate(t: f64, a: &Value, b: &Value) -> Result<Value, RuntimeError> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + (b - a) * t)),
        (Value::Color(a), Value::Color(b)) => {
            let mut out = [0.0; 4];
            for i in 0..4 {
                out[i] = a[i] + (b[i] - a[i]) * t;
            }
            Ok(Value::Color(out))
        }
        (Value::Vector(a), Value::Vector(b)) if a.len() == b.len() => {
            let mut out = Vec::with_capacity(a.len());
            for (x, y) in a.iter().zip(b.iter()) {
                out.push(interpolate(t, x, y)?);
            }
            Ok(Value::Vector(out))
        }
        _ => Err(RuntimeError::TypeAssertion {
            expected: a.type_of().to_string(),
            found: b.type_of().to_string(),
        }),
    }
}
