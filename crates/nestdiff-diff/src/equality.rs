//! The value-equality rule.
//!
//! Two finite floats are equal when they differ by less than
//! [`f64::EPSILON`]. Every other pair must have the same variant and the
//! same value: there is no cross-type coercion, infinities are only equal
//! to the same-signed infinity, and NaN is never equal to anything.
//! Opaque values are equal only to themselves.
//!
//! Deep equality walks both trees with an explicit stack and applies the
//! same scalar/mapping coercion the differ uses, so that "equal" here and
//! "empty diff" in [`Differ`](crate::Differ) always agree.

use nestdiff_types::{Scalar, Tree, Value};

/// Key under which a scalar is placed when it has to be compared against
/// a mapping.
pub const WRAPPED_SCALAR_KEY: &str = "0";

/// Compare two leaves.
pub fn scalars_equal(a: &Scalar, b: &Scalar) -> bool {
    match (a, b) {
        (Scalar::Float(x), Scalar::Float(y)) if x.is_finite() && y.is_finite() => {
            (x - y).abs() < f64::EPSILON
        }
        (Scalar::Opaque(x), Scalar::Opaque(y)) => x.same_identity(y),
        _ => a == b,
    }
}

/// Deep equality of two trees. Key order is ignored.
pub fn trees_equal(a: &Tree, b: &Tree) -> bool {
    let mut pending = Vec::new();
    push_children(a, b, &mut pending) && drain(pending)
}

/// Deep equality of two values.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    drain(vec![(a, b)])
}

fn drain<'a>(mut pending: Vec<(&'a Value, &'a Value)>) -> bool {
    while let Some(pair) = pending.pop() {
        let equal = match pair {
            (Value::Scalar(x), Value::Scalar(y)) => scalars_equal(x, y),
            (Value::Map(x), Value::Map(y)) => push_children(x, y, &mut pending),
            (Value::Map(map), scalar @ Value::Scalar(_))
            | (scalar @ Value::Scalar(_), Value::Map(map)) => {
                push_wrapped(map, scalar, &mut pending)
            }
        };
        if !equal {
            return false;
        }
    }
    true
}

fn push_children<'a>(a: &'a Tree, b: &'a Tree, pending: &mut Vec<(&'a Value, &'a Value)>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, left) in a {
        match b.get(key.as_str()) {
            Some(right) => pending.push((left, right)),
            None => return false,
        }
    }
    true
}

// A scalar equals a mapping only when the mapping is exactly `{"0": scalar}`.
fn push_wrapped<'a>(
    map: &'a Tree,
    scalar: &'a Value,
    pending: &mut Vec<(&'a Value, &'a Value)>,
) -> bool {
    match map.get(WRAPPED_SCALAR_KEY) {
        Some(inner) if map.len() == 1 => {
            pending.push((inner, scalar));
            true
        }
        _ => false,
    }
}
