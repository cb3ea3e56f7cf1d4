//! The producer: linearizing a nested source into an ordered leaf stream.

use remold_core::{Descent, Value};

/// Linearize `value` into its ordered sequence of leaves under `descent`.
///
/// Containers are recursed into in element order and their productions
/// concatenated; anything the predicate declines travels as one opaque
/// leaf. The result is finite (recursion depth is bounded by the input's
/// nesting depth — values are trees, not graphs) and deterministic: the
/// same value and predicate always yield the same sequence.
///
/// # Examples
///
/// ```
/// use remold_engine::produce;
/// use remold_core::{DefaultDescent, RangeDescent, Value};
///
/// let source = Value::tuple(vec![Value::int(1), Value::range(10, 12)]);
///
/// // The default predicate keeps the range opaque.
/// let leaves = produce(&source, &DefaultDescent);
/// assert_eq!(leaves, vec![Value::int(1), Value::range(10, 12)]);
///
/// // An extended predicate expands it.
/// let leaves = produce(&source, &RangeDescent);
/// assert_eq!(leaves, vec![Value::int(1), Value::int(10), Value::int(11)]);
/// ```
pub fn produce(value: &Value, descent: &dyn Descent) -> Vec<Value> {
    let mut out = Vec::new();
    produce_into(value, descent, &mut out);
    out
}

fn produce_into(value: &Value, descent: &dyn Descent, out: &mut Vec<Value>) {
    match descent.elements(value) {
        Some(children) => {
            for child in &children {
                produce_into(child, descent, out);
            }
        }
        None => out.push(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remold_core::{ArrayValue, DefaultDescent};
    use smallvec::smallvec;

    #[test]
    fn nested_containers_linearize_depth_first_in_order() {
        let inner = ArrayValue::from_ints(smallvec![2], &[3, 4]).unwrap();
        let source = Value::tuple(vec![
            Value::int(1),
            Value::tuple(vec![Value::int(2), Value::Array(inner)]),
            Value::float(5.0),
        ]);
        assert_eq!(
            produce(&source, &DefaultDescent),
            vec![
                Value::int(1),
                Value::int(2),
                Value::int(3),
                Value::int(4),
                Value::float(5.0),
            ]
        );
    }

    #[test]
    fn scalar_source_produces_itself() {
        assert_eq!(
            produce(&Value::bool(true), &DefaultDescent),
            vec![Value::bool(true)]
        );
    }

    #[test]
    fn empty_containers_produce_nothing() {
        let empty_array = ArrayValue::from_ints(smallvec![0], &[]).unwrap();
        let source = Value::tuple(vec![Value::tuple(vec![]), Value::Array(empty_array)]);
        assert_eq!(produce(&source, &DefaultDescent), Vec::<Value>::new());
    }

    #[test]
    fn array_elements_stream_in_linearization_order() {
        let array = ArrayValue::from_ints(smallvec![3, 2], &[1, 3, 5, 2, 4, 6]).unwrap();
        let leaves = produce(&Value::Array(array), &DefaultDescent);
        let ints: Vec<i64> = leaves
            .iter()
            .map(|v| match v.as_scalar() {
                Some(remold_core::Scalar::Int(i)) => i,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(ints, vec![1, 3, 5, 2, 4, 6]);
    }
}
