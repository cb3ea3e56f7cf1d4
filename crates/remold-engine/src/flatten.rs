//! Flatten and pack: thin compositions over produce and describe.

use crate::consume::convert_leaf;
use crate::describe::describe;
use crate::produce::produce;
use remold_core::{DefaultDescent, Descent, ReshapeError, ScalarType, SpecPath, Value};
use remold_spec::Spec;

/// Flatten one or more values into a single leaf sequence under the
/// default descent predicate.
///
/// Multiple values are treated as an implicit tuple: their productions
/// are concatenated in argument order. If `target` is given, every leaf
/// is converted to it.
///
/// # Examples
///
/// ```
/// use remold_engine::flatten;
/// use remold_core::{ScalarType, Value};
///
/// let leaves = flatten(
///     &[Value::int(1), Value::tuple(vec![Value::int(2), Value::int(3)])],
///     Some(ScalarType::Float),
/// )
/// .unwrap();
/// assert_eq!(leaves, vec![Value::float(1.0), Value::float(2.0), Value::float(3.0)]);
/// ```
pub fn flatten(values: &[Value], target: Option<ScalarType>) -> Result<Vec<Value>, ReshapeError> {
    flatten_with(values, target, &DefaultDescent)
}

/// [`flatten`] with a caller-supplied descent predicate.
pub fn flatten_with(
    values: &[Value],
    target: Option<ScalarType>,
    descent: &dyn Descent,
) -> Result<Vec<Value>, ReshapeError> {
    let mut leaves = Vec::new();
    for value in values {
        leaves.extend(produce(value, descent));
    }
    match target {
        None => Ok(leaves),
        Some(ty) => {
            let path = SpecPath::new();
            leaves
                .into_iter()
                .enumerate()
                .map(|(i, leaf)| convert_leaf(leaf, ty, &path, i))
                .collect()
        }
    }
}

/// Flatten and describe in one call, so the pair can be round-tripped
/// later through [`reshape`](crate::reshape::reshape).
///
/// A single value is described as itself; two or more are described as
/// an implicit tuple. The description always reflects the original
/// types, independent of any `target` conversion applied to the leaves.
///
/// # Examples
///
/// ```
/// use remold_engine::{pack, reshape};
/// use remold_core::{ArrayValue, Value};
/// use smallvec::smallvec;
///
/// let a = Value::Array(ArrayValue::from_ints(smallvec![2, 2], &[1, 2, 3, 4]).unwrap());
/// let b = Value::int(9);
/// let (leaves, spec) = pack(&[a.clone(), b.clone()], None).unwrap();
/// assert_eq!(leaves.len(), 5);
///
/// let restored = reshape(&Value::Tuple(leaves), &spec).unwrap();
/// assert_eq!(restored, Value::tuple(vec![a, b]));
/// ```
pub fn pack(
    values: &[Value],
    target: Option<ScalarType>,
) -> Result<(Vec<Value>, Spec), ReshapeError> {
    pack_with(values, target, &DefaultDescent)
}

/// [`pack`] with a caller-supplied descent predicate.
///
/// The predicate affects the flattened leaves only; description always
/// reflects intrinsic structure.
pub fn pack_with(
    values: &[Value],
    target: Option<ScalarType>,
    descent: &dyn Descent,
) -> Result<(Vec<Value>, Spec), ReshapeError> {
    let leaves = flatten_with(values, target, descent)?;
    let spec = match values {
        [single] => describe(single),
        many => Spec::Tuple(many.iter().map(describe).collect()),
    };
    Ok((leaves, spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use remold_core::Scalar;

    #[test]
    fn flatten_concatenates_productions_in_argument_order() {
        let leaves = flatten(
            &[
                Value::tuple(vec![Value::int(1), Value::int(2)]),
                Value::int(3),
            ],
            None,
        )
        .unwrap();
        assert_eq!(leaves, vec![Value::int(1), Value::int(2), Value::int(3)]);
    }

    #[test]
    fn flatten_conversion_failure_carries_stream_index() {
        let err = flatten(
            &[Value::int(1), Value::float(2.5)],
            Some(ScalarType::Int),
        )
        .unwrap_err();
        match err {
            ReshapeError::Conversion {
                error,
                stream_index,
                ..
            } => {
                assert_eq!(error.value, Value::Scalar(Scalar::Float(2.5)));
                assert_eq!(stream_index, 1);
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn pack_of_single_value_describes_the_value_itself() {
        let value = Value::tuple(vec![Value::int(1), Value::float(2.0)]);
        let (leaves, spec) = pack(&[value.clone()], None).unwrap();
        assert_eq!(leaves.len(), 2);
        assert_eq!(spec, describe(&value));
    }

    #[test]
    fn pack_spec_keeps_original_types_despite_target() {
        let (leaves, spec) = pack(&[Value::int(7)], Some(ScalarType::Float)).unwrap();
        assert_eq!(leaves, vec![Value::float(7.0)]);
        assert_eq!(spec, Spec::TypedScalar(ScalarType::Int));
    }
}
