//! The consumer: rebuilding a structure from the leaf stream.
//!
//! One running stream is threaded through the whole specification tree:
//! each scalar leaf pulls exactly one leaf, each array leaf pulls a
//! block of `product(dims)`, and containers recurse in order, handing
//! the remainder forward. Nesting depth is unbounded.

use crate::stream::ScalarStream;
use remold_core::{
    dims_product, ArrayValue, ConvertError, ReshapeError, ScalarType, SpecPath, Value,
};
use remold_spec::Spec;

/// Consume leaves from the front of `leaves` according to `spec`.
///
/// Returns the constructed value and the unconsumed remainder. Callers
/// that require exact consumption should use
/// [`reshape`](crate::reshape::reshape), which turns a non-empty
/// remainder into `ExcessScalars`.
///
/// # Examples
///
/// ```
/// use remold_engine::consume;
/// use remold_spec::Spec;
/// use remold_core::Value;
///
/// let leaves = vec![Value::int(1), Value::int(2)];
/// let (value, rest) = consume(&Spec::AnyScalar, leaves).unwrap();
/// assert_eq!(value, Value::int(1));
/// assert_eq!(rest, vec![Value::int(2)]);
/// ```
pub fn consume(spec: &Spec, leaves: Vec<Value>) -> Result<(Value, Vec<Value>), ReshapeError> {
    let mut stream = ScalarStream::new(leaves);
    let mut path = SpecPath::new();
    let value = consume_at(spec, &mut stream, &mut path)?;
    Ok((value, stream.into_remainder()))
}

pub(crate) fn consume_at(
    spec: &Spec,
    stream: &mut ScalarStream,
    path: &mut SpecPath,
) -> Result<Value, ReshapeError> {
    match spec {
        Spec::AnyScalar => stream.next_leaf(path),
        Spec::TypedScalar(ty) => {
            let index = stream.consumed();
            let leaf = stream.next_leaf(path)?;
            convert_leaf(leaf, *ty, path, index)
        }
        Spec::AnyArray(dims) => {
            let count = dims_product(dims).unwrap_or(usize::MAX);
            let elems = stream.take_block(count, path)?;
            Ok(Value::Array(ArrayValue::new(dims.clone(), elems)?))
        }
        Spec::TypedArray(ty, dims) => {
            let count = dims_product(dims).unwrap_or(usize::MAX);
            let start = stream.consumed();
            let elems = stream.take_block(count, path)?;
            let converted = elems
                .into_iter()
                .enumerate()
                .map(|(i, leaf)| convert_leaf(leaf, *ty, path, start + i))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(ArrayValue::new(dims.clone(), converted)?))
        }
        Spec::Tuple(subs) => {
            let mut elems = Vec::with_capacity(subs.len());
            for (i, sub) in subs.iter().enumerate() {
                path.push(i);
                let elem = consume_at(sub, stream, path);
                path.pop();
                elems.push(elem?);
            }
            Ok(Value::Tuple(elems))
        }
        Spec::ArrayOfSpecs { dims, elems: subs } => {
            let mut elems = Vec::with_capacity(subs.len());
            for (i, sub) in subs.iter().enumerate() {
                path.push(i);
                let elem = consume_at(sub, stream, path);
                path.pop();
                elems.push(elem?);
            }
            Ok(Value::Array(ArrayValue::new(dims.clone(), elems)?))
        }
    }
}

/// Convert a leaf pulled from the stream to a declared type.
///
/// A leaf that is not a scalar (an opaque container the predicate
/// declined to descend) can never satisfy a declared type.
pub(crate) fn convert_leaf(
    leaf: Value,
    target: ScalarType,
    path: &SpecPath,
    stream_index: usize,
) -> Result<Value, ReshapeError> {
    let error = match leaf {
        Value::Scalar(s) => match s.convert(target) {
            Ok(converted) => return Ok(Value::Scalar(converted)),
            Err(error) => error,
        },
        other => ConvertError {
            value: other,
            target,
        },
    };
    Err(ReshapeError::Conversion {
        error,
        path: path.clone(),
        stream_index,
    })
}
