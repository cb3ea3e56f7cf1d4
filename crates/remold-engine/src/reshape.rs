//! Deep reshape: production and consumption tied together.

use crate::consume::consume_at;
use crate::produce::produce;
use crate::stream::ScalarStream;
use remold_core::{DefaultDescent, Descent, ReshapeError, SpecPath, Value};
use remold_spec::{Spec, SpecExpr};

/// Reshape `source` into the shape described by the raw expression
/// `spec`, under the default descent predicate.
///
/// Parses the expression, linearizes the source, and consumes the
/// resulting stream. The stream must be consumed exactly: too few
/// leaves fail with `InsufficientScalars`, leftovers with
/// `ExcessScalars`. Scalar contents and their order are preserved;
/// only the structure around them changes.
///
/// # Examples
///
/// ```
/// use remold_engine::deep_reshape;
/// use remold_core::{ScalarType, Value};
/// use remold_spec::SpecExpr;
///
/// let source = Value::tuple(vec![
///     Value::float(1.23),
///     Value::float(2.34),
///     Value::int(3),
///     Value::int(4),
///     Value::int(5),
/// ]);
/// let spec = SpecExpr::Tuple(vec![
///     SpecExpr::Type(ScalarType::Float),
///     SpecExpr::Type(ScalarType::Float),
///     SpecExpr::typed(ScalarType::Int, [3]),
/// ]);
/// let result = deep_reshape(&source, &spec).unwrap();
/// let elems = result.as_tuple().unwrap();
/// assert_eq!(elems[0], Value::float(1.23));
/// assert_eq!(elems[2].as_array().unwrap().dims(), &[3]);
/// ```
pub fn deep_reshape(source: &Value, spec: &SpecExpr) -> Result<Value, ReshapeError> {
    deep_reshape_with(source, spec, &DefaultDescent)
}

/// [`deep_reshape`] with a caller-supplied descent predicate.
pub fn deep_reshape_with(
    source: &Value,
    spec: &SpecExpr,
    descent: &dyn Descent,
) -> Result<Value, ReshapeError> {
    let parsed = Spec::parse(spec)?;
    reshape_with(source, &parsed, descent)
}

/// Reshape `source` against an already-parsed specification.
pub fn reshape(source: &Value, spec: &Spec) -> Result<Value, ReshapeError> {
    reshape_with(source, spec, &DefaultDescent)
}

/// [`reshape`] with a caller-supplied descent predicate.
pub fn reshape_with(
    source: &Value,
    spec: &Spec,
    descent: &dyn Descent,
) -> Result<Value, ReshapeError> {
    let mut stream = ScalarStream::new(produce(source, descent));
    let mut path = SpecPath::new();
    let value = consume_at(spec, &mut stream, &mut path)?;
    if stream.remaining() > 0 {
        return Err(ReshapeError::ExcessScalars {
            consumed: stream.consumed(),
            remaining: stream.remaining(),
        });
    }
    Ok(value)
}
