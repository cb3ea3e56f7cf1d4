//! The describer: inferring a specification from a concrete value.
//!
//! The inverse of consumption. Description recognizes only the two
//! built-in container shapes — it reflects a value's intrinsic
//! structure and never consults a descent predicate, so an opaque range
//! describes as a range-typed scalar even when production would have
//! expanded it.

use remold_core::{ArrayValue, Dims, ScalarType, Value};
use remold_spec::Spec;

/// Infer the most specific specification that reproduces the shape of
/// `value`.
///
/// Scalars become typed scalars; tuples recurse element-wise; an array
/// becomes a typed array if every element is a scalar of one common
/// type, an untyped array if its scalar elements mix types (or it has
/// no elements to witness a type), and an array of sub-specifications
/// if any element is itself a container.
///
/// # Examples
///
/// ```
/// use remold_engine::describe;
/// use remold_core::{ArrayValue, ScalarType, Value};
/// use remold_spec::Spec;
/// use smallvec::smallvec;
///
/// let value = Value::tuple(vec![
///     Value::float(1.5),
///     Value::Array(ArrayValue::from_ints(smallvec![2, 2], &[1, 2, 3, 4]).unwrap()),
/// ]);
/// assert_eq!(
///     describe(&value),
///     Spec::Tuple(vec![
///         Spec::TypedScalar(ScalarType::Float),
///         Spec::TypedArray(ScalarType::Int, smallvec![2, 2]),
///     ])
/// );
/// ```
pub fn describe(value: &Value) -> Spec {
    match value {
        Value::Scalar(s) => Spec::TypedScalar(s.scalar_type()),
        Value::Tuple(elems) => Spec::Tuple(elems.iter().map(describe).collect()),
        Value::Array(array) => describe_array(array),
    }
}

fn describe_array(array: &ArrayValue) -> Spec {
    let dims: Dims = array.dims().iter().copied().collect();
    match scalar_homogeneity(array) {
        Homogeneity::Uniform(ty) => Spec::TypedArray(ty, dims),
        Homogeneity::MixedScalars => Spec::AnyArray(dims),
        Homogeneity::HasContainers => Spec::ArrayOfSpecs {
            dims,
            elems: array.elements().iter().map(describe).collect(),
        },
    }
}

enum Homogeneity {
    Uniform(ScalarType),
    MixedScalars,
    HasContainers,
}

fn scalar_homogeneity(array: &ArrayValue) -> Homogeneity {
    let mut common: Option<ScalarType> = None;
    let mut mixed = false;
    for elem in array.elements() {
        match elem.as_scalar() {
            Some(s) => {
                let ty = s.scalar_type();
                match common {
                    None => common = Some(ty),
                    Some(seen) if seen != ty => mixed = true,
                    Some(_) => {}
                }
            }
            None => return Homogeneity::HasContainers,
        }
    }
    match (common, mixed) {
        (Some(ty), false) => Homogeneity::Uniform(ty),
        // Mixed scalar types, or nothing to witness a type.
        _ => Homogeneity::MixedScalars,
    }
}
