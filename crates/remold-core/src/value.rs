//! Nested value trees: scalars, tuples, and multi-dimensional arrays.
//!
//! Values are immutable trees with structural equality and no identity.
//! Array elements are stored flat in the fixed linearization order
//! (first dimension varies fastest), which is the one ordering shared by
//! the producer and the consumer: reshaping is a reinterpretation of the
//! flat element sequence under new extents.

use crate::error::ValueError;
use crate::scalar::{IntRange, Scalar};
use smallvec::SmallVec;

/// Per-dimension extents of an array.
///
/// Uses `SmallVec<[usize; 4]>` so arrays up to rank 4 keep their extents
/// inline; higher ranks spill to the heap transparently.
pub type Dims = SmallVec<[usize; 4]>;

/// Product of the extents, `None` on `usize` overflow.
pub fn dims_product(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// A value the reshaping engine operates on.
///
/// Exactly two container shapes exist: fixed-arity heterogeneous tuples
/// and fixed-rank homogeneous-shape arrays. Everything else is a
/// [`Scalar`] leaf.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An indivisible leaf.
    Scalar(Scalar),
    /// Fixed-arity, heterogeneous, ordered container.
    Tuple(Vec<Value>),
    /// Fixed-rank container with per-dimension extents.
    Array(ArrayValue),
}

impl Value {
    /// Integer scalar.
    pub fn int(v: i64) -> Self {
        Self::Scalar(Scalar::Int(v))
    }

    /// Float scalar.
    pub fn float(v: f64) -> Self {
        Self::Scalar(Scalar::Float(v))
    }

    /// Boolean scalar.
    pub fn bool(v: bool) -> Self {
        Self::Scalar(Scalar::Bool(v))
    }

    /// Range scalar covering `start..end`.
    pub fn range(start: i64, end: i64) -> Self {
        Self::Scalar(Scalar::Range(IntRange::new(start, end)))
    }

    /// Tuple of the given elements.
    pub fn tuple(elems: Vec<Value>) -> Self {
        Self::Tuple(elems)
    }

    /// Array value.
    pub fn array(array: ArrayValue) -> Self {
        Self::Array(array)
    }

    /// The scalar payload, if this value is a leaf.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// The tuple elements, if this value is a tuple.
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Self::Tuple(elems) => Some(elems),
            _ => None,
        }
    }

    /// The array, if this value is one.
    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::bool(v)
    }
}

impl From<IntRange> for Value {
    fn from(r: IntRange) -> Self {
        Self::Scalar(Scalar::Range(r))
    }
}

impl From<ArrayValue> for Value {
    fn from(a: ArrayValue) -> Self {
        Self::Array(a)
    }
}

/// A multi-dimensional array value.
///
/// Elements are stored flat in linearization order: the first dimension
/// varies fastest. For a 3×2 array the storage order is
/// `(0,0), (1,0), (2,0), (0,1), (1,1), (2,1)`.
///
/// Construction validates that the element count equals the product of
/// the extents and that the rank is at least 1. Zero extents are legal
/// and yield an empty array.
///
/// # Examples
///
/// ```
/// use remold_core::{ArrayValue, Value};
/// use smallvec::smallvec;
///
/// let a = ArrayValue::from_ints(smallvec![3, 2], &[1, 3, 5, 2, 4, 6]).unwrap();
/// assert_eq!(a.rank(), 2);
/// assert_eq!(a.len(), 6);
/// assert_eq!(a.get(&[2, 0]), Some(&Value::int(5)));
/// assert_eq!(a.get(&[0, 1]), Some(&Value::int(2)));
/// assert_eq!(a.get(&[3, 0]), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayValue {
    dims: Dims,
    elements: Vec<Value>,
}

impl ArrayValue {
    /// Create an array from extents and elements in linearization order.
    ///
    /// Fails with [`ValueError::ZeroRank`] if `dims` is empty, with
    /// [`ValueError::ExtentOverflow`] if the extent product overflows,
    /// and with [`ValueError::ShapeMismatch`] if the element count does
    /// not match the product.
    pub fn new(dims: Dims, elements: Vec<Value>) -> Result<Self, ValueError> {
        if dims.is_empty() {
            return Err(ValueError::ZeroRank);
        }
        let expected = dims_product(&dims).ok_or_else(|| ValueError::ExtentOverflow {
            dims: dims.clone(),
        })?;
        if elements.len() != expected {
            return Err(ValueError::ShapeMismatch {
                dims,
                expected,
                found: elements.len(),
            });
        }
        Ok(Self { dims, elements })
    }

    /// Convenience constructor: array of integer scalars.
    pub fn from_ints(dims: Dims, values: &[i64]) -> Result<Self, ValueError> {
        Self::new(dims, values.iter().map(|&v| Value::int(v)).collect())
    }

    /// Convenience constructor: array of float scalars.
    pub fn from_floats(dims: Dims, values: &[f64]) -> Result<Self, ValueError> {
        Self::new(dims, values.iter().map(|&v| Value::float(v)).collect())
    }

    /// Per-dimension extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if any extent is zero.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in linearization order.
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Consume the array, yielding its elements in linearization order.
    pub fn into_elements(self) -> Vec<Value> {
        self.elements
    }

    /// Element at a multi-dimensional index, or `None` if the index has
    /// the wrong rank or is out of bounds.
    ///
    /// The flat offset follows the linearization order: the stride of the
    /// first dimension is 1, each later dimension's stride is the product
    /// of the extents before it.
    pub fn get(&self, index: &[usize]) -> Option<&Value> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut offset = 0usize;
        let mut stride = 1usize;
        for (&i, &extent) in index.iter().zip(self.dims.iter()) {
            if i >= extent {
                return None;
            }
            offset += i * stride;
            stride *= extent;
        }
        self.elements.get(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn new_validates_element_count() {
        let err = ArrayValue::from_ints(smallvec![2, 2], &[1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ValueError::ShapeMismatch {
                dims: smallvec![2, 2],
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn new_rejects_rank_zero() {
        assert_eq!(
            ArrayValue::new(Dims::new(), vec![Value::int(1)]),
            Err(ValueError::ZeroRank)
        );
    }

    #[test]
    fn new_rejects_extent_overflow() {
        let dims: Dims = smallvec![usize::MAX, 2];
        assert!(matches!(
            ArrayValue::new(dims, Vec::new()),
            Err(ValueError::ExtentOverflow { .. })
        ));
    }

    #[test]
    fn zero_extent_array_is_valid_and_empty() {
        let a = ArrayValue::from_ints(smallvec![0, 3], &[]).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert_eq!(a.get(&[0, 0]), None);
    }

    #[test]
    fn get_follows_first_dimension_fastest_order() {
        // 2x3: storage (0,0), (1,0), (0,1), (1,1), (0,2), (1,2).
        let a = ArrayValue::from_ints(smallvec![2, 3], &[10, 11, 12, 13, 14, 15]).unwrap();
        assert_eq!(a.get(&[0, 0]), Some(&Value::int(10)));
        assert_eq!(a.get(&[1, 0]), Some(&Value::int(11)));
        assert_eq!(a.get(&[0, 1]), Some(&Value::int(12)));
        assert_eq!(a.get(&[1, 2]), Some(&Value::int(15)));
        assert_eq!(a.get(&[2, 0]), None);
        assert_eq!(a.get(&[1]), None);
    }

    #[test]
    fn rank_three_indexing() {
        let a = ArrayValue::from_ints(smallvec![2, 2, 2], &[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        // offset = i + 2j + 4k
        assert_eq!(a.get(&[1, 0, 1]), Some(&Value::int(5)));
        assert_eq!(a.get(&[0, 1, 1]), Some(&Value::int(6)));
    }
}
