//! Descent predicates: which values count as containers during production.
//!
//! A descent predicate is consulted by the producer at every node. It
//! either yields the node's ordered sub-values (container) or declines
//! (leaf), in which case the node travels through the engine as one
//! indivisible scalar regardless of its internal structure.
//!
//! Description (`describe` in the engine crate) never consults a
//! predicate: it always reflects a value's intrinsic shape.

use crate::scalar::Scalar;
use crate::value::Value;

/// Decides, per value, between "container to recurse into" and
/// "opaque leaf".
///
/// Implementations must be deterministic: the same value must always
/// yield the same answer, or produced streams stop being reproducible.
/// The trait is object-safe and used as `&dyn Descent`.
pub trait Descent {
    /// The ordered sub-values if `value` is a container, `None` for a leaf.
    ///
    /// Array children must come back in linearization order (first
    /// dimension fastest); tuple children in positional order.
    fn elements(&self, value: &Value) -> Option<Vec<Value>>;

    /// Returns `true` if `value` is a container under this predicate.
    fn is_container(&self, value: &Value) -> bool {
        self.elements(value).is_some()
    }
}

/// The default predicate: containers are exactly tuples and arrays.
///
/// Every scalar — including an [`IntRange`](crate::IntRange) — is an
/// opaque leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultDescent;

impl Descent for DefaultDescent {
    fn elements(&self, value: &Value) -> Option<Vec<Value>> {
        match value {
            Value::Tuple(elems) => Some(elems.clone()),
            Value::Array(array) => Some(array.elements().to_vec()),
            Value::Scalar(_) => None,
        }
    }
}

/// [`DefaultDescent`] extended to treat integer ranges as containers,
/// expanded to their elements in ascending order.
///
/// The canonical example of a caller-supplied predicate: a type the
/// default treats as opaque becomes traversable.
///
/// # Examples
///
/// ```
/// use remold_core::{Descent, RangeDescent, Value};
///
/// let range = Value::range(0, 3);
/// let elems = RangeDescent.elements(&range).unwrap();
/// assert_eq!(elems, vec![Value::int(0), Value::int(1), Value::int(2)]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeDescent;

impl Descent for RangeDescent {
    fn elements(&self, value: &Value) -> Option<Vec<Value>> {
        match value {
            Value::Scalar(Scalar::Range(range)) => {
                Some(range.iter().map(Value::int).collect())
            }
            other => DefaultDescent.elements(other),
        }
    }
}
