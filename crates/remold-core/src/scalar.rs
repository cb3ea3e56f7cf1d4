//! Scalar leaf values and the exact conversion capability.
//!
//! Scalars are opaque to the traversal engine beyond two things: their
//! runtime type tag ([`ScalarType`]) and the fallible [`Scalar::convert`]
//! operation. Conversion is exact-only: a value that cannot be represented
//! in the target type is rejected, never truncated or rounded.

use crate::error::ConvertError;
use crate::value::Value;
use std::fmt;

/// A half-open range of integers, `start..end`.
///
/// Ranges are ordinary leaf values: [`DefaultDescent`](crate::DefaultDescent)
/// treats a range as a single opaque scalar, while
/// [`RangeDescent`](crate::RangeDescent) expands it into its integer
/// elements during production. A range never converts to any other
/// scalar type.
///
/// # Examples
///
/// ```
/// use remold_core::IntRange;
///
/// let r = IntRange::new(2, 5);
/// assert_eq!(r.len(), 3);
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert!(IntRange::new(4, 4).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntRange {
    /// First element of the range (inclusive).
    pub start: i64,
    /// End of the range (exclusive).
    pub end: i64,
}

impl IntRange {
    /// Create a range covering `start..end`.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of elements in the range. An inverted range is empty.
    pub fn len(&self) -> usize {
        if self.end > self.start {
            // Wide subtraction: the i64 difference overflows for spans
            // past i64::MAX (e.g. i64::MIN..1).
            (self.end as i128 - self.start as i128) as usize
        } else {
            0
        }
    }

    /// Returns `true` if the range contains no elements.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> {
        self.start..self.end.max(self.start)
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Runtime type tag of a [`Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean.
    Bool,
    /// Opaque integer range.
    Range,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::Float => write!(f, "Float"),
            Self::Bool => write!(f, "Bool"),
            Self::Range => write!(f, "Range"),
        }
    }
}

/// An indivisible leaf value.
///
/// The engine never inspects a scalar's payload during traversal; it only
/// moves scalars between positions and, where a specification declares a
/// type, converts them via [`Scalar::convert`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Opaque integer range (see [`IntRange`]).
    Range(IntRange),
}

impl Scalar {
    /// Runtime type tag of this scalar.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Self::Int(_) => ScalarType::Int,
            Self::Float(_) => ScalarType::Float,
            Self::Bool(_) => ScalarType::Bool,
            Self::Range(_) => ScalarType::Range,
        }
    }

    /// Convert this scalar to `target`, failing if the value is not
    /// exactly representable.
    ///
    /// Identity conversions always succeed. `Int -> Float` succeeds iff
    /// the float round-trips the integer; `Float -> Int` iff the value is
    /// finite, integral, and in `i64` range; booleans convert to 0/1 and
    /// back only from exact 0/1. Ranges only convert to themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use remold_core::{Scalar, ScalarType};
    ///
    /// assert_eq!(
    ///     Scalar::Float(3.0).convert(ScalarType::Int),
    ///     Ok(Scalar::Int(3))
    /// );
    /// assert!(Scalar::Float(3.5).convert(ScalarType::Int).is_err());
    /// ```
    pub fn convert(&self, target: ScalarType) -> Result<Scalar, ConvertError> {
        if self.scalar_type() == target {
            return Ok(*self);
        }
        let converted = match (*self, target) {
            (Self::Int(i), ScalarType::Float) => {
                let f = i as f64;
                // i128 comparison avoids the saturating i64 cast near 2^63.
                if f as i128 == i as i128 {
                    Some(Self::Float(f))
                } else {
                    None
                }
            }
            (Self::Int(0), ScalarType::Bool) => Some(Self::Bool(false)),
            (Self::Int(1), ScalarType::Bool) => Some(Self::Bool(true)),
            (Self::Float(f), ScalarType::Int) => {
                if f.is_finite() && f.fract() == 0.0 {
                    let wide = f as i128;
                    if wide >= i64::MIN as i128 && wide <= i64::MAX as i128 {
                        Some(Self::Int(wide as i64))
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
            (Self::Float(f), ScalarType::Bool) if f == 0.0 => Some(Self::Bool(false)),
            (Self::Float(f), ScalarType::Bool) if f == 1.0 => Some(Self::Bool(true)),
            (Self::Bool(b), ScalarType::Int) => Some(Self::Int(i64::from(b))),
            (Self::Bool(b), ScalarType::Float) => Some(Self::Float(if b { 1.0 } else { 0.0 })),
            _ => None,
        };
        converted.ok_or(ConvertError {
            value: Value::Scalar(*self),
            target,
        })
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Range(r) => write!(f, "{r}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<IntRange> for Scalar {
    fn from(v: IntRange) -> Self {
        Self::Range(v)
    }
}
