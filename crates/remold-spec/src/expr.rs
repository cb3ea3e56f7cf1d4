//! The raw constructive form of a specification.
//!
//! [`SpecExpr`] is what callers assemble: the compact, overloaded shape
//! grammar in which a tuple of integers means an array, a leading type
//! means typed elements, and nesting means structure. It is deliberately
//! permissive — validation happens once, in [`Spec::parse`](crate::Spec::parse).

use remold_core::{Dims, ScalarType};
use std::fmt;

/// A raw specification expression.
///
/// # Examples
///
/// ```
/// use remold_spec::{Spec, SpecExpr};
/// use remold_core::ScalarType;
///
/// // (Float, (Int, 3)) — a float scalar and a 3-vector of ints.
/// let expr = SpecExpr::Tuple(vec![
///     SpecExpr::Type(ScalarType::Float),
///     SpecExpr::typed(ScalarType::Int, [3]),
/// ]);
/// let spec = Spec::parse(&expr).unwrap();
/// assert_eq!(spec.leaf_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SpecExpr {
    /// A scalar type name: a typed-scalar leaf on its own, or the element
    /// type when it leads a tuple of extents.
    Type(ScalarType),
    /// An integer literal: a dimension extent. Not a specification by
    /// itself.
    Dim(i64),
    /// Tuple form, disambiguated by shape (see the crate-level grammar).
    Tuple(Vec<SpecExpr>),
    /// Array form: an array value used as a specification. Its own
    /// extents become the result extents; each element is parsed as a
    /// full sub-specification.
    Array {
        /// Declared extents of the result array.
        dims: Dims,
        /// One sub-expression per position in linearization order.
        elems: Vec<SpecExpr>,
    },
}

impl SpecExpr {
    /// The empty tuple: one scalar of unconstrained type.
    pub fn any_scalar() -> Self {
        Self::Tuple(Vec::new())
    }

    /// A tuple of extents: an untyped array specification.
    pub fn dims<I: IntoIterator<Item = i64>>(dims: I) -> Self {
        Self::Tuple(dims.into_iter().map(Self::Dim).collect())
    }

    /// A type followed by extents: a typed array specification.
    pub fn typed<I: IntoIterator<Item = i64>>(ty: ScalarType, dims: I) -> Self {
        let mut elems = vec![Self::Type(ty)];
        elems.extend(dims.into_iter().map(Self::Dim));
        Self::Tuple(elems)
    }
}

impl From<ScalarType> for SpecExpr {
    fn from(ty: ScalarType) -> Self {
        Self::Type(ty)
    }
}

impl From<i64> for SpecExpr {
    fn from(dim: i64) -> Self {
        Self::Dim(dim)
    }
}

impl fmt::Display for SpecExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "{ty}"),
            Self::Dim(d) => write!(f, "{d}"),
            Self::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, ")")
            }
            Self::Array { dims, elems } => {
                write!(f, "[")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                write!(f, "; {dims:?}]")
            }
        }
    }
}
