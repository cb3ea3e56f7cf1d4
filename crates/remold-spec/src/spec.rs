//! The parsed, validated specification tree.

use crate::expr::SpecExpr;
use remold_core::{dims_product, Dims, ScalarType, SpecError};
use std::fmt;

/// A validated description of a target shape.
///
/// Immutable value tree with structural equality; constructed once per
/// reshape and discarded. Obtained from [`Spec::parse`] or inferred from
/// a concrete value by the engine's `describe`.
#[derive(Clone, Debug, PartialEq)]
pub enum Spec {
    /// One scalar of unconstrained type.
    AnyScalar,
    /// One scalar converted to the declared type.
    TypedScalar(ScalarType),
    /// Array of the declared extents with untyped elements.
    AnyArray(Dims),
    /// Array of the declared extents and element type.
    TypedArray(ScalarType, Dims),
    /// Tuple whose i-th element is built from the i-th sub-specification.
    Tuple(Vec<Spec>),
    /// Array whose elements are themselves full nested structures.
    ArrayOfSpecs {
        /// Declared extents of the result array.
        dims: Dims,
        /// One sub-specification per position in linearization order.
        elems: Vec<Spec>,
    },
}

impl Spec {
    /// Total number of scalar leaves this specification will consume.
    ///
    /// Scalar variants contribute 1, array variants the product of their
    /// extents, containers the sum over their children. Saturates on
    /// overflow; a saturated count can never be satisfied by an
    /// in-memory stream, so consumption fails with `InsufficientScalars`
    /// before the count matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use remold_spec::Spec;
    /// use remold_core::ScalarType;
    /// use smallvec::smallvec;
    ///
    /// let spec = Spec::Tuple(vec![
    ///     Spec::TypedScalar(ScalarType::Float),
    ///     Spec::AnyArray(smallvec![2, 3]),
    /// ]);
    /// assert_eq!(spec.leaf_count(), 7);
    /// ```
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::AnyScalar | Self::TypedScalar(_) => 1,
            Self::AnyArray(dims) | Self::TypedArray(_, dims) => {
                dims_product(dims).unwrap_or(usize::MAX)
            }
            Self::Tuple(elems) => elems
                .iter()
                .fold(0usize, |acc, s| acc.saturating_add(s.leaf_count())),
            Self::ArrayOfSpecs { elems, .. } => elems
                .iter()
                .fold(0usize, |acc, s| acc.saturating_add(s.leaf_count())),
        }
    }

    /// Serialize back to the raw constructive form.
    ///
    /// For every specification produced by [`Spec::parse`] or by the
    /// engine's `describe`, `Spec::parse(&spec.to_expr())` returns a
    /// structurally equal specification. The one surface form the
    /// grammar cannot express is the empty tuple specification: `()` is
    /// claimed by [`Spec::AnyScalar`], so `Spec::Tuple(vec![])`
    /// serializes to `()` and re-parses as `AnyScalar`. Empty tuple
    /// specifications arise only from describing an empty tuple value,
    /// never from parsing.
    pub fn to_expr(&self) -> SpecExpr {
        match self {
            Self::AnyScalar => SpecExpr::Tuple(Vec::new()),
            Self::TypedScalar(ty) => SpecExpr::Type(*ty),
            Self::AnyArray(dims) => {
                SpecExpr::Tuple(dims.iter().map(|&d| SpecExpr::Dim(d as i64)).collect())
            }
            Self::TypedArray(ty, dims) => {
                let mut elems = vec![SpecExpr::Type(*ty)];
                elems.extend(dims.iter().map(|&d| SpecExpr::Dim(d as i64)));
                SpecExpr::Tuple(elems)
            }
            Self::Tuple(elems) => {
                SpecExpr::Tuple(elems.iter().map(Spec::to_expr).collect())
            }
            Self::ArrayOfSpecs { dims, elems } => SpecExpr::Array {
                dims: dims.clone(),
                elems: elems.iter().map(Spec::to_expr).collect(),
            },
        }
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expr())
    }
}

impl TryFrom<&SpecExpr> for Spec {
    type Error = SpecError;

    fn try_from(expr: &SpecExpr) -> Result<Self, SpecError> {
        Spec::parse(expr)
    }
}
