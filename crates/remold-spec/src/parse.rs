//! Shape-grammar parsing: [`SpecExpr`] to [`Spec`].
//!
//! Disambiguation happens exactly once, here. The rules, in order:
//! empty tuple is an untyped scalar; a bare type is a typed scalar; a
//! tuple of only integers is an untyped array; a type followed by one
//! or more integers is a typed array; any other tuple is a tuple of
//! sub-specifications; an array expression is an array of
//! sub-specifications with the array's own extents.
//!
//! Parsing is pure syntax validation. It never checks leaf counts
//! against a particular source — that requires the actual scalar
//! stream and is the consumer's job.

use crate::expr::SpecExpr;
use crate::spec::Spec;
use remold_core::{dims_product, Dims, SpecError, SpecPath};

impl Spec {
    /// Parse a raw expression into a validated specification.
    ///
    /// Fails with [`SpecError`] if a dimension extent is negative, a
    /// bare integer appears where a sub-specification is expected, an
    /// array expression's element count disagrees with its extents, or
    /// a dimension product overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use remold_spec::{Spec, SpecExpr};
    /// use remold_core::ScalarType;
    /// use smallvec::smallvec;
    ///
    /// let spec = Spec::parse(&SpecExpr::dims([2, 3])).unwrap();
    /// assert_eq!(spec, Spec::AnyArray(smallvec![2, 3]));
    ///
    /// assert!(Spec::parse(&SpecExpr::dims([2, -3])).is_err());
    /// ```
    pub fn parse(expr: &SpecExpr) -> Result<Spec, SpecError> {
        let mut path = SpecPath::new();
        parse_at(expr, &mut path)
    }
}

fn parse_at(expr: &SpecExpr, path: &mut SpecPath) -> Result<Spec, SpecError> {
    match expr {
        SpecExpr::Type(ty) => Ok(Spec::TypedScalar(*ty)),
        SpecExpr::Dim(_) => Err(SpecError::BareDimension { path: path.clone() }),
        SpecExpr::Tuple(elems) => parse_tuple(elems, path),
        SpecExpr::Array { dims, elems } => {
            let expected = dims_product(dims)
                .ok_or_else(|| SpecError::DimensionOverflow { path: path.clone() })?;
            if elems.len() != expected {
                return Err(SpecError::ElementCountMismatch {
                    expected,
                    found: elems.len(),
                    path: path.clone(),
                });
            }
            let mut parsed = Vec::with_capacity(elems.len());
            for (i, elem) in elems.iter().enumerate() {
                path.push(i);
                let sub = parse_at(elem, path);
                path.pop();
                parsed.push(sub?);
            }
            Ok(Spec::ArrayOfSpecs {
                dims: dims.clone(),
                elems: parsed,
            })
        }
    }
}

fn parse_tuple(elems: &[SpecExpr], path: &mut SpecPath) -> Result<Spec, SpecError> {
    if elems.is_empty() {
        return Ok(Spec::AnyScalar);
    }
    if let Some(extents) = dim_values(elems) {
        let dims = validate_dims(&extents, path)?;
        return Ok(Spec::AnyArray(dims));
    }
    if let (SpecExpr::Type(ty), rest) = (&elems[0], &elems[1..]) {
        if !rest.is_empty() {
            if let Some(extents) = dim_values(rest) {
                let dims = validate_dims(&extents, path)?;
                return Ok(Spec::TypedArray(*ty, dims));
            }
        }
    }
    let mut parsed = Vec::with_capacity(elems.len());
    for (i, elem) in elems.iter().enumerate() {
        path.push(i);
        let sub = parse_at(elem, path);
        path.pop();
        parsed.push(sub?);
    }
    Ok(Spec::Tuple(parsed))
}

/// The raw extents iff every expression is a `Dim`.
fn dim_values(elems: &[SpecExpr]) -> Option<Vec<i64>> {
    elems
        .iter()
        .map(|e| match e {
            SpecExpr::Dim(d) => Some(*d),
            _ => None,
        })
        .collect()
}

/// Validate raw extents: non-negative, product within `usize`.
fn validate_dims(extents: &[i64], path: &mut SpecPath) -> Result<Dims, SpecError> {
    let mut dims = Dims::new();
    for &d in extents {
        if d < 0 {
            return Err(SpecError::NegativeDimension {
                value: d,
                path: path.clone(),
            });
        }
        dims.push(d as usize);
    }
    dims_product(&dims).ok_or_else(|| SpecError::DimensionOverflow { path: path.clone() })?;
    Ok(dims)
}
