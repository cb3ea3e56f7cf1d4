//! Error taxonomy for the remold workspace.
//!
//! Organized by subsystem: value construction ([`ValueError`]), scalar
//! conversion ([`ConvertError`]), specification parsing ([`SpecError`]),
//! and consumption ([`ReshapeError`]). All failures are detected
//! synchronously and propagate to the top-level caller; there are no
//! partial results and nothing is retried.

use crate::scalar::ScalarType;
use crate::value::{Dims, Value};
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/// Positional path into a specification tree, carried in errors so a
/// caller can locate the mismatch.
///
/// Each entry is the child index taken at a tuple or array-of-specs
/// node, root first. Uses `SmallVec<[usize; 8]>` so typical nesting
/// depths stay off the heap.
pub type SpecPath = SmallVec<[usize; 8]>;

/// Errors from array value construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// Element count does not match the product of the declared extents.
    ShapeMismatch {
        /// The declared extents.
        dims: Dims,
        /// Product of the extents.
        expected: usize,
        /// Number of elements actually supplied.
        found: usize,
    },
    /// The product of the extents overflows `usize`.
    ExtentOverflow {
        /// The declared extents.
        dims: Dims,
    },
    /// An array must have at least one dimension.
    ZeroRank,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                dims,
                expected,
                found,
            } => {
                write!(
                    f,
                    "extents {dims:?} require {expected} elements, got {found}"
                )
            }
            Self::ExtentOverflow { dims } => {
                write!(f, "product of extents {dims:?} overflows")
            }
            Self::ZeroRank => write!(f, "array must have at least one dimension"),
        }
    }
}

impl Error for ValueError {}

/// A scalar (or an opaque leaf) could not be represented in the
/// requested type.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertError {
    /// The leaf that failed to convert.
    pub value: Value,
    /// The requested target type.
    pub target: ScalarType,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::Scalar(s) => write!(
                f,
                "cannot represent {s} ({}) as {}",
                s.scalar_type(),
                self.target
            ),
            other => write!(
                f,
                "cannot convert opaque non-scalar leaf {other:?} to {}",
                self.target
            ),
        }
    }
}

impl Error for ConvertError {}

/// A raw specification does not parse under the shape grammar
/// (malformed specification).
///
/// Detected entirely at parse time, before any consumption. Each variant
/// carries the [`SpecPath`] of the offending node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecError {
    /// A declared dimension extent is negative.
    NegativeDimension {
        /// The offending extent.
        value: i64,
        /// Path to the tuple holding the extent.
        path: SpecPath,
    },
    /// A bare integer where a sub-specification is expected.
    BareDimension {
        /// Path to the offending expression.
        path: SpecPath,
    },
    /// An array expression's element count does not match its extents.
    ElementCountMismatch {
        /// Product of the declared extents.
        expected: usize,
        /// Number of sub-expressions supplied.
        found: usize,
        /// Path to the array expression.
        path: SpecPath,
    },
    /// The product of the declared extents overflows `usize`.
    DimensionOverflow {
        /// Path to the tuple or array declaring the extents.
        path: SpecPath,
    },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDimension { value, path } => {
                write!(f, "negative dimension {value} at spec path {path:?}")
            }
            Self::BareDimension { path } => {
                write!(
                    f,
                    "bare integer is not a specification at spec path {path:?}"
                )
            }
            Self::ElementCountMismatch {
                expected,
                found,
                path,
            } => {
                write!(
                    f,
                    "array spec needs {expected} elements, got {found}, at spec path {path:?}"
                )
            }
            Self::DimensionOverflow { path } => {
                write!(f, "dimension product overflows at spec path {path:?}")
            }
        }
    }
}

impl Error for SpecError {}

/// Errors from consuming a produced scalar stream against a specification.
#[derive(Clone, Debug, PartialEq)]
pub enum ReshapeError {
    /// The stream was exhausted while a leaf still needed scalars.
    InsufficientScalars {
        /// Scalars the leaf at `path` required.
        needed: usize,
        /// Scalars still available in the stream.
        available: usize,
        /// Path to the leaf that could not be filled.
        path: SpecPath,
    },
    /// Scalars remained after a complete top-level consumption.
    ///
    /// Distinguishes "reshape" from "truncate": the whole stream must be
    /// exactly consumed.
    ExcessScalars {
        /// Scalars consumed by the specification.
        consumed: usize,
        /// Scalars left over.
        remaining: usize,
    },
    /// A leaf could not be converted to its declared type.
    Conversion {
        /// The underlying conversion failure.
        error: ConvertError,
        /// Path to the typed leaf.
        path: SpecPath,
        /// Zero-based index of the leaf in the scalar stream.
        stream_index: usize,
    },
    /// The raw specification did not parse.
    MalformedSpec(SpecError),
    /// Result assembly rejected the collected elements.
    ///
    /// Reachable only for hand-built `ArrayOfSpecs` values whose element
    /// count disagrees with their extents; parsed specifications are
    /// validated up front.
    Shape(ValueError),
}

impl fmt::Display for ReshapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientScalars {
                needed,
                available,
                path,
            } => {
                write!(
                    f,
                    "needed {needed} scalars but only {available} remain, at spec path {path:?}"
                )
            }
            Self::ExcessScalars {
                consumed,
                remaining,
            } => {
                write!(
                    f,
                    "{remaining} scalars left over after consuming {consumed}"
                )
            }
            Self::Conversion {
                error,
                path,
                stream_index,
            } => {
                write!(
                    f,
                    "{error} at spec path {path:?} (stream index {stream_index})"
                )
            }
            Self::MalformedSpec(err) => write!(f, "malformed specification: {err}"),
            Self::Shape(err) => write!(f, "invalid result shape: {err}"),
        }
    }
}

impl Error for ReshapeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Conversion { error, .. } => Some(error),
            Self::MalformedSpec(err) => Some(err),
            Self::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpecError> for ReshapeError {
    fn from(err: SpecError) -> Self {
        Self::MalformedSpec(err)
    }
}

impl From<ValueError> for ReshapeError {
    fn from(err: ValueError) -> Self {
        Self::Shape(err)
    }
}
