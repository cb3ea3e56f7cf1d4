//! Remold: deep reshaping of nested tuple/array structures.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all remold sub-crates. For most users, adding `remold` as a
//! single dependency is sufficient.
//!
//! Remold moves scalars between differently shaped nestings of
//! fixed-arity tuples and multi-dimensional arrays. A source value is
//! linearized into an ordered leaf stream, and a target structure is
//! rebuilt from that stream under a compact shape specification —
//! scalar contents and their order are always preserved.
//!
//! # Quick start
//!
//! ```
//! use remold::prelude::*;
//! use smallvec::smallvec;
//!
//! // (1.5, [[1, 2], [3, 4]]) — a float and a 2x2 int array.
//! let source = Value::tuple(vec![
//!     Value::float(1.5),
//!     Value::Array(ArrayValue::from_ints(smallvec![2, 2], &[1, 2, 3, 4]).unwrap()),
//! ]);
//!
//! // Infer the shape, flatten, and round-trip.
//! let spec = describe(&source);
//! assert_eq!(spec.leaf_count(), 5);
//!
//! let leaves = flatten(std::slice::from_ref(&source), None).unwrap();
//! assert_eq!(leaves.len(), 5);
//!
//! let restored = reshape(&Value::Tuple(leaves), &spec).unwrap();
//! assert_eq!(restored, source);
//!
//! // Or reshape into something else entirely: five floats in a row.
//! let row = deep_reshape(&source, &SpecExpr::typed(ScalarType::Float, [5])).unwrap();
//! assert_eq!(row.as_array().unwrap().dims(), &[5]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `remold-core` | Value model, scalar conversion, descent predicates, errors |
//! | [`spec`] | `remold-spec` | Specification model and shape-grammar parser |
//! | [`engine`] | `remold-engine` | Produce, consume, describe, flatten/pack, deep reshape |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value model, scalar conversion, descent predicates, and errors
/// (`remold-core`).
pub use remold_core as types;

/// Specification model and shape-grammar parser (`remold-spec`).
pub use remold_spec as spec;

/// The producer/consumer traversal engine (`remold-engine`).
pub use remold_engine as engine;

/// Commonly used types and operations, re-exported flat.
pub mod prelude {
    pub use remold_core::{
        ArrayValue, DefaultDescent, Descent, Dims, IntRange, RangeDescent, ReshapeError, Scalar,
        ScalarType, SpecError, Value,
    };
    pub use remold_engine::{
        deep_reshape, deep_reshape_with, describe, flatten, flatten_with, pack, pack_with,
        produce, reshape, reshape_with,
    };
    pub use remold_spec::{Spec, SpecExpr};
}
