//! The producer/consumer traversal engine for deep reshaping.
//!
//! The engine moves scalars between differently shaped nestings of
//! tuples and arrays without ever reordering them:
//!
//! - [`produce`] linearizes a source value into an ordered leaf stream
//!   under a [`Descent`](remold_core::Descent) predicate;
//! - [`consume`] rebuilds a structure from that stream under a parsed
//!   [`Spec`](remold_spec::Spec), converting at typed leaves;
//! - [`describe`] infers the most specific specification that
//!   reproduces a value's shape;
//! - [`flatten`] and [`pack`] are thin compositions of the above;
//! - [`deep_reshape`] ties production and consumption together with the
//!   exact-consumption check.
//!
//! Everything is synchronous, pure recursion: no shared state, no I/O,
//! and failures are deterministic for the same inputs.
//!
//! # Quick start
//!
//! ```
//! use remold_engine::{deep_reshape, describe};
//! use remold_core::{ArrayValue, Value};
//! use remold_spec::SpecExpr;
//! use smallvec::smallvec;
//!
//! // A 3x2 array stored first-dimension-fastest: columns [1,3,5] and [2,4,6].
//! let source = Value::Array(
//!     ArrayValue::from_ints(smallvec![3, 2], &[1, 3, 5, 2, 4, 6]).unwrap(),
//! );
//!
//! // Reshape to 2x3: same flat sequence, new extents.
//! let reshaped = deep_reshape(&source, &SpecExpr::dims([2, 3])).unwrap();
//! let array = reshaped.as_array().unwrap();
//! assert_eq!(array.dims(), &[2, 3]);
//! assert_eq!(array.get(&[0, 1]), Some(&Value::int(5)));
//!
//! // The inferred specification reproduces the original shape.
//! let spec = describe(&source);
//! assert_eq!(spec.leaf_count(), 6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod consume;
pub mod describe;
pub mod flatten;
pub mod produce;
pub mod reshape;
mod stream;

pub use consume::consume;
pub use describe::describe;
pub use flatten::{flatten, flatten_with, pack, pack_with};
pub use produce::produce;
pub use reshape::{deep_reshape, deep_reshape_with, reshape, reshape_with};
