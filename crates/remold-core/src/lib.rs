//! Core types for the remold reshaping engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the dynamic value model ([`Value`], [`ArrayValue`]), the scalar type
//! system with its exact conversion capability ([`Scalar`], [`ScalarType`]),
//! the descent predicates that decide what counts as a container during
//! production ([`Descent`]), and the error taxonomy shared by the whole
//! workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod descent;
pub mod error;
pub mod scalar;
pub mod value;

pub use descent::{DefaultDescent, Descent, RangeDescent};
pub use error::{ConvertError, ReshapeError, SpecError, SpecPath, ValueError};
pub use scalar::{IntRange, Scalar, ScalarType};
pub use value::{dims_product, ArrayValue, Dims, Value};
