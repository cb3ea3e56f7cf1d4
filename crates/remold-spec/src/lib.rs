//! Specification data model for the remold reshaping engine.
//!
//! A [`Spec`] describes a target shape as a small recursive tagged
//! union. Callers usually write the compact constructive form
//! ([`SpecExpr`]) — tuples of extents, a leading type, nested tuples —
//! and [`Spec::parse`] disambiguates it once, up front. The consumer in
//! the engine crate then walks the parsed tree without ever re-sniffing
//! shapes.
//!
//! # Grammar
//!
//! | raw form                    | parses to                        |
//! |-----------------------------|----------------------------------|
//! | `()`                        | [`Spec::AnyScalar`]              |
//! | a bare type                 | [`Spec::TypedScalar`]            |
//! | `(d1, ..., dn)` (ints)      | [`Spec::AnyArray`]               |
//! | `(T, d1, ..., dn)`          | [`Spec::TypedArray`]             |
//! | any other tuple             | [`Spec::Tuple`] (recurse)        |
//! | an array of raw forms       | [`Spec::ArrayOfSpecs`] (recurse) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod expr;
pub mod parse;
pub mod spec;

pub use expr::SpecExpr;
pub use spec::Spec;
