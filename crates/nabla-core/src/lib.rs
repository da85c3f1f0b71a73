//! Core types for the Nabla stencil engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data model every operator works on: the [`Real`] element trait, validated
//! grid [`Shape`]s, dense [`Field`]s of fixed arity, the [`Operator`]
//! support matrix, and the error types shared by the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod field;
pub mod operator;
pub mod shape;

pub use element::Real;
pub use error::{FieldError, StencilError};
pub use field::{Field, ScalarField};
pub use operator::{curl_embedding_rank, Operator, OutputLayout, MAX_ARITY};
pub use shape::{Coord, Shape, MAX_RANK};
