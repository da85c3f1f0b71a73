//! Nabla: discrete gradient, divergence and curl on regular grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Nabla sub-crates. For most users, adding `nabla` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use nabla::prelude::*;
//!
//! // F = (-y, x, 0) on a 4x4x4 grid: a rigid rotation about z.
//! let shape = Shape::new(&[4, 4, 4]).unwrap();
//! let f = Field::<f64, 3>::from_fn(shape, |c| [-(c[1] as f64), c[0] as f64, 0.0]).unwrap();
//!
//! let engine = StencilEngine::new(
//!     StencilConfig::builder()
//!         .degenerate_axis(DegenerateAxisPolicy::Reject)
//!         .build(),
//! );
//! let div = engine.divergence(&f).unwrap();
//! assert!(div.scalars().all(|v| v == 0.0));
//!
//! match engine.curl(&f).unwrap() {
//!     Curl::Vector(c) => assert_eq!(c.get(&[1, 2, 3]), Some(&[0.0, 0.0, 2.0])),
//!     other => panic!("unexpected curl {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nabla-core` | Shapes, fields, operators, errors |
//! | [`stencil`] | `nabla-stencil` | Difference primitive and operator engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`nabla-core`).
///
/// [`types::Shape`], [`types::Field`], the [`types::Operator`] support
/// matrix and the shared error types.
pub use nabla_core as types;

/// Finite-difference operators (`nabla-stencil`).
///
/// [`stencil::StencilEngine`] plus the default-configuration free
/// functions, and the single-cell [`stencil::difference::partial`]
/// primitive.
pub use nabla_stencil as stencil;

/// Common imports for typical Nabla usage.
///
/// ```rust
/// use nabla::prelude::*;
/// ```
pub mod prelude {
    // Data model
    pub use nabla_core::{Field, Operator, Real, ScalarField, Shape};

    // Errors
    pub use nabla_core::{FieldError, StencilError};

    // Engine
    pub use nabla_stencil::{
        Bivector, Curl, DegenerateAxisPolicy, Gradient, Plane, StencilConfig, StencilEngine,
    };
}
