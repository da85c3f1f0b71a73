//! Finite-difference vector calculus on regular grids.
//!
//! Gradient, divergence and curl of 1–4 component fields over grids of
//! rank 1–4, using unit spacing:
//!
//! - centered differences `(F[i+1] - F[i-1]) / 2` in the interior,
//! - first-order one-sided differences on the boundary,
//! - zero along any axis of extent 1.
//!
//! Output fields always have the input's extents. Every call is a pure
//! function of its input, so separate calls may run concurrently.
//!
//! # Example
//!
//! ```
//! use nabla_core::{Field, Shape};
//!
//! let shape = Shape::new(&[5, 5]).unwrap();
//! let rotation = Field::<f64, 2>::from_fn(shape, |c| [c[1] as f64, -(c[0] as f64)]).unwrap();
//!
//! let div = nabla_stencil::divergence(&rotation).unwrap();
//! assert!(div.scalars().all(|v| v == 0.0));
//!
//! let curl = nabla_stencil::curl(&rotation).unwrap().into_scalar().unwrap();
//! assert!(curl.scalars().all(|v| v == -2.0));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod curl;
pub mod difference;
mod divergence;
pub mod engine;
pub mod gradient;
pub mod partials;

pub use config::{DegenerateAxisPolicy, StencilConfig, StencilConfigBuilder};
pub use curl::{Bivector, Curl, Plane, AXIS_LABELS};
pub use difference::Scheme;
pub use engine::{curl, curl_planes, divergence, gradient, StencilEngine};
pub use gradient::Gradient;
pub use partials::Partials;
