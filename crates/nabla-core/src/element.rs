//! Numeric element type carried by every field sample.

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point element stored in a [`Field`](crate::Field).
///
/// Implemented for `f32` and `f64`. All stencil arithmetic goes through
/// this trait, so single- and double-precision fields share one code path.
pub trait Real: Float + Debug + Display + Default + Send + Sync + 'static {
    /// The constant `2`, the divisor of a central difference.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {}
impl Real for f64 {}
