//! Benchmark profiles for the Nabla stencil engine.
//!
//! Provides deterministic input fields for benchmarking:
//!
//! - [`reference_profile`]: 64x64x64 grid (~262K cells), 3-component field
//! - [`stress_profile`]: 24x24x24x24 grid (~332K cells), 4-component field
//! - [`smooth_field`]: trigonometric field of any shape and arity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nabla_core::{Field, FieldError, Real, Shape};

/// Edge length of the [`reference_profile`] grid.
pub const REFERENCE_EDGE: usize = 64;

/// Edge length of the [`stress_profile`] grid.
pub const STRESS_EDGE: usize = 24;

/// Build a smooth field on `extents` whose component `k` mixes a sine
/// along each axis with a phase offset depending on `k` and `seed`.
///
/// The same arguments always yield bit-identical samples.
pub fn smooth_field<T: Real, const A: usize>(
    extents: &[usize],
    seed: u64,
) -> Result<Field<T, A>, FieldError> {
    let shape = Shape::new(extents)?;
    let phase = (seed % 1024) as f64 / 1024.0;
    Field::from_fn(shape, |c| {
        std::array::from_fn(|k| {
            let v = c
                .iter()
                .enumerate()
                .map(|(axis, &i)| {
                    let freq = 0.1 * (axis + k + 1) as f64;
                    (freq * i as f64 + phase + k as f64).sin()
                })
                .sum::<f64>();
            num_traits::cast::<f64, T>(v).unwrap_or_else(T::zero)
        })
    })
}

/// 3-component field on a 64^3 grid.
pub fn reference_profile(seed: u64) -> Result<Field<f64, 3>, FieldError> {
    smooth_field(&[REFERENCE_EDGE; 3], seed)
}

/// 4-component field on a 24^4 grid.
pub fn stress_profile(seed: u64) -> Result<Field<f64, 4>, FieldError> {
    smooth_field(&[STRESS_EDGE; 4], seed)
}
