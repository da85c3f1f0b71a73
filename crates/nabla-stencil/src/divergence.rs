//! Divergence assembler.
//!
//! `div F = sum_k ∂F_k/∂x_k` over the axis-aligned pairs `k < min(A, r)`.
//! When the arity exceeds the rank the extra components are ignored (a
//! 3-component field on a 2D grid loses its third component); when the
//! rank exceeds the arity the unmatched axes contribute nothing.
//!
//! Each pair is accumulated straight from a single-component sweep, so no
//! intermediate per-axis field is allocated.

use crate::difference::sweep;
use nabla_core::{Field, FieldError, Real, ScalarField};
use tracing::trace;

pub(crate) fn assemble<T: Real, const A: usize>(
    field: &Field<T, A>,
) -> Result<ScalarField<T>, FieldError> {
    let shape = field.shape();
    let src = field.as_slice();
    let pairs = A.min(shape.rank());
    if A > shape.rank() {
        trace!(
            arity = A,
            rank = shape.rank(),
            "divergence ignores components beyond the grid rank"
        );
    }

    let mut acc = vec![T::zero(); src.len()];
    for k in 0..pairs {
        let stride = shape.strides()[k];
        sweep(shape, k, |at, scheme| {
            acc[at] = acc[at] + scheme.apply_component(src, at, stride, k);
        });
    }
    ScalarField::from_scalars(shape.clone(), acc)
}
