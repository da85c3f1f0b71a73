//! Test fixtures and tolerance helpers for Nabla development.
//!
//! Provides [`sample`] for building fields from closures over real-valued
//! coordinates, a few analytic reference fields, and float comparison
//! helpers with readable failure messages.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use nabla_core::{Field, Real, ScalarField, Shape};

/// Shape from extents, panicking on invalid input.
pub fn shape(extents: &[usize]) -> Shape {
    Shape::new(extents).unwrap_or_else(|e| panic!("invalid test shape {extents:?}: {e}"))
}

/// Sample `f` at every cell, passing the cell's coordinates as `T`.
pub fn sample<T: Real, const A: usize>(
    extents: &[usize],
    mut f: impl FnMut(&[T]) -> [T; A],
) -> Field<T, A> {
    let mut x: Vec<T> = Vec::with_capacity(extents.len());
    Field::from_fn(shape(extents), |c| {
        x.clear();
        x.extend(c.iter().map(|&i| to_real::<T>(i)));
        f(&x)
    })
    .unwrap_or_else(|e| panic!("sample on {extents:?}: {e}"))
}

/// Scalar variant of [`sample`].
pub fn sample_scalar<T: Real>(extents: &[usize], mut f: impl FnMut(&[T]) -> T) -> ScalarField<T> {
    sample(extents, |x: &[T]| [f(x)])
}

/// `F(x) = values[x]` on a rank-1 grid.
pub fn line<T: Real>(values: &[T]) -> ScalarField<T> {
    ScalarField::from_scalars(shape(&[values.len()]), values.to_vec())
        .unwrap_or_else(|e| panic!("line of {} values: {e}", values.len()))
}

/// `F = (y, -x)` on an `n` by `n` grid: divergence 0, curl -2 everywhere.
pub fn rotation_2d<T: Real>(n: usize) -> Field<T, 2> {
    sample(&[n, n], |x: &[T]| [x[1], -x[0]])
}

/// `F = x` on a grid of any rank: divergence equals the arity where
/// arity and rank agree.
pub fn radial<T: Real, const A: usize>(extents: &[usize]) -> Field<T, A> {
    sample(extents, |x: &[T]| {
        std::array::from_fn(|k| x.get(k).copied().unwrap_or_else(T::zero))
    })
}

/// Flat offsets of cells that are interior along every axis.
pub fn interior_offsets(shape: &Shape) -> Vec<usize> {
    shape
        .coords()
        .enumerate()
        .filter(|(_, c)| shape.is_interior(c))
        .map(|(i, _)| i)
        .collect()
}

/// Largest absolute componentwise difference between two same-shaped
/// fields.
pub fn max_abs_diff<T: Real, const A: usize>(a: &Field<T, A>, b: &Field<T, A>) -> T {
    assert_eq!(a.extents(), b.extents(), "fields differ in extents");
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .flat_map(|(x, y)| x.iter().zip(y.iter()).map(|(p, q)| (*p - *q).abs()))
        .fold(T::zero(), |m, d| m.max(d))
}

/// Assert two fields agree within `tol` at every cell and component.
#[track_caller]
pub fn assert_close<T: Real, const A: usize>(a: &Field<T, A>, b: &Field<T, A>, tol: T) {
    assert_eq!(a.extents(), b.extents(), "fields differ in extents");
    for (i, (x, y)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
        for k in 0..A {
            assert!(
                (x[k] - y[k]).abs() <= tol,
                "cell {i} component {k}: {} vs {} (tol {tol})",
                x[k],
                y[k]
            );
        }
    }
}

/// Assert every sample of a scalar field equals `want` within `tol`.
#[track_caller]
pub fn assert_all<T: Real>(field: &ScalarField<T>, want: T, tol: T) {
    for (i, v) in field.scalars().enumerate() {
        assert!((v - want).abs() <= tol, "cell {i}: {v} vs {want} (tol {tol})");
    }
}

fn to_real<T: Real>(i: usize) -> T {
    num_traits::cast::<usize, T>(i).unwrap_or_else(|| panic!("coordinate {i} not representable"))
}
