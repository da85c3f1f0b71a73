//! Per-axis difference fields of one input, computed once.
//!
//! Gradient hands these fields out directly; curl reads two of them at
//! every cell. Computing each axis once avoids re-deriving the same
//! difference for every plane that touches it.

use crate::difference::axis_difference;
use nabla_core::{Field, FieldError, Real, MAX_RANK};
use smallvec::SmallVec;

/// All first partials `∂F_k/∂x_axis` of a field.
#[derive(Clone, Debug, PartialEq)]
pub struct Partials<T, const A: usize> {
    axes: SmallVec<[Field<T, A>; MAX_RANK]>,
}

impl<T: Real, const A: usize> Partials<T, A> {
    /// Sweep `field` along every axis.
    pub fn new(field: &Field<T, A>) -> Result<Self, FieldError> {
        let axes = (0..field.rank())
            .map(|axis| axis_difference(field, axis))
            .collect::<Result<_, _>>()?;
        Ok(Self { axes })
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    /// Difference field along `axis`.
    pub fn axis(&self, axis: usize) -> Option<&Field<T, A>> {
        self.axes.get(axis)
    }

    /// `∂F_component/∂x_axis` at flat `offset`.
    ///
    /// Components at or beyond the arity are treated as identically zero,
    /// which is how a 2-component field embeds in a 3D or 4D curl. Axes at
    /// or beyond the rank are treated as axes the field does not vary
    /// along, which is how a 3-component field on a 2D grid embeds.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is out of bounds.
    #[inline]
    pub fn d(&self, component: usize, axis: usize, offset: usize) -> T {
        match self.axes.get(axis) {
            Some(field) if component < A => field.as_slice()[offset][component],
            _ => T::zero(),
        }
    }

    /// Consume into the per-axis fields.
    pub fn into_axes(self) -> SmallVec<[Field<T, A>; MAX_RANK]> {
        self.axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nabla_core::Shape;

    #[test]
    fn one_field_per_axis() {
        let shape = Shape::new(&[3, 4, 5]).unwrap();
        let f = Field::<f64, 2>::from_fn(shape.clone(), |c| {
            [c[0] as f64 * 2.0, c[2] as f64 * -3.0]
        })
        .unwrap();
        let p = Partials::new(&f).unwrap();
        assert_eq!(p.rank(), 3);
        assert!(p.axis(3).is_none());

        let mid = shape.offset(&[1, 1, 1]).unwrap();
        assert_eq!(p.d(0, 0, mid), 2.0);
        assert_eq!(p.d(0, 1, mid), 0.0);
        assert_eq!(p.d(1, 2, mid), -3.0);
        // component 2 does not exist on a 2-component field
        assert_eq!(p.d(2, 0, mid), 0.0);
        // nothing varies along an axis the grid lacks
        assert_eq!(p.d(0, 3, mid), 0.0);
    }
}
