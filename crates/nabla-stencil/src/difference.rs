//! Directional difference primitive.
//!
//! Every operator reduces to one rule, applied per axis and per cell:
//!
//! ```text
//! 0 < i < n-1   central   (F[i+1] - F[i-1]) / 2
//! i == 0        forward    F[1]   - F[0]
//! i == n-1      backward   F[n-1] - F[n-2]
//! n == 1        zero
//! ```
//!
//! Spacing is one grid unit. The one-sided forms are first-order and are
//! not halved. [`partial`] evaluates one cell; [`axis_difference`] and
//! [`component_difference`] sweep a whole field along one axis.

use nabla_core::{Field, FieldError, Real, ScalarField, Shape};
use tracing::trace;

/// Which difference formula applies at a cell along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Both neighbours exist: halved two-cell span.
    Central,
    /// Low boundary: next minus self.
    Forward,
    /// High boundary: self minus previous.
    Backward,
    /// Extent 1: no neighbour on either side, derivative is zero.
    Degenerate,
}

impl Scheme {
    /// Pick the scheme for position `index` on an axis of length `extent`.
    #[inline]
    pub fn classify(index: usize, extent: usize) -> Self {
        if extent <= 1 {
            Self::Degenerate
        } else if index == 0 {
            Self::Forward
        } else if index + 1 >= extent {
            Self::Backward
        } else {
            Self::Central
        }
    }

    /// `true` for the first-order boundary forms.
    pub fn is_one_sided(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }

    /// Difference of every component at flat offset `at`.
    ///
    /// `stride` is the flat distance between neighbours along the axis.
    /// The caller guarantees the neighbours the scheme reads are in bounds,
    /// which holds whenever `self` came from [`Scheme::classify`].
    #[inline]
    pub(crate) fn apply<T: Real, const A: usize>(
        self,
        values: &[[T; A]],
        at: usize,
        stride: usize,
    ) -> [T; A] {
        match self {
            Self::Central => {
                let (hi, lo) = (&values[at + stride], &values[at - stride]);
                std::array::from_fn(|k| (hi[k] - lo[k]) / T::two())
            }
            Self::Forward => {
                let (hi, lo) = (&values[at + stride], &values[at]);
                std::array::from_fn(|k| hi[k] - lo[k])
            }
            Self::Backward => {
                let (hi, lo) = (&values[at], &values[at - stride]);
                std::array::from_fn(|k| hi[k] - lo[k])
            }
            Self::Degenerate => [T::zero(); A],
        }
    }

    /// Difference of component `k` only.
    #[inline]
    pub(crate) fn apply_component<T: Real, const A: usize>(
        self,
        values: &[[T; A]],
        at: usize,
        stride: usize,
        k: usize,
    ) -> T {
        match self {
            Self::Central => (values[at + stride][k] - values[at - stride][k]) / T::two(),
            Self::Forward => values[at + stride][k] - values[at][k],
            Self::Backward => values[at][k] - values[at - stride][k],
            Self::Degenerate => T::zero(),
        }
    }
}

/// Visit every cell once, grouped into lines along `axis`, with the scheme
/// that applies at each.
///
/// Cells are visited a whole hyperplane at a time so the innermost loop
/// walks contiguous memory regardless of `axis`.
pub(crate) fn sweep(shape: &Shape, axis: usize, mut visit: impl FnMut(usize, Scheme)) {
    let extent = shape.extents()[axis];
    let stride = shape.strides()[axis];
    let block = extent * stride;
    for outer in (0..shape.cell_count()).step_by(block) {
        for i in 0..extent {
            let scheme = Scheme::classify(i, extent);
            let row = outer + i * stride;
            for at in row..row + stride {
                visit(at, scheme);
            }
        }
    }
}

fn check_axis(shape: &Shape, axis: usize) -> Result<(), FieldError> {
    if axis >= shape.rank() {
        return Err(FieldError::AxisOutOfRange {
            axis,
            rank: shape.rank(),
        });
    }
    Ok(())
}

/// Partial derivative of every component along `axis` at `coord`.
///
/// Returns `None` if `axis` or `coord` is out of range. Does not allocate.
///
/// # Examples
///
/// ```
/// use nabla_core::{ScalarField, Shape};
/// use nabla_stencil::difference::partial;
///
/// let shape = Shape::new(&[4]).unwrap();
/// let f = ScalarField::from_scalars(shape, vec![1.0, 3.0, 6.0, 10.0]).unwrap();
/// assert_eq!(partial(&f, 0, &[0]), Some([2.0]));
/// assert_eq!(partial(&f, 0, &[1]), Some([2.5]));
/// assert_eq!(partial(&f, 0, &[3]), Some([4.0]));
/// ```
pub fn partial<T: Real, const A: usize>(
    field: &Field<T, A>,
    axis: usize,
    coord: &[usize],
) -> Option<[T; A]> {
    let shape = field.shape();
    let extent = shape.extent(axis)?;
    let at = shape.offset(coord)?;
    let scheme = Scheme::classify(coord[axis], extent);
    Some(scheme.apply(field.as_slice(), at, shape.strides()[axis]))
}

/// Full per-axis difference field: every component differentiated along
/// `axis` at every cell.
pub fn axis_difference<T: Real, const A: usize>(
    field: &Field<T, A>,
    axis: usize,
) -> Result<Field<T, A>, FieldError> {
    let shape = field.shape();
    check_axis(shape, axis)?;
    trace!(axis, extent = shape.extents()[axis], arity = A, "axis sweep");

    let stride = shape.strides()[axis];
    let src = field.as_slice();
    let mut out = vec![[T::zero(); A]; src.len()];
    sweep(shape, axis, |at, scheme| out[at] = scheme.apply(src, at, stride));
    Field::new(shape.clone(), out)
}

/// Per-axis difference of one component, as a scalar field.
pub fn component_difference<T: Real, const A: usize>(
    field: &Field<T, A>,
    axis: usize,
    component: usize,
) -> Result<ScalarField<T>, FieldError> {
    let shape = field.shape();
    check_axis(shape, axis)?;
    if component >= A {
        return Err(FieldError::ComponentOutOfRange {
            component,
            arity: A,
        });
    }
    trace!(axis, component, extent = shape.extents()[axis], "component sweep");

    let stride = shape.strides()[axis];
    let src = field.as_slice();
    let mut out = vec![[T::zero()]; src.len()];
    sweep(shape, axis, |at, scheme| {
        out[at] = [scheme.apply_component(src, at, stride, component)];
    });
    Field::new(shape.clone(), out)
}
