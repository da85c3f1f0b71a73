//! Gradient assembler.
//!
//! The gradient of an `A`-component field on a rank-`r` grid is `r` fields
//! of arity `A`: output field `axis` holds `∂F_k/∂x_axis` in component `k`.
//! For a scalar field that is the usual gradient split by axis; for a
//! vector field it is the full Jacobian organised by differentiation axis.
//!
//! # Cell rule
//!
//! ```text
//! interior along axis:   (F[i+1] - F[i-1]) / 2
//! low boundary:           F[i+1] - F[i]
//! high boundary:          F[i]   - F[i-1]
//! extent 1:               0
//! ```

use crate::partials::Partials;
use nabla_core::{Field, FieldError, Real, ScalarField, Shape, MAX_RANK};
use smallvec::SmallVec;

/// Per-axis derivative fields of one input.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient<T, const A: usize> {
    shape: Shape,
    axes: SmallVec<[Field<T, A>; MAX_RANK]>,
}

impl<T: Real, const A: usize> Gradient<T, A> {
    pub(crate) fn assemble(field: &Field<T, A>) -> Result<Self, FieldError> {
        let partials = Partials::new(field)?;
        Ok(Self {
            shape: field.shape().clone(),
            axes: partials.into_axes(),
        })
    }

    /// Shape shared by the input and every output field.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of output fields (the grid rank).
    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    /// Derivative field along `axis`.
    pub fn axis(&self, axis: usize) -> Option<&Field<T, A>> {
        self.axes.get(axis)
    }

    /// All per-axis fields, in axis order.
    pub fn axes(&self) -> &[Field<T, A>] {
        &self.axes
    }

    /// Consume into the per-axis fields.
    pub fn into_axes(self) -> Vec<Field<T, A>> {
        self.axes.into_vec()
    }

    /// `∂F_component/∂x_axis` as a scalar field.
    pub fn component(&self, axis: usize, component: usize) -> Result<ScalarField<T>, FieldError> {
        self.axes
            .get(axis)
            .ok_or(FieldError::AxisOutOfRange {
                axis,
                rank: self.rank(),
            })?
            .component(component)
    }

    /// Jacobian at `coord`: row `axis` holds `∂F_k/∂x_axis` for every `k`.
    pub fn jacobian(&self, coord: &[usize]) -> Option<SmallVec<[[T; A]; MAX_RANK]>> {
        let offset = self.shape.offset(coord)?;
        Some(self.axes.iter().map(|f| f.as_slice()[offset]).collect())
    }
}

impl<T: Real> Gradient<T, 1> {
    /// Pack a scalar gradient into one `R`-component vector field.
    ///
    /// `R` must equal the grid rank, otherwise
    /// `FieldError::ArityOutOfRange { arity: R }` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use nabla_core::{Field, Shape};
    ///
    /// let shape = Shape::new(&[3, 3]).unwrap();
    /// let f = Field::<f64, 1>::from_fn(shape, |c| [c[0] as f64 + 2.0 * c[1] as f64]).unwrap();
    /// let grad = nabla_stencil::gradient(&f).unwrap();
    /// let v = grad.to_vector_field::<2>().unwrap();
    /// assert_eq!(v.get(&[1, 1]), Some(&[1.0, 2.0]));
    /// ```
    pub fn to_vector_field<const R: usize>(&self) -> Result<Field<T, R>, FieldError> {
        if R != self.rank() {
            return Err(FieldError::RankMismatch {
                rank: self.rank(),
                requested: R,
            });
        }
        let data = (0..self.shape.cell_count())
            .map(|i| std::array::from_fn(|axis| self.axes[axis].as_slice()[i][0]))
            .collect();
        Field::new(self.shape.clone(), data)
    }

    /// Euclidean norm of the gradient at every cell.
    pub fn magnitude(&self) -> Result<ScalarField<T>, FieldError> {
        let data = (0..self.shape.cell_count())
            .map(|i| {
                let sq = self
                    .axes
                    .iter()
                    .map(|f| f.as_slice()[i][0])
                    .fold(T::zero(), |acc, d| acc + d * d);
                [sq.sqrt()]
            })
            .collect();
        Field::new(self.shape.clone(), data)
    }
}
