//! Operator entry points.
//!
//! [`StencilEngine`] validates an input against the support matrix and its
//! [`StencilConfig`], then hands it to the matching assembler. The free
//! functions at the bottom run with the default configuration.

use crate::config::{DegenerateAxisPolicy, StencilConfig};
use crate::curl::{Bivector, Curl};
use crate::gradient::Gradient;
use crate::partials::Partials;
use nabla_core::{Field, Operator, Real, ScalarField, StencilError};
use tracing::debug;

/// Evaluates gradient, divergence and curl under one configuration.
///
/// The engine holds no buffers; every call allocates its own output and
/// calls on the same engine are independent.
///
/// # Examples
///
/// ```
/// use nabla_core::{Field, Shape};
/// use nabla_stencil::StencilEngine;
///
/// let shape = Shape::new(&[4, 4]).unwrap();
/// let f = Field::<f64, 2>::from_fn(shape, |c| [c[1] as f64, -(c[0] as f64)]).unwrap();
/// let engine = StencilEngine::default();
/// let curl = engine.curl(&f).unwrap().into_scalar().unwrap();
/// assert_eq!(curl.scalar(&[2, 1]), Some(-2.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StencilEngine {
    config: StencilConfig,
}

impl StencilEngine {
    /// Create an engine with `config`.
    pub fn new(config: StencilConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &StencilConfig {
        &self.config
    }

    /// Check `field` before evaluating `op` on it.
    fn admit<T: Real, const A: usize>(
        &self,
        op: Operator,
        field: &Field<T, A>,
    ) -> Result<(), StencilError> {
        let shape = field.shape();
        if !op.supports(shape.rank(), A) {
            return Err(StencilError::UnsupportedShape {
                operator: op,
                rank: shape.rank(),
                arity: A,
            });
        }
        if self.config.degenerate_axis == DegenerateAxisPolicy::Reject {
            if let Some(axis) = shape.first_degenerate_axis() {
                return Err(StencilError::DegenerateAxis { operator: op, axis });
            }
        }
        if self.config.reject_non_finite {
            if let Some(cell) = field.first_non_finite() {
                return Err(StencilError::NonFinite { operator: op, cell });
            }
        }
        debug!(
            operator = %op,
            rank = shape.rank(),
            arity = A,
            cells = shape.cell_count(),
            shape = %shape,
            "evaluating"
        );
        Ok(())
    }

    /// Gradient of `field`: one derivative field per axis, each with the
    /// input's arity.
    pub fn gradient<T: Real, const A: usize>(
        &self,
        field: &Field<T, A>,
    ) -> Result<Gradient<T, A>, StencilError> {
        self.admit(Operator::Gradient, field)?;
        Ok(Gradient::assemble(field)?)
    }

    /// Divergence of a vector field.
    ///
    /// Sums `∂F_k/∂x_k` over `k < min(A, rank)`. Scalar fields are
    /// rejected with [`StencilError::UnsupportedShape`].
    pub fn divergence<T: Real, const A: usize>(
        &self,
        field: &Field<T, A>,
    ) -> Result<ScalarField<T>, StencilError> {
        self.admit(Operator::Divergence, field)?;
        Ok(crate::divergence::assemble(field)?)
    }

    /// Curl of a vector field, presented by grid rank. See [`Curl`].
    pub fn curl<T: Real, const A: usize>(
        &self,
        field: &Field<T, A>,
    ) -> Result<Curl<T, A>, StencilError> {
        self.admit(Operator::Curl, field)?;
        Ok(Curl::assemble(field)?)
    }

    /// Curl as an explicit plane map at any rank.
    ///
    /// Planes span the embedding rank `n = max(rank, A)`, so a
    /// 3-component field on a rank-2 grid yields `xy`, `xz` and `yz` (the
    /// vector curl is `(yz, -xz, xy)`). Rank 1 yields an empty bivector.
    pub fn curl_planes<T: Real, const A: usize>(
        &self,
        field: &Field<T, A>,
    ) -> Result<Bivector<T>, StencilError> {
        self.admit(Operator::Curl, field)?;
        let partials = Partials::new(field)?;
        Ok(Bivector::assemble(field, &partials)?)
    }

    /// Divergence of a vector field given as separate co-indexed scalar
    /// fields, one per component.
    ///
    /// All components must share one shape, otherwise
    /// [`StencilError::ShapeMismatch`] is returned. Fewer than two or more
    /// than four components is [`StencilError::UnsupportedShape`].
    pub fn divergence_of_components<T: Real>(
        &self,
        components: &[&ScalarField<T>],
    ) -> Result<ScalarField<T>, StencilError> {
        match *components {
            [a, b] => self.divergence(&Field::from_components([a, b])?),
            [a, b, c] => self.divergence(&Field::from_components([a, b, c])?),
            [a, b, c, d] => self.divergence(&Field::from_components([a, b, c, d])?),
            _ => Err(unsupported_components(Operator::Divergence, components)),
        }
    }

    /// Curl planes of a vector field given as separate co-indexed scalar
    /// fields. Same shape rules as
    /// [`divergence_of_components`](Self::divergence_of_components).
    pub fn curl_of_components<T: Real>(
        &self,
        components: &[&ScalarField<T>],
    ) -> Result<Bivector<T>, StencilError> {
        match *components {
            [a, b] => self.curl_planes(&Field::from_components([a, b])?),
            [a, b, c] => self.curl_planes(&Field::from_components([a, b, c])?),
            [a, b, c, d] => self.curl_planes(&Field::from_components([a, b, c, d])?),
            _ => Err(unsupported_components(Operator::Curl, components)),
        }
    }
}

fn unsupported_components<T: Real>(op: Operator, components: &[&ScalarField<T>]) -> StencilError {
    StencilError::UnsupportedShape {
        operator: op,
        rank: components.first().map_or(0, |c| c.rank()),
        arity: components.len(),
    }
}

/// [`StencilEngine::gradient`] with the default configuration.
pub fn gradient<T: Real, const A: usize>(
    field: &Field<T, A>,
) -> Result<Gradient<T, A>, StencilError> {
    StencilEngine::default().gradient(field)
}

/// [`StencilEngine::divergence`] with the default configuration.
pub fn divergence<T: Real, const A: usize>(
    field: &Field<T, A>,
) -> Result<ScalarField<T>, StencilError> {
    StencilEngine::default().divergence(field)
}

/// [`StencilEngine::curl`] with the default configuration.
pub fn curl<T: Real, const A: usize>(field: &Field<T, A>) -> Result<Curl<T, A>, StencilError> {
    StencilEngine::default().curl(field)
}

/// [`StencilEngine::curl_planes`] with the default configuration.
pub fn curl_planes<T: Real, const A: usize>(
    field: &Field<T, A>,
) -> Result<Bivector<T>, StencilError> {
    StencilEngine::default().curl_planes(field)
}
