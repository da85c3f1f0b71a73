//! Generalized curl.
//!
//! Curl is built from the antisymmetric bivector of cross partials
//!
//! ```text
//! Ω_ij = ∂F_j/∂x_i - ∂F_i/∂x_j        i < j < rank
//! ```
//!
//! with `F_k = 0` for `k >= A`. The curl is taken in
//! `n = max(rank, A)` dimensions ([`curl_embedding_rank`]): axes beyond
//! the grid rank have zero derivative, so a 3-component field on a 2D
//! grid still contributes `∂F_z/∂x` and `∂F_z/∂y`. How it is presented
//! depends on `n`:
//!
//! | n | Planes | Result |
//! |---|--------|--------|
//! | 1 | none | [`Curl::Vanishing`], a zero field of the input arity |
//! | 2 | xy | [`Curl::Scalar`], `Ω_01` |
//! | 3 | xy xz yz | [`Curl::Vector`], `(Ω_12, Ω_20, Ω_01)` |
//! | 4 | xy xz xw yz yw zw | [`Curl::Bivector`], all six planes |
//!
//! A rank-1 grid always vanishes, whatever the arity.
//!
//! Each partial follows the per-axis cell rule independently, so a corner
//! cell may combine a forward difference along one axis with a backward
//! difference along another.

use crate::partials::Partials;
use indexmap::IndexMap;
use nabla_core::{curl_embedding_rank, Field, FieldError, Real, ScalarField, Shape, MAX_RANK};
use std::fmt;

/// Conventional axis letters, in axis order.
pub const AXIS_LABELS: [char; MAX_RANK] = ['x', 'y', 'z', 'w'];

/// An oriented coordinate plane spanned by two distinct axes, stored with
/// the lower axis first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plane {
    lo: usize,
    hi: usize,
}

impl Plane {
    /// The xy plane.
    pub const XY: Plane = Plane { lo: 0, hi: 1 };
    /// The xz plane.
    pub const XZ: Plane = Plane { lo: 0, hi: 2 };
    /// The xw plane.
    pub const XW: Plane = Plane { lo: 0, hi: 3 };
    /// The yz plane.
    pub const YZ: Plane = Plane { lo: 1, hi: 2 };
    /// The yw plane.
    pub const YW: Plane = Plane { lo: 1, hi: 3 };
    /// The zw plane.
    pub const ZW: Plane = Plane { lo: 2, hi: 3 };

    /// The plane spanned by axes `a` and `b`, in either order.
    ///
    /// Returns `None` if the axes coincide or either is `>= MAX_RANK`.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        if a == b || a >= MAX_RANK || b >= MAX_RANK {
            return None;
        }
        Some(Self {
            lo: a.min(b),
            hi: a.max(b),
        })
    }

    /// `(lower, higher)` axis indices.
    pub fn axes(self) -> (usize, usize) {
        (self.lo, self.hi)
    }

    /// Every plane of a rank-`rank` grid, lexicographic by axis pair.
    pub fn all(rank: usize) -> impl Iterator<Item = Plane> {
        let rank = rank.min(MAX_RANK);
        (0..rank).flat_map(move |lo| (lo + 1..rank).map(move |hi| Plane { lo, hi }))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", AXIS_LABELS[self.lo], AXIS_LABELS[self.hi])
    }
}

/// One scalar field per coordinate plane.
///
/// Plane `(i, j)` with `i < j` holds `Ω_ij = ∂F_j/∂x_i - ∂F_i/∂x_j`.
/// Planes are kept in lexicographic order.
#[derive(Clone, Debug, PartialEq)]
pub struct Bivector<T> {
    shape: Shape,
    planes: IndexMap<Plane, ScalarField<T>>,
}

impl<T: Real> Bivector<T> {
    pub(crate) fn assemble<const A: usize>(
        field: &Field<T, A>,
        partials: &Partials<T, A>,
    ) -> Result<Self, FieldError> {
        let shape = field.shape();
        let mut planes = IndexMap::new();
        for plane in Plane::all(curl_embedding_rank(shape.rank(), A)) {
            let (i, j) = plane.axes();
            let values = (0..shape.cell_count())
                .map(|at| omega(partials, i, j, at))
                .collect();
            planes.insert(plane, ScalarField::from_scalars(shape.clone(), values)?);
        }
        Ok(Self {
            shape: shape.clone(),
            planes,
        })
    }

    /// Shape shared by every plane field.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of planes held.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// `true` for a rank-1 bivector or an empty selection.
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Planes held, in order.
    pub fn planes(&self) -> impl Iterator<Item = Plane> + '_ {
        self.planes.keys().copied()
    }

    /// `(plane, field)` pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Plane, &ScalarField<T>)> + '_ {
        self.planes.iter().map(|(p, f)| (*p, f))
    }

    /// Field for `plane`, if held.
    pub fn get(&self, plane: Plane) -> Option<&ScalarField<T>> {
        self.planes.get(&plane)
    }

    /// `Ω_ab` for axes in the given order: negated when `a > b`.
    pub fn oriented(&self, a: usize, b: usize) -> Option<ScalarField<T>> {
        let field = self.get(Plane::new(a, b)?)?;
        if a < b {
            Some(field.clone())
        } else {
            Some(field.map_values(|v| -v))
        }
    }

    /// Keep only `planes`, in the order given. Planes not held are skipped.
    pub fn select(&self, planes: &[Plane]) -> Self {
        let planes = planes
            .iter()
            .filter_map(|p| self.planes.get(p).map(|f| (*p, f.clone())))
            .collect();
        Self {
            shape: self.shape.clone(),
            planes,
        }
    }

    /// Consume into the ordered plane map.
    pub fn into_planes(self) -> IndexMap<Plane, ScalarField<T>> {
        self.planes
    }
}

/// `Ω_ij` at one cell, for axes in either order.
#[inline]
fn omega<T: Real, const A: usize>(partials: &Partials<T, A>, i: usize, j: usize, at: usize) -> T {
    partials.d(j, i, at) - partials.d(i, j, at)
}

/// Curl of an `A`-component field, shaped by the embedding rank
/// `n = max(rank, A)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Curl<T, const A: usize> {
    /// Rank 1: no plane exists, every sample is the zero vector.
    Vanishing(Field<T, A>),
    /// `n = 2`: the single xy component.
    Scalar(ScalarField<T>),
    /// `n = 3`: the axial vector `(Ω_yz, Ω_zx, Ω_xy)`.
    Vector(Field<T, 3>),
    /// `n = 4`: all six plane components.
    Bivector(Bivector<T>),
}

impl<T: Real, const A: usize> Curl<T, A> {
    pub(crate) fn assemble(field: &Field<T, A>) -> Result<Self, FieldError> {
        let shape = field.shape();
        if shape.rank() == 1 {
            return Ok(Self::Vanishing(Field::zeros(shape.clone())?));
        }
        let partials = Partials::new(field)?;
        match curl_embedding_rank(shape.rank(), A) {
            2 => {
                let values = (0..shape.cell_count())
                    .map(|at| omega(&partials, 0, 1, at))
                    .collect();
                Ok(Self::Scalar(ScalarField::from_scalars(shape.clone(), values)?))
            }
            3 => {
                let data = (0..shape.cell_count())
                    .map(|at| {
                        [
                            omega(&partials, 1, 2, at),
                            omega(&partials, 2, 0, at),
                            omega(&partials, 0, 1, at),
                        ]
                    })
                    .collect();
                Ok(Self::Vector(Field::new(shape.clone(), data)?))
            }
            _ => Ok(Self::Bivector(Bivector::assemble(field, &partials)?)),
        }
    }

    /// Shape of the result, equal to the input's.
    pub fn shape(&self) -> &Shape {
        match self {
            Self::Vanishing(f) => f.shape(),
            Self::Scalar(f) => f.shape(),
            Self::Vector(f) => f.shape(),
            Self::Bivector(b) => b.shape(),
        }
    }

    /// The scalar curl (`n = 2`), if that is what this is.
    pub fn into_scalar(self) -> Option<ScalarField<T>> {
        match self {
            Self::Scalar(f) => Some(f),
            _ => None,
        }
    }

    /// The vector curl (`n = 3`), if that is what this is.
    pub fn into_vector(self) -> Option<Field<T, 3>> {
        match self {
            Self::Vector(f) => Some(f),
            _ => None,
        }
    }

    /// The bivector curl (`n = 4`), if that is what this is.
    pub fn into_bivector(self) -> Option<Bivector<T>> {
        match self {
            Self::Bivector(b) => Some(b),
            _ => None,
        }
    }
}
