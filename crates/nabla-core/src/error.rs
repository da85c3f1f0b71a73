//! Error types for the Nabla stencil engine.
//!
//! Split by subsystem: [`FieldError`] for shape and field construction,
//! [`StencilError`] for operator evaluation. Every error is a caller
//! contract violation reported synchronously; nothing is retried.

use crate::operator::Operator;
use crate::shape::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from grid shape or field construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Rank is zero or exceeds [`MAX_RANK`](crate::MAX_RANK).
    RankOutOfRange {
        /// The rejected rank.
        rank: usize,
    },
    /// Sample arity is zero or exceeds [`MAX_ARITY`](crate::MAX_ARITY).
    ArityOutOfRange {
        /// The rejected arity.
        arity: usize,
    },
    /// An axis was given an extent of zero.
    EmptyAxis {
        /// Index of the empty axis.
        axis: usize,
    },
    /// The product of all extents overflows `usize`.
    CellCountOverflow,
    /// Sample buffer length does not match the shape's cell count.
    DataLength {
        /// Cell count required by the shape.
        expected: usize,
        /// Length of the buffer supplied.
        found: usize,
    },
    /// Two co-indexed fields have different extents.
    ShapeMismatch {
        /// Extents of the reference field.
        expected: Coord,
        /// Extents of the offending field.
        found: Coord,
    },
    /// An axis index is not below the field's rank.
    AxisOutOfRange {
        /// The requested axis.
        axis: usize,
        /// Rank of the field.
        rank: usize,
    },
    /// A per-axis view was requested with a length other than the rank.
    RankMismatch {
        /// Rank of the field.
        rank: usize,
        /// The requested length.
        requested: usize,
    },
    /// A component index is not below the field's arity.
    ComponentOutOfRange {
        /// The requested component.
        component: usize,
        /// Arity of the field.
        arity: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RankOutOfRange { rank } => {
                write!(f, "rank {rank} out of range [1, {}]", crate::MAX_RANK)
            }
            Self::ArityOutOfRange { arity } => {
                write!(f, "arity {arity} out of range [1, {}]", crate::MAX_ARITY)
            }
            Self::EmptyAxis { axis } => write!(f, "axis {axis} has zero extent"),
            Self::CellCountOverflow => write!(f, "cell count overflows usize"),
            Self::DataLength { expected, found } => {
                write!(f, "expected {expected} samples, got {found}")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "extents {found:?} do not match {expected:?}")
            }
            Self::AxisOutOfRange { axis, rank } => {
                write!(f, "axis {axis} out of range for rank {rank}")
            }
            Self::RankMismatch { rank, requested } => {
                write!(f, "requested {requested} axes from a rank {rank} field")
            }
            Self::ComponentOutOfRange { component, arity } => {
                write!(f, "component {component} out of range for arity {arity}")
            }
        }
    }
}

impl Error for FieldError {}

/// Errors from operator evaluation.
///
/// All variants are raised before any output is allocated, so a failed
/// call never exposes a partial result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StencilError {
    /// The operator is not defined for this (rank, arity) combination,
    /// e.g. divergence of a scalar field.
    UnsupportedShape {
        /// The requested operator.
        operator: Operator,
        /// Grid rank of the input.
        rank: usize,
        /// Component count of the input.
        arity: usize,
    },
    /// An axis has extent 1 and the engine is configured to reject
    /// degenerate axes.
    DegenerateAxis {
        /// The requested operator.
        operator: Operator,
        /// Index of the first degenerate axis.
        axis: usize,
    },
    /// Co-indexed component inputs have different extents.
    ShapeMismatch {
        /// Extents of the first input.
        expected: Coord,
        /// Extents of the first input that disagrees.
        found: Coord,
    },
    /// The input holds a NaN or infinite sample and the engine is
    /// configured to reject non-finite input.
    NonFinite {
        /// The requested operator.
        operator: Operator,
        /// Flat index of the first non-finite cell.
        cell: usize,
    },
    /// Building an input or output field failed.
    Field(FieldError),
}

impl fmt::Display for StencilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedShape {
                operator,
                rank,
                arity,
            } => write!(
                f,
                "{operator} not supported for rank {rank}, arity {arity}"
            ),
            Self::DegenerateAxis { operator, axis } => {
                write!(f, "{operator}: axis {axis} has extent 1")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "component extents {found:?} do not match {expected:?}")
            }
            Self::NonFinite { operator, cell } => {
                write!(f, "{operator}: non-finite sample at cell {cell}")
            }
            Self::Field(e) => write!(f, "field: {e}"),
        }
    }
}

impl Error for StencilError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldError> for StencilError {
    fn from(e: FieldError) -> Self {
        match e {
            FieldError::ShapeMismatch { expected, found } => {
                Self::ShapeMismatch { expected, found }
            }
            other => Self::Field(other),
        }
    }
}
