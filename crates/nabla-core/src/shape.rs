//! Validated extents of a regular N-dimensional grid.

use crate::error::FieldError;
use smallvec::SmallVec;
use std::fmt;

/// Highest grid rank the engine supports.
pub const MAX_RANK: usize = 4;

/// Per-axis indices or extents. Inline for every supported rank.
pub type Coord = SmallVec<[usize; MAX_RANK]>;

/// Extents of a dense grid of rank 1..=[`MAX_RANK`].
///
/// Cells are stored row-major: the last axis varies fastest, so the flat
/// offset of `[i0, i1, .., ik]` is `sum(i_a * stride_a)` with
/// `stride_{k} = 1`.
///
/// # Examples
///
/// ```
/// use nabla_core::Shape;
///
/// let shape = Shape::new(&[3, 4]).unwrap();
/// assert_eq!(shape.rank(), 2);
/// assert_eq!(shape.cell_count(), 12);
/// assert_eq!(shape.strides(), &[4, 1]);
/// assert_eq!(shape.offset(&[2, 1]), Some(9));
/// assert_eq!(shape.coord(9).unwrap().as_slice(), &[2, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    extents: Coord,
    strides: Coord,
    cell_count: usize,
}

impl Shape {
    /// Validate `extents` and compute strides.
    ///
    /// Returns `Err(FieldError::RankOutOfRange)` for an empty slice or more
    /// than [`MAX_RANK`] axes, `Err(FieldError::EmptyAxis)` if any extent is
    /// zero, and `Err(FieldError::CellCountOverflow)` if the cell count does
    /// not fit in `usize`.
    pub fn new(extents: &[usize]) -> Result<Self, FieldError> {
        let rank = extents.len();
        if rank == 0 || rank > MAX_RANK {
            return Err(FieldError::RankOutOfRange { rank });
        }
        if let Some(axis) = extents.iter().position(|&e| e == 0) {
            return Err(FieldError::EmptyAxis { axis });
        }

        let mut strides: Coord = SmallVec::from_elem(1, rank);
        let mut cell_count = 1usize;
        for axis in (0..rank).rev() {
            strides[axis] = cell_count;
            cell_count = cell_count
                .checked_mul(extents[axis])
                .ok_or(FieldError::CellCountOverflow)?;
        }

        Ok(Self {
            extents: SmallVec::from_slice(extents),
            strides,
            cell_count,
        })
    }

    /// Number of index dimensions.
    pub fn rank(&self) -> usize {
        self.extents.len()
    }

    /// Extent along every axis.
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Extent along `axis`, or `None` if `axis >= rank`.
    pub fn extent(&self, axis: usize) -> Option<usize> {
        self.extents.get(axis).copied()
    }

    /// Flat-offset step between neighbours along every axis.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Flat offset of `coord`, or `None` if it has the wrong rank or lies
    /// outside the grid.
    pub fn offset(&self, coord: &[usize]) -> Option<usize> {
        if coord.len() != self.rank() {
            return None;
        }
        let mut offset = 0;
        for ((&i, &extent), &stride) in coord.iter().zip(&self.extents).zip(&self.strides) {
            if i >= extent {
                return None;
            }
            offset += i * stride;
        }
        Some(offset)
    }

    /// Coordinate of the cell at flat `offset`.
    pub fn coord(&self, offset: usize) -> Option<Coord> {
        if offset >= self.cell_count {
            return None;
        }
        Some(self.unravel(offset))
    }

    pub(crate) fn unravel(&self, offset: usize) -> Coord {
        self.extents
            .iter()
            .zip(&self.strides)
            .map(|(&extent, &stride)| (offset / stride) % extent)
            .collect()
    }

    /// Index along `axis` of the cell at flat `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= rank`.
    #[inline]
    pub fn axis_index(&self, offset: usize, axis: usize) -> usize {
        (offset / self.strides[axis]) % self.extents[axis]
    }

    /// All coordinates in canonical (row-major) order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count).map(move |offset| self.unravel(offset))
    }

    /// `true` if `axis` has extent 1, so no difference can be formed along it.
    pub fn is_degenerate(&self, axis: usize) -> bool {
        self.extents.get(axis) == Some(&1)
    }

    /// First axis with extent 1, if any.
    pub fn first_degenerate_axis(&self) -> Option<usize> {
        self.extents.iter().position(|&e| e == 1)
    }

    /// `true` if `axis` has at least one interior cell (extent >= 3).
    pub fn has_interior(&self, axis: usize) -> bool {
        self.extents.get(axis).is_some_and(|&e| e >= 3)
    }

    /// `true` if `coord` is strictly inside the grid along every axis.
    pub fn is_interior(&self, coord: &[usize]) -> bool {
        coord.len() == self.rank()
            && coord
                .iter()
                .zip(&self.extents)
                .all(|(&i, &extent)| i > 0 && i + 1 < extent)
    }

    /// Fail with `FieldError::ShapeMismatch` unless `other` has identical
    /// extents.
    pub fn ensure_same(&self, other: &Shape) -> Result<(), FieldError> {
        if self.extents == other.extents {
            Ok(())
        } else {
            Err(FieldError::ShapeMismatch {
                expected: self.extents.clone(),
                found: other.extents.clone(),
            })
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (axis, extent) in self.extents.iter().enumerate() {
            if axis > 0 {
                write!(f, "x")?;
            }
            write!(f, "{extent}")?;
        }
        Ok(())
    }
}
