//! Dense fields of fixed-arity samples on a [`Shape`].

use crate::element::Real;
use crate::error::FieldError;
use crate::operator::MAX_ARITY;
use crate::shape::Shape;

/// A dense, rectangular grid of `A`-component samples.
///
/// The arity `A` is fixed at compile time, the rank at runtime through the
/// field's [`Shape`]. Samples are stored row-major, one `[T; A]` per cell.
/// Extents never change after construction; operators read a field and
/// return new ones.
///
/// # Examples
///
/// ```
/// use nabla_core::{Field, Shape};
///
/// let shape = Shape::new(&[2, 3]).unwrap();
/// let field = Field::<f64, 2>::from_fn(shape, |c| [c[0] as f64, c[1] as f64]).unwrap();
/// assert_eq!(field.get(&[1, 2]), Some(&[1.0, 2.0]));
/// assert_eq!(field.arity(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Field<T, const A: usize> {
    shape: Shape,
    data: Vec<[T; A]>,
}

/// A field with one component per cell.
pub type ScalarField<T> = Field<T, 1>;

impl<T: Real, const A: usize> Field<T, A> {
    /// Components per sample.
    pub const ARITY: usize = A;

    fn check_arity() -> Result<(), FieldError> {
        if A == 0 || A > MAX_ARITY {
            return Err(FieldError::ArityOutOfRange { arity: A });
        }
        Ok(())
    }

    /// Wrap an existing sample buffer.
    ///
    /// `data.len()` must equal `shape.cell_count()`.
    pub fn new(shape: Shape, data: Vec<[T; A]>) -> Result<Self, FieldError> {
        Self::check_arity()?;
        if data.len() != shape.cell_count() {
            return Err(FieldError::DataLength {
                expected: shape.cell_count(),
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// A field of zero samples.
    pub fn zeros(shape: Shape) -> Result<Self, FieldError> {
        Self::check_arity()?;
        let data = vec![[T::zero(); A]; shape.cell_count()];
        Ok(Self { shape, data })
    }

    /// Sample `f` at every coordinate, in canonical order.
    pub fn from_fn(shape: Shape, mut f: impl FnMut(&[usize]) -> [T; A]) -> Result<Self, FieldError> {
        Self::check_arity()?;
        let data = shape.coords().map(|coord| f(coord.as_slice())).collect();
        Ok(Self { shape, data })
    }

    /// Interleave `A` scalar fields into one vector field.
    ///
    /// All components must have identical extents; the first component
    /// sets the reference shape.
    pub fn from_components(components: [&ScalarField<T>; A]) -> Result<Self, FieldError> {
        Self::check_arity()?;
        let shape = components[0].shape().clone();
        for component in &components[1..] {
            shape.ensure_same(component.shape())?;
        }
        let data = (0..shape.cell_count())
            .map(|i| std::array::from_fn(|k| components[k].data[i][0]))
            .collect();
        Ok(Self { shape, data })
    }

    /// Grid shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Grid rank.
    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    /// Components per sample.
    pub fn arity(&self) -> usize {
        A
    }

    /// Extent along every axis.
    pub fn extents(&self) -> &[usize] {
        self.shape.extents()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: a shape has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at `coord`, or `None` if out of bounds.
    pub fn get(&self, coord: &[usize]) -> Option<&[T; A]> {
        self.shape.offset(coord).map(|i| &self.data[i])
    }

    /// Samples in canonical order.
    pub fn as_slice(&self) -> &[[T; A]] {
        &self.data
    }

    /// Consume the field, returning its samples.
    pub fn into_vec(self) -> Vec<[T; A]> {
        self.data
    }

    /// Extract component `k` as a scalar field.
    pub fn component(&self, k: usize) -> Result<ScalarField<T>, FieldError> {
        if k >= A {
            return Err(FieldError::ComponentOutOfRange {
                component: k,
                arity: A,
            });
        }
        Ok(Field {
            shape: self.shape.clone(),
            data: self.data.iter().map(|v| [v[k]]).collect(),
        })
    }

    /// Split into `A` scalar fields.
    pub fn components(&self) -> [ScalarField<T>; A] {
        std::array::from_fn(|k| Field {
            shape: self.shape.clone(),
            data: self.data.iter().map(|v| [v[k]]).collect(),
        })
    }

    /// Apply `f` to every component of every sample.
    pub fn map_values(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self {
            shape: self.shape.clone(),
            data: self.data.iter().map(|v| v.map(&mut f)).collect(),
        }
    }

    /// Combine two fields component-wise. Extents must match.
    pub fn zip_with(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Result<Self, FieldError> {
        self.shape.ensure_same(&other.shape)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| std::array::from_fn(|k| f(a[k], b[k])))
            .collect();
        Ok(Self {
            shape: self.shape.clone(),
            data,
        })
    }

    /// Flat index of the first cell holding a NaN or infinite component.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.data
            .iter()
            .position(|v| v.iter().any(|x| !x.is_finite()))
    }
}

impl<T: Real> Field<T, 1> {
    /// Wrap a buffer of scalars.
    pub fn from_scalars(shape: Shape, values: Vec<T>) -> Result<Self, FieldError> {
        Self::new(shape, values.into_iter().map(|v| [v]).collect())
    }

    /// Scalar value at `coord`.
    pub fn scalar(&self, coord: &[usize]) -> Option<T> {
        self.get(coord).map(|v| v[0])
    }

    /// Scalar values in canonical order.
    pub fn scalars(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().map(|v| v[0])
    }

    /// Copy the scalar values into a new `Vec`.
    pub fn to_scalars(&self) -> Vec<T> {
        self.scalars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(extents: &[usize]) -> Shape {
        Shape::new(extents).unwrap()
    }

    #[test]
    fn new_checks_length() {
        let err = Field::<f32, 2>::new(shape(&[2, 2]), vec![[0.0; 2]; 3]).unwrap_err();
        assert_eq!(err, FieldError::DataLength { expected: 4, found: 3 });
    }

    #[test]
    fn arity_out_of_range_rejected() {
        assert_eq!(
            Field::<f64, 5>::zeros(shape(&[2])).unwrap_err(),
            FieldError::ArityOutOfRange { arity: 5 }
        );
        assert_eq!(
            Field::<f64, 0>::zeros(shape(&[2])).unwrap_err(),
            FieldError::ArityOutOfRange { arity: 0 }
        );
    }

    #[test]
    fn components_round_trip() {
        let s = shape(&[3, 2]);
        let v = Field::<f64, 3>::from_fn(s, |c| {
            let x = c[0] as f64;
            let y = c[1] as f64;
            [x, y, x * y]
        })
        .unwrap();
        let [a, b, c] = v.components();
        let back = Field::from_components([&a, &b, &c]).unwrap();
        assert_eq!(back, v);
        assert_eq!(v.component(2).unwrap().scalar(&[2, 1]), Some(2.0));
        assert!(matches!(
            v.component(3),
            Err(FieldError::ComponentOutOfRange { component: 3, arity: 3 })
        ));
    }

    #[test]
    fn from_components_rejects_mismatched_extents() {
        let a = ScalarField::<f32>::zeros(shape(&[3, 3])).unwrap();
        let b = ScalarField::<f32>::zeros(shape(&[3, 4])).unwrap();
        let err = Field::<f32, 2>::from_components([&a, &b]).unwrap_err();
        assert!(matches!(err, FieldError::ShapeMismatch { .. }));
    }

    #[test]
    fn zip_with_and_map() {
        let s = shape(&[4]);
        let a = ScalarField::from_scalars(s.clone(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = a.map_values(|x| x * 10.0);
        let sum = a.zip_with(&b, |x, y| x + y).unwrap();
        assert_eq!(sum.to_scalars(), vec![11.0, 22.0, 33.0, 44.0]);

        let other = ScalarField::<f64>::zeros(shape(&[2, 2])).unwrap();
        assert!(a.zip_with(&other, |x, _| x).is_err());
    }

    #[test]
    fn first_non_finite_finds_nan() {
        let s = shape(&[3]);
        let f = Field::<f32, 2>::new(s, vec![[0.0, 1.0], [2.0, f32::NAN], [f32::INFINITY, 0.0]])
            .unwrap();
        assert_eq!(f.first_non_finite(), Some(1));
        assert_eq!(f.map_values(|_| 0.0).first_non_finite(), None);
    }
}
