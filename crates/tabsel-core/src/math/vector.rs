use std::fmt;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, Index, IndexMut, Mul};
use std::slice::{Iter, IterMut};

use num_traits::{One, Zero};

use crate::error::{Axis, Result, TabselError};
use crate::subset::check_indices;

#[derive(Clone, Debug, PartialEq)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array1<U>
    where
        F: FnMut(&T) -> U,
    {
        Array1::from_vec(self.data.iter().map(|v| f(v)).collect())
    }
}

impl<T: Clone> Array1<T> {
    /// Elements at `indices`, in order; repeats are kept.
    pub fn select(&self, indices: &[usize]) -> Result<Array1<T>> {
        check_indices(indices, self.len(), Axis::Row)?;
        Ok(indices.iter().map(|&idx| self.data[idx].clone()).collect())
    }

    /// Elements where `mask` is true. The mask must match in length.
    pub fn select_mask(&self, mask: &Array1<bool>) -> Result<Array1<T>> {
        if mask.len() != self.len() {
            return Err(TabselError::LengthMismatch {
                expected: self.len(),
                found: mask.len(),
            });
        }
        Ok(self
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(v, _)| v.clone())
            .collect())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    pub fn from_elem(len: usize, value: T) -> Self {
        Array1::from_vec(vec![value; len])
    }
}

impl<T> Array1<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale(&self, factor: T) -> Array1<T> {
        self.mapv(|&v| v * factor)
    }
}

impl<T> Array1<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Array1::from_vec(vec![T::zero(); len])
    }
}

impl<T> Array1<T>
where
    T: Clone + One,
{
    pub fn ones(len: usize) -> Self {
        Array1::from_vec(vec![T::one(); len])
    }
}

impl<T> From<Vec<T>> for Array1<T> {
    fn from(value: Vec<T>) -> Self {
        Array1::from_vec(value)
    }
}

impl<T> From<Array1<T>> for Vec<T> {
    fn from(value: Array1<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array1<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Array1<bool> {
    /// Checked form of `&`: `LengthMismatch` when the masks differ in length.
    pub fn try_bitand(&self, rhs: &Array1<bool>) -> Result<Array1<bool>> {
        self.zip_masks(rhs, |a, b| a && b)
    }

    /// Checked form of `|`.
    pub fn try_bitor(&self, rhs: &Array1<bool>) -> Result<Array1<bool>> {
        self.zip_masks(rhs, |a, b| a || b)
    }

    fn zip_masks(&self, rhs: &Array1<bool>, op: impl Fn(bool, bool) -> bool) -> Result<Array1<bool>> {
        if rhs.len() != self.len() {
            return Err(TabselError::LengthMismatch {
                expected: self.len(),
                found: rhs.len(),
            });
        }
        Ok(self.iter().zip(rhs.iter()).map(|(a, b)| op(*a, *b)).collect())
    }
}

impl<'a, 'b> BitAnd<&'b Array1<bool>> for &'a Array1<bool> {
    type Output = Array1<bool>;

    /// Element-wise logical and of two masks.
    ///
    /// # Panics
    ///
    /// Panics if the masks differ in length. Use [`Array1::try_bitand`] to get
    /// a `LengthMismatch` error instead.
    fn bitand(self, rhs: &'b Array1<bool>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Bitwise and requires arrays of equal length"
        );
        Array1::from_vec(self.iter().zip(rhs.iter()).map(|(a, b)| *a && *b).collect())
    }
}

impl<'a, 'b> BitOr<&'b Array1<bool>> for &'a Array1<bool> {
    type Output = Array1<bool>;

    /// Element-wise logical or of two masks.
    ///
    /// # Panics
    ///
    /// Panics if the masks differ in length. Use [`Array1::try_bitor`] to get
    /// a `LengthMismatch` error instead.
    fn bitor(self, rhs: &'b Array1<bool>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Bitwise or requires arrays of equal length"
        );
        Array1::from_vec(self.iter().zip(rhs.iter()).map(|(a, b)| *a || *b).collect())
    }
}

impl Array1<f64> {
    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().copied().sum::<f64>() / self.len() as f64)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Array1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
