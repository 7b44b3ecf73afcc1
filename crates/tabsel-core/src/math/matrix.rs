use std::fmt;
use std::ops::{Index, IndexMut, Mul, RangeBounds};

use crate::error::{Axis, Result, TabselError};
use crate::math::vector::Array1;
use crate::subset::{check_indices, check_rectangular};

#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(TabselError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build from nested rows. Ragged input is rejected with `ShapeMismatch`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = check_rectangular(&rows)?;
        let nrows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: nrows,
            cols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Borrow one row. Panics when `row` is out of bounds, like slice indexing.
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row_slice(r))
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Clone> Array2<T> {
    pub fn column(&self, col: usize) -> Result<Array1<T>> {
        check_indices(&[col], self.cols, Axis::Column)?;
        let mut values = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            values.push(self[(row, col)].clone());
        }
        Ok(Array1::from_vec(values))
    }

    /// Rows and columns picked by index, in the given order. Repeats are kept.
    pub fn subset(&self, rows: &[usize], cols: &[usize]) -> Result<Array2<T>> {
        check_indices(rows, self.rows, Axis::Row)?;
        check_indices(cols, self.cols, Axis::Column)?;
        log::debug!(
            "Array2::subset {:?} -> ({}, {})",
            self.shape(),
            rows.len(),
            cols.len()
        );

        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for &row in rows {
            let slice = self.row_slice(row);
            data.extend(cols.iter().map(|&c| slice[c].clone()));
        }
        Ok(Array2 {
            data,
            rows: rows.len(),
            cols: cols.len(),
        })
    }

    pub fn select_rows(&self, indices: &[usize]) -> Result<Array2<T>> {
        check_indices(indices, self.rows, Axis::Row)?;
        let mut data = Vec::with_capacity(indices.len() * self.cols);
        for &row in indices {
            data.extend_from_slice(self.row_slice(row));
        }
        Ok(Array2 {
            data,
            rows: indices.len(),
            cols: self.cols,
        })
    }

    pub fn select_columns(&self, indices: &[usize]) -> Result<Array2<T>> {
        let rows: Vec<usize> = (0..self.rows).collect();
        self.subset(&rows, indices)
    }

    /// Contiguous column slice, e.g. `m.select_column_range(1..3)`.
    ///
    /// An empty range such as `2..2` gives a matrix with no columns; a
    /// reversed one such as `3..1` is an `InvalidRange` error.
    pub fn select_column_range<R>(&self, range: R) -> Result<Array2<T>>
    where
        R: RangeBounds<usize>,
    {
        use std::ops::Bound;

        let past_end = |index: usize| TabselError::OutOfBounds {
            axis: Axis::Column,
            index,
            len: self.cols,
        };

        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or_else(|| past_end(s))?,
        };

        let end = match range.end_bound() {
            Bound::Unbounded => self.cols,
            Bound::Included(&e) => e.checked_add(1).ok_or_else(|| past_end(e))?,
            Bound::Excluded(&e) => e,
        };

        if start > self.cols {
            return Err(past_end(start));
        }
        if start > end {
            return Err(TabselError::InvalidRange { start, end });
        }
        if end > self.cols {
            return Err(past_end(end - 1));
        }
        let cols: Vec<usize> = (start..end).collect();
        self.select_columns(&cols)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows_iter().map(|r| r.to_vec()).collect()
    }
}

impl<T> Array2<T>
where
    T: Copy + Mul<Output = T>,
{
    pub fn scale(&self, factor: T) -> Array2<T> {
        self.mapv(|&v| v * factor)
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Array2<T> {
    type Error = TabselError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Array2::from_rows(rows)
    }
}

impl<T: Clone> From<&Array2<T>> for Vec<Vec<T>> {
    fn from(value: &Array2<T>) -> Self {
        value.to_rows()
    }
}

/// Renders one bracketed row per line, `[[1, 2],\n [3, 4]]`.
impl<T: fmt::Display> fmt::Display for Array2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
