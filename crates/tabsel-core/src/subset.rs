//! Row/column subsetting over nested row slices.
//!
//! A matrix here is anything that looks like a slice of rows: `Vec<Vec<T>>`,
//! `&[[T; N]]` or `&[&[T]]`. Index sequences are 0-based and order-sensitive:
//! `result[k][l] == matrix[rows[k]][cols[l]]`, so the same call filters,
//! reorders and duplicates.

use crate::error::{Axis, Result, TabselError};

/// Verify every row has the same length and return that length.
///
/// A matrix with no rows has zero columns.
pub fn check_rectangular<T, R: AsRef<[T]>>(matrix: &[R]) -> Result<usize> {
    let ncols = match matrix.first() {
        Some(first) => first.as_ref().len(),
        None => return Ok(0),
    };
    for (row, values) in matrix.iter().enumerate().skip(1) {
        let found = values.as_ref().len();
        if found != ncols {
            return Err(TabselError::ShapeMismatch {
                row,
                expected: ncols,
                found,
            });
        }
    }
    Ok(ncols)
}

/// Fail on the first index that is not below `len`.
pub(crate) fn check_indices(indices: &[usize], len: usize, axis: Axis) -> Result<()> {
    match indices.iter().find(|&&idx| idx >= len) {
        Some(&index) => Err(TabselError::OutOfBounds { axis, index, len }),
        None => Ok(()),
    }
}

/// Select `rows` × `cols` from `matrix`, in the order given.
///
/// # Errors
///
/// * `ShapeMismatch` if the rows of `matrix` differ in length.
/// * `OutOfBounds` for the first row index (then column index) outside the
///   matrix. Nothing is allocated when validation fails.
///
/// # Example
///
/// ```
/// use tabsel_core::subset;
///
/// let m = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// assert_eq!(subset(&m, &[1, 0], &[2, 2]).unwrap(), vec![vec![6, 6], vec![3, 3]]);
/// ```
pub fn subset<T, R>(matrix: &[R], rows: &[usize], cols: &[usize]) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let ncols = check_rectangular(matrix)?;
    check_indices(rows, matrix.len(), Axis::Row)?;
    check_indices(cols, ncols, Axis::Column)?;

    if rows.is_empty() || cols.is_empty() {
        log::warn!(
            "empty selection ({} rows x {} columns)",
            rows.len(),
            cols.len()
        );
    }
    log::debug!(
        "subset {}x{} -> {}x{}",
        matrix.len(),
        ncols,
        rows.len(),
        cols.len()
    );

    let out = rows
        .iter()
        .map(|&r| {
            let source = matrix[r].as_ref();
            cols.iter().map(|&c| source[c].clone()).collect()
        })
        .collect();
    Ok(out)
}

/// Select whole rows, keeping every column.
pub fn subset_rows<T, R>(matrix: &[R], rows: &[usize]) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let ncols = check_rectangular(matrix)?;
    let cols: Vec<usize> = (0..ncols).collect();
    subset(matrix, rows, &cols)
}

/// Select whole columns, keeping every row.
pub fn subset_columns<T, R>(matrix: &[R], cols: &[usize]) -> Result<Vec<Vec<T>>>
where
    T: Clone,
    R: AsRef<[T]>,
{
    let rows: Vec<usize> = (0..matrix.len()).collect();
    subset(matrix, &rows, cols)
}
