use std::error::Error;
use std::fmt;

/// Which dimension of a matrix an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Error type for selection, shape and element-type failures.
#[derive(Debug, Clone, PartialEq)]
pub enum TabselError {
    /// An index does not address an existing row or column.
    OutOfBounds { axis: Axis, index: usize, len: usize },
    /// A row's length differs from the first row's length.
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer cannot be viewed with the requested shape.
    BufferLength { rows: usize, cols: usize, len: usize },
    /// Two sequences that must pair up element by element differ in length.
    LengthMismatch { expected: usize, found: usize },
    /// A non-numeric element where a number is required.
    TypeMismatch { position: usize, found: String },
    UnknownColumn(String),
    /// A range whose start lies past its end.
    InvalidRange { start: usize, end: usize },
}

impl fmt::Display for TabselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabselError::OutOfBounds { axis, index, len } => write!(
                f,
                "{} index {} out of bounds for {} {}s",
                axis, index, len, axis
            ),
            TabselError::ShapeMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged matrix: row {} has {} columns, expected {}",
                row, found, expected
            ),
            TabselError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            TabselError::LengthMismatch { expected, found } => write!(
                f,
                "length mismatch: expected {} elements, found {}",
                expected, found
            ),
            TabselError::TypeMismatch { position, found } => write!(
                f,
                "non-numeric value '{}' at position {}",
                found, position
            ),
            TabselError::UnknownColumn(name) => write!(f, "unknown column '{}'", name),
            TabselError::InvalidRange { start, end } => {
                write!(f, "invalid range {}..{}: start is past end", start, end)
            }
        }
    }
}

impl Error for TabselError {}

pub type Result<T> = std::result::Result<T, TabselError>;
