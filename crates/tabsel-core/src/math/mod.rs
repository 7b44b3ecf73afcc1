//! Dense 2D (`Array2`) and 1D (`Array1`) containers.
//!
//! Both are thin wrappers over a `Vec<T>` with checked selection methods
//! that mirror the free functions in [`crate::subset`] and
//! [`crate::elementwise`].
pub mod matrix;
pub mod vector;

pub use matrix::Array2;
pub use vector::Array1;
