//! tabsel-core: subsetting and element-wise scaling for small numeric tables.
//!
//! The crate offers two entry points for the same operations. The free
//! functions in [`mod@subset`] and [`elementwise`] work on plain nested slices.
//! The dense `Array2`/`Array1` types in [`math`] expose them as methods.
//! [`io`] loads tab-separated measurement tables into a labelled matrix so
//! rows and columns can be picked by position or by name.
//!
//! Every selection validates its indices before allocating and returns a
//! fresh value; inputs are never mutated.
pub mod elementwise;
pub mod error;
pub mod io;
pub mod math;
pub mod subset;

pub use elementwise::{parse_values, scale, scale_in_place, scale_values, Value};
pub use error::{Axis, TabselError};
pub use subset::{subset, subset_columns, subset_rows};
