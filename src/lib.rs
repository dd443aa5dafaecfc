//! Cache-friendly traversal of square grids along the Hilbert curve.
//!
//! Two independent ways of visiting an `n x n` grid (`n` a power of two) in
//! curve order:
//!
//! - [`to_hilbert_index`] and [`to_coordinates`] convert between a cell and
//!   its position on the curve, which is enough to build a lookup table
//!   ([`CurveTable`]) and permute data with it;
//! - [`traverse`] walks the quadrants recursively and yields the cells in the
//!   same order without computing any index. [`flatten`] and
//!   [`traverse_multiply_accumulate`] are built on it, as is the iterative
//!   [`CurveIter`].
//!
//! ```
//! use hilbert_order::*;
//!
//! let size = GridSize::from_log2(3).unwrap();
//! let side = size.side() as usize;
//! let grid: Vec<Vec<f64>> = (0..side)
//!     .map(|i| (0..side).map(|j| (i * side + j) as f64).collect())
//!     .collect();
//! let v = vec![1.0; side];
//!
//! let flat = flatten(size, &grid).unwrap();
//! let mut out = vec![0.0; side];
//! traverse_multiply_accumulate(size, &flat, &v, &mut out).unwrap();
//!
//! let mut expected = vec![0.0; side];
//! row_major_multiply_accumulate(size, &grid, &v, &mut expected).unwrap();
//! assert_eq!(out, expected);
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod error;
mod grid;
mod hilbert;
mod iter;
pub mod logging;
mod size;
mod table;
pub mod traversal;

pub use error::{CurveError, Result};
pub use grid::{row_major_multiply_accumulate, Grid, RowMajor};
pub use hilbert::{to_coordinates, to_hilbert_index};
pub use iter::CurveIter;
pub use size::GridSize;
pub use table::CurveTable;
pub use traversal::{
    apply, flatten, traverse, traverse_multiply_accumulate, unflatten, Orientation, Step,
};
