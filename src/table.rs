use crate::error::{check_len, CurveError, Result};
use crate::grid::Grid;
use crate::hilbert;
use crate::size::GridSize;
use std::convert::TryFrom;
use std::ops::{AddAssign, Mul};

/// Precomputed coordinates of every curve index of a grid.
///
/// This trades `2 * n^2` coordinates of memory for not having to convert
/// indices during a traversal. The recursive functions in
/// [`crate::traversal`] produce the same orders without the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableParts")]
pub struct CurveTable {
    size: GridSize,
    rows: Vec<u32>,
    cols: Vec<u32>,
}

/// Unvalidated form of a table, as found on the wire.
#[derive(Deserialize)]
struct TableParts {
    size: GridSize,
    rows: Vec<u32>,
    cols: Vec<u32>,
}

impl TryFrom<TableParts> for CurveTable {
    type Error = CurveError;

    fn try_from(parts: TableParts) -> Result<Self> {
        let TableParts { size, rows, cols } = parts;
        check_len("table rows", size.cell_count(), rows.len())?;
        check_len("table columns", size.cell_count(), cols.len())?;
        for (d, (&x, &y)) in rows.iter().zip(cols.iter()).enumerate() {
            if !size.contains(x, y) {
                return Err(CurveError::CoordinateOutOfRange {
                    x: x as u64,
                    y: y as u64,
                    side: size.side(),
                });
            }
            let index = d as u64;
            if hilbert::detangle(index, size.side()) != (x, y) {
                return Err(CurveError::NotOnCurve { index, x, y });
            }
        }
        Ok(Self { size, rows, cols })
    }
}

impl CurveTable {
    pub fn build(size: GridSize) -> Self {
        let cells = size.cell_count();
        let mut rows = Vec::with_capacity(cells);
        let mut cols = Vec::with_capacity(cells);
        for d in 0..size.cells() {
            let (x, y) = hilbert::detangle(d, size.side());
            rows.push(x);
            cols.push(y);
        }
        debug!("built curve table for a {}x{} grid ({} entries)", size, size, cells);
        Self { size, rows, cols }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A table always covers at least one cell.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn coordinates(&self, index: u64) -> Option<(u32, u32)> {
        let d = usize::try_from(index).ok()?;
        Some((*self.rows.get(d)?, *self.cols.get(d)?))
    }

    pub fn iter<'a>(&'a self) -> impl ExactSizeIterator<Item = (u32, u32)> + 'a {
        self.rows.iter().cloned().zip(self.cols.iter().cloned())
    }

    /// Copy the cells of `grid` into curve order by table lookup.
    pub fn flatten<T, G>(&self, grid: &G) -> Result<Vec<T>>
    where
        G: Grid<T> + ?Sized,
    {
        grid.check(self.size)?;
        let flat: Vec<T> = self.iter().map(|(x, y)| grid.cell(x as usize, y as usize)).collect();
        debug!("flattened {} cells by table lookup", flat.len());
        Ok(flat)
    }

    /// `out[i] += A[i][j] * v[j]` for every cell, where `flat` holds `A` in
    /// curve order.
    pub fn multiply_accumulate<T>(&self, flat: &[T], v: &[T], out: &mut [T]) -> Result<()>
    where
        T: Copy + Mul<Output = T> + AddAssign,
    {
        let side = self.size.side() as usize;
        check_len("flattened grid", self.len(), flat.len())?;
        check_len("vector", side, v.len())?;
        check_len("output", side, out.len())?;

        for (&a, (x, y)) in flat.iter().zip(self.iter()) {
            out[x as usize] += a * v[y as usize];
        }
        Ok(())
    }
}
