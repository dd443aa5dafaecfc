//! Indexed access to square grids, independent of how they are stored.

use crate::error::{check_len, Result};
use crate::size::GridSize;
use std::ops::{AddAssign, Mul};

/// A 2D grid whose cells can be read by row `i` and column `j`.
pub trait Grid<T> {
    fn cell(&self, i: usize, j: usize) -> T;

    /// Fails unless every cell of a `size` grid can be read. Grids that do
    /// not know their own shape accept any size.
    fn check(&self, _size: GridSize) -> Result<()> {
        Ok(())
    }
}

impl<T: Copy> Grid<T> for [Vec<T>] {
    #[inline]
    fn cell(&self, i: usize, j: usize) -> T {
        self[i][j]
    }

    fn check(&self, size: GridSize) -> Result<()> {
        check_rows(size, self)
    }
}

impl<T: Copy> Grid<T> for Vec<Vec<T>> {
    #[inline]
    fn cell(&self, i: usize, j: usize) -> T {
        self[i][j]
    }

    fn check(&self, size: GridSize) -> Result<()> {
        check_rows(size, self)
    }
}

impl<T, G: Grid<T> + ?Sized> Grid<T> for &G {
    #[inline]
    fn cell(&self, i: usize, j: usize) -> T {
        (**self).cell(i, j)
    }

    fn check(&self, size: GridSize) -> Result<()> {
        (**self).check(size)
    }
}

/// A square grid stored row after row in a single slice.
#[derive(Debug, Clone, Copy)]
pub struct RowMajor<'a, T> {
    side: usize,
    data: &'a [T],
}

impl<'a, T> RowMajor<'a, T> {
    pub fn new(size: GridSize, data: &'a [T]) -> Result<Self> {
        check_len("row-major grid", size.cell_count(), data.len())?;
        Ok(Self {
            side: size.side() as usize,
            data,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<'a, T: Copy> Grid<T> for RowMajor<'a, T> {
    #[inline]
    fn cell(&self, i: usize, j: usize) -> T {
        self.data[i * self.side + j]
    }

    fn check(&self, size: GridSize) -> Result<()> {
        check_len("row-major grid side", size.side() as usize, self.side)
    }
}

fn check_rows<T>(size: GridSize, rows: &[Vec<T>]) -> Result<()> {
    let side = size.side() as usize;
    check_len("grid rows", side, rows.len())?;
    for row in rows {
        check_len("grid row", side, row.len())?;
    }
    Ok(())
}

/// Plain row-major product `out[i] += sum_j A[i][j] * v[j]`.
///
/// This is the access pattern the curve orderings compete against, and the
/// reference their results are checked with.
pub fn row_major_multiply_accumulate<T, G>(
    size: GridSize,
    grid: &G,
    v: &[T],
    out: &mut [T],
) -> Result<()>
where
    T: Copy + Mul<Output = T> + AddAssign,
    G: Grid<T> + ?Sized,
{
    let side = size.side() as usize;
    grid.check(size)?;
    check_len("vector", side, v.len())?;
    check_len("output", side, out.len())?;

    for (i, acc) in out.iter_mut().enumerate() {
        for (j, &vj) in v.iter().enumerate() {
            *acc += grid.cell(i, j) * vj;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::CurveError;

    #[test]
    fn test_row_major_view() -> anyhow::Result<()> {
        let size = GridSize::new(2)?;
        let data = [1, 2, 3, 4];
        let grid = RowMajor::new(size, &data)?;
        assert_eq!(grid.cell(0, 1), 2);
        assert_eq!(grid.cell(1, 0), 3);
        assert_eq!(grid.side(), 2);

        assert_eq!(
            RowMajor::new(size, &data[..3]).unwrap_err(),
            CurveError::LengthMismatch {
                what: "row-major grid",
                expected: 4,
                actual: 3
            }
        );
        Ok(())
    }

    #[test]
    fn test_row_major_product() -> anyhow::Result<()> {
        let size = GridSize::new(2)?;
        let a = vec![vec![1, 2], vec![3, 4]];
        let mut out = vec![10, 20];
        row_major_multiply_accumulate(size, &a, &[5, 6], &mut out)?;
        assert_eq!(out, vec![10 + 5 + 12, 20 + 15 + 24]);
        Ok(())
    }

    #[test]
    fn test_product_rejects_bad_lengths() -> anyhow::Result<()> {
        let size = GridSize::new(2)?;
        let a = vec![vec![1, 2], vec![3, 4]];
        let mut out = vec![0, 0];
        assert!(row_major_multiply_accumulate(size, &a, &[1, 2, 3], &mut out).is_err());
        assert!(row_major_multiply_accumulate(size, &a, &[1, 2], &mut out[..1]).is_err());
        assert_eq!(out, vec![0, 0]);
        Ok(())
    }

    #[test]
    fn test_shape_checks() {
        let size = GridSize::new(2).unwrap();
        assert!(vec![vec![0; 2], vec![0; 2]].check(size).is_ok());
        assert!(vec![vec![0; 2]].check(size).is_err());
        assert!(vec![vec![0; 2], vec![0; 3]].check(size).is_err());

        let data = [0u8; 16];
        let grid = RowMajor::new(GridSize::new(4).unwrap(), &data).unwrap();
        assert!(grid.check(size).is_err());
        assert!((&grid).check(GridSize::new(4).unwrap()).is_ok());
    }

    #[test]
    fn test_computed_grid_accepts_any_size() -> anyhow::Result<()> {
        struct Product;
        impl Grid<usize> for Product {
            fn cell(&self, i: usize, j: usize) -> usize {
                i * j
            }
        }

        assert!(Product.check(GridSize::new(1)?).is_ok());
        assert!(Product.check(GridSize::from_log2(31)?).is_ok());
        let size = GridSize::new(4)?;
        let mut out = vec![0; 4];
        row_major_multiply_accumulate(size, &Product, &[1; 4], &mut out)?;
        assert_eq!(out, vec![0, 6, 12, 18]);
        Ok(())
    }
}
