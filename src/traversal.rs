//! Recursive traversal of a square grid in Hilbert curve order.
//!
//! Instead of converting every index into coordinates, the traversal
//! descends into the four quadrants of the current square in curve order,
//! carrying the orientation of the curve inside that square. There are four
//! orientations:
//!
//! - `H`: the curve as produced by [`crate::to_coordinates`],
//! - `A`: `H` reflected across the main diagonal,
//! - `B`: `H` reflected across the anti-diagonal,
//! - `C`: `H` rotated by half a turn.
//!
//! Each orientation visits its quadrants in a fixed order, moving by exactly
//! one quadrant side between them, and hands each quadrant to the orientation
//! that keeps the curve continuous:
//!
//! | Orientation | Quadrants          | Moves             | First quadrant |
//! |-------------|--------------------|-------------------|----------------|
//! | `H`         | `A`, `H`, `H`, `B` | up, right, down   | lower left     |
//! | `A`         | `H`, `A`, `A`, `C` | right, up, left   | lower left     |
//! | `B`         | `C`, `B`, `B`, `H` | left, down, right | upper right    |
//! | `C`         | `B`, `C`, `C`, `A` | down, left, up    | upper right    |
//!
//! Rows grow upwards and columns grow to the right, so "up" increments the
//! row and "right" increments the column.

use crate::error::{check_len, Result};
use crate::grid::Grid;
use crate::size::GridSize;
use std::ops::{AddAssign, Mul};

/// A move from one quadrant to the next one along the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Up,
    Down,
    Right,
    Left,
}

impl Step {
    /// Shift `(i, j)` by `h` in the direction of the step. Callers keep the
    /// result inside the grid.
    #[inline(always)]
    pub(crate) fn shift(self, (i, j): (usize, usize), h: usize) -> (usize, usize) {
        match self {
            Self::Up => (i + h, j),
            Self::Down => (i - h, j),
            Self::Right => (i, j + h),
            Self::Left => (i, j - h),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    H,
    A,
    B,
    C,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Self::H, Self::A, Self::B, Self::C];

    /// Orientations of the four quadrants, in visiting order.
    #[inline(always)]
    pub fn children(self) -> [Orientation; 4] {
        use Orientation::*;
        match self {
            H => [A, H, H, B],
            A => [H, A, A, C],
            B => [C, B, B, H],
            C => [B, C, C, A],
        }
    }

    /// Moves between consecutive quadrants.
    #[inline(always)]
    pub fn moves(self) -> [Step; 3] {
        use Step::*;
        match self {
            Self::H => [Up, Right, Down],
            Self::A => [Right, Up, Left],
            Self::B => [Left, Down, Right],
            Self::C => [Down, Left, Up],
        }
    }

    /// Lower-left corner of the first quadrant, relative to the lower-left
    /// corner of the square, in units of the quadrant side.
    #[inline(always)]
    pub fn entry(self) -> (usize, usize) {
        match self {
            Self::H | Self::A => (0, 0),
            Self::B | Self::C => (1, 1),
        }
    }

    /// Visit every cell of a `size` grid in the order of this orientation,
    /// calling `visit(i, j)` once per cell.
    pub fn walk<F: FnMut(usize, usize)>(self, size: GridSize, mut visit: F) {
        trace!("walking a {}x{} grid in orientation {:?}", size, size, self);
        descend(self, size.side() as usize, (0, 0), &mut visit);
    }
}

/// Recursion over quadrants. `origin` is the lower-left corner of the
/// current `n x n` square.
fn descend<F: FnMut(usize, usize)>(
    orientation: Orientation,
    n: usize,
    origin: (usize, usize),
    visit: &mut F,
) {
    if n == 1 {
        visit(origin.0, origin.1);
        return;
    }

    let h = n / 2;
    let (di, dj) = orientation.entry();
    let mut corner = (origin.0 + di * h, origin.1 + dj * h);
    let moves = orientation.moves();
    for (k, &child) in orientation.children().iter().enumerate() {
        descend(child, h, corner, visit);
        if let Some(step) = moves.get(k) {
            corner = step.shift(corner, h);
        }
    }
}

/// Visit every cell of a `size` grid in curve order, calling `visit(i, j)`
/// with its row and column. The `k`-th call receives
/// `to_coordinates(k, size)`.
pub fn traverse<F: FnMut(usize, usize)>(size: GridSize, visit: F) {
    Orientation::H.walk(size, visit)
}

/// Copy the cells of `grid` into a vector, in curve order.
///
/// ```
/// use hilbert_order::{flatten, GridSize};
///
/// let grid = vec![vec![1, 2], vec![3, 4]];
/// let flat = flatten(GridSize::new(2).unwrap(), &grid).unwrap();
/// assert_eq!(flat, vec![1, 3, 4, 2]);
/// ```
pub fn flatten<T, G>(size: GridSize, grid: &G) -> Result<Vec<T>>
where
    G: Grid<T> + ?Sized,
{
    grid.check(size)?;

    let mut flat = Vec::with_capacity(size.cell_count());
    traverse(size, |i, j| flat.push(grid.cell(i, j)));
    debug_assert_eq!(flat.len(), size.cell_count());
    debug!("flattened {} cells in curve order", flat.len());
    Ok(flat)
}

/// Call `f(i, j, &flat[k])` for every cell, where `flat` holds the cells in
/// curve order as produced by [`flatten`] and `(i, j)` is the position of
/// its `k`-th element. `flat` is read strictly front to back.
pub fn apply<T, F>(size: GridSize, flat: &[T], mut f: F) -> Result<()>
where
    F: FnMut(usize, usize, &T),
{
    check_len("flattened grid", size.cell_count(), flat.len())?;

    let mut cursor = 0;
    traverse(size, |i, j| {
        f(i, j, &flat[cursor]);
        cursor += 1;
    });
    Ok(())
}

/// Matrix-vector product over a grid stored in curve order:
/// `out[i] += A[i][j] * v[j]` for every cell, where `flat` is the output of
/// [`flatten`] on `A`.
///
/// ```
/// use hilbert_order::{flatten, traverse_multiply_accumulate, GridSize};
///
/// let size = GridSize::new(2).unwrap();
/// let flat = flatten(size, &vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let mut out = vec![0; 2];
/// traverse_multiply_accumulate(size, &flat, &[1, 10], &mut out).unwrap();
/// assert_eq!(out, vec![21, 43]);
/// ```
pub fn traverse_multiply_accumulate<T>(
    size: GridSize,
    flat: &[T],
    v: &[T],
    out: &mut [T],
) -> Result<()>
where
    T: Copy + Mul<Output = T> + AddAssign,
{
    let side = size.side() as usize;
    check_len("vector", side, v.len())?;
    check_len("output", side, out.len())?;

    apply(size, flat, |i, j, &a| out[i] += a * v[j])?;
    debug!("curve-order product over {} cells", flat.len());
    Ok(())
}

/// Inverse of [`flatten`]: rebuild the row-major layout of a grid from its
/// cells in curve order.
pub fn unflatten<T>(size: GridSize, flat: &[T]) -> Result<Vec<T>>
where
    T: Clone + Default,
{
    check_len("flattened grid", size.cell_count(), flat.len())?;

    let side = size.side() as usize;
    let mut rows = vec![T::default(); size.cell_count()];
    apply(size, flat, |i, j, x| rows[i * side + j] = x.clone())?;
    debug!("unflattened {} cells into row-major order", rows.len());
    Ok(rows)
}
