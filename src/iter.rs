//! Iterative rendition of the quadrant traversal.
//!
//! The curve is generated by rewriting orientations into
//! `child, move, child, move, child, move, child` until the deepest level,
//! where every move is a single-cell step. Keeping the pending symbols on an
//! explicit stack turns the recursion into an iterator that can be paused
//! between cells and zipped with other sequences.

use crate::size::GridSize;
use crate::traversal::{Orientation, Step};
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy)]
enum Symbol {
    /// A whole sub-curve of side `2^level`.
    Curve(Orientation, u32),
    Move(Step),
}

/// Iterator over the `(row, column)` cells of a grid in curve order.
///
/// Yields the same sequence as [`crate::traverse`].
///
/// ```
/// use hilbert_order::{CurveIter, GridSize};
///
/// let cells: Vec<_> = CurveIter::new(GridSize::new(2).unwrap()).collect();
/// assert_eq!(cells, vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct CurveIter {
    stack: Vec<Symbol>,
    position: (usize, usize),
    remaining: usize,
    started: bool,
}

impl CurveIter {
    pub fn new(size: GridSize) -> Self {
        let mut stack = Vec::with_capacity(6 * size.levels() as usize + 1);
        stack.push(Symbol::Curve(Orientation::H, size.levels()));
        Self {
            stack,
            position: (0, 0),
            remaining: size.cell_count(),
            started: false,
        }
    }
}

impl Iterator for CurveIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            // The curve starts at the origin before any move.
            self.started = true;
            self.remaining -= 1;
            return Some(self.position);
        }

        while let Some(symbol) = self.stack.pop() {
            match symbol {
                Symbol::Curve(_, 0) => {}
                Symbol::Curve(orientation, level) => {
                    let children = orientation.children();
                    let moves = orientation.moves();
                    self.stack.push(Symbol::Curve(children[3], level - 1));
                    for k in (0..3).rev() {
                        self.stack.push(Symbol::Move(moves[k]));
                        self.stack.push(Symbol::Curve(children[k], level - 1));
                    }
                }
                Symbol::Move(step) => {
                    self.position = step.shift(self.position, 1);
                    self.remaining -= 1;
                    return Some(self.position);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CurveIter {}

impl FusedIterator for CurveIter {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traversal::traverse;

    #[test]
    fn test_same_order_as_recursion() {
        for log2 in 0..=7 {
            let size = GridSize::from_log2(log2).unwrap();
            let mut expected = Vec::new();
            traverse(size, |i, j| expected.push((i, j)));
            let actual: Vec<_> = CurveIter::new(size).collect();
            assert_eq!(actual, expected, "side {}", size);
        }
    }

    #[test]
    fn test_exact_length() {
        let size = GridSize::new(16).unwrap();
        let mut iter = CurveIter::new(size);
        assert_eq!(iter.len(), 256);
        for remaining in (0..256).rev() {
            assert!(iter.next().is_some());
            assert_eq!(iter.len(), remaining);
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_single_cell() {
        let cells: Vec<_> = CurveIter::new(GridSize::new(1).unwrap()).collect();
        assert_eq!(cells, vec![(0, 0)]);
    }

    #[test]
    fn test_zip_with_flattened_cells() -> anyhow::Result<()> {
        let size = GridSize::new(8)?;
        let grid: Vec<Vec<usize>> = (0..8).map(|i| (0..8).map(|j| 8 * i + j).collect()).collect();
        let flat = crate::flatten(size, &grid)?;
        for ((i, j), value) in CurveIter::new(size).zip(flat) {
            assert_eq!(value, 8 * i + j);
        }
        Ok(())
    }
}
