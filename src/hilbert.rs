//! Conversion between grid coordinates and positions along the Hilbert curve.
//!
//! The curve is scaled and discretized so that the indices `{0, ..., n^2 - 1}`
//! map onto the coordinates `{0, ..., n-1} x {0, ..., n-1}`. A square is
//! split into subsquares numbered
//!
//! ```text
//!   1 | 2
//!   -----
//!   0 | 3
//! ```
//!
//! and each subsquare is an affine copy (a rotation and/or reflection followed
//! by a shift) of the whole curve. Writing the index in base 4 gives the
//! subsquare chosen at every level, most significant digit first.

use crate::error::Result;
use crate::size::GridSize;

/// Convert a coordinate to its index along the curve.
///
/// `n` must be a power of two and `x`, `y` must be smaller than `n`.
///
/// ```
/// assert_eq!(hilbert_order::to_hilbert_index(3, 1, 4).unwrap(), 6);
/// ```
pub fn to_hilbert_index(x: u32, y: u32, n: u32) -> Result<u64> {
    GridSize::new(n)?.index_of(x, y)
}

/// Convert an index along the curve to its coordinate.
///
/// `n` must be a power of two and `index` must be smaller than `n * n`.
///
/// ```
/// assert_eq!(hilbert_order::to_coordinates(6, 4).unwrap(), (3, 1));
/// ```
pub fn to_coordinates(index: u64, n: u32) -> Result<(u32, u32)> {
    GridSize::new(n)?.coordinates_of(index)
}

/// Subsquare containing a point, given whether it lies in the upper half of
/// each axis at the current scale.
///
/// ```text
/// bit_x | bit_y | subsquare
/// ------+-------+----------
///     0 |     0 |   00 = 0
///     0 |     1 |   11 = 3
///     1 |     0 |   01 = 1
///     1 |     1 |   10 = 2
/// ```
///
/// The low bit is the xor of the inputs and the high bit is `bit_y`.
#[inline(always)]
fn subsquare(bit_x: u32, bit_y: u32) -> u32 {
    (bit_y << 1) | (bit_x ^ bit_y)
}

/// Unchecked coordinate to index conversion; callers validate the ranges.
#[inline]
pub(crate) fn entangle(mut x: u32, mut y: u32, n: u32) -> u64 {
    debug_assert!(n.is_power_of_two());
    debug_assert!(x < n && y < n);

    let mut index = 0u64;
    // Both the level of recursion and the side of one subsquare.
    let mut side_length = n / 2;
    while side_length > 0 {
        let bit_x = ((x & side_length) != 0) as u32;
        let bit_y = ((y & side_length) != 0) as u32;
        let q = subsquare(bit_x, bit_y);

        // Bring the point back into the frame of the whole curve.
        match q {
            0 => std::mem::swap(&mut x, &mut y),
            1 => x -= side_length,
            2 => {
                x -= side_length;
                y -= side_length;
            }
            _ => {
                let t = 2 * side_length - 1 - y;
                y = side_length - 1 - x;
                x = t;
            }
        }

        // Each subsquare we skip holds side_length^2 points of the curve.
        let block = side_length as u64 * side_length as u64;
        index += q as u64 * block;
        side_length >>= 1;
    }

    index
}

/// Unchecked index to coordinate conversion; callers validate the ranges.
///
/// The transform of the least significant base-4 digit is applied first,
/// growing the point outwards one level at a time.
#[inline]
pub(crate) fn detangle(mut index: u64, n: u32) -> (u32, u32) {
    debug_assert!(n.is_power_of_two());
    debug_assert!(index < n as u64 * n as u64);

    let (mut i, mut j) = (0u32, 0u32);
    let mut side_length = 1u32;
    while side_length < n {
        match index & 3 {
            0 => std::mem::swap(&mut i, &mut j),
            1 => i += side_length,
            2 => {
                i += side_length;
                j += side_length;
            }
            _ => {
                let t = side_length - 1 - j;
                j = 2 * side_length - 1 - i;
                i = t;
            }
        }

        index >>= 2;
        side_length <<= 1;
    }

    (i, j)
}
