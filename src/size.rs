use crate::error::{CurveError, Result};
use crate::hilbert;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Side length of a square grid traversed along the Hilbert curve.
///
/// Always a power of two between `1` and `2^31`, so that every coordinate
/// fits in a `u32` and every curve index fits in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridSize {
    side: u32,
}

impl GridSize {
    pub const MAX_LOG2: u32 = 31;

    pub fn new(side: u32) -> Result<Self> {
        if side.is_power_of_two() {
            Ok(Self { side })
        } else {
            Err(CurveError::NotPowerOfTwo(side as u64))
        }
    }

    /// The grid of side `2^log2`, which is how problem sizes are usually given.
    pub fn from_log2(log2: u32) -> Result<Self> {
        if log2 > Self::MAX_LOG2 {
            return Err(CurveError::NotPowerOfTwo(
                1u64.checked_shl(log2).unwrap_or(std::u64::MAX),
            ));
        }
        Ok(Self { side: 1 << log2 })
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Number of cells, which is also the length of the curve.
    #[inline]
    pub fn cells(&self) -> u64 {
        self.side as u64 * self.side as u64
    }

    /// Number of cells as a slice length. Saturates on targets where the
    /// grid could not be allocated anyway.
    #[inline]
    pub(crate) fn cell_count(&self) -> usize {
        (self.side as usize).saturating_mul(self.side as usize)
    }

    /// Depth of the quadrant recursion, `log2(side)`.
    #[inline]
    pub fn levels(&self) -> u32 {
        self.side.trailing_zeros()
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.side && y < self.side
    }

    pub fn index_of(&self, x: u32, y: u32) -> Result<u64> {
        if !self.contains(x, y) {
            return Err(CurveError::CoordinateOutOfRange {
                x: x as u64,
                y: y as u64,
                side: self.side,
            });
        }
        Ok(hilbert::entangle(x, y, self.side))
    }

    pub fn coordinates_of(&self, index: u64) -> Result<(u32, u32)> {
        if index >= self.cells() {
            return Err(CurveError::IndexOutOfRange {
                index,
                side: self.side,
            });
        }
        Ok(hilbert::detangle(index, self.side))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side)
    }
}

impl TryFrom<u32> for GridSize {
    type Error = CurveError;

    fn try_from(side: u32) -> Result<Self> {
        Self::new(side)
    }
}

impl From<GridSize> for u32 {
    fn from(size: GridSize) -> u32 {
        size.side
    }
}

impl TryFrom<&str> for GridSize {
    type Error = CurveError;

    /// Accepts a plain side length (`"8192"`) or a power of two written as
    /// `"2^13"` or `"1<<13"`.
    fn try_from(value: &str) -> Result<Self> {
        use regex::Regex;
        let re_side = Regex::new(r"^\s*(\d+)\s*$").expect("problem building regex");
        let re_power =
            Regex::new(r"^\s*(?:2\s*\^|1\s*<<)\s*(\d+)\s*$").expect("problem building regex");

        if let Some(captures) = re_side.captures(value) {
            let digits = captures
                .get(1)
                .ok_or_else(|| CurveError::Parse("unable to get first capture".to_owned()))?
                .as_str();
            let side = digits.parse::<u32>().map_err(|e| {
                CurveError::Parse(format!("{:?} is not a side length: {}", digits, e))
            })?;
            return Self::new(side);
        }
        if let Some(captures) = re_power.captures(value) {
            let digits = captures
                .get(1)
                .ok_or_else(|| CurveError::Parse("unable to get first capture".to_owned()))?
                .as_str();
            let log2 = digits
                .parse::<u32>()
                .map_err(|e| CurveError::Parse(format!("{:?} is not an exponent: {}", digits, e)))?;
            return Self::from_log2(log2);
        }
        Err(CurveError::Parse(format!("unrecognized grid size {:?}", value)))
    }
}

impl FromStr for GridSize {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validation() {
        for k in 0..=31 {
            let size = GridSize::from_log2(k).unwrap();
            assert_eq!(size.side(), 1 << k);
            assert_eq!(size.levels(), k);
            assert_eq!(GridSize::new(1 << k), Ok(size));
        }
        assert_eq!(GridSize::new(0), Err(CurveError::NotPowerOfTwo(0)));
        assert_eq!(GridSize::new(12), Err(CurveError::NotPowerOfTwo(12)));
        assert_eq!(GridSize::from_log2(32), Err(CurveError::NotPowerOfTwo(1 << 32)));
        assert!(GridSize::from_log2(100).is_err());
    }

    #[test]
    fn test_cells() {
        let size = GridSize::from_log2(31).unwrap();
        assert_eq!(size.cells(), 1 << 62);
        assert_eq!(GridSize::new(1).unwrap().cells(), 1);
        assert_eq!(GridSize::new(8).unwrap().cell_count(), 64);
    }

    #[test]
    fn test_range_checks() {
        let size = GridSize::new(4).unwrap();
        assert!(size.contains(3, 3));
        assert!(!size.contains(4, 0));
        assert_eq!(size.index_of(1, 1), Ok(2));
        assert_eq!(size.coordinates_of(15), Ok((0, 3)));
        assert_eq!(
            size.index_of(0, 4),
            Err(CurveError::CoordinateOutOfRange { x: 0, y: 4, side: 4 })
        );
        assert_eq!(
            size.coordinates_of(16),
            Err(CurveError::IndexOutOfRange { index: 16, side: 4 })
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("8192".parse::<GridSize>(), GridSize::from_log2(13));
        assert_eq!("2^13".parse::<GridSize>(), GridSize::from_log2(13));
        assert_eq!(" 1 << 4 ".parse::<GridSize>(), GridSize::new(16));
        assert_eq!("6".parse::<GridSize>(), Err(CurveError::NotPowerOfTwo(6)));
        assert!(matches!("2^40".parse::<GridSize>(), Err(CurveError::NotPowerOfTwo(_))));
        assert!(matches!("eight".parse::<GridSize>(), Err(CurveError::Parse(_))));
        assert!(matches!("99999999999".parse::<GridSize>(), Err(CurveError::Parse(_))));
    }

    #[test]
    fn test_serde() -> anyhow::Result<()> {
        let size = GridSize::new(64)?;
        let encoded = bincode::serialize(&size)?;
        assert_eq!(encoded, bincode::serialize(&64u32)?);
        let decoded: GridSize = bincode::deserialize(&encoded)?;
        assert_eq!(decoded, size);

        let bogus = bincode::serialize(&48u32)?;
        assert!(bincode::deserialize::<GridSize>(&bogus).is_err());
        Ok(())
    }
}
