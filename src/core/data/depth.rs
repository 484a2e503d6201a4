use std::fmt;

use crate::core::errors::FractalError;

/// Validated recursion depth.
///
/// Output size grows as `b^depth` for a branching factor `b` (3 for
/// Sierpinski and Cantor, 4 for Koch), so the upper bound is the only
/// guard against runaway output: depth 7 already means 16384 Koch leaves
/// per side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(u32);

impl Depth {
    pub const MAX: u32 = 7;
    pub const ZERO: Self = Self(0);

    /// Fails with [`FractalError::InvalidDepth`] for negative values or
    /// values above [`Depth::MAX`]. Out-of-range input is never clamped.
    pub fn new(depth: i64) -> Result<Self, FractalError> {
        if depth < 0 || depth > i64::from(Self::MAX) {
            return Err(FractalError::InvalidDepth {
                depth,
                max: Self::MAX,
            });
        }

        Ok(Self(depth as u32))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Depth {
    type Error = FractalError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        Self::new(depth)
    }
}

impl TryFrom<i32> for Depth {
    type Error = FractalError;

    fn try_from(depth: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(depth))
    }
}

impl TryFrom<u32> for Depth {
    type Error = FractalError;

    fn try_from(depth: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(depth))
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
