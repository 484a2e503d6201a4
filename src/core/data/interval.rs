use crate::core::errors::{FractalError, ensure_finite};

/// Closed interval `[start, end]` on the horizontal axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Zero-length intervals are allowed; reversed ones are not.
    pub fn new(start: f64, end: f64) -> Result<Self, FractalError> {
        ensure_finite(start, "interval start")?;
        ensure_finite(end, "interval end")?;
        ensure_finite(end - start, "interval length")?;

        if start > end {
            return Err(FractalError::InvalidInterval { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// The outer thirds left after deleting the open middle third.
    #[must_use]
    pub fn split_thirds(&self) -> [Self; 2] {
        let third = self.length() / 3.0;
        [
            Self {
                start: self.start,
                end: self.start + third,
            },
            Self {
                start: self.start + 2.0 * third,
                end: self.end,
            },
        ]
    }
}

/// Checks that intervals are ordered left to right without overlapping.
/// Touching endpoints count as disjoint.
pub fn ensure_disjoint(intervals: &[Interval]) -> Result<(), FractalError> {
    if intervals.windows(2).any(|pair| pair[0].end > pair[1].start) {
        return Err(FractalError::OverlappingIntervals);
    }

    Ok(())
}
