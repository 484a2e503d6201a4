use crate::core::data::interval::Interval;
use crate::core::errors::FractalError;

const DEFAULT_START: f64 = -200.0;
const DEFAULT_LENGTH: f64 = 400.0;
const DEFAULT_Y: f64 = 100.0;
const DEFAULT_ROW_SPACING: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CantorConfig {
    pub start: f64,
    pub length: f64,
    /// Height of the first row.
    pub y: f64,
    /// Drop between consecutive rows.
    pub row_spacing: f64,
}

impl Default for CantorConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            length: DEFAULT_LENGTH,
            y: DEFAULT_Y,
            row_spacing: DEFAULT_ROW_SPACING,
        }
    }
}

impl CantorConfig {
    pub fn seed(&self) -> Result<Vec<Interval>, FractalError> {
        Ok(vec![Interval::new(self.start, self.start + self.length)?])
    }
}
