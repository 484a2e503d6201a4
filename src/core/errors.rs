use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    InvalidDepth { depth: i64, max: u32 },
    EmptyPalette,
    NonFiniteInput { what: &'static str },
    InvalidSize { what: &'static str, value: f64 },
    InvalidBounds { width: f64, height: f64 },
    InvalidFieldSize { width: u32, height: u32 },
    ZeroMaxIterations,
    CellOutsideGrid { x: u32, y: u32, width: u32, height: u32 },
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
    InvalidInterval { start: f64, end: f64 },
    OverlappingIntervals,
    InvalidHexColour { value: String },
    UnknownFractalKind { name: String },
    UnknownPaletteScheme { name: String },
    UnknownColourStrategy { name: String },
    UnknownColourMap { name: String },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDepth { depth, max } => {
                write!(f, "depth {} is outside the supported range 0..={}", depth, max)
            }
            Self::EmptyPalette => write!(f, "palette must contain at least one colour"),
            Self::NonFiniteInput { what } => write!(f, "{} must be finite", what),
            Self::InvalidSize { what, value } => write!(f, "{} must not be {}", what, value),
            Self::InvalidBounds { width, height } => {
                write!(f, "complex rect size must be positive: {}x{}", width, height)
            }
            Self::InvalidFieldSize { width, height } => {
                write!(f, "iteration field size must be positive: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => write!(f, "Maximum iterations must be greater than zero"),
            Self::CellOutsideGrid {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "cell (x: {}, y: {}) is outside the {}x{} grid", x, y, width, height)
            }
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(f, "iterations {} exceeds maximum {}", iterations, max_iterations)
            }
            Self::InvalidInterval { start, end } => {
                write!(f, "interval start {} is greater than its end {}", start, end)
            }
            Self::OverlappingIntervals => {
                write!(f, "intervals must be sorted and must not overlap")
            }
            Self::InvalidHexColour { value } => write!(f, "invalid hex colour: {}", value),
            Self::UnknownFractalKind { name } => write!(f, "unknown fractal kind: {}", name),
            Self::UnknownPaletteScheme { name } => write!(f, "unknown palette scheme: {}", name),
            Self::UnknownColourStrategy { name } => write!(f, "unknown colour strategy: {}", name),
            Self::UnknownColourMap { name } => write!(f, "unknown colour map: {}", name),
        }
    }
}

impl Error for FractalError {}

/// Rejects NaN and infinite values before they reach any output.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64, FractalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FractalError::NonFiniteInput { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite_accepts_regular_values() {
        assert_eq!(ensure_finite(1.5, "x"), Ok(1.5));
        assert_eq!(ensure_finite(-0.0, "x"), Ok(-0.0));
    }

    #[test]
    fn test_ensure_finite_rejects_nan_and_infinity() {
        assert_eq!(
            ensure_finite(f64::NAN, "x coordinate"),
            Err(FractalError::NonFiniteInput { what: "x coordinate" })
        );
        assert_eq!(
            ensure_finite(f64::NEG_INFINITY, "re_min"),
            Err(FractalError::NonFiniteInput { what: "re_min" })
        );
    }

    #[test]
    fn test_display_messages() {
        let err = FractalError::InvalidDepth { depth: -1, max: 7 };
        assert_eq!(format!("{}", err), "depth -1 is outside the supported range 0..=7");

        let err = FractalError::NonFiniteInput { what: "size" };
        assert_eq!(format!("{}", err), "size must be finite");

        assert_eq!(
            format!("{}", FractalError::ZeroMaxIterations),
            "Maximum iterations must be greater than zero"
        );
    }
}
