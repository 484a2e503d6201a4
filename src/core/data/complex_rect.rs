use crate::core::data::complex::Complex;
use crate::core::errors::{FractalError, ensure_finite};

/// Axis-aligned region of the complex plane, `re_min..re_max` by `im_min..im_max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, FractalError> {
        ensure_finite(re_min, "re_min")?;
        ensure_finite(re_max, "re_max")?;
        ensure_finite(im_min, "im_min")?;
        ensure_finite(im_max, "im_max")?;

        let width = ensure_finite(re_max - re_min, "bounds width")?;
        let height = ensure_finite(im_max - im_min, "bounds height")?;

        if width <= 0.0 || height <= 0.0 {
            return Err(FractalError::InvalidBounds { width, height });
        }

        Ok(Self {
            min: Complex::new(re_min, im_min),
            max: Complex::new(re_max, im_max),
        })
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.max.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}
