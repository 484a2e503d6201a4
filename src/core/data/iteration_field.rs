use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_point::GridPoint;
use crate::core::errors::FractalError;
use crate::core::util::sample_to_complex_coords::sample_to_complex_coords;

/// Row-major grid of escape-time iteration counts plus the region it samples.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationField {
    width: u32,
    height: u32,
    bounds: ComplexRect,
    max_iterations: u32,
    data: Vec<u32>,
}

impl IterationField {
    pub(crate) fn from_data(
        bounds: ComplexRect,
        width: u32,
        height: u32,
        max_iterations: u32,
        data: Vec<u32>,
    ) -> Result<Self, FractalError> {
        if data.len() != width as usize * height as usize {
            return Err(FractalError::InvalidFieldSize { width, height });
        }

        Ok(Self {
            width,
            height,
            bounds,
            max_iterations,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn bounds(&self) -> ComplexRect {
        self.bounds
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.data.chunks(self.width as usize)
    }

    /// The complex value cell `(x, y)` was sampled at.
    #[must_use]
    pub fn sample_point(&self, x: u32, y: u32) -> Option<Complex> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(sample_to_complex_coords(
            GridPoint { x, y },
            self.width,
            self.height,
            self.bounds,
        ))
    }
}
