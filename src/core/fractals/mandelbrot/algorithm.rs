use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_point::GridPoint;
use crate::core::errors::FractalError;
use crate::core::util::sample_to_complex_coords::sample_to_complex_coords;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z <- z^2 + c` steps taken from `z = 0` before `|z| > 2`,
/// or `max_iterations` if the orbit never escapes.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    bounds: ComplexRect,
    width: u32,
    height: u32,
    max_iterations: u32,
}

impl FieldAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = FractalError;

    fn compute(&self, cell: GridPoint) -> Result<Self::Success, Self::Failure> {
        if cell.x >= self.width || cell.y >= self.height {
            return Err(FractalError::CellOutsideGrid {
                x: cell.x,
                y: cell.y,
                width: self.width,
                height: self.height,
            });
        }

        let c = sample_to_complex_coords(cell, self.width, self.height, self.bounds);
        Ok(escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        bounds: ComplexRect,
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> Result<Self, FractalError> {
        if width == 0 || height == 0 {
            return Err(FractalError::InvalidFieldSize { width, height });
        }

        if max_iterations == 0 {
            return Err(FractalError::ZeroMaxIterations);
        }

        Ok(Self {
            bounds,
            width,
            height,
            max_iterations,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> ComplexRect {
        self.bounds
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
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_bounds() -> ComplexRect {
        ComplexRect::new(-2.5, 1.5, -2.0, 2.0).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        for max in [1, 2, 50, 1000] {
            assert_eq!(escape_time(Complex::ZERO, max), max);
        }
    }

    #[test]
    fn test_two_plus_two_i_escapes_after_one_step() {
        for max in [1, 2, 50] {
            assert_eq!(escape_time(Complex::new(2.0, 2.0), max), 1);
        }
    }

    #[test]
    fn test_minus_one_is_periodic() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 200), 200);
    }

    #[test]
    fn test_boundary_point_two_does_not_escape_on_magnitude_equal_two() {
        // z: 0, 2, 6 -> |2| is not > 2, so escape happens on the third check
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 10), 2);
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        let result = MandelbrotAlgorithm::new(classic_bounds(), 4, 4, 0);
        assert_eq!(result, Err(FractalError::ZeroMaxIterations));
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = MandelbrotAlgorithm::new(classic_bounds(), 0, 4, 50);
        assert_eq!(
            result,
            Err(FractalError::InvalidFieldSize {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn test_compute_rejects_cell_outside_grid() {
        let algorithm = MandelbrotAlgorithm::new(classic_bounds(), 4, 4, 50).unwrap();

        let result = algorithm.compute(GridPoint { x: 4, y: 0 });

        assert!(matches!(result, Err(FractalError::CellOutsideGrid { x: 4, .. })));
    }

    #[test]
    fn test_compute_samples_min_corner_first() {
        let algorithm = MandelbrotAlgorithm::new(classic_bounds(), 4, 4, 50).unwrap();

        let corner = algorithm.compute(GridPoint { x: 0, y: 0 }).unwrap();
        let cardioid = algorithm.compute(GridPoint { x: 2, y: 2 }).unwrap();

        assert!(corner < 5);
        assert_eq!(cardioid, 50);
    }
}
