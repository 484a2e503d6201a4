use std::time::Instant;

use log::{debug, trace};

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_field::generate_field_parallel_rayon::{
    GenerateFieldError, generate_field_parallel_rayon, generate_field_parallel_rayon_cancelable,
};
use crate::core::actions::generate_field::generate_field_serial::generate_field_serial;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::iteration_field::IterationField;
use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Escape-time field over `bounds`, rows computed in parallel.
///
/// Bit-identical to [`mandelbrot_field_serial`] for the same arguments.
pub fn mandelbrot_field(
    bounds: ComplexRect,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Result<IterationField, FractalError> {
    let algorithm = MandelbrotAlgorithm::new(bounds, width, height, max_iterations)?;
    debug!("mandelbrot field {width}x{height}, max_iterations={max_iterations}");

    let started = Instant::now();
    let data = generate_field_parallel_rayon(width, height, &algorithm)?;
    trace!("mandelbrot field computed in {:?}", started.elapsed());

    IterationField::from_data(bounds, width, height, max_iterations, data)
}

pub fn mandelbrot_field_serial(
    bounds: ComplexRect,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Result<IterationField, FractalError> {
    let algorithm = MandelbrotAlgorithm::new(bounds, width, height, max_iterations)?;
    debug!("mandelbrot field (serial) {width}x{height}, max_iterations={max_iterations}");

    let started = Instant::now();
    let data = generate_field_serial(width, height, &algorithm)?;
    trace!("mandelbrot field (serial) computed in {:?}", started.elapsed());

    IterationField::from_data(bounds, width, height, max_iterations, data)
}

/// Like [`mandelbrot_field`] but abandons the work once `cancel` fires.
pub fn mandelbrot_field_cancelable<C: CancelToken>(
    bounds: ComplexRect,
    width: u32,
    height: u32,
    max_iterations: u32,
    cancel: &C,
) -> Result<IterationField, GenerateFieldError<FractalError>> {
    let algorithm = MandelbrotAlgorithm::new(bounds, width, height, max_iterations)
        .map_err(GenerateFieldError::Algorithm)?;
    debug!("mandelbrot field (cancelable) {width}x{height}, max_iterations={max_iterations}");

    let started = Instant::now();
    let data = generate_field_parallel_rayon_cancelable(width, height, &algorithm, cancel)?;
    trace!("mandelbrot field (cancelable) computed in {:?}", started.elapsed());

    IterationField::from_data(bounds, width, height, max_iterations, data)
        .map_err(GenerateFieldError::Algorithm)
}
