use crate::core::actions::colourise_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::IterationColourMapKind;

pub trait IterationColourMap: ColourMap<u32> + Send + Sync {
    fn kind(&self) -> IterationColourMapKind;
}

impl ColourMap<u32> for Box<dyn IterationColourMap> {
    fn map(&self, value: u32) -> Result<Colour, FractalError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

pub(crate) fn ensure_within_max(iterations: u32, max_iterations: u32) -> Result<(), FractalError> {
    if iterations > max_iterations {
        return Err(FractalError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(())
}
