use crate::core::actions::colourise_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::IterationColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    IterationColourMap, ensure_within_max,
};

#[derive(Debug)]
pub struct BlueWhiteGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for BlueWhiteGradient {
    fn map(&self, iterations: u32) -> Result<Colour, FractalError> {
        ensure_within_max(iterations, self.max_iterations)?;

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(iterations) / f64::from(self.max_iterations);
        let u = 1.0 - t;

        let r = (9.0 * u * t * t * t * 255.0) as u8;
        let g = (15.0 * u * u * t * t * 255.0) as u8;
        let b = (8.5 * u * u * u * t * 255.0) as u8;

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IterationColourMap for BlueWhiteGradient {
    fn kind(&self) -> IterationColourMapKind {
        IterationColourMapKind::BlueWhiteGradient
    }
}

impl BlueWhiteGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
