use crate::core::actions::colourise_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::IterationColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::{
    IterationColourMap, ensure_within_max,
};

/// Black through red, orange and yellow to white. Samples that never
/// escaped land on white, like a "hot" heat map.
#[derive(Debug)]
pub struct FireGradient {
    max_iterations: u32,
}

impl ColourMap<u32> for FireGradient {
    fn map(&self, iterations: u32) -> Result<Colour, FractalError> {
        ensure_within_max(iterations, self.max_iterations)?;

        let t = f64::from(iterations) / f64::from(self.max_iterations);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl IterationColourMap for FireGradient {
    fn kind(&self) -> IterationColourMapKind {
        IterationColourMapKind::FireGradient
    }
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
