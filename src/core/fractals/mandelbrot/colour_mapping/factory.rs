use crate::core::fractals::mandelbrot::colour_mapping::kinds::IterationColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::IterationColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::blue_white_gradient::BlueWhiteGradient;
use crate::core::fractals::mandelbrot::colour_mapping::maps::fire_gradient::FireGradient;

#[must_use]
pub fn iteration_colour_map_factory(
    kind: IterationColourMapKind,
    max_iterations: u32,
) -> Box<dyn IterationColourMap> {
    match kind {
        IterationColourMapKind::FireGradient => Box::new(FireGradient::new(max_iterations)),
        IterationColourMapKind::BlueWhiteGradient => {
            Box::new(BlueWhiteGradient::new(max_iterations))
        }
    }
}
