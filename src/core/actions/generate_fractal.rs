use log::debug;

use crate::core::colour::depth_colour_map::DepthColourMap;
use crate::core::colour::factory::depth_colour_map_factory;
use crate::core::data::fractal_output::FractalOutput;
use crate::core::data::fractal_request::FractalRequest;
use crate::core::errors::FractalError;
use crate::core::fractals::cantor::generator::cantor;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::koch::generator::koch_snowflake;
use crate::core::fractals::mandelbrot::config::max_iterations_for_depth;
use crate::core::fractals::mandelbrot::field::mandelbrot_field;
use crate::core::fractals::sierpinski::generator::sierpinski;

/// Runs one complete generation. Nothing is remembered between calls.
pub fn generate(request: &FractalRequest) -> Result<FractalOutput, FractalError> {
    let settings = &request.settings;

    let output = match request.kind {
        FractalKind::Sierpinski => FractalOutput::Primitives(
            sierpinski(
                settings.sierpinski.triangle,
                request.depth,
                colours(request),
                request.emission,
            )?
            .collect(),
        ),
        FractalKind::Koch => FractalOutput::Primitives(
            koch_snowflake(
                settings.koch.centre,
                settings.koch.size,
                request.depth,
                colours(request),
                request.emission,
            )?
            .into_iter()
            .collect(),
        ),
        FractalKind::Cantor => FractalOutput::Primitives(
            cantor(
                settings.cantor.seed()?,
                settings.cantor.y,
                settings.cantor.row_spacing,
                request.depth,
                colours(request),
                request.emission,
            )?
            .collect(),
        ),
        FractalKind::Mandelbrot => {
            let config = &settings.mandelbrot;
            let max_iterations = max_iterations_for_depth(request.depth);

            FractalOutput::Field(mandelbrot_field(
                config.region,
                config.width,
                config.height,
                max_iterations,
            )?)
        }
    };

    debug!(
        "generated {} at depth {}: {}",
        request.kind,
        request.depth,
        describe(&output)
    );

    Ok(output)
}

fn colours(request: &FractalRequest) -> Box<dyn DepthColourMap> {
    depth_colour_map_factory(request.strategy, request.palette.clone())
}

fn describe(output: &FractalOutput) -> String {
    match output {
        FractalOutput::Primitives(primitives) => format!("{} primitives", primitives.len()),
        FractalOutput::Field(field) => format!("{}x{} field", field.width(), field.height()),
    }
}
