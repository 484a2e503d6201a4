use std::time::Instant;

use log::info;

use crate::core::actions::colourise_field::colourise_field::colourise_field;
use crate::core::actions::generate_fractal::generate;
use crate::core::colour::kinds::ColourStrategy;
use crate::core::colour::schemes::PaletteScheme;
use crate::core::data::colour::Colour;
use crate::core::data::depth::Depth;
use crate::core::data::fractal_output::FractalOutput;
use crate::core::data::fractal_request::{FractalRequest, FractalSettings};
use crate::core::data::iteration_field::IterationField;
use crate::core::errors::FractalError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::mandelbrot::colour_mapping::factory::iteration_colour_map_factory;

/// Runs every fractal kind once and logs a summary.
pub struct DemoController {
    depth: Depth,
    scheme: PaletteScheme,
    strategy: ColourStrategy,
    settings: FractalSettings,
    outputs: Vec<(FractalKind, FractalOutput)>,
}

impl DemoController {
    #[must_use]
    pub fn new(depth: Depth, scheme: PaletteScheme, strategy: ColourStrategy) -> Self {
        Self {
            depth,
            scheme,
            strategy,
            settings: FractalSettings::default(),
            outputs: Vec::new(),
        }
    }

    /// Replaces the default geometry, sampling and iteration colour map.
    #[must_use]
    pub fn with_settings(mut self, settings: FractalSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        info!(
            "Generating at depth {} with the {} palette ({})",
            self.depth, self.scheme, self.strategy
        );

        self.outputs.clear();

        for &kind in FractalKind::ALL {
            let request =
                FractalRequest::new(kind, self.depth, self.scheme.palette(), self.strategy)
                    .with_settings(self.settings);

            let start = Instant::now();
            let output = generate(&request)?;
            info!("{}: done in {:?}", kind, start.elapsed());

            self.outputs.push((kind, output));
        }

        Ok(())
    }

    pub fn summarise(&self) -> Result<(), Box<dyn std::error::Error>> {
        for (kind, output) in &self.outputs {
            match output {
                FractalOutput::Primitives(primitives) => {
                    info!("{}: {} primitives", kind, primitives.len());
                }
                FractalOutput::Field(field) => {
                    let inside = field
                        .data()
                        .iter()
                        .filter(|&&v| v == field.max_iterations())
                        .count();
                    let colours = self.colourise(field)?;

                    info!(
                        "{}: {}x{} field, {} samples inside the set, {} colours ({})",
                        kind,
                        field.width(),
                        field.height(),
                        inside,
                        colours.len(),
                        self.settings.mandelbrot.colour_map_kind
                    );
                }
            }
        }

        Ok(())
    }

    /// Colours a field with the iteration colour map chosen in the settings.
    pub fn colourise(&self, field: &IterationField) -> Result<Vec<Colour>, FractalError> {
        let kind = self.settings.mandelbrot.colour_map_kind;
        let colour_map = iteration_colour_map_factory(kind, field.max_iterations());

        colourise_field(field, &colour_map)
    }

    #[must_use]
    pub fn outputs(&self) -> &[(FractalKind, FractalOutput)] {
        &self.outputs
    }
}
