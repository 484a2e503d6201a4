mod controllers;
mod core;

pub use controllers::demo::DemoController;

pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_SAMPLES, CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::colourise_field::colourise_field::{
    ColouriseFieldError, colourise_field, colourise_field_cancelable,
};
pub use crate::core::actions::colourise_field::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_field::generate_field_parallel_rayon::{
    GenerateFieldError, generate_field_parallel_rayon, generate_field_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_field::generate_field_serial::generate_field_serial;
pub use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
pub use crate::core::actions::generate_fractal::generate;

pub use crate::core::colour::depth_colour_map::DepthColourMap;
pub use crate::core::colour::factory::depth_colour_map_factory;
pub use crate::core::colour::gradient::gradient_colour;
pub use crate::core::colour::kinds::ColourStrategy;
pub use crate::core::colour::maps::continuous_gradient::ContinuousGradient;
pub use crate::core::colour::maps::discrete_repeat::DiscreteRepeat;
pub use crate::core::colour::schemes::PaletteScheme;

pub use crate::core::data::colour::{Colour, HsvComponents};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRect;
pub use crate::core::data::depth::Depth;
pub use crate::core::data::fractal_output::FractalOutput;
pub use crate::core::data::fractal_request::{FractalRequest, FractalSettings};
pub use crate::core::data::grid_point::GridPoint;
pub use crate::core::data::interval::{Interval, ensure_disjoint};
pub use crate::core::data::iteration_field::IterationField;
pub use crate::core::data::palette::Palette;
pub use crate::core::data::point::Point;
pub use crate::core::data::primitive::Primitive;

pub use crate::core::errors::FractalError;

pub use crate::core::fractals::cantor::config::CantorConfig;
pub use crate::core::fractals::cantor::generator::{CantorRows, cantor};
pub use crate::core::fractals::emission::Emission;
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::core::fractals::koch::config::KochConfig;
pub use crate::core::fractals::koch::generator::{
    KochSegments, KochSnowflake, koch_curve, koch_snowflake,
};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::iteration_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::IterationColourMapKind;
pub use crate::core::fractals::mandelbrot::colour_mapping::map::IterationColourMap;
pub use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    blue_white_gradient::BlueWhiteGradient, fire_gradient::FireGradient,
};
pub use crate::core::fractals::mandelbrot::config::{MandelbrotConfig, max_iterations_for_depth};
pub use crate::core::fractals::mandelbrot::field::{
    mandelbrot_field, mandelbrot_field_cancelable, mandelbrot_field_serial,
};
pub use crate::core::fractals::sierpinski::config::SierpinskiConfig;
pub use crate::core::fractals::sierpinski::generator::{SierpinskiTriangles, sierpinski};
pub use crate::core::fractals::style::{
    cantor_line_width, cantor_opacity, koch_line_width, koch_opacity, level_scale,
    sierpinski_opacity,
};

pub use crate::core::util::geometry::{equilateral_apex, lerp_point, midpoint, signed_area};
pub use crate::core::util::sample_to_complex_coords::sample_to_complex_coords;
