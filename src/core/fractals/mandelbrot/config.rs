use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::depth::Depth;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::IterationColourMapKind;

const DEFAULT_RE_MIN: f64 = -2.5;
const DEFAULT_RE_MAX: f64 = 1.5;
const DEFAULT_IM_MIN: f64 = -2.0;
const DEFAULT_IM_MAX: f64 = 2.0;
const DEFAULT_WIDTH: u32 = 400;
const DEFAULT_HEIGHT: u32 = 400;

const MIN_MAX_ITERATIONS: u32 = 50;
const ITERATIONS_PER_DEPTH: u32 = 30;
const BASE_ITERATIONS: u32 = 20;

pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::new(DEFAULT_RE_MIN, DEFAULT_RE_MAX, DEFAULT_IM_MIN, DEFAULT_IM_MAX)
        .expect("default fractal region is valid")
}

/// Iteration budget for a depth slider position: `max(50, depth * 30 + 20)`.
#[must_use]
pub fn max_iterations_for_depth(depth: Depth) -> u32 {
    (depth.get() * ITERATIONS_PER_DEPTH + BASE_ITERATIONS).max(MIN_MAX_ITERATIONS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
    pub width: u32,
    pub height: u32,
    pub colour_map_kind: IterationColourMapKind,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colour_map_kind: IterationColourMapKind::default(),
        }
    }
}
