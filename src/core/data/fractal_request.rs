use crate::core::colour::kinds::ColourStrategy;
use crate::core::data::depth::Depth;
use crate::core::data::palette::Palette;
use crate::core::fractals::cantor::config::CantorConfig;
use crate::core::fractals::emission::Emission;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::koch::config::KochConfig;
use crate::core::fractals::mandelbrot::config::MandelbrotConfig;
use crate::core::fractals::sierpinski::config::SierpinskiConfig;

/// Geometry and sampling for every kind; only the requested kind's entry is read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractalSettings {
    pub sierpinski: SierpinskiConfig,
    pub koch: KochConfig,
    pub cantor: CantorConfig,
    pub mandelbrot: MandelbrotConfig,
}

/// A complete parameter set for one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalRequest {
    pub kind: FractalKind,
    pub depth: Depth,
    pub palette: Palette,
    pub strategy: ColourStrategy,
    pub emission: Emission,
    pub settings: FractalSettings,
}

impl FractalRequest {
    /// Request with layered emission and the default geometry.
    #[must_use]
    pub fn new(
        kind: FractalKind,
        depth: Depth,
        palette: Palette,
        strategy: ColourStrategy,
    ) -> Self {
        Self {
            kind,
            depth,
            palette,
            strategy,
            emission: Emission::default(),
            settings: FractalSettings::default(),
        }
    }

    #[must_use]
    pub fn with_emission(mut self, emission: Emission) -> Self {
        self.emission = emission;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: FractalSettings) -> Self {
        self.settings = settings;
        self
    }
}
