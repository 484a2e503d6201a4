use crate::core::colour::depth_colour_map::DepthColourMap;
use crate::core::colour::gradient::gradient_colour;
use crate::core::colour::kinds::ColourStrategy;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;

#[derive(Debug, Clone)]
pub struct ContinuousGradient {
    palette: Palette,
}

impl ContinuousGradient {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl DepthColourMap for ContinuousGradient {
    fn colour(&self, depth: u32, max_depth: u32) -> Colour {
        gradient_colour(&self.palette, depth, max_depth)
    }

    fn strategy(&self) -> ColourStrategy {
        ColourStrategy::ContinuousGradient
    }
}
