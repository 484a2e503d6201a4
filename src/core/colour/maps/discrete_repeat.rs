use crate::core::colour::depth_colour_map::DepthColourMap;
use crate::core::colour::kinds::ColourStrategy;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;

#[derive(Debug, Clone)]
pub struct DiscreteRepeat {
    palette: Palette,
}

impl DiscreteRepeat {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl DepthColourMap for DiscreteRepeat {
    fn colour(&self, depth: u32, _max_depth: u32) -> Colour {
        self.palette.colours()[depth as usize % self.palette.len()]
    }

    fn strategy(&self) -> ColourStrategy {
        ColourStrategy::DiscreteRepeat
    }
}
