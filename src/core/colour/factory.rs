use crate::core::colour::depth_colour_map::DepthColourMap;
use crate::core::colour::kinds::ColourStrategy;
use crate::core::colour::maps::continuous_gradient::ContinuousGradient;
use crate::core::colour::maps::discrete_repeat::DiscreteRepeat;
use crate::core::data::palette::Palette;

#[must_use]
pub fn depth_colour_map_factory(
    strategy: ColourStrategy,
    palette: Palette,
) -> Box<dyn DepthColourMap> {
    match strategy {
        ColourStrategy::DiscreteRepeat => Box::new(DiscreteRepeat::new(palette)),
        ColourStrategy::ContinuousGradient => Box::new(ContinuousGradient::new(palette)),
    }
}
