use crate::core::colour::kinds::ColourStrategy;
use crate::core::data::colour::Colour;

/// Chooses the colour a geometric generator paints a level with.
///
/// `depth` is the remaining recursion depth of the level being emitted and
/// `max_depth` the depth the generation started from.
pub trait DepthColourMap: Send + Sync {
    fn colour(&self, depth: u32, max_depth: u32) -> Colour;

    fn strategy(&self) -> ColourStrategy;
}

impl DepthColourMap for Box<dyn DepthColourMap> {
    fn colour(&self, depth: u32, max_depth: u32) -> Colour {
        (**self).colour(depth, max_depth)
    }

    fn strategy(&self) -> ColourStrategy {
        (**self).strategy()
    }
}

impl<M: DepthColourMap + ?Sized> DepthColourMap for &M {
    fn colour(&self, depth: u32, max_depth: u32) -> Colour {
        (**self).colour(depth, max_depth)
    }

    fn strategy(&self) -> ColourStrategy {
        (**self).strategy()
    }
}
