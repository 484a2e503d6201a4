use crate::core::data::colour::Colour;
use crate::core::errors::FractalError;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, FractalError>;

    fn display_name(&self) -> &str;
}
