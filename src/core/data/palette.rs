use crate::core::data::colour::Colour;
use crate::core::errors::FractalError;

/// Ordered, non-empty list of anchor colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, FractalError> {
        if colours.is_empty() {
            return Err(FractalError::EmptyPalette);
        }

        Ok(Self { colours })
    }

    pub fn from_hex<S: AsRef<str>>(values: &[S]) -> Result<Self, FractalError> {
        let colours = values
            .iter()
            .map(|value| Colour::from_hex(value.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(colours)
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn first(&self) -> Colour {
        self.colours[0]
    }

    #[must_use]
    pub fn last(&self) -> Colour {
        self.colours[self.colours.len() - 1]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }
}
