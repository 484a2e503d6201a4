use std::fmt;
use std::str::FromStr;

use crate::core::errors::FractalError;

/// How a palette is turned into per-level colours. Callers always pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourStrategy {
    /// `palette[depth % len]`, cycling through the anchors.
    DiscreteRepeat,
    /// HSV interpolation along the palette by `depth / max_depth`.
    ContinuousGradient,
}

impl ColourStrategy {
    pub const ALL: &'static [Self] = &[Self::ContinuousGradient, Self::DiscreteRepeat];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DiscreteRepeat => "Discrete repeat",
            Self::ContinuousGradient => "Continuous gradient",
        }
    }
}

impl fmt::Display for ColourStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourStrategy {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");

        match normalised.as_str() {
            "discrete" | "discrete repeat" | "repeat" => Ok(Self::DiscreteRepeat),
            "gradient" | "continuous gradient" | "continuous" => Ok(Self::ContinuousGradient),
            _ => Err(FractalError::UnknownColourStrategy {
                name: s.to_string(),
            }),
        }
    }
}
