use std::fmt;
use std::str::FromStr;

use crate::core::errors::FractalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Sierpinski,
    Koch,
    Cantor,
    Mandelbrot,
}

impl FractalKind {
    pub const ALL: &'static [Self] =
        &[Self::Sierpinski, Self::Koch, Self::Cantor, Self::Mandelbrot];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sierpinski => "Sierpinski Triangle",
            Self::Koch => "Koch Snowflake",
            Self::Cantor => "Cantor Set",
            Self::Mandelbrot => "Mandelbrot Set",
        }
    }

    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Sierpinski => "sierpinski",
            Self::Koch => "koch",
            Self::Cantor => "cantor",
            Self::Mandelbrot => "mandelbrot",
        }
    }

    /// Geometric kinds emit primitives; the rest produce an iteration field.
    #[must_use]
    pub const fn is_geometric(self) -> bool {
        !matches!(self, Self::Mandelbrot)
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.short_name().eq_ignore_ascii_case(wanted)
                    || kind.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| FractalError::UnknownFractalKind {
                name: s.to_string(),
            })
    }
}
