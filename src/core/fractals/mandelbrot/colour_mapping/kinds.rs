use std::str::FromStr;

use crate::core::errors::FractalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IterationColourMapKind {
    #[default]
    FireGradient,
    BlueWhiteGradient,
}

impl IterationColourMapKind {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }
}

impl std::fmt::Display for IterationColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for IterationColourMapKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(wanted))
            .or(match wanted.to_ascii_lowercase().as_str() {
                "fire" | "hot" => Some(Self::FireGradient),
                "blue-white" | "bluewhite" => Some(Self::BlueWhiteGradient),
                _ => None,
            })
            .ok_or_else(|| FractalError::UnknownColourMap {
                name: s.to_string(),
            })
    }
}
