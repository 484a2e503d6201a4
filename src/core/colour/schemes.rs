use std::fmt;
use std::str::FromStr;

use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::errors::FractalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteScheme {
    #[default]
    Vibrant,
    Ocean,
    Sunset,
    Forest,
    Fire,
    Pastel,
    Rainbow,
    Blues,
    Greens,
    Reds,
    Purples,
}

const fn hex(value: u32) -> Colour {
    Colour::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

const VIBRANT: [Colour; 7] = [
    hex(0xe74c3c),
    hex(0xf39c12),
    hex(0xf1c40f),
    hex(0x2ecc71),
    hex(0x3498db),
    hex(0x9b59b6),
    hex(0xe91e63),
];
const OCEAN: [Colour; 7] = [
    hex(0x1abc9c),
    hex(0x16a085),
    hex(0x3498db),
    hex(0x2980b9),
    hex(0x34495e),
    hex(0x2c3e50),
    hex(0x95a5a6),
];
const SUNSET: [Colour; 7] = [
    hex(0xff7675),
    hex(0xfd79a8),
    hex(0xfdcb6e),
    hex(0xe17055),
    hex(0xd63031),
    hex(0x74b9ff),
    hex(0x0984e3),
];
const FOREST: [Colour; 7] = [
    hex(0x00b894),
    hex(0x00cec9),
    hex(0x55a3ff),
    hex(0x74b9ff),
    hex(0xa29bfe),
    hex(0x6c5ce7),
    hex(0xfd79a8),
];
const FIRE: [Colour; 7] = [
    hex(0xff6b6b),
    hex(0xffa726),
    hex(0xffca28),
    hex(0x66bb6a),
    hex(0x42a5f5),
    hex(0xab47bc),
    hex(0xef5350),
];
const PASTEL: [Colour; 7] = [
    hex(0xff9ff3),
    hex(0x54a0ff),
    hex(0x5f27cd),
    hex(0x00d2d3),
    hex(0xff9f43),
    hex(0x10ac84),
    hex(0xee5a24),
];
const RAINBOW: [Colour; 7] = [
    hex(0xff0000),
    hex(0xff7f00),
    hex(0xffff00),
    hex(0x00ff00),
    hex(0x0000ff),
    hex(0x4b0082),
    hex(0x9400d3),
];
const BLUES: [Colour; 5] = [
    hex(0x1f77b4),
    hex(0xaec7e8),
    hex(0xff7f0e),
    hex(0xffbb78),
    hex(0x2ca02c),
];
const GREENS: [Colour; 5] = [
    hex(0x2ca02c),
    hex(0x98df8a),
    hex(0xd62728),
    hex(0xff9896),
    hex(0x9467bd),
];
const REDS: [Colour; 5] = [
    hex(0xd62728),
    hex(0xff9896),
    hex(0x9467bd),
    hex(0xc5b0d5),
    hex(0x8c564b),
];
const PURPLES: [Colour; 5] = [
    hex(0x9467bd),
    hex(0xc5b0d5),
    hex(0x8c564b),
    hex(0xc49c94),
    hex(0xe377c2),
];

impl PaletteScheme {
    pub const ALL: &'static [Self] = &[
        Self::Vibrant,
        Self::Ocean,
        Self::Sunset,
        Self::Forest,
        Self::Fire,
        Self::Pastel,
        Self::Rainbow,
        Self::Blues,
        Self::Greens,
        Self::Reds,
        Self::Purples,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Vibrant => "Vibrant",
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
            Self::Forest => "Forest",
            Self::Fire => "Fire",
            Self::Pastel => "Pastel",
            Self::Rainbow => "Rainbow",
            Self::Blues => "Blues",
            Self::Greens => "Greens",
            Self::Reds => "Reds",
            Self::Purples => "Purples",
        }
    }

    #[must_use]
    pub const fn colours(self) -> &'static [Colour] {
        match self {
            Self::Vibrant => &VIBRANT,
            Self::Ocean => &OCEAN,
            Self::Sunset => &SUNSET,
            Self::Forest => &FOREST,
            Self::Fire => &FIRE,
            Self::Pastel => &PASTEL,
            Self::Rainbow => &RAINBOW,
            Self::Blues => &BLUES,
            Self::Greens => &GREENS,
            Self::Reds => &REDS,
            Self::Purples => &PURPLES,
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        Palette::new(self.colours().to_vec()).expect("built-in schemes are non-empty")
    }
}

impl fmt::Display for PaletteScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for PaletteScheme {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FractalError::UnknownPaletteScheme {
                name: s.to_string(),
            })
    }
}
