use std::fmt;
use std::str::FromStr;

use palette::{Hsv, IntoColor, Srgb};

use crate::core::errors::FractalError;

/// 8-bit RGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HsvComponents {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Colour {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, FractalError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || FractalError::InvalidHexColour {
            value: s.to_string(),
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as floats in `[0, 1]`.
    #[must_use]
    pub fn to_unit_rgb(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    #[must_use]
    pub fn to_hsv(self) -> HsvComponents {
        let rgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let hsv: Hsv = rgb.into_color();

        HsvComponents {
            hue: hsv.hue.into_positive_degrees(),
            saturation: hsv.saturation,
            value: hsv.value,
        }
    }

    #[must_use]
    pub fn from_hsv(components: HsvComponents) -> Self {
        let hsv = Hsv::new(
            components.hue,
            components.saturation.clamp(0.0, 1.0),
            components.value.clamp(0.0, 1.0),
        );
        let rgb: Srgb<f32> = hsv.into_color();

        Self::rgb(
            unit_to_channel(rgb.red),
            unit_to_channel(rgb.green),
            unit_to_channel(rgb.blue),
        )
    }

    /// Straight-line distance between two colours in unit RGB space.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let [r1, g1, b1] = self.to_unit_rgb();
        let [r2, g2, b2] = other.to_unit_rgb();
        ((r1 - r2).powi(2) + (g1 - g2).powi(2) + (b1 - b2).powi(2)).sqrt()
    }
}

fn unit_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Colour {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
