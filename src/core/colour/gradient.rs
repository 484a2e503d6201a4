use crate::core::data::colour::{Colour, HsvComponents};
use crate::core::data::palette::Palette;

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolates `palette` at `depth / max_depth` through HSV space.
///
/// Hue, saturation and value are interpolated independently. Hue does not
/// wrap around 360°, so red to magenta sweeps through green and blue.
/// Positions that land exactly on a palette entry return that entry
/// unchanged; `depth` beyond `max_depth` clamps to the last entry.
#[must_use]
pub fn gradient_colour(palette: &Palette, depth: u32, max_depth: u32) -> Colour {
    if max_depth == 0 || palette.len() == 1 {
        return palette.first();
    }

    let steps = (palette.len() - 1) as f64;
    let position = f64::from(depth.min(max_depth)) * steps / f64::from(max_depth);
    let lower_index = position.floor() as usize;
    let fraction = position - lower_index as f64;
    let lower = palette.colours()[lower_index];

    if fraction == 0.0 {
        return lower;
    }

    let upper = palette.colours()[(lower_index + 1).min(palette.len() - 1)];
    let from = lower.to_hsv();
    let to = upper.to_hsv();
    let fraction = fraction as f32;

    Colour::from_hsv(HsvComponents {
        hue: lerp(from.hue, to.hue, fraction),
        saturation: lerp(from.saturation, to.saturation, fraction),
        value: lerp(from.value, to.value, fraction),
    })
}
