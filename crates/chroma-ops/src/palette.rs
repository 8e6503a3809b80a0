//! Palette derivation via hue rotation.
//!
//! All palette functions rotate the hue of the input on the HSB view and
//! preserve saturation, brightness and alpha. The first element of every
//! returned array is the original color, and the order is stable, so
//! consumers can build position-stable palettes.
//!
//! | Function | Hue offsets (fractions of the circle) |
//! |---|---|
//! | [`complementary`] | +1/2 |
//! | [`analogous`] | 0, +1/12, -1/12 |
//! | [`split_complementary`] | 0, +5/12, -5/12 |
//! | [`triadic`] | 0, +1/3, -1/3 |
//! | [`tetradic`] | 0, +1/4, +1/2, +3/4 |
//! | [`square`] | 0, +1/4, +1/2, +3/4 |
//!
//! Offsets wrap around the color wheel modulo 1.0.

use chroma_core::Color;

/// Rotates the hue by `offset` (a fraction of the full circle).
#[inline]
fn rotated(color: Color, offset: f32) -> Color {
    color.with_hue(color.hue() + offset)
}

/// The color on the opposite side of the hue circle.
///
/// Applying this twice returns to the original hue.
///
/// # Example
///
/// ```rust
/// use chroma_core::Color;
/// use chroma_ops::palette::complementary;
///
/// let cyan = complementary(Color::RED);
/// assert!((cyan.hue() - 0.5).abs() < 1e-5);
/// ```
#[inline]
pub fn complementary(color: Color) -> Color {
    rotated(color, 0.5)
}

/// The color plus its two immediate neighbors on the wheel (+-1/12).
#[inline]
pub fn analogous(color: Color) -> [Color; 3] {
    [
        color,
        rotated(color, 1.0 / 12.0),
        rotated(color, -1.0 / 12.0),
    ]
}

/// The color plus the two neighbors of its complement (+-5/12).
#[inline]
pub fn split_complementary(color: Color) -> [Color; 3] {
    [
        color,
        rotated(color, 5.0 / 12.0),
        rotated(color, -5.0 / 12.0),
    ]
}

/// Three colors spaced evenly around the wheel (+-1/3).
#[inline]
pub fn triadic(color: Color) -> [Color; 3] {
    [color, rotated(color, 1.0 / 3.0), rotated(color, -1.0 / 3.0)]
}

/// Four colors at quarter-circle spacing.
#[inline]
pub fn tetradic(color: Color) -> [Color; 4] {
    [
        color,
        rotated(color, 0.25),
        rotated(color, 0.5),
        rotated(color, 0.75),
    ]
}

/// Four colors at equal quartering of the wheel.
///
/// Same offsets as [`tetradic`] by construction.
#[inline]
pub fn square(color: Color) -> [Color; 4] {
    tetradic(color)
}
