//! The immutable [`Color`] value type.
//!
//! A `Color` stores normalized RGBA channels; the HSB view is derived on
//! demand through [`crate::convert`], so there are no caches and no interior
//! mutability. Every transformation returns a new value.
//!
//! # Pattern-based colors
//!
//! A color can be backed by a tiled image pattern instead of solid channel
//! values (see [`Color::pattern`]). Such colors report zero for every RGB and
//! HSB component and pass through math operations as zeros; callers that need
//! real component data should check [`Color::is_pattern_based`] first.

use crate::convert::{hsb_to_rgb, rgb_to_hsb};
use crate::math::{clamp_unit, wrap_hue};
use std::fmt;

// ============================================================================
// WCAG Relative Luminance Constants
// ============================================================================

/// WCAG luminance coefficient for the red channel.
///
/// Used in the relative luminance formula
/// `L = 0.2126*R + 0.7152*G + 0.0722*B` over linearized channels.
pub const WCAG_LUMA_R: f32 = 0.2126;

/// WCAG luminance coefficient for the green channel.
pub const WCAG_LUMA_G: f32 = 0.7152;

/// WCAG luminance coefficient for the blue channel.
pub const WCAG_LUMA_B: f32 = 0.0722;

/// Linearizes a gamma-encoded channel for luminance computation.
///
/// # Formula
///
/// ```text
/// if C <= 0.03928:
///     L = C / 12.92
/// else:
///     L = ((C + 0.055) / 1.055)^2.4
/// ```
#[inline]
fn linearize(channel: f32) -> f32 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// An immutable color with RGB and HSB views of the same value.
///
/// Channels are stored as normalized `f32` in [0.0, 1.0] and clamped at
/// construction; the HSB components (hue as angle/360 in [0, 1), saturation
/// and brightness in [0, 1]) are computed from RGB on access.
///
/// # Example
///
/// ```rust
/// use chroma_core::Color;
///
/// let c = Color::from_hsb(0.5, 1.0, 1.0, 1.0); // pure cyan
/// assert_eq!(c.components(), [0.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
    pattern: bool,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::solid(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::solid(1.0, 1.0, 1.0, 1.0);
    /// Opaque mid gray.
    pub const GRAY: Color = Color::solid(0.5, 0.5, 0.5, 1.0);
    /// Opaque dark gray (one third white).
    pub const DARK_GRAY: Color = Color::solid(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);
    /// Opaque light gray (two thirds white).
    pub const LIGHT_GRAY: Color = Color::solid(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);
    /// Opaque red.
    pub const RED: Color = Color::solid(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Color = Color::solid(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::solid(0.0, 0.0, 1.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Color = Color::solid(0.0, 1.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Color = Color::solid(1.0, 1.0, 0.0, 1.0);
    /// Opaque magenta.
    pub const MAGENTA: Color = Color::solid(1.0, 0.0, 1.0, 1.0);
    /// Opaque orange.
    pub const ORANGE: Color = Color::solid(1.0, 0.5, 0.0, 1.0);
    /// Opaque purple.
    pub const PURPLE: Color = Color::solid(0.5, 0.0, 0.5, 1.0);
    /// Opaque brown.
    pub const BROWN: Color = Color::solid(0.6, 0.4, 0.2, 1.0);
    /// Fully transparent black.
    pub const CLEAR: Color = Color::solid(0.0, 0.0, 0.0, 0.0);

    /// Raw constructor for in-range literals. Callers guarantee [0, 1].
    const fn solid(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a,
            pattern: false,
        }
    }

    /// Creates a color from RGBA channels.
    ///
    /// Out-of-range inputs are silently clamped to [0, 1], never rejected.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::solid(clamp_unit(r), clamp_unit(g), clamp_unit(b), clamp_unit(a))
    }

    /// Creates a color from HSB components and alpha.
    ///
    /// The hue is wrapped into [0, 1); saturation, brightness and alpha are
    /// clamped to [0, 1].
    #[inline]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let [r, g, b] = hsb_to_rgb(
            wrap_hue(hue),
            clamp_unit(saturation),
            clamp_unit(brightness),
        );
        Self::solid(r, g, b, clamp_unit(alpha))
    }

    /// Creates a grayscale color (equal RGB channels).
    #[inline]
    pub fn gray(white: f32, alpha: f32) -> Self {
        let w = clamp_unit(white);
        Self::solid(w, w, w, clamp_unit(alpha))
    }

    /// Creates a pattern-based color.
    ///
    /// Pattern-based colors stand in for colors backed by a tiled image
    /// rather than solid channel values. All component accessors return
    /// zero and HSB transforms are no-ops; component math is never computed
    /// from pattern pixels.
    #[inline]
    pub fn pattern() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
            pattern: true,
        }
    }

    /// True when this color is backed by a tiled image pattern.
    #[inline]
    pub fn is_pattern_based(self) -> bool {
        self.pattern
    }

    /// Red channel in [0, 1]. Zero for pattern-based colors.
    #[inline]
    pub fn red(self) -> f32 {
        self.r
    }

    /// Green channel in [0, 1]. Zero for pattern-based colors.
    #[inline]
    pub fn green(self) -> f32 {
        self.g
    }

    /// Blue channel in [0, 1]. Zero for pattern-based colors.
    #[inline]
    pub fn blue(self) -> f32 {
        self.b
    }

    /// Alpha channel in [0, 1]. Zero for pattern-based colors.
    #[inline]
    pub fn alpha(self) -> f32 {
        self.a
    }

    /// RGBA components as `[r, g, b, a]`.
    #[inline]
    pub fn components(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// HSB components as `[hue, saturation, brightness]`.
    ///
    /// Hue is a fraction of the full circle in [0, 1). Pattern-based colors
    /// report `[0.0, 0.0, 0.0]`.
    #[inline]
    pub fn hsb_components(self) -> [f32; 3] {
        rgb_to_hsb([self.r, self.g, self.b])
    }

    /// Hue as a fraction of the full circle in [0, 1).
    #[inline]
    pub fn hue(self) -> f32 {
        self.hsb_components()[0]
    }

    /// Saturation in [0, 1].
    #[inline]
    pub fn saturation(self) -> f32 {
        self.hsb_components()[1]
    }

    /// Brightness in [0, 1].
    #[inline]
    pub fn brightness(self) -> f32 {
        self.hsb_components()[2]
    }

    /// Returns a new color with the hue replaced.
    ///
    /// Saturation, brightness and alpha are preserved. The input is wrapped
    /// into [0, 1). No-op for pattern-based colors.
    #[inline]
    pub fn with_hue(self, hue: f32) -> Self {
        if self.pattern {
            return self;
        }
        let [_, s, b] = self.hsb_components();
        Self::from_hsb(hue, s, b, self.a)
    }

    /// Returns a new color with the saturation replaced.
    ///
    /// Hue, brightness and alpha are preserved. The input is silently
    /// clamped to [0, 1]. No-op for pattern-based colors.
    #[inline]
    pub fn with_saturation(self, saturation: f32) -> Self {
        if self.pattern {
            return self;
        }
        let [h, _, b] = self.hsb_components();
        Self::from_hsb(h, saturation, b, self.a)
    }

    /// Returns a new color with the brightness replaced.
    ///
    /// Hue, saturation and alpha are preserved. The input is silently
    /// clamped to [0, 1]. No-op for pattern-based colors.
    #[inline]
    pub fn with_brightness(self, brightness: f32) -> Self {
        if self.pattern {
            return self;
        }
        let [h, s, _] = self.hsb_components();
        Self::from_hsb(h, s, brightness, self.a)
    }

    /// Returns a new color with the alpha replaced (clamped to [0, 1]).
    ///
    /// No-op for pattern-based colors.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        if self.pattern {
            return self;
        }
        Self::solid(self.r, self.g, self.b, clamp_unit(alpha))
    }

    /// Relative luminance per the WCAG definition.
    ///
    /// Each channel is linearized, then weighted with the
    /// [`WCAG_LUMA_R`]/[`WCAG_LUMA_G`]/[`WCAG_LUMA_B`] coefficients.
    /// Grayscale colors work naturally since they are stored as r = g = b.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_core::Color;
    ///
    /// assert_eq!(Color::BLACK.luminance(), 0.0);
    /// assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn luminance(self) -> f32 {
        WCAG_LUMA_R * linearize(self.r)
            + WCAG_LUMA_G * linearize(self.g)
            + WCAG_LUMA_B * linearize(self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::hex::format(*self))
    }
}
