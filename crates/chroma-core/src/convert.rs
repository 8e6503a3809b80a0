//! RGB <-> HSB conversion.
//!
//! Both directions are pure functions over normalized components. Hue is
//! expressed as a fraction of the full circle in [0, 1); saturation and
//! brightness are in [0, 1].
//!
//! # Round trip
//!
//! For non-degenerate colors (saturation and brightness above zero) the
//! conversions round-trip within floating-point tolerance:
//!
//! ```rust
//! use chroma_core::convert::{hsb_to_rgb, rgb_to_hsb};
//!
//! let [h, s, b] = rgb_to_hsb([0.8, 0.3, 0.1]);
//! let [r, g, bl] = hsb_to_rgb(h, s, b);
//! assert!((r - 0.8).abs() < 1e-5);
//! assert!((g - 0.3).abs() < 1e-5);
//! assert!((bl - 0.1).abs() < 1e-5);
//! ```

use crate::math::wrap_hue;

/// Converts normalized RGB channels to HSB components.
///
/// Returns `[hue, saturation, brightness]`. Achromatic inputs (r = g = b)
/// report hue 0.0 and saturation 0.0.
#[inline]
pub fn rgb_to_hsb(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let brightness = max;
    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    let hue = if delta > 0.0 {
        let sector = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        wrap_hue(sector / 6.0)
    } else {
        0.0
    };

    [hue, saturation, brightness]
}

/// Converts HSB components to normalized RGB channels.
///
/// `hue` is wrapped into [0, 1) before use; saturation and brightness are
/// expected in [0, 1].
#[inline]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [f32; 3] {
    if saturation <= 0.0 {
        return [brightness, brightness, brightness];
    }

    let h = wrap_hue(hue) * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    match sector as u32 {
        0 => [brightness, t, p],
        1 => [q, brightness, p],
        2 => [p, brightness, t],
        3 => [p, q, brightness],
        4 => [t, p, brightness],
        _ => [brightness, p, q],
    }
}
