//! Per-channel blend modes with alpha compositing.
//!
//! Each mode defines a per-channel function `f(cb, cs)` over backdrop and
//! source channels in [0, 1]. The blended channel is then composited with
//! the source alpha `as`:
//!
//! ```text
//! cr = cb * (1 - as) + f(cb, cs) * as        (per RGB channel)
//! ar = ab + as * (1 - ab)                    (standard "over")
//! ```
//!
//! Channel results are clamped to [0, 1] before compositing. [`blend`] uses
//! the source color's own alpha; [`blend_with_alpha`] replaces it with an
//! explicit value.

use chroma_core::math::clamp_unit;
use chroma_core::Color;

/// Blend mode for combining a backdrop and a source color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source replaces backdrop.
    #[default]
    Normal,
    /// Darken by multiplication.
    Multiply,
    /// Lighten (inverse multiply).
    Screen,
    /// Multiply or screen depending on the backdrop.
    Overlay,
    /// Channel-wise minimum.
    Darken,
    /// Channel-wise maximum.
    Lighten,
    /// Brighten the backdrop toward the source.
    ColorDodge,
    /// Darken the backdrop toward the source.
    ColorBurn,
    /// Overlay with the roles swapped.
    HardLight,
    /// W3C piecewise soft light.
    SoftLight,
    /// Absolute channel difference.
    Difference,
    /// Difference with lower contrast.
    Exclusion,
}

/// Per-channel blend function `f(cb, cs)`.
#[inline]
fn channel(mode: BlendMode, cb: f32, cs: f32) -> f32 {
    match mode {
        BlendMode::Normal => cs,
        BlendMode::Multiply => cb * cs,
        BlendMode::Screen => cb + cs - cb * cs,
        BlendMode::Overlay => {
            if cb <= 0.5 {
                2.0 * cb * cs
            } else {
                1.0 - 2.0 * (1.0 - cb) * (1.0 - cs)
            }
        }
        BlendMode::Darken => cb.min(cs),
        BlendMode::Lighten => cb.max(cs),
        BlendMode::ColorDodge => {
            if cs >= 1.0 {
                1.0
            } else {
                (cb / (1.0 - cs)).min(1.0)
            }
        }
        BlendMode::ColorBurn => {
            if cs <= 0.0 {
                0.0
            } else {
                1.0 - ((1.0 - cb) / cs).min(1.0)
            }
        }
        BlendMode::HardLight => {
            if cs <= 0.5 {
                2.0 * cb * cs
            } else {
                1.0 - 2.0 * (1.0 - cb) * (1.0 - cs)
            }
        }
        BlendMode::SoftLight => {
            if cs <= 0.5 {
                cb - (1.0 - 2.0 * cs) * cb * (1.0 - cb)
            } else {
                let d = if cb <= 0.25 {
                    ((16.0 * cb - 12.0) * cb + 4.0) * cb
                } else {
                    cb.sqrt()
                };
                cb + (2.0 * cs - 1.0) * (d - cb)
            }
        }
        BlendMode::Difference => (cb - cs).abs(),
        BlendMode::Exclusion => cb + cs - 2.0 * cb * cs,
    }
}

/// Blends `source` onto `backdrop` using the source's own alpha.
///
/// # Example
///
/// ```rust
/// use chroma_core::Color;
/// use chroma_ops::blend::{blend, BlendMode};
///
/// let gray = Color::gray(0.5, 1.0);
/// let squared = blend(gray, gray, BlendMode::Multiply);
/// assert_eq!(squared.components(), [0.25, 0.25, 0.25, 1.0]);
/// ```
#[inline]
pub fn blend(backdrop: Color, source: Color, mode: BlendMode) -> Color {
    blend_with_alpha(backdrop, source, mode, source.alpha())
}

/// Blends `source` onto `backdrop`, overriding the source alpha.
///
/// The explicit `alpha` replaces the source's natural alpha and is clamped
/// to [0, 1]; at 0.0 the backdrop's RGB is unchanged.
pub fn blend_with_alpha(backdrop: Color, source: Color, mode: BlendMode, alpha: f32) -> Color {
    let sa = clamp_unit(alpha);
    let [br, bg, bb, ba] = backdrop.components();
    let [sr, sg, sb, _] = source.components();

    let composite = |cb: f32, cs: f32| -> f32 {
        let blended = clamp_unit(channel(mode, cb, cs));
        cb * (1.0 - sa) + blended * sa
    };

    Color::new(
        composite(br, sr),
        composite(bg, sg),
        composite(bb, sb),
        ba + sa * (1.0 - ba),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_components(c: Color, expected: [f32; 4]) {
        for (got, want) in c.components().iter().zip(expected.iter()) {
            assert!(
                (got - want).abs() < 1e-5,
                "got {:?}, expected {:?}",
                c.components(),
                expected
            );
        }
    }

    #[test]
    fn test_normal_opaque_replaces() {
        let out = blend(Color::BLUE, Color::RED, BlendMode::Normal);
        assert_components(out, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_normal_half_alpha_mixes() {
        let source = Color::WHITE.with_alpha(0.5);
        let out = blend(Color::BLACK, source, BlendMode::Normal);
        assert_components(out, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_multiply_squares_self() {
        let c = Color::new(0.8, 0.5, 0.3, 1.0);
        let out = blend(c, c, BlendMode::Multiply);
        assert_components(out, [0.64, 0.25, 0.09, 1.0]);
    }

    #[test]
    fn test_screen_with_black_is_identity() {
        let c = Color::new(0.7, 0.2, 0.4, 1.0);
        let out = blend(c, Color::BLACK, BlendMode::Screen);
        assert_components(out, [0.7, 0.2, 0.4, 1.0]);
    }

    #[test]
    fn test_screen_with_white_saturates() {
        let c = Color::new(0.7, 0.2, 0.4, 1.0);
        let out = blend(c, Color::WHITE, BlendMode::Screen);
        assert_components(out, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_darken_lighten() {
        let a = Color::new(0.7, 0.2, 0.5, 1.0);
        let b = Color::new(0.3, 0.6, 0.5, 1.0);
        assert_components(blend(a, b, BlendMode::Darken), [0.3, 0.2, 0.5, 1.0]);
        assert_components(blend(a, b, BlendMode::Lighten), [0.7, 0.6, 0.5, 1.0]);
    }

    #[test]
    fn test_dodge_burn_extremes() {
        let c = Color::new(0.4, 0.4, 0.4, 1.0);
        // dodge by white blows out, burn by black crushes
        assert_components(blend(c, Color::WHITE, BlendMode::ColorDodge), [1.0; 4]);
        assert_components(
            blend(c, Color::BLACK, BlendMode::ColorBurn),
            [0.0, 0.0, 0.0, 1.0],
        );
    }

    #[test]
    fn test_difference_and_exclusion() {
        let a = Color::new(0.8, 0.2, 0.5, 1.0);
        let b = Color::new(0.3, 0.7, 0.5, 1.0);
        assert_components(
            blend(a, b, BlendMode::Difference),
            [0.5, 0.5, 0.0, 1.0],
        );
        // exclusion: cb + cs - 2*cb*cs
        assert_components(
            blend(a, b, BlendMode::Exclusion),
            [0.62, 0.62, 0.5, 1.0],
        );
    }

    #[test]
    fn test_overlay_branches() {
        // dark backdrop multiplies, light backdrop screens
        let dark = Color::new(0.25, 0.25, 0.25, 1.0);
        let light = Color::new(0.75, 0.75, 0.75, 1.0);
        let s = Color::new(0.5, 0.5, 0.5, 1.0);
        assert_components(blend(dark, s, BlendMode::Overlay), [0.25, 0.25, 0.25, 1.0]);
        assert_components(blend(light, s, BlendMode::Overlay), [0.75, 0.75, 0.75, 1.0]);
    }

    #[test]
    fn test_hard_light_swaps_roles() {
        let a = Color::new(0.3, 0.8, 0.5, 1.0);
        let b = Color::new(0.6, 0.2, 0.9, 1.0);
        let hard = blend(a, b, BlendMode::HardLight);
        let overlay = blend(b, a, BlendMode::Overlay);
        assert_components(hard, overlay.components());
    }

    #[test]
    fn test_soft_light_neutral_at_half() {
        // cs = 0.5 leaves the backdrop unchanged in both branches
        let c = Color::new(0.3, 0.6, 0.9, 1.0);
        let s = Color::gray(0.5, 1.0);
        assert_components(blend(c, s, BlendMode::SoftLight), [0.3, 0.6, 0.9, 1.0]);
    }

    #[test]
    fn test_explicit_alpha_overrides() {
        let out = blend_with_alpha(Color::BLACK, Color::WHITE, BlendMode::Normal, 0.25);
        assert_components(out, [0.25, 0.25, 0.25, 1.0]);
        // zero alpha leaves the backdrop RGB untouched
        let none = blend_with_alpha(Color::BLUE, Color::WHITE, BlendMode::Normal, 0.0);
        assert_components(none, [0.0, 0.0, 1.0, 1.0]);
        // out-of-range alpha clamps
        let full = blend_with_alpha(Color::BLACK, Color::WHITE, BlendMode::Normal, 7.0);
        assert_components(full, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_alpha_composites_over() {
        let backdrop = Color::RED.with_alpha(0.5);
        let source = Color::BLUE.with_alpha(0.5);
        let out = blend(backdrop, source, BlendMode::Normal);
        // ar = 0.5 + 0.5 * (1 - 0.5)
        assert!((out.alpha() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_pattern_source_contributes_zeros() {
        let backdrop = Color::new(0.5, 0.5, 0.5, 1.0);
        let out = blend(backdrop, Color::pattern(), BlendMode::Normal);
        // pattern colors report zero components and zero alpha
        assert_components(out, [0.5, 0.5, 0.5, 1.0]);
    }
}
