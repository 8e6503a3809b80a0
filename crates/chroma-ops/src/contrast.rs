//! WCAG contrast and accessibility checks.
//!
//! Contrast is computed from relative luminance ([`Color::luminance`]):
//! `ratio = (lighter + 0.05) / (darker + 0.05)`, giving values from 1.0
//! (identical colors) up to 21.0 (black on white).

use chroma_core::Color;

/// Minimum contrast ratio for normal text under the WCAG AAA tier.
///
/// Hardcoded policy: [`is_accessible`] always checks against this value.
pub const MIN_ACCESSIBLE_RATIO: f32 = 4.5;

/// Contrast ratio between two colors.
///
/// Symmetric in its arguments and always at least 1.0.
///
/// # Example
///
/// ```rust
/// use chroma_core::Color;
/// use chroma_ops::contrast::contrast_ratio;
///
/// let max = contrast_ratio(Color::BLACK, Color::WHITE);
/// assert!((max - 21.0).abs() < 0.01);
/// assert_eq!(contrast_ratio(Color::RED, Color::RED), 1.0);
/// ```
#[inline]
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = a.luminance();
    let lb = b.luminance();
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// True when `foreground` on `background` meets the contrast threshold.
#[inline]
pub fn is_accessible(foreground: Color, background: Color) -> bool {
    contrast_ratio(foreground, background) >= MIN_ACCESSIBLE_RATIO
}

/// Black or white, whichever contrasts better with `color`.
///
/// Ties favor black.
#[inline]
pub fn contrasting_text_color(color: Color) -> Color {
    if contrast_ratio(color, Color::BLACK) >= contrast_ratio(color, Color::WHITE) {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_white_is_maximal() {
        assert!((contrast_ratio(Color::BLACK, Color::WHITE) - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_symmetric() {
        let a = Color::new(0.8, 0.3, 0.1, 1.0);
        let b = Color::new(0.1, 0.6, 0.9, 1.0);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_self_ratio_is_one() {
        for c in [Color::BLACK, Color::WHITE, Color::ORANGE, Color::PURPLE] {
            assert_eq!(contrast_ratio(c, c), 1.0);
        }
    }

    #[test]
    fn test_accessibility() {
        assert!(is_accessible(Color::BLACK, Color::WHITE));
        assert!(is_accessible(Color::WHITE, Color::BLACK));
        assert!(!is_accessible(Color::ORANGE, Color::ORANGE));
        // mid-gray on white falls short of 4.5
        assert!(!is_accessible(Color::GRAY, Color::WHITE));
    }

    #[test]
    fn test_contrasting_text_color() {
        assert_eq!(contrasting_text_color(Color::WHITE), Color::BLACK);
        assert_eq!(contrasting_text_color(Color::BLACK), Color::WHITE);
        assert_eq!(contrasting_text_color(Color::YELLOW), Color::BLACK);
        assert_eq!(contrasting_text_color(Color::BLUE), Color::WHITE);
    }

    #[test]
    fn test_crossover_point() {
        // the two ratios are equal at L = sqrt(0.05 * 1.05) - 0.05; grays on
        // either side of that luminance must flip the chosen text color
        let l = (0.05f32 * 1.05).sqrt() - 0.05;
        let channel = 1.055 * l.powf(1.0 / 2.4) - 0.055;
        let lighter = Color::gray(channel + 0.01, 1.0);
        let darker = Color::gray(channel - 0.01, 1.0);
        assert_eq!(contrasting_text_color(lighter), Color::BLACK);
        assert_eq!(contrasting_text_color(darker), Color::WHITE);
    }
}
