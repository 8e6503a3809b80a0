//! String-seeded and random color generation.
//!
//! [`color_for_string`] hashes a string with SHA-1 and derives a small set
//! of HSB candidates from the digest, so the same string always yields the
//! same color on every platform and process. The byte-to-HSB mapping is an
//! implementation detail of this crate, not a compatibility surface.

use chroma_core::math::hue_distance;
use chroma_core::Color;
use sha1::{Digest, Sha1};
use tracing::debug;

/// Number of HSB candidates derived from the digest (three bytes each).
const CANDIDATES: usize = 6;

/// Deterministically derives a color from an arbitrary string.
///
/// The SHA-1 digest of the string's UTF-8 bytes is split into six
/// three-byte groups, each mapped to an HSB candidate (hue from the first
/// byte, saturation and brightness from the other two, alpha 1.0). Without
/// an `ideal`, the most saturated candidate wins; with one, the candidate
/// whose hue is closest to the ideal's hue under circular distance wins.
///
/// # Example
///
/// ```rust
/// use chroma_ops::derive::color_for_string;
///
/// // same string, same color - every time, everywhere
/// assert_eq!(color_for_string("chroma", None), color_for_string("chroma", None));
/// ```
pub fn color_for_string(text: &str, ideal: Option<Color>) -> Color {
    debug!(len = text.len(), has_ideal = ideal.is_some(), "derive::color_for_string");
    let digest = Sha1::digest(text.as_bytes());

    let mut candidates = [Color::BLACK; CANDIDATES];
    for (slot, group) in candidates.iter_mut().zip(digest.chunks_exact(3)) {
        // hue uses /256 so it stays inside [0, 1)
        *slot = Color::from_hsb(
            group[0] as f32 / 256.0,
            group[1] as f32 / 255.0,
            group[2] as f32 / 255.0,
            1.0,
        );
    }

    match ideal {
        Some(target) => closest_hue(&candidates, target.hue()),
        None => most_saturated(&candidates),
    }
}

/// Random opaque color with each RGB channel drawn uniformly from [0, 1].
pub fn random_color() -> Color {
    Color::new(
        rand::random::<f32>(),
        rand::random::<f32>(),
        rand::random::<f32>(),
        1.0,
    )
}

fn most_saturated(candidates: &[Color; CANDIDATES]) -> Color {
    let mut best = candidates[0];
    for &c in &candidates[1..] {
        if c.saturation() > best.saturation() {
            best = c;
        }
    }
    best
}

fn closest_hue(candidates: &[Color; CANDIDATES], target: f32) -> Color {
    let mut best = candidates[0];
    for &c in &candidates[1..] {
        if hue_distance(c.hue(), target) < hue_distance(best.hue(), target) {
            best = c;
        }
    }
    best
}
