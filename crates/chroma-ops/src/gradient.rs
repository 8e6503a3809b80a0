//! Linear gradient sampling.
//!
//! Interpolation happens channel-by-channel in RGBA space regardless of how
//! the inputs were constructed; HSB is never used here, so a gradient from
//! red to cyan passes through gray rather than around the hue wheel.

use crate::error::{OpsError, OpsResult};
use chroma_core::math::{clamp_unit, lerp};
use chroma_core::Color;
use tracing::trace;

/// Color at unit position `position` between `from` and `to`.
///
/// The position is clamped to [0, 1]; each of R, G, B and A is interpolated
/// independently.
///
/// # Example
///
/// ```rust
/// use chroma_core::Color;
/// use chroma_ops::gradient::color_at;
///
/// let mid = color_at(0.5, Color::BLACK, Color::WHITE);
/// assert_eq!(mid.components(), [0.5, 0.5, 0.5, 1.0]);
/// assert_eq!(color_at(0.0, Color::RED, Color::BLUE), Color::RED);
/// assert_eq!(color_at(1.0, Color::RED, Color::BLUE), Color::BLUE);
/// ```
#[inline]
pub fn color_at(position: f32, from: Color, to: Color) -> Color {
    let p = clamp_unit(position);
    let [fr, fg, fb, fa] = from.components();
    let [tr, tg, tb, ta] = to.components();
    Color::new(
        lerp(fr, tr, p),
        lerp(fg, tg, p),
        lerp(fb, tb, p),
        lerp(fa, ta, p),
    )
}

/// Color at unit position `position` within a multi-stop gradient.
///
/// `stops` defines `N - 1` equal-width segments spanning [0, 1]; the segment
/// containing the (clamped) position is sampled with [`color_at`].
///
/// # Errors
///
/// Fewer than two stops cannot define a segment and fail with
/// [`OpsError::DegenerateGradient`].
pub fn color_within(position: f32, stops: &[Color]) -> OpsResult<Color> {
    trace!(stops = stops.len(), position, "gradient::color_within");
    if stops.len() < 2 {
        return Err(OpsError::DegenerateGradient(stops.len()));
    }

    let p = clamp_unit(position);
    let segments = stops.len() - 1;
    let scaled = p * segments as f32;
    let index = (scaled.floor() as usize).min(segments - 1);
    let local = scaled - index as f32;

    Ok(color_at(local, stops[index], stops[index + 1]))
}
