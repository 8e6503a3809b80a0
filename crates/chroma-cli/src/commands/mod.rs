//! CLI command implementations

pub mod blend;
pub mod contrast;
pub mod derive;
pub mod gradient;
pub mod info;
pub mod palette;
pub mod random;
pub mod text_color;

use chroma_core::{hex, Color};

/// One-line summary of a color: hex plus RGBA breakdown.
pub fn describe(color: Color) -> String {
    let [r, g, b, a] = color.components();
    format!(
        "#{}  rgba({:.3}, {:.3}, {:.3}, {:.3})",
        hex::format(color),
        r,
        g,
        b,
        a
    )
}
