//! # chroma-ops
//!
//! Color operations over the [`chroma_core::Color`] value type.
//!
//! Every engine here is a set of pure functions: colors go in, new colors
//! come out, nothing holds state between calls.
//!
//! # Modules
//!
//! - [`palette`] - related colors via hue rotation (complementary, triadic, ...)
//! - [`contrast`] - WCAG relative contrast and accessibility checks
//! - [`gradient`] - two-color and multi-stop linear interpolation
//! - [`blend`] - 12 per-channel blend modes with alpha compositing
//! - [`derive`] - deterministic string-seeded colors and random colors
//!
//! # Example
//!
//! ```rust
//! use chroma_core::Color;
//! use chroma_ops::{blend, contrast, gradient, palette, BlendMode};
//!
//! let red = Color::RED;
//!
//! // Opposite side of the hue circle
//! let cyan = palette::complementary(red);
//! assert!((cyan.hue() - 0.5).abs() < 1e-5);
//!
//! // Pick readable text for a background
//! let text = contrast::contrasting_text_color(red);
//! assert_eq!(text, Color::BLACK);
//!
//! // Halfway between black and white
//! let mid = gradient::color_at(0.5, Color::BLACK, Color::WHITE);
//! assert_eq!(mid.components(), [0.5, 0.5, 0.5, 1.0]);
//!
//! // Multiply a color with itself
//! let squared = blend::blend(red, red, BlendMode::Multiply);
//! assert_eq!(squared, red);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blend;
pub mod contrast;
pub mod derive;
pub mod gradient;
pub mod palette;

pub use blend::BlendMode;
pub use error::{OpsError, OpsResult};
