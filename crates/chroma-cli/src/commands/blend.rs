//! Blend command

use crate::BlendArgs;
use anyhow::{bail, Result};
use chroma_ops::blend::{blend, blend_with_alpha, BlendMode};

pub fn run(args: BlendArgs) -> Result<()> {
    let mode = match args.mode.to_lowercase().as_str() {
        "normal" => BlendMode::Normal,
        "multiply" | "mult" => BlendMode::Multiply,
        "screen" => BlendMode::Screen,
        "overlay" => BlendMode::Overlay,
        "darken" => BlendMode::Darken,
        "lighten" => BlendMode::Lighten,
        "color-dodge" | "dodge" => BlendMode::ColorDodge,
        "color-burn" | "burn" => BlendMode::ColorBurn,
        "hard-light" => BlendMode::HardLight,
        "soft-light" => BlendMode::SoftLight,
        "difference" | "diff" => BlendMode::Difference,
        "exclusion" => BlendMode::Exclusion,
        _ => bail!("Unknown blend mode: {}", args.mode),
    };

    let result = match args.alpha {
        Some(alpha) => blend_with_alpha(args.backdrop, args.source, mode, alpha),
        None => blend(args.backdrop, args.source, mode),
    };

    println!("Backdrop: {}", super::describe(args.backdrop));
    println!("Source:   {}", super::describe(args.source));
    println!("Result:   {}", super::describe(result));
    Ok(())
}
