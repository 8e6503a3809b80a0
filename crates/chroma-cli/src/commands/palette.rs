//! Palette command

use crate::PaletteArgs;
use anyhow::{bail, Result};
use chroma_ops::palette;

pub fn run(args: PaletteArgs) -> Result<()> {
    let colors: Vec<_> = match args.scheme.to_lowercase().as_str() {
        "complementary" | "comp" => vec![args.color, palette::complementary(args.color)],
        "analogous" => palette::analogous(args.color).to_vec(),
        "split" | "split-complementary" => palette::split_complementary(args.color).to_vec(),
        "triadic" => palette::triadic(args.color).to_vec(),
        "tetradic" => palette::tetradic(args.color).to_vec(),
        "square" => palette::square(args.color).to_vec(),
        _ => bail!("Unknown palette scheme: {}", args.scheme),
    };

    for (i, c) in colors.iter().enumerate() {
        println!("{}: {}", i, super::describe(*c));
    }
    Ok(())
}
