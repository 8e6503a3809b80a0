//! Text-color command

use crate::TextColorArgs;
use anyhow::Result;
use chroma_ops::contrast::{contrast_ratio, contrasting_text_color};

pub fn run(args: TextColorArgs) -> Result<()> {
    let text = contrasting_text_color(args.color);
    println!("Background: {}", super::describe(args.color));
    println!("Text:       {}", super::describe(text));
    println!(
        "  Contrast ratio: {:.2}:1",
        contrast_ratio(args.color, text)
    );
    Ok(())
}
