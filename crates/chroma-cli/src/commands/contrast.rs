//! Contrast command

use crate::ContrastArgs;
use anyhow::Result;
use chroma_ops::contrast::{contrast_ratio, is_accessible, MIN_ACCESSIBLE_RATIO};

pub fn run(args: ContrastArgs) -> Result<()> {
    let ratio = contrast_ratio(args.foreground, args.background);
    println!("Foreground: {}", super::describe(args.foreground));
    println!("Background: {}", super::describe(args.background));
    println!("  Contrast ratio: {:.2}:1", ratio);
    if is_accessible(args.foreground, args.background) {
        println!("  PASS (>= {}:1)", MIN_ACCESSIBLE_RATIO);
    } else {
        println!("  FAIL (< {}:1)", MIN_ACCESSIBLE_RATIO);
    }
    Ok(())
}
