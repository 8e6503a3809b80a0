//! Info command

use crate::InfoArgs;
use anyhow::Result;

pub fn run(args: InfoArgs) -> Result<()> {
    let c = args.color;
    let [r, g, b, a] = c.components();
    let [h, s, br] = c.hsb_components();

    println!("Color: {}", super::describe(c));
    println!("  RGBA:       {:.4} {:.4} {:.4} {:.4}", r, g, b, a);
    println!(
        "  HSB:        {:.1} deg, {:.1}% sat, {:.1}% bright",
        h * 360.0,
        s * 100.0,
        br * 100.0
    );
    println!("  Luminance:  {:.4}", c.luminance());
    if c.is_pattern_based() {
        println!("  Pattern-based: components report zero");
    }
    Ok(())
}
