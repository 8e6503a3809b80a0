//! Gradient command

use crate::GradientArgs;
use anyhow::{Context, Result};
use chroma_ops::gradient;

pub fn run(args: GradientArgs) -> Result<()> {
    if let Some(position) = args.at {
        let c = gradient::color_within(position, &args.stops)
            .context("Failed to sample gradient")?;
        println!("{:.3}: {}", position.clamp(0.0, 1.0), super::describe(c));
        return Ok(());
    }

    let steps = args.steps.max(2);
    for i in 0..steps {
        let position = i as f32 / (steps - 1) as f32;
        let c = gradient::color_within(position, &args.stops)
            .context("Failed to sample gradient")?;
        println!("{:.3}: {}", position, super::describe(c));
    }
    Ok(())
}
