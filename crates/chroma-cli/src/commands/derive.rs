//! Derive command

use crate::DeriveArgs;
use anyhow::Result;
use chroma_ops::derive::color_for_string;

pub fn run(args: DeriveArgs) -> Result<()> {
    let c = color_for_string(&args.text, args.ideal);
    println!("{:?} -> {}", args.text, super::describe(c));
    Ok(())
}
