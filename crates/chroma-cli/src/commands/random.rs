//! Random command

use anyhow::Result;
use chroma_ops::derive::random_color;

pub fn run() -> Result<()> {
    println!("{}", super::describe(random_color()));
    Ok(())
}
