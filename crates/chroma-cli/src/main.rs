//! chroma - color toolkit CLI
//!
//! Palettes, contrast checks, gradients and blending from the command line.

use anyhow::Result;
use chroma_core::Color;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Color toolkit CLI")]
#[command(long_about = "
Palette derivation, WCAG contrast, gradients and blend modes for colors
given as hex strings (\"#FF8800\", \"FFA\") or names (\"orange\", \"clear\").

Examples:
  chroma info '#FF8800'                 # Components, HSB, luminance
  chroma palette '#FF8800' triadic      # Related colors
  chroma contrast black white           # WCAG contrast ratio
  chroma text-color '#1A1A2E'           # Readable text color
  chroma gradient black white --at 0.5
  chroma gradient red green blue --steps 5
  chroma blend '#808080' '#FFAA00' --mode multiply
  chroma blend '#808080' '#FFAA00' --mode screen --alpha 0.5
  chroma derive 'user@example.com'
  chroma random
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show components, HSB view, luminance and hex form
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Derive a related-color palette
    #[command(visible_alias = "p")]
    Palette(PaletteArgs),

    /// WCAG contrast ratio between two colors
    Contrast(ContrastArgs),

    /// Black or white, whichever reads better on the color
    #[command(name = "text-color")]
    TextColor(TextColorArgs),

    /// Sample a multi-stop gradient
    #[command(visible_alias = "g")]
    Gradient(GradientArgs),

    /// Blend a source color onto a backdrop
    #[command(visible_alias = "b")]
    Blend(BlendArgs),

    /// Deterministic color from a string
    Derive(DeriveArgs),

    /// Random opaque color
    Random,
}

#[derive(Args)]
struct InfoArgs {
    /// Color (hex or name)
    color: Color,
}

#[derive(Args)]
struct PaletteArgs {
    /// Base color (hex or name)
    color: Color,

    /// Scheme: complementary, analogous, split, triadic, tetradic, square
    #[arg(default_value = "analogous")]
    scheme: String,
}

#[derive(Args)]
struct ContrastArgs {
    /// Foreground color
    foreground: Color,

    /// Background color
    background: Color,
}

#[derive(Args)]
struct TextColorArgs {
    /// Background color
    color: Color,
}

#[derive(Args)]
struct GradientArgs {
    /// Gradient stops, in order (at least 2)
    #[arg(required = true, num_args = 2..)]
    stops: Vec<Color>,

    /// Sample a single unit position
    #[arg(long, conflicts_with = "steps")]
    at: Option<f32>,

    /// Sample N evenly spaced positions
    #[arg(long, default_value = "5")]
    steps: usize,
}

#[derive(Args)]
struct BlendArgs {
    /// Backdrop color
    backdrop: Color,

    /// Source color
    source: Color,

    /// Mode: normal, multiply, screen, overlay, darken, lighten,
    /// color-dodge, color-burn, hard-light, soft-light, difference, exclusion
    #[arg(short, long, default_value = "normal")]
    mode: String,

    /// Override the source alpha
    #[arg(short, long)]
    alpha: Option<f32>,
}

#[derive(Args)]
struct DeriveArgs {
    /// Input string
    text: String,

    /// Bias the result toward this color's hue
    #[arg(long)]
    ideal: Option<Color>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
    debug!(verbose = cli.verbose, "chroma starting");

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Palette(args) => commands::palette::run(args),
        Commands::Contrast(args) => commands::contrast::run(args),
        Commands::TextColor(args) => commands::text_color::run(args),
        Commands::Gradient(args) => commands::gradient::run(args),
        Commands::Blend(args) => commands::blend::run(args),
        Commands::Derive(args) => commands::derive::run(args),
        Commands::Random => commands::random::run(),
    }
}
