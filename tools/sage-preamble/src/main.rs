//! sage-preamble - Generate and check the shared shader preamble
//!
//! # Commands
//!
//! - `sage-preamble generate` - Write the preamble (GLSL or WGSL) to a file or stdout
//! - `sage-preamble check` - Fail if an existing preamble file is out of date
//! - `sage-preamble layout` - Print the `GlobalConstants` uniform layout
//!
//! # Usage
//!
//! ```bash
//! # Regenerate the GLSL header
//! sage-preamble generate --out Assets/Shaders/Common.h
//!
//! # WGSL variant, settings from a config file
//! sage-preamble generate --config preamble.toml --lang wgsl
//!
//! # CI: verify the checked-in header matches the host definitions
//! sage-preamble check Assets/Shaders/Common.h
//! ```
//!
//! # Config (preamble.toml)
//!
//! ```toml
//! [preamble]
//! language = "glsl"
//! include_guard = "COMMON_H"
//! hardware_clip_macro = true
//!
//! [output]
//! path = "Assets/Shaders/Common.h"
//! ```

mod check;
mod generate;
mod layout;
mod options;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// sage-preamble - Generate and check the shared shader preamble
#[derive(Parser)]
#[command(name = "sage-preamble")]
#[command(about = "Generate and check the shared shader preamble")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the preamble to a file (or stdout)
    Generate(generate::GenerateArgs),

    /// Check that an existing preamble file is up to date
    Check(check::CheckArgs),

    /// Print the GlobalConstants uniform layout
    Layout,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Check(args) => check::execute(args),
        Commands::Layout => {
            print!("{}", layout::render_table());
            Ok(())
        }
    }
}
