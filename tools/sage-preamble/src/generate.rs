//! `generate` command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sage_shader_common::generate_preamble;

use crate::options::PreambleArgs;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub preamble: PreambleArgs,

    /// Output file (overrides config; stdout when neither is set)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let (config, options) = args.preamble.resolve()?;
    let source = generate_preamble(&options)?;

    match args.out.or(config.output.path) {
        Some(path) => {
            write_preamble(&path, &source)?;
            tracing::info!(
                "Wrote {} preamble to {}",
                options.language,
                path.display()
            );
        }
        None => print!("{source}"),
    }
    Ok(())
}

/// Write `source` to `path`, creating parent directories
fn write_preamble(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, source).with_context(|| format!("Failed to write {}", path.display()))
}
