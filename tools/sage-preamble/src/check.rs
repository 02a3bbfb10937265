//! `check` command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sage_shader_common::{PreambleError, check_preamble};

use crate::options::PreambleArgs;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Preamble file to check (defaults to the config's output path)
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub preamble: PreambleArgs,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let (config, options) = args.preamble.resolve()?;

    let Some(path) = args.file.or(config.output.path) else {
        anyhow::bail!("No preamble file given (pass a path or set [output] path in the config)");
    };

    let existing = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match check_preamble(&existing, &options) {
        Ok(()) => {
            tracing::info!("{} is up to date", path.display());
            Ok(())
        }
        Err(PreambleError::OutOfDate { line }) => {
            anyhow::bail!(
                "{} is out of date (first difference at line {}); run `sage-preamble generate`",
                path.display(),
                line
            )
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sage_shader_common::{PreambleOptions, generate_preamble};

    #[test]
    fn test_check_passes_for_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Common.h");
        std::fs::write(&path, generate_preamble(&PreambleOptions::default()).unwrap()).unwrap();

        execute(CheckArgs {
            file: Some(path),
            preamble: PreambleArgs::default(),
        })
        .unwrap();
    }

    #[test]
    fn test_check_fails_for_stale_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Common.h");
        let stale = generate_preamble(&PreambleOptions::default())
            .unwrap()
            .replace("#define WATER_ANIMATION_CONSTANTS_RESOURCE_SET 4", "");
        std::fs::write(&path, stale).unwrap();

        let err = execute(CheckArgs {
            file: Some(path),
            preamble: PreambleArgs::default(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("out of date"));
    }

    #[test]
    fn test_check_without_path_fails() {
        let err = execute(CheckArgs {
            file: None,
            preamble: PreambleArgs::default(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("No preamble file given"));
    }
}
