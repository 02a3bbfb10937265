//! Arguments shared by `generate` and `check`, merged over the config file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sage_shader_common::{PreambleConfig, PreambleOptions, ShaderLanguage};

#[derive(Args, Debug, Default)]
pub struct PreambleArgs {
    /// Config file (preamble.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Target language: glsl or wgsl (overrides config)
    #[arg(long, short = 'l')]
    pub lang: Option<ShaderLanguage>,

    /// GLSL include guard (overrides config)
    #[arg(long, value_name = "NAME")]
    pub include_guard: Option<String>,

    /// Omit the disabled DO_CLIPPING macro
    #[arg(long)]
    pub no_clip_macro: bool,
}

impl PreambleArgs {
    /// Load the config (if any) and apply command-line overrides
    pub fn resolve(&self) -> Result<(PreambleConfig, PreambleOptions)> {
        let config = match &self.config {
            Some(path) => PreambleConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PreambleConfig::default(),
        };

        let mut options = config.to_options();
        if let Some(lang) = self.lang {
            options.language = lang;
        }
        if let Some(guard) = &self.include_guard {
            options.include_guard = guard.clone();
        }
        if self.no_clip_macro {
            options.hardware_clip_macro = false;
        }

        tracing::debug!(?options, "Resolved preamble options");
        Ok((config, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_config() {
        let (config, options) = PreambleArgs::default().resolve().unwrap();
        assert_eq!(config, PreambleConfig::default());
        assert_eq!(options, PreambleOptions::default());
    }

    #[test]
    fn test_flags_override_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[preamble]\nlanguage = \"glsl\"\ninclude_guard = \"CFG_H\"\nhardware_clip_macro = true"
        )
        .unwrap();

        let args = PreambleArgs {
            config: Some(file.path().to_path_buf()),
            lang: Some(ShaderLanguage::Wgsl),
            include_guard: None,
            no_clip_macro: true,
        };
        let (_, options) = args.resolve().unwrap();
        assert_eq!(options.language, ShaderLanguage::Wgsl);
        assert_eq!(options.include_guard, "CFG_H");
        assert!(!options.hardware_clip_macro);
    }

    #[test]
    fn test_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = PreambleArgs {
            config: Some(dir.path().join("nope.toml")),
            ..PreambleArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
