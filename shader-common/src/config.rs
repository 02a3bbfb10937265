//! Preamble generation config (`preamble.toml`)
//!
//! Settings for where and how the shared preamble is generated. Every field
//! has a default, so an empty file (or no file) is a valid config. Unknown
//! keys and sections are rejected, so a misspelt key cannot fall back to its
//! default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::preamble::{DEFAULT_INCLUDE_GUARD, PreambleOptions, ShaderLanguage};

/// Preamble generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PreambleConfig {
    /// What to generate
    #[serde(default)]
    pub preamble: PreambleSection,
    /// Where to write it
    #[serde(default)]
    pub output: OutputSection,
}

/// `[preamble]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreambleSection {
    /// Target shading language (default: glsl)
    #[serde(default)]
    pub language: ShaderLanguage,
    /// GLSL include guard (default: COMMON_H)
    #[serde(default = "default_include_guard")]
    pub include_guard: String,
    /// Emit the disabled `DO_CLIPPING` macro (default: true)
    #[serde(default = "default_true")]
    pub hardware_clip_macro: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output file; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_include_guard() -> String {
    DEFAULT_INCLUDE_GUARD.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for PreambleSection {
    fn default() -> Self {
        Self {
            language: ShaderLanguage::default(),
            include_guard: default_include_guard(),
            hardware_clip_macro: default_true(),
        }
    }
}

impl PreambleConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML, unknown keys or
    /// unknown values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), language = %config.preamble.language, "Loaded preamble config");
        Ok(config)
    }

    /// Generation options described by this config
    pub fn to_options(&self) -> PreambleOptions {
        PreambleOptions {
            language: self.preamble.language,
            include_guard: self.preamble.include_guard.clone(),
            hardware_clip_macro: self.preamble.hardware_clip_macro,
        }
    }
}
