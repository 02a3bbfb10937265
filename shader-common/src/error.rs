use std::path::PathBuf;

use crate::resource_set::ResourceSet;

/// Violations of the host/shader binding contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Index does not name one of the five resource sets
    #[error("Unknown resource set index: {0} (must be 0-{max})", max = ResourceSet::COUNT - 1)]
    UnknownResourceSet(u32),
    /// The same resource set was supplied more than once
    #[error("Resource set {0:?} supplied more than once")]
    DuplicateResourceSet(ResourceSet),
    /// A resource set has no entry, leaving a gap in the pipeline layout
    #[error("Resource set {0:?} is missing from the pipeline layout")]
    MissingResourceSet(ResourceSet),
}

/// Error type for preamble generation and up-to-date checks
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreambleError {
    /// Include guard is empty or not a valid preprocessor identifier
    #[error("Invalid include guard {0:?}: must be a non-empty C identifier")]
    InvalidIncludeGuard(String),
    /// An existing preamble file differs from the generated text
    #[error("Preamble is out of date (first difference at line {line})")]
    OutOfDate { line: usize },
}

/// Error type for loading a preamble config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
