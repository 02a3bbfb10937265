//! Shader preamble generation
//!
//! The preamble every shader includes is rendered from the Rust definitions in
//! this crate, so the binding numbers and the `GlobalConstantsType` layout the
//! shaders see are the ones the host uploads.
//!
//! - GLSL: `Common.h`-style header with include guard, `#define`d resource
//!   sets, the uniform block and the helper functions
//! - WGSL: the same contract as module-scope `const`s, a `var<uniform>` and
//!   helper functions (validated with naga in tests)
//!
//! Hardware clip distances stay disabled in both: the GLSL `DO_CLIPPING` macro
//! writes 1.0 to every `gl_ClipDistance` slot and shaders discard manually
//! using `CalculateClippingPlane`.

mod glsl;
mod wgsl;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreambleError;

/// First line of every generated preamble
pub const GENERATED_BANNER: &str = "// Generated by sage-shader-common. Do not edit.";

/// Default include guard for the GLSL header
pub const DEFAULT_INCLUDE_GUARD: &str = "COMMON_H";

/// Target shading language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderLanguage {
    #[default]
    Glsl,
    Wgsl,
}

impl fmt::Display for ShaderLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderLanguage::Glsl => write!(f, "glsl"),
            ShaderLanguage::Wgsl => write!(f, "wgsl"),
        }
    }
}

impl FromStr for ShaderLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "glsl" => Ok(ShaderLanguage::Glsl),
            "wgsl" => Ok(ShaderLanguage::Wgsl),
            other => Err(format!("Unknown shader language: {other} (expected glsl or wgsl)")),
        }
    }
}

/// Options controlling preamble output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreambleOptions {
    pub language: ShaderLanguage,
    /// GLSL include guard macro (ignored for WGSL)
    pub include_guard: String,
    /// Emit the (disabled) `DO_CLIPPING` macro (GLSL only)
    pub hardware_clip_macro: bool,
}

impl Default for PreambleOptions {
    fn default() -> Self {
        Self {
            language: ShaderLanguage::Glsl,
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
            hardware_clip_macro: true,
        }
    }
}

impl PreambleOptions {
    pub fn for_language(language: ShaderLanguage) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}

/// Render the shared preamble
///
/// # Errors
///
/// Returns `PreambleError::InvalidIncludeGuard` if GLSL output is requested
/// with an include guard that is not a C identifier.
pub fn generate_preamble(options: &PreambleOptions) -> Result<String, PreambleError> {
    let source = match options.language {
        ShaderLanguage::Glsl => {
            if !is_identifier(&options.include_guard) {
                return Err(PreambleError::InvalidIncludeGuard(
                    options.include_guard.clone(),
                ));
            }
            glsl::render(&options.include_guard, options.hardware_clip_macro)
        }
        ShaderLanguage::Wgsl => wgsl::render(),
    };

    tracing::debug!(
        language = %options.language,
        bytes = source.len(),
        "Generated shader preamble"
    );
    Ok(source)
}

/// Check that `existing` matches what [`generate_preamble`] produces
///
/// Line endings are ignored, so a checkout with CRLF line endings compares
/// equal.
///
/// # Errors
///
/// Returns `PreambleError::OutOfDate` with the 1-based line of the first
/// difference, or any error from [`generate_preamble`].
pub fn check_preamble(existing: &str, options: &PreambleOptions) -> Result<(), PreambleError> {
    let expected = generate_preamble(options)?;

    let mut expected_lines = expected.lines();
    let mut existing_lines = existing.lines();
    let mut line = 1;
    loop {
        match (expected_lines.next(), existing_lines.next()) {
            (None, None) => return Ok(()),
            (Some(a), Some(b)) if a == b => line += 1,
            _ => return Err(PreambleError::OutOfDate { line }),
        }
    }
}

/// C preprocessor identifier: `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
