//! Sage shader common - host-side mirror of the shared shader preamble
//!
//! Every shader program in the renderer includes the same preamble: five
//! resource-set numbers, the per-frame `GlobalConstantsType` uniform record and
//! a few shading helpers. This crate is the single definition of that contract
//! on the host side:
//!
//! - [`resource_set`]: binding-slot numbers shared by host and shader code
//! - [`global_constants`]: the per-frame uniform record, layout-checked
//! - [`shading`]: CPU versions of the preamble's math helpers
//! - [`clipping`]: plane-equation builders for the two clipping planes
//! - [`preamble`]: GLSL / WGSL preamble text generated from the definitions above
//! - [`gpu`]: wgpu bind group layout and per-frame upload for the global constants
//! - [`config`]: TOML configuration for preamble generation

pub mod clipping;
pub mod config;
mod error;
pub mod global_constants;
pub mod gpu;
pub mod preamble;
pub mod resource_set;
pub mod shading;

pub use config::PreambleConfig;
pub use error::{ConfigError, LayoutError, PreambleError};
pub use global_constants::{ClippingPlaneSlot, GlobalConstants};
pub use preamble::{PreambleOptions, ShaderLanguage, check_preamble, generate_preamble};
pub use resource_set::ResourceSet;
pub use shading::{
    ALPHA_TEST_THRESHOLD, Saturate, calculate_clipping_plane, fails_alpha_test,
    hardware_clip_distances, saturate, transform_normal,
};
