//! wgpu side of the binding contract
//!
//! - [`bind_groups`]: layout entry for the global constants (set 0, binding 0)
//!   and pipeline layouts ordered by [`ResourceSet`](crate::ResourceSet)
//! - [`GlobalConstantsBuffer`]: uniform buffer + bind group, written once per frame

pub mod bind_groups;
mod global_constants_buffer;

pub use bind_groups::{
    GLOBAL_CONSTANTS_BINDING, create_global_constants_bind_group_layout,
    create_pipeline_layout, global_constants_layout_entry,
};
pub use global_constants_buffer::GlobalConstantsBuffer;
