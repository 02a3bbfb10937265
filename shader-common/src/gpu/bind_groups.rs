//! Bind group layout creation
//!
//! Creates the layout for the per-frame global constants (set 0) and pipeline
//! layouts whose bind group order follows the shared resource-set numbering.

use crate::error::LayoutError;
use crate::global_constants::GlobalConstants;
use crate::resource_set::{ResourceSet, order_by_resource_set};

/// Binding of the `GlobalConstants` uniform block within set 0
pub const GLOBAL_CONSTANTS_BINDING: u32 = 0;

/// Layout entry for the global constants uniform buffer
///
/// VERTEX_FRAGMENT: vertex shaders need the view-projection matrix, fragment
/// shaders need the clipping planes for the manual discard.
pub fn global_constants_layout_entry() -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: GLOBAL_CONSTANTS_BINDING,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(GlobalConstants::SIZE),
        },
        count: None,
    }
}

/// Create bind group layout for the global constants (set 0)
pub fn create_global_constants_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Global Constants Bind Group Layout"),
        entries: &[global_constants_layout_entry()],
    })
}

/// Create a pipeline layout with one bind group layout per resource set
///
/// The layouts may be given in any order; they are placed so that layout `i`
/// is bound at set `i`, matching the `*_RESOURCE_SET` numbers shaders use.
///
/// # Errors
///
/// Returns `LayoutError::DuplicateResourceSet` or
/// `LayoutError::MissingResourceSet` if the five sets are not each supplied
/// exactly once.
pub fn create_pipeline_layout(
    device: &wgpu::Device,
    label: Option<&str>,
    layouts: &[(ResourceSet, &wgpu::BindGroupLayout)],
) -> Result<wgpu::PipelineLayout, LayoutError> {
    let ordered = order_by_resource_set(layouts.iter().copied())?;

    Ok(device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label,
        bind_group_layouts: &ordered,
        push_constant_ranges: &[],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_constants_entry_is_uniform_at_binding_zero() {
        let entry = global_constants_layout_entry();
        assert_eq!(entry.binding, 0);
        assert_eq!(entry.visibility, wgpu::ShaderStages::VERTEX_FRAGMENT);
        assert_eq!(entry.count, None);
        match entry.ty {
            wgpu::BindingType::Buffer {
                ty,
                has_dynamic_offset,
                min_binding_size,
            } => {
                assert_eq!(ty, wgpu::BufferBindingType::Uniform);
                assert!(!has_dynamic_offset);
                assert_eq!(min_binding_size.map(|s| s.get()), Some(128));
            }
            other => panic!("expected a buffer binding, got {other:?}"),
        }
    }

    #[test]
    fn test_min_binding_size_matches_host_struct() {
        let entry = global_constants_layout_entry();
        let wgpu::BindingType::Buffer {
            min_binding_size: Some(size),
            ..
        } = entry.ty
        else {
            panic!("expected a sized buffer binding");
        };
        assert_eq!(size.get(), std::mem::size_of::<GlobalConstants>() as u64);
    }
}
