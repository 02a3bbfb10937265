//! Per-frame upload of [`GlobalConstants`]

use super::bind_groups::GLOBAL_CONSTANTS_BINDING;
use crate::global_constants::GlobalConstants;

/// Uniform buffer holding the frame's global constants, plus its bind group
///
/// Written once per frame before any draw that reads it; bind
/// [`bind_group`](Self::bind_group) at
/// [`ResourceSet::Global`](crate::ResourceSet::Global).
pub struct GlobalConstantsBuffer {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GlobalConstantsBuffer {
    /// Allocate the buffer and bind group for `layout`
    ///
    /// `layout` must come from
    /// [`create_global_constants_bind_group_layout`](super::create_global_constants_bind_group_layout).
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Global Constants"),
            size: GlobalConstants::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Global Constants Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: GLOBAL_CONSTANTS_BINDING,
                resource: buffer.as_entire_binding(),
            }],
        });

        tracing::debug!(size = GlobalConstants::SIZE, "Created global constants buffer");

        Self { buffer, bind_group }
    }

    /// Write this frame's constants
    pub fn upload(&self, queue: &wgpu::Queue, constants: &GlobalConstants) {
        tracing::trace!(
            time = constants.time_in_seconds,
            clip1 = constants.has_clipping_plane1,
            clip2 = constants.has_clipping_plane2,
            "Uploading global constants"
        );
        queue.write_buffer(&self.buffer, 0, constants.as_bytes());
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
