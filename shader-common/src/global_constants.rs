//! Per-frame global constants (`GlobalConstantsType` in shader source)
//!
//! Bound at set [`GLOBAL_CONSTANTS_RESOURCE_SET`](crate::resource_set::GLOBAL_CONSTANTS_RESOURCE_SET),
//! binding 0. The host fills one of these per frame, uploads it, and every
//! draw in that frame reads it. Layout follows the std140 / WGSL uniform rules
//! and must match the generated preamble byte for byte.

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::shading::{CLIP_DISTANCE_COUNT, calculate_clipping_plane};

/// GPU representation of a shader `bool` inside a uniform block
pub const GPU_TRUE: u32 = 1;
/// GPU representation of a shader `bool` inside a uniform block
pub const GPU_FALSE: u32 = 0;

/// Global constants uniform (128 bytes, POD)
///
/// | Field | Offset | Size |
/// |-------|--------|------|
/// | camera_position | 0 | 12 |
/// | time_in_seconds | 12 | 4 |
/// | view_projection | 16 | 64 |
/// | clipping_plane1 | 80 | 16 |
/// | clipping_plane2 | 96 | 16 |
/// | has_clipping_plane1 | 112 | 4 |
/// | has_clipping_plane2 | 116 | 4 |
/// | viewport_size | 120 | 8 |
///
/// The `has_clipping_plane*` flags are shader bools and are stored as u32
/// ([`GPU_TRUE`] / [`GPU_FALSE`]). Prefer [`GlobalConstants::set_clipping_plane`]
/// over writing the plane fields directly.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GlobalConstants {
    pub camera_position: Vec3,
    pub time_in_seconds: f32,

    pub view_projection: Mat4,
    pub clipping_plane1: Vec4,
    pub clipping_plane2: Vec4,
    pub has_clipping_plane1: u32,
    pub has_clipping_plane2: u32,

    pub viewport_size: Vec2,
}

const _: () = {
    assert!(size_of::<GlobalConstants>() == GlobalConstants::SIZE as usize);
    assert!(offset_of!(GlobalConstants, camera_position) == 0);
    assert!(offset_of!(GlobalConstants, time_in_seconds) == 12);
    assert!(offset_of!(GlobalConstants, view_projection) == 16);
    assert!(offset_of!(GlobalConstants, clipping_plane1) == 80);
    assert!(offset_of!(GlobalConstants, clipping_plane2) == 96);
    assert!(offset_of!(GlobalConstants, has_clipping_plane1) == 112);
    assert!(offset_of!(GlobalConstants, has_clipping_plane2) == 116);
    assert!(offset_of!(GlobalConstants, viewport_size) == 120);
};

/// Shader-side type of a uniform field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat4,
    /// Shader `bool`, 4 bytes in a uniform block
    Bool,
}

/// One entry of [`GlobalConstants::LAYOUT`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field name in Rust and WGSL (snake_case)
    pub name: &'static str,
    /// Field name in the GLSL preamble
    pub glsl_name: &'static str,
    pub kind: FieldKind,
    pub offset: u32,
    pub size: u32,
}

const fn field(
    name: &'static str,
    glsl_name: &'static str,
    kind: FieldKind,
    offset: usize,
    size: usize,
) -> FieldLayout {
    FieldLayout {
        name,
        glsl_name,
        kind,
        offset: offset as u32,
        size: size as u32,
    }
}

/// Which of the two clipping planes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClippingPlaneSlot {
    First,
    Second,
}

impl ClippingPlaneSlot {
    pub const ALL: [ClippingPlaneSlot; CLIP_DISTANCE_COUNT] =
        [ClippingPlaneSlot::First, ClippingPlaneSlot::Second];
}

impl GlobalConstants {
    /// Uniform buffer size in bytes
    pub const SIZE: u64 = 128;

    /// Field table in declaration order
    pub const LAYOUT: [FieldLayout; 8] = [
        field(
            "camera_position",
            "CameraPosition",
            FieldKind::Vec3,
            offset_of!(GlobalConstants, camera_position),
            size_of::<Vec3>(),
        ),
        field(
            "time_in_seconds",
            "TimeInSeconds",
            FieldKind::Float,
            offset_of!(GlobalConstants, time_in_seconds),
            size_of::<f32>(),
        ),
        field(
            "view_projection",
            "ViewProjection",
            FieldKind::Mat4,
            offset_of!(GlobalConstants, view_projection),
            size_of::<Mat4>(),
        ),
        field(
            "clipping_plane1",
            "ClippingPlane1",
            FieldKind::Vec4,
            offset_of!(GlobalConstants, clipping_plane1),
            size_of::<Vec4>(),
        ),
        field(
            "clipping_plane2",
            "ClippingPlane2",
            FieldKind::Vec4,
            offset_of!(GlobalConstants, clipping_plane2),
            size_of::<Vec4>(),
        ),
        field(
            "has_clipping_plane1",
            "HasClippingPlane1",
            FieldKind::Bool,
            offset_of!(GlobalConstants, has_clipping_plane1),
            size_of::<u32>(),
        ),
        field(
            "has_clipping_plane2",
            "HasClippingPlane2",
            FieldKind::Bool,
            offset_of!(GlobalConstants, has_clipping_plane2),
            size_of::<u32>(),
        ),
        field(
            "viewport_size",
            "ViewportSize",
            FieldKind::Vec2,
            offset_of!(GlobalConstants, viewport_size),
            size_of::<Vec2>(),
        ),
    ];

    /// Frame constants with both clipping planes disabled
    pub fn new(
        camera_position: Vec3,
        time_in_seconds: f32,
        view_projection: Mat4,
        viewport_size: Vec2,
    ) -> Self {
        Self {
            camera_position,
            time_in_seconds,
            view_projection,
            viewport_size,
            ..Self::zeroed()
        }
    }

    /// Enable (`Some`) or disable (`None`) a clipping plane
    ///
    /// Disabling also zeroes the stored equation so stale planes never leak
    /// into a later frame's upload.
    pub fn set_clipping_plane(&mut self, slot: ClippingPlaneSlot, plane: Option<Vec4>) {
        let (equation, enabled) = match slot {
            ClippingPlaneSlot::First => (&mut self.clipping_plane1, &mut self.has_clipping_plane1),
            ClippingPlaneSlot::Second => (&mut self.clipping_plane2, &mut self.has_clipping_plane2),
        };
        match plane {
            Some(p) => {
                *equation = p;
                *enabled = GPU_TRUE;
            }
            None => {
                *equation = Vec4::ZERO;
                *enabled = GPU_FALSE;
            }
        }
    }

    /// Builder form of [`set_clipping_plane`](Self::set_clipping_plane)
    pub fn with_clipping_plane(mut self, slot: ClippingPlaneSlot, plane: Vec4) -> Self {
        self.set_clipping_plane(slot, Some(plane));
        self
    }

    /// The plane equation, if that plane is enabled
    pub fn clipping_plane(&self, slot: ClippingPlaneSlot) -> Option<Vec4> {
        let (equation, enabled) = match slot {
            ClippingPlaneSlot::First => (self.clipping_plane1, self.has_clipping_plane1),
            ClippingPlaneSlot::Second => (self.clipping_plane2, self.has_clipping_plane2),
        };
        (enabled != GPU_FALSE).then_some(equation)
    }

    /// Distances the shaders compute for `position` against both planes
    ///
    /// Disabled planes report 1.0.
    pub fn clip_distances(&self, position: Vec3) -> [f32; CLIP_DISTANCE_COUNT] {
        ClippingPlaneSlot::ALL.map(|slot| {
            let plane = self.clipping_plane(slot);
            calculate_clipping_plane(position, plane.is_some(), plane.unwrap_or(Vec4::ZERO))
        })
    }

    /// Whether a fragment at `position` would be discarded by the manual clip test
    pub fn is_clipped(&self, position: Vec3) -> bool {
        self.clip_distances(position).iter().any(|&d| d < 0.0)
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for GlobalConstants {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0, Mat4::IDENTITY, Vec2::ZERO)
    }
}
