//! CPU versions of the preamble's shading helpers
//!
//! These match the shader functions of the same name bit for bit where the
//! GPU does plain f32 math, so CPU-side culling and tests can reason about what
//! the shaders will do.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// 8-bit alpha value at which alpha-tested (cutout) materials start to pass
pub const ALPHA_TEST_CUTOFF_BYTE: u8 = 0x60;

/// Alpha cutoff used by alpha-tested materials: 0x60 / 0xFF (~0.37647)
pub const ALPHA_TEST_THRESHOLD: f32 = ALPHA_TEST_CUTOFF_BYTE as f32 / 0xFF as f32;

/// Number of hardware clip distance slots the preamble reserves
pub const CLIP_DISTANCE_COUNT: usize = 2;

/// Returns true when a fragment with this alpha should be discarded
///
/// The comparison is strict: an alpha of exactly [`ALPHA_TEST_THRESHOLD`] passes.
#[inline]
pub fn fails_alpha_test(alpha: f32) -> bool {
    alpha < ALPHA_TEST_THRESHOLD
}

/// Transform a direction by `m`, ignoring translation
///
/// Equivalent to `(m * vec4(v, 0)).xyz`. No inverse-transpose correction is
/// applied; pass the normal matrix yourself for non-uniform scale.
#[inline]
pub fn transform_normal(v: Vec3, m: Mat4) -> Vec3 {
    (m * v.extend(0.0)).truncate()
}

/// Clamp to [0, 1]
pub trait Saturate {
    fn saturate(self) -> Self;
}

impl Saturate for f32 {
    #[inline]
    fn saturate(self) -> Self {
        self.clamp(0.0, 1.0)
    }
}

impl Saturate for Vec2 {
    #[inline]
    fn saturate(self) -> Self {
        self.clamp(Vec2::ZERO, Vec2::ONE)
    }
}

impl Saturate for Vec3 {
    #[inline]
    fn saturate(self) -> Self {
        self.clamp(Vec3::ZERO, Vec3::ONE)
    }
}

impl Saturate for Vec4 {
    #[inline]
    fn saturate(self) -> Self {
        self.clamp(Vec4::ZERO, Vec4::ONE)
    }
}

/// Clamp a scalar or each vector component to [0, 1]
#[inline]
pub fn saturate<T: Saturate>(v: T) -> T {
    v.saturate()
}

/// Signed distance of `position` to `plane`, or 1.0 when the plane is disabled
///
/// `plane` is `(normal, d)`; the distance is `dot(vec4(position, 1), plane)`.
/// A negative result means the point is on the clipped side. Shaders use this
/// for a manual discard since hardware clip distances are turned off.
#[inline]
pub fn calculate_clipping_plane(position: Vec3, has_clipping_plane: bool, plane: Vec4) -> f32 {
    if has_clipping_plane {
        position.extend(1.0).dot(plane)
    } else {
        1.0
    }
}

/// Values the preamble's `DO_CLIPPING` macro writes to `gl_ClipDistance`
///
/// Always 1.0 (never clipped): `gl_ClipDistance` does not behave reliably on
/// the Metal backend, so clipping happens through [`calculate_clipping_plane`].
#[inline]
pub fn hardware_clip_distances() -> [f32; CLIP_DISTANCE_COUNT] {
    [1.0; CLIP_DISTANCE_COUNT]
}

#[cfg(test)]
mod tests;
