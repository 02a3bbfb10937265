//! Plane equations for the two global clipping planes
//!
//! Planes are `(normal, d)` so that `dot(vec4(p, 1), plane)` is the signed
//! distance from `p`; points with a negative distance get discarded. World
//! space is Z-up, which is what the water planes below assume.

use glam::{Vec3, Vec4};

/// Plane through `point` facing along `normal`
///
/// Returns `None` for a zero (or non-finite) normal.
pub fn plane_from_point_normal(point: Vec3, normal: Vec3) -> Option<Vec4> {
    let n = normal.try_normalize()?;
    Some(n.extend(-n.dot(point)))
}

/// Clipping plane for rendering the reflection texture of a water surface
///
/// Keeps everything above `water_height`.
pub fn reflection_clip_plane(water_height: f32) -> Vec4 {
    Vec4::new(0.0, 0.0, 1.0, -water_height)
}

/// Clipping plane for rendering the refraction texture of a water surface
///
/// Keeps everything below `water_height`.
pub fn refraction_clip_plane(water_height: f32) -> Vec4 {
    Vec4::new(0.0, 0.0, -1.0, water_height)
}
