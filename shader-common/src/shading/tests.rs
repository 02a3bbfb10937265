use super::*;

// =============================================================================
// Alpha test
// =============================================================================

#[test]
fn test_alpha_threshold_value() {
    assert!((ALPHA_TEST_THRESHOLD - 0.37647).abs() < 1e-5);
    assert_eq!(ALPHA_TEST_THRESHOLD, 96.0 / 255.0);
}

#[test]
fn test_alpha_below_threshold_fails() {
    assert!(fails_alpha_test(0.0));
    assert!(fails_alpha_test(0.2));
    assert!(fails_alpha_test(0.376));
    assert!(fails_alpha_test(f32::from_bits(ALPHA_TEST_THRESHOLD.to_bits() - 1)));
    assert!(fails_alpha_test(-1.0));
}

#[test]
fn test_alpha_at_threshold_passes() {
    assert!(!fails_alpha_test(ALPHA_TEST_THRESHOLD));
}

#[test]
fn test_alpha_above_threshold_passes() {
    assert!(!fails_alpha_test(f32::from_bits(ALPHA_TEST_THRESHOLD.to_bits() + 1)));
    assert!(!fails_alpha_test(0.5));
    assert!(!fails_alpha_test(1.0));
}

#[test]
fn test_alpha_byte_values() {
    // 0x5F is the last byte value that gets cut out
    assert!(fails_alpha_test(0x5F as f32 / 255.0));
    assert!(!fails_alpha_test(0x60 as f32 / 255.0));
}

// =============================================================================
// Normal transform
// =============================================================================

#[test]
fn test_transform_normal_ignores_translation() {
    let m = Mat4::from_translation(Vec3::new(10.0, -20.0, 30.0));
    let v = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(transform_normal(v, m), v);
}

#[test]
fn test_transform_normal_matches_linear_part() {
    let m = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 3.0, 4.0),
        glam::Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        Vec3::new(5.0, 6.0, 7.0),
    );
    let v = Vec3::new(1.0, 2.0, 3.0);

    let expected = (m * Vec4::new(v.x, v.y, v.z, 0.0)).truncate();
    assert_eq!(transform_normal(v, m), expected);

    let linear = glam::Mat3::from_mat4(m) * v;
    assert!(transform_normal(v, m).abs_diff_eq(linear, 1e-5));
}

#[test]
fn test_transform_normal_does_not_normalize() {
    let m = Mat4::from_scale(Vec3::splat(2.0));
    let v = Vec3::new(1.0, 0.0, 0.0);
    assert_eq!(transform_normal(v, m), Vec3::new(2.0, 0.0, 0.0));
}

// =============================================================================
// Saturate
// =============================================================================

#[test]
fn test_saturate_scalar() {
    assert_eq!(saturate(-0.5f32), 0.0);
    assert_eq!(saturate(1.5f32), 1.0);
    assert_eq!(saturate(0.0f32), 0.0);
    assert_eq!(saturate(1.0f32), 1.0);
    assert_eq!(saturate(0.25f32), 0.25);
}

#[test]
fn test_saturate_vec3_componentwise() {
    let v = Vec3::new(-3.0, 0.5, 7.0);
    assert_eq!(saturate(v), Vec3::new(0.0, 0.5, 1.0));
}

#[test]
fn test_saturate_other_vectors() {
    assert_eq!(saturate(Vec2::new(2.0, -2.0)), Vec2::new(1.0, 0.0));
    assert_eq!(
        saturate(Vec4::new(0.1, 1.1, -0.1, 0.9)),
        Vec4::new(0.1, 1.0, 0.0, 0.9)
    );
}

// =============================================================================
// Clipping planes
// =============================================================================

#[test]
fn test_disabled_clipping_plane_is_neutral() {
    let planes = [
        Vec4::new(0.0, 1.0, 0.0, -5.0),
        Vec4::ZERO,
        Vec4::splat(f32::MAX),
        Vec4::new(-1.0, 0.0, 0.0, 1000.0),
    ];
    let positions = [
        Vec3::ZERO,
        Vec3::new(1.0e6, -1.0e6, 3.0),
        Vec3::new(0.0, -100.0, 0.0),
    ];
    for plane in planes {
        for position in positions {
            assert_eq!(calculate_clipping_plane(position, false, plane), 1.0);
        }
    }
}

#[test]
fn test_enabled_clipping_plane_distance() {
    let plane = Vec4::new(0.0, 1.0, 0.0, -5.0);
    assert_eq!(calculate_clipping_plane(Vec3::ZERO, true, plane), -5.0);
    assert_eq!(
        calculate_clipping_plane(Vec3::new(3.0, 8.0, -2.0), true, plane),
        3.0
    );
}

#[test]
fn test_enabled_clipping_plane_is_dot_product() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let plane = Vec4::new(0.5, -1.0, 2.0, 4.0);
    let expected = 1.0 * 0.5 + 2.0 * -1.0 + 3.0 * 2.0 + 4.0;
    assert_eq!(calculate_clipping_plane(p, true, plane), expected);
}

#[test]
fn test_hardware_clip_distances_never_clip() {
    assert_eq!(hardware_clip_distances(), [1.0, 1.0]);
}
