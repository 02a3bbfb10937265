//! WGSL preamble
//!
//! Shader `bool` is not host-shareable in WGSL, so the clipping-plane flags are
//! `u32` here (matching the host struct) and converted at the use site.

use super::GENERATED_BANNER;
use crate::global_constants::{FieldKind, GlobalConstants};
use crate::resource_set::ResourceSet;
use crate::shading::{ALPHA_TEST_CUTOFF_BYTE, CLIP_DISTANCE_COUNT};

const TEMPLATE: &str = r#"//BANNER

//RESOURCE_SETS

// 0x//CUTOFF_HEX / 0xFF
const ALPHA_TEST_THRESHOLD: f32 = //CUTOFF_DEC.0 / 255.0;

struct GlobalConstantsType {
//GLOBAL_CONSTANTS_FIELDS
}

@group(//GLOBAL_GROUP) @binding(0) var<uniform> global_constants: GlobalConstantsType;

fn fails_alpha_test(alpha: f32) -> bool {
    return alpha < ALPHA_TEST_THRESHOLD;
}

fn transform_normal(v: vec3<f32>, m: mat4x4<f32>) -> vec3<f32> {
    return (m * vec4<f32>(v, 0.0)).xyz;
}

// saturate() is a WGSL builtin for scalars and vectors.

fn calculate_clipping_plane(position: vec3<f32>, has_clipping_plane: bool, plane: vec4<f32>) -> f32 {
    if (has_clipping_plane) {
        return dot(vec4<f32>(position, 1.0), plane);
    }
    return 1.0;
}

// Distances against both global clipping planes; negative means discard.
fn global_clip_distances(position: vec3<f32>) -> vec2<f32> {
    return vec2<f32>(
        calculate_clipping_plane(position, global_constants.has_clipping_plane1 != 0u, global_constants.clipping_plane1),
        calculate_clipping_plane(position, global_constants.has_clipping_plane2 != 0u, global_constants.clipping_plane2)
    );
}

// Hardware clip distances are disabled (unreliable on Metal); always "not clipped".
fn hardware_clip_distances() -> array<f32, //CLIP_COUNT> {
    return array<f32, //CLIP_COUNT>(//CLIP_ONES);
}
"#;

fn type_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Float => "f32",
        FieldKind::Vec2 => "vec2<f32>",
        FieldKind::Vec3 => "vec3<f32>",
        FieldKind::Vec4 => "vec4<f32>",
        FieldKind::Mat4 => "mat4x4<f32>",
        FieldKind::Bool => "u32",
    }
}

fn resource_set_consts() -> String {
    ResourceSet::ALL
        .iter()
        .map(|set| format!("const {}: u32 = {}u;", set.define_name(), set.index()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn global_constants_fields() -> String {
    GlobalConstants::LAYOUT
        .iter()
        .map(|field| format!("    {}: {},", field.name, type_name(field.kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fill in the WGSL template
pub(super) fn render() -> String {
    TEMPLATE
        .replace("//BANNER", GENERATED_BANNER)
        .replace("//RESOURCE_SETS", &resource_set_consts())
        .replace("//CUTOFF_HEX", &format!("{ALPHA_TEST_CUTOFF_BYTE:02X}"))
        .replace("//CUTOFF_DEC", &ALPHA_TEST_CUTOFF_BYTE.to_string())
        .replace("//CLIP_COUNT", &CLIP_DISTANCE_COUNT.to_string())
        .replace("//GLOBAL_CONSTANTS_FIELDS", &global_constants_fields())
        .replace("//GLOBAL_GROUP", &ResourceSet::Global.index().to_string())
        .replace("//CLIP_ONES", &vec!["1.0"; CLIP_DISTANCE_COUNT].join(", "))
}
