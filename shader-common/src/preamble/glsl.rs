//! GLSL (Vulkan-style `layout(set, binding)`) preamble

use super::GENERATED_BANNER;
use crate::global_constants::{FieldKind, GlobalConstants};
use crate::resource_set::ResourceSet;
use crate::shading::{ALPHA_TEST_CUTOFF_BYTE, ALPHA_TEST_THRESHOLD, CLIP_DISTANCE_COUNT};

const TEMPLATE: &str = r#"//BANNER
#ifndef //INCLUDE_GUARD

#define //INCLUDE_GUARD

//RESOURCE_SETS

struct GlobalConstantsType
{
//GLOBAL_CONSTANTS_FIELDS
};

layout(set = //GLOBAL_SET, binding = 0) uniform GlobalConstants
{
    GlobalConstantsType _GlobalConstants;
};

bool FailsAlphaTest(float alpha)
{
    // 0x//CUTOFF_HEX / 0xFF = //THRESHOLD
    return alpha < (float(0x//CUTOFF_HEX) / float(0xFF));
}

vec3 TransformNormal(vec3 v, mat4 m)
{
    return (m * vec4(v, 0)).xyz;
}

float saturate(float v)
{
    return clamp(v, 0.0, 1.0);
}

vec3 saturate(vec3 v)
{
    return clamp(v, vec3(0, 0, 0), vec3(1, 1, 1));
}

float CalculateClippingPlane(vec3 position, bool hasClippingPlane, vec4 plane)
{
    if (hasClippingPlane)
    {
        return dot(vec4(position, 1), plane);
    }
    return 1;
}
//DO_CLIPPING
#endif
"#;

// gl_ClipDistance is unreliable on the Metal backend, so the macro only ever
// writes "not clipped". Shaders discard using CalculateClippingPlane instead.
const DO_CLIPPING_HEADER: &str = r#"
// DISABLED: gl_ClipDistance may not work correctly on the Metal backend.
// TODO: Investigate Metal-compatible clipping solution for water reflections
// Use CalculateClippingPlane() and discard in the fragment shader instead.
#define DO_CLIPPING(position) \"#;

fn type_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Float => "float",
        FieldKind::Vec2 => "vec2",
        FieldKind::Vec3 => "vec3",
        FieldKind::Vec4 => "vec4",
        FieldKind::Mat4 => "mat4",
        FieldKind::Bool => "bool",
    }
}

fn resource_set_defines() -> String {
    ResourceSet::ALL
        .iter()
        .map(|set| format!("#define {} {}", set.define_name(), set.index()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn global_constants_fields() -> String {
    GlobalConstants::LAYOUT
        .iter()
        .map(|field| format!("    {} {};", type_name(field.kind), field.glsl_name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn do_clipping_macro() -> String {
    let mut lines = vec![DO_CLIPPING_HEADER.to_string()];
    for slot in 0..CLIP_DISTANCE_COUNT {
        let continuation = if slot + 1 < CLIP_DISTANCE_COUNT { " \\" } else { "" };
        lines.push(format!("    gl_ClipDistance[{slot}] = 1.0;{continuation}"));
    }
    lines.join("\n") + "\n"
}

/// Fill in the GLSL template
pub(super) fn render(include_guard: &str, hardware_clip_macro: bool) -> String {
    let cutoff_hex = format!("{ALPHA_TEST_CUTOFF_BYTE:02X}");
    let threshold = format!("{ALPHA_TEST_THRESHOLD:.5}");
    let do_clipping = if hardware_clip_macro {
        do_clipping_macro()
    } else {
        String::new()
    };

    TEMPLATE
        .replace("//BANNER", GENERATED_BANNER)
        .replace("//INCLUDE_GUARD", include_guard)
        .replace("//RESOURCE_SETS", &resource_set_defines())
        .replace("//GLOBAL_CONSTANTS_FIELDS", &global_constants_fields())
        .replace("//GLOBAL_SET", ResourceSet::Global.define_name())
        .replace("//CUTOFF_HEX", &cutoff_hex)
        .replace("//THRESHOLD", &threshold)
        .replace("//DO_CLIPPING\n", &do_clipping)
}
