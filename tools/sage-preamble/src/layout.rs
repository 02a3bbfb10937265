//! `layout` command

use sage_shader_common::global_constants::GlobalConstants;
use sage_shader_common::resource_set::ResourceSet;

/// Resource sets and the `GlobalConstants` field table as plain text
pub fn render_table() -> String {
    let mut out = String::from("Resource sets:\n");
    for set in ResourceSet::ALL {
        out.push_str(&format!("  {:<40} {}\n", set.define_name(), set.index()));
    }

    out.push_str(&format!(
        "\nGlobalConstantsType ({} bytes):\n",
        GlobalConstants::SIZE
    ));
    out.push_str(&format!(
        "  {:<20} {:<20} {:>6} {:>6}\n",
        "field", "glsl", "offset", "size"
    ));
    for field in GlobalConstants::LAYOUT {
        out.push_str(&format!(
            "  {:<20} {:<20} {:>6} {:>6}\n",
            field.name, field.glsl_name, field.offset, field.size
        ));
    }
    out
}
