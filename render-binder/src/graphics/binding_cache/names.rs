//! Uniform and attribute names
//!
//! These must match the shader sources bit for bit.

pub const PERSPECTIVE: &str = "u_perspective";
pub const VIEW: &str = "u_view";
pub const MODEL: &str = "u_model";
pub const UV_TRANSFORM: &str = "u_uv_transform";
pub const LIGHT_COUNT: &str = "u_lightCount";
pub const TEXTURE0: &str = "u_texture0";
pub const TINT_COLOR: &str = "u_tintColor";
pub const JOINT_MATRIX: &str = "u_jointMatrix";

pub const MATERIAL_AMBIENT: &str = "u_material.ambient";
pub const MATERIAL_DIFFUSE: &str = "u_material.diffuse";
pub const MATERIAL_SPECULAR: &str = "u_material.specular";
pub const MATERIAL_SPECULAR_EXPONENT: &str = "u_material.specularExponent";

pub const ATTR_POSITION: &str = "a_position";
pub const ATTR_NORMAL: &str = "a_normal";
pub const ATTR_UV: &str = "a_uv";
pub const ATTR_COLOR: &str = "a_color";
pub const ATTR_BONE_ID: &str = "a_boneId";
pub const ATTR_BONE_WEIGHT: &str = "a_boneWeight";

/// Fields of one element of the `u_lights` struct array
pub const LIGHT_FIELDS: [&str; 4] = ["direction", "ambient", "diffuse", "specular"];

/// `u_lights[<index>].<field>`
pub fn light_uniform(index: usize, field: &str) -> String {
    format!("u_lights[{}].{}", index, field)
}
