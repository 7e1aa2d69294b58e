//! Material state
//!
//! Phong-style material colors, the optional material texture, the UV
//! transform and the tint color of one render state.

use std::fmt;
use std::rc::Rc;

use binder_shared::Color;
use glam::Mat4;

use super::texture::Texture;
use crate::config::MaterialDefaults;

/// The ambient/diffuse/specular triple plus specular exponent, read and
/// written as one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialColors {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub specular_exponent: f32,
}

/// Per-render-state material
///
/// The texture is shared with other render states; its lifetime is managed by
/// whoever created it.
#[derive(Clone)]
pub struct MaterialState {
    pub(crate) colors: MaterialColors,
    pub(crate) texture: Option<Rc<dyn Texture>>,
    pub(crate) tint_color: Color,
    pub(crate) uv_transform: Mat4,
}

impl MaterialState {
    pub fn new(defaults: &MaterialDefaults) -> Self {
        Self {
            colors: MaterialColors {
                ambient: defaults.ambient,
                diffuse: defaults.diffuse,
                specular: defaults.specular,
                specular_exponent: defaults.specular_exponent,
            },
            texture: None,
            tint_color: defaults.tint,
            uv_transform: Mat4::IDENTITY,
        }
    }

    /// Set all material colors and the specular exponent. Any exponent is accepted.
    pub fn set(&mut self, ambient: Color, diffuse: Color, specular: Color, specular_exponent: f32) {
        self.colors = MaterialColors {
            ambient,
            diffuse,
            specular,
            specular_exponent,
        };
    }

    pub fn colors(&self) -> MaterialColors {
        self.colors
    }

    pub fn set_ambient(&mut self, color: Color) {
        self.colors.ambient = color;
    }

    pub fn set_diffuse(&mut self, color: Color) {
        self.colors.diffuse = color;
    }

    pub fn texture(&self) -> Option<&Rc<dyn Texture>> {
        self.texture.as_ref()
    }

    pub fn set_texture(&mut self, texture: Option<Rc<dyn Texture>>) {
        self.texture = texture;
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Texture coordinate components meshes drawn with this material need:
    /// 0 without a texture, 3 for cube maps, 2 otherwise.
    pub fn uv_length(&self) -> u32 {
        self.texture
            .as_ref()
            .map_or(0, |texture| texture.target().uv_components())
    }

    pub fn tint_color(&self) -> &Color {
        &self.tint_color
    }

    pub fn set_tint_color(&mut self, color: Color) {
        self.tint_color = color;
    }

    pub fn uv_transform(&self) -> &Mat4 {
        &self.uv_transform
    }

    pub fn set_uv_transform(&mut self, matrix: Mat4) {
        self.uv_transform = matrix;
    }
}

impl Default for MaterialState {
    fn default() -> Self {
        Self::new(&MaterialDefaults::default())
    }
}

impl fmt::Debug for MaterialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialState")
            .field("colors", &self.colors)
            .field("texture", &self.texture.as_ref().map(|t| t.target()))
            .field("tint_color", &self.tint_color)
            .field("uv_transform", &self.uv_transform)
            .finish()
    }
}
