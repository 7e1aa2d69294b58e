//! Texture contract
//!
//! Textures are shared between render states (`Rc<dyn Texture>`); whichever
//! binder is currently enabled binds and unbinds them.

use super::gpu::GpuContext;

/// Texture binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureTarget {
    #[default]
    Texture2D,
    CubeMap,
    Texture3D,
    Array2D,
}

impl TextureTarget {
    /// Number of texture coordinate components a mesh needs to sample this target
    pub fn uv_components(self) -> u32 {
        match self {
            TextureTarget::CubeMap => 3,
            _ => 2,
        }
    }
}

/// A GPU texture owned elsewhere.
pub trait Texture {
    /// Bind to the currently active texture unit
    fn bind(&self, gpu: &mut dyn GpuContext);

    /// Unbind from the currently active texture unit
    fn unbind(&self, gpu: &mut dyn GpuContext);

    fn target(&self) -> TextureTarget;
}
