//! GPU binding state
//!
//! [`GpuContext`] is the explicit handle to the global binding state of the
//! rendering thread (current program, active texture unit, uniform values).
//! It is threaded through `enable`/`disable` instead of being ambient.

use binder_shared::Color;
use glam::{Mat4, Vec3};

use super::program::UniformLocation;

/// Uniform and texture-unit operations of the GPU context.
///
/// Every method takes an already resolved location; there is no way to
/// express a write to a missing uniform at this level.
pub trait GpuContext {
    /// Select the texture unit subsequent texture binds apply to
    fn active_texture(&mut self, unit: u32);

    fn uniform_1i(&mut self, location: UniformLocation, value: i32);

    fn uniform_1f(&mut self, location: UniformLocation, value: f32);

    fn uniform_3f(&mut self, location: UniformLocation, x: f32, y: f32, z: f32);

    fn uniform_4f(&mut self, location: UniformLocation, value: &[f32; 4]);

    /// Upload `matrices.len() / 16` consecutive 4x4 matrices, not transposed
    fn uniform_matrix4fv(&mut self, location: UniformLocation, matrices: &[f32]);
}

/// Writes uniforms through optional locations.
///
/// A `None` location turns the write into a no-op, so a shader variant that
/// omits a feature degrades gracefully.
pub struct UniformWriter<'a> {
    gpu: &'a mut dyn GpuContext,
}

impl<'a> UniformWriter<'a> {
    pub fn new(gpu: &'a mut dyn GpuContext) -> Self {
        Self { gpu }
    }

    /// Access the underlying context for non-uniform calls (texture binds)
    pub fn gpu(&mut self) -> &mut dyn GpuContext {
        &mut *self.gpu
    }

    #[inline]
    pub fn int(&mut self, location: Option<UniformLocation>, value: i32) {
        if let Some(location) = location {
            self.gpu.uniform_1i(location, value);
        }
    }

    #[inline]
    pub fn float(&mut self, location: Option<UniformLocation>, value: f32) {
        if let Some(location) = location {
            self.gpu.uniform_1f(location, value);
        }
    }

    #[inline]
    pub fn vec3(&mut self, location: Option<UniformLocation>, value: Vec3) {
        if let Some(location) = location {
            self.gpu.uniform_3f(location, value.x, value.y, value.z);
        }
    }

    #[inline]
    pub fn color(&mut self, location: Option<UniformLocation>, value: &Color) {
        if let Some(location) = location {
            self.gpu.uniform_4f(location, value.data());
        }
    }

    #[inline]
    pub fn mat4(&mut self, location: Option<UniformLocation>, value: &Mat4) {
        if let Some(location) = location {
            self.gpu.uniform_matrix4fv(location, &value.to_cols_array());
        }
    }

    /// Upload a flat array of 4x4 matrices. Empty arrays are skipped.
    #[inline]
    pub fn mat4_array(&mut self, location: Option<UniformLocation>, matrices: &[f32]) {
        if matrices.is_empty() {
            return;
        }
        if let Some(location) = location {
            self.gpu.uniform_matrix4fv(location, matrices);
        }
    }
}
