//! Shader program contract
//!
//! The binder never compiles or links programs itself. It only needs to
//! activate a program and look up named locations in it.

use std::num::NonZeroU32;

use super::gpu::GpuContext;

/// Handle to a linked GPU program. A zero handle means "not linked" and is
/// represented as `None` by [`ShaderProgram::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub NonZeroU32);

/// Resolved location of a uniform inside a linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// Resolved location of a vertex attribute inside a linked program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeLocation(pub u32);

bitflags::bitflags! {
    /// Optional features a shader variant may declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProgramFeatures: u32 {
        /// Program declares `u_uv_transform`
        const UV_TRANSFORM = 1 << 0;
        /// Program declares the `a_color` vertex attribute
        const VERTEX_COLOR = 1 << 1;
    }
}

/// A compiled and (possibly) linked GPU program.
pub trait ShaderProgram {
    /// GPU handle, or `None` while the program is not linked
    fn handle(&self) -> Option<ProgramHandle>;

    /// Make this program current. Returns false if activation failed.
    fn enable(&self, gpu: &mut dyn GpuContext) -> bool;

    /// Look up a uniform by its exact shader name
    fn uniform_location(&self, name: &str) -> Option<UniformLocation>;

    /// Look up a vertex attribute by its exact shader name
    fn attribute_location(&self, name: &str) -> Option<AttributeLocation>;

    /// Whether this program variant was built with all of `features`
    fn supports_features(&self, features: ProgramFeatures) -> bool;
}
