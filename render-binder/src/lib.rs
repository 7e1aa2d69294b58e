//! Render-state binder - Library interface
//!
//! Maps an abstract material / lighting / skinning description onto the
//! uniform and attribute bindings of a linked shader program, and performs the
//! per-draw synchronization between CPU-side scene data and GPU program state.
//!
//! # Architecture
//!
//! **Scene code** (configures state) → **RenderStateBinder** (per-draw upload) → **GpuContext**
//!
//! - Scene code sets material, lights and skeleton once per logical object
//! - `enable()` activates the program, resolves bindings when the program
//!   changed, and uploads every uniform in a fixed order
//! - `disable()` releases the texture binding acquired by `enable()`
//! - The shader program, textures and the GPU context are external
//!   collaborators reached through the traits in [`graphics`]

pub mod config;
pub mod error;
pub mod graphics;

#[cfg(test)]
pub mod test_utils;

pub use binder_shared::Color;
pub use config::{BinderConfig, MaterialDefaults};
pub use error::{ConfigError, EnableError};
pub use graphics::{
    AttributeLocation, BinderState, BindingCache, BoundRenderState, CreationContext, GlResource,
    GpuContext, Light, LightLocations, LightSet, MAX_BONES, MAX_LIGHTS, MaterialColors,
    MaterialState, ProgramFeatures, ProgramHandle, RenderStateBinder, ShaderProgram,
    SkeletonBuffer, Texture, TextureTarget, UniformLocation,
};
