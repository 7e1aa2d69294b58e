//! Render-state binding (GL-style uniform/attribute model)
//!
//! # Architecture
//!
//! **MaterialState / LightSet / SkeletonBuffer** (CPU state) → **RenderStateBinder**
//! → **BindingCache** (resolved locations) → **GpuContext** (uniform writes)
//!
//! - Scene code mutates the CPU-side state through the binder's setters
//! - `enable()` resolves the binding cache once per assigned program and then
//!   uploads every uniform in a fixed order
//! - Unresolved bindings are `None` and are skipped by [`UniformWriter`]
//! - The binder is created through a [`CreationContext`], which forwards GPU
//!   context loss/recreation to every live resource

mod binding_cache;
mod context;
mod gpu;
mod lighting;
mod material;
mod program;
mod render_state;
mod skeleton;
mod texture;

pub use binding_cache::{BindingCache, LightLocations, ResolveInputs, names};
pub use context::{CreationContext, GlResource};
pub use gpu::{GpuContext, UniformWriter};
pub use lighting::{Light, LightSet, MAX_LIGHTS};
pub use material::{MaterialColors, MaterialState};
pub use program::{AttributeLocation, ProgramFeatures, ProgramHandle, ShaderProgram, UniformLocation};
pub use render_state::{BinderState, BoundRenderState, RenderStateBinder};
pub use skeleton::{FLOATS_PER_BONE, MAX_BONES, SkeletonBuffer};
pub use texture::{Texture, TextureTarget};
