//! Render-state binder
//!
//! Holds the CPU-side material, light and skeleton state of one drawable and
//! uploads it to the assigned shader program on every `enable`.

use std::fmt;
use std::rc::Rc;

use binder_shared::Color;
use glam::{Mat4, Vec3};

use super::guard::BoundRenderState;
use crate::config::BinderConfig;
use crate::error::EnableError;
use crate::graphics::binding_cache::{BindingCache, ResolveInputs};
use crate::graphics::gpu::{GpuContext, UniformWriter};
use crate::graphics::lighting::{Light, LightSet};
use crate::graphics::material::{MaterialColors, MaterialState};
use crate::graphics::program::{AttributeLocation, ShaderProgram};
use crate::graphics::skeleton::SkeletonBuffer;
use crate::graphics::texture::Texture;

/// Where the binder is in its program lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    /// No program assigned
    Unbound,
    /// Program assigned, bindings not resolved yet
    Dirty,
    /// Bindings resolved against the assigned program
    Bound,
}

/// Program reference plus, once resolved, its binding cache.
///
/// Uniform upload only ever sees a `BindingCache`, which exists only in the
/// `Bound` variant.
enum Binding {
    Unbound,
    Dirty(Rc<dyn ShaderProgram>),
    Bound {
        program: Rc<dyn ShaderProgram>,
        cache: BindingCache,
    },
}

/// Binds one drawable's render state to a shader program.
///
/// Create through [`CreationContext::create_render_state`](crate::graphics::CreationContext::create_render_state)
/// so the binder follows GPU context loss, or directly with [`RenderStateBinder::new`].
pub struct RenderStateBinder {
    binding: Binding,
    material: MaterialState,
    lights: LightSet,
    skeleton: SkeletonBuffer,
    lights_enabled: bool,
    texture_unit: u32,
    log_unresolved: bool,
}

impl RenderStateBinder {
    pub fn new(config: &BinderConfig) -> Self {
        Self {
            binding: Binding::Unbound,
            material: MaterialState::new(&config.material),
            lights: LightSet::new(),
            skeleton: SkeletonBuffer::new(),
            lights_enabled: config.lights_enabled,
            texture_unit: config.texture_unit,
            log_unresolved: config.log_unresolved_bindings,
        }
    }

    // ------------------------------------------------------------------------
    // Program
    // ------------------------------------------------------------------------

    /// Assign the program used by the next `enable`.
    ///
    /// Bindings are not resolved here since the program may not be linked
    /// yet. Always moves the binder to [`BinderState::Dirty`].
    pub fn set_program(&mut self, program: Rc<dyn ShaderProgram>) {
        self.binding = Binding::Dirty(program);
    }

    pub fn program(&self) -> Option<&Rc<dyn ShaderProgram>> {
        match &self.binding {
            Binding::Unbound => None,
            Binding::Dirty(program) | Binding::Bound { program, .. } => Some(program),
        }
    }

    pub fn state(&self) -> BinderState {
        match self.binding {
            Binding::Unbound => BinderState::Unbound,
            Binding::Dirty(_) => BinderState::Dirty,
            Binding::Bound { .. } => BinderState::Bound,
        }
    }

    /// Resolved bindings, if the binder is bound
    pub fn binding_cache(&self) -> Option<&BindingCache> {
        match &self.binding {
            Binding::Bound { cache, .. } => Some(cache),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Lights
    // ------------------------------------------------------------------------

    /// Start a new light configuration tagged `id`, dropping every light
    pub fn reset_lights(&mut self, id: u32) {
        self.lights.reset(id);
    }

    pub fn add_light(&mut self, direction: Vec3, ambient: Color, diffuse: Color, specular: Color) {
        self.lights
            .add(Light::new(direction, ambient, diffuse, specular));
    }

    pub fn light_id(&self) -> u32 {
        self.lights.id()
    }

    pub fn lights(&self) -> &LightSet {
        &self.lights
    }

    /// When off, `enable` writes no light uniforms and a light count of 0
    pub fn set_lights_enabled(&mut self, enabled: bool) {
        self.lights_enabled = enabled;
    }

    pub fn lights_enabled(&self) -> bool {
        self.lights_enabled
    }

    // ------------------------------------------------------------------------
    // Material
    // ------------------------------------------------------------------------

    pub fn set_material(
        &mut self,
        ambient: Color,
        diffuse: Color,
        specular: Color,
        specular_exponent: f32,
    ) {
        self.material
            .set(ambient, diffuse, specular, specular_exponent);
    }

    pub fn get_material(&self) -> MaterialColors {
        self.material.colors()
    }

    pub fn set_ambient(&mut self, color: Color) {
        self.material.set_ambient(color);
    }

    pub fn set_diffuse(&mut self, color: Color) {
        self.material.set_diffuse(color);
    }

    pub fn material(&self) -> &MaterialState {
        &self.material
    }

    pub fn texture(&self) -> Option<&Rc<dyn Texture>> {
        self.material.texture()
    }

    /// Set or clear the material texture.
    ///
    /// Does not invalidate resolved bindings. If the bindings were resolved
    /// without a texture, the next `enable` looks up only the sampler uniform
    /// and UV attribute.
    pub fn set_texture(&mut self, texture: Option<Rc<dyn Texture>>) {
        self.material.set_texture(texture);
    }

    pub fn has_texture(&self) -> bool {
        self.material.has_texture()
    }

    /// Texture coordinate components meshes need for the current texture
    pub fn uv_length(&self) -> u32 {
        self.material.uv_length()
    }

    pub fn tint_color(&self) -> &Color {
        self.material.tint_color()
    }

    pub fn set_tint_color(&mut self, color: Color) {
        self.material.set_tint_color(color);
    }

    pub fn uv_transform(&self) -> &Mat4 {
        self.material.uv_transform()
    }

    pub fn set_uv_transform(&mut self, matrix: Mat4) {
        self.material.set_uv_transform(matrix);
    }

    // ------------------------------------------------------------------------
    // Skeleton
    // ------------------------------------------------------------------------

    /// Reallocate the skeleton for `count` bones, all identity
    pub fn set_bones_count(&mut self, count: u16) {
        self.skeleton.set_bones_count(count);
    }

    pub fn bones_count(&self) -> u16 {
        self.skeleton.bones_count()
    }

    /// Copy `16 * bones_count` floats (one column-major 4x4 per bone).
    ///
    /// # Panics
    ///
    /// Panics if `matrices` is shorter than `16 * bones_count`.
    pub fn set_skeleton_matrices(&mut self, matrices: &[f32]) {
        self.skeleton.set_matrices(matrices);
    }

    /// Copy `bones_count` matrices.
    ///
    /// # Panics
    ///
    /// Panics if `matrices` is shorter than `bones_count`.
    pub fn set_bone_matrices(&mut self, matrices: &[Mat4]) {
        self.skeleton.set_bone_matrices(matrices);
    }

    pub fn skeleton_matrices(&self) -> &[f32] {
        self.skeleton.as_floats()
    }

    // ------------------------------------------------------------------------
    // Attributes (None until bound, or when the program lacks them)
    // ------------------------------------------------------------------------

    pub fn attribute_position(&self) -> Option<AttributeLocation> {
        self.binding_cache().and_then(|c| c.position)
    }

    pub fn attribute_normal(&self) -> Option<AttributeLocation> {
        self.binding_cache().and_then(|c| c.normal)
    }

    pub fn attribute_uv(&self) -> Option<AttributeLocation> {
        self.binding_cache().and_then(|c| c.uv)
    }

    pub fn attribute_color(&self) -> Option<AttributeLocation> {
        self.binding_cache().and_then(|c| c.color)
    }

    pub fn attribute_bone_id(&self) -> Option<AttributeLocation> {
        self.binding_cache().and_then(|c| c.bone_id)
    }

    pub fn attribute_bone_weight(&self) -> Option<AttributeLocation> {
        self.binding_cache().and_then(|c| c.bone_weight)
    }

    // ------------------------------------------------------------------------
    // Enable / Disable
    // ------------------------------------------------------------------------

    /// Activate the program and upload every uniform for the next draw.
    ///
    /// Resolves the binding cache first if the program changed since the
    /// last successful enable. On error nothing was uploaded and the caller
    /// must skip the draw.
    pub fn enable(
        &mut self,
        gpu: &mut dyn GpuContext,
        perspective: &Mat4,
        view: &Mat4,
        model: &Mat4,
    ) -> Result<(), EnableError> {
        if let Err(e) = self.activate(gpu) {
            match e {
                EnableError::NoProgram => tracing::trace!("Render state enable skipped: {}", e),
                _ => tracing::warn!("Render state enable failed: {}", e),
            }
            return Err(e);
        }

        if let Binding::Bound { cache, .. } = &self.binding {
            self.upload(gpu, cache, perspective, view, model);
        }
        Ok(())
    }

    /// Release the texture binding acquired by `enable`.
    ///
    /// The program stays active; the next enabled binder activates its own.
    pub fn disable(&self, gpu: &mut dyn GpuContext) {
        if let Some(texture) = self.material.texture() {
            gpu.active_texture(self.texture_unit);
            texture.unbind(gpu);
        }
    }

    /// Scoped `enable`: the returned guard calls `disable` when dropped.
    pub fn bind<'a>(
        &'a mut self,
        gpu: &'a mut dyn GpuContext,
        perspective: &Mat4,
        view: &Mat4,
        model: &Mat4,
    ) -> Result<BoundRenderState<'a>, EnableError> {
        self.enable(gpu, perspective, view, model)?;
        Ok(BoundRenderState::new(self, gpu))
    }

    /// GPU context teardown.
    ///
    /// Drops resolved bindings so the next `enable` re-resolves against the
    /// recreated context, and releases the skeleton buffer.
    pub fn shutdown(&mut self) {
        let binding = std::mem::replace(&mut self.binding, Binding::Unbound);
        self.binding = match binding {
            Binding::Bound { program, .. } | Binding::Dirty(program) => Binding::Dirty(program),
            Binding::Unbound => Binding::Unbound,
        };
        self.skeleton.release();
    }

    fn resolve_inputs(&self) -> ResolveInputs {
        ResolveInputs {
            texturing: self.material.has_texture(),
            skinned: !self.skeleton.is_empty(),
            log_unresolved: self.log_unresolved,
        }
    }

    /// Activate the program, resolving bindings if the binder is dirty.
    ///
    /// A dirty program that fails activation stays dirty. A bound binder
    /// that gained a texture since its bindings were resolved looks up the
    /// sampler and UV attribute once.
    fn activate(&mut self, gpu: &mut dyn GpuContext) -> Result<(), EnableError> {
        let inputs = self.resolve_inputs();
        let cache = match &mut self.binding {
            Binding::Unbound => return Err(EnableError::NoProgram),
            Binding::Bound { program, cache } => {
                if !program.enable(gpu) {
                    return Err(EnableError::ActivationFailed);
                }
                if inputs.texturing {
                    cache.resolve_texturing(&**program, inputs.log_unresolved);
                }
                return Ok(());
            }
            Binding::Dirty(program) => {
                if !program.enable(gpu) {
                    return Err(EnableError::ActivationFailed);
                }
                BindingCache::resolve(&**program, inputs).ok_or(EnableError::ProgramNotLinked)?
            }
        };

        if let Binding::Dirty(program) = std::mem::replace(&mut self.binding, Binding::Unbound) {
            self.binding = Binding::Bound { program, cache };
        }
        Ok(())
    }

    /// Write every uniform in the fixed upload order
    fn upload(
        &self,
        gpu: &mut dyn GpuContext,
        cache: &BindingCache,
        perspective: &Mat4,
        view: &Mat4,
        model: &Mat4,
    ) {
        let mut w = UniformWriter::new(gpu);

        // Lights, in append order
        let active: &[Light] = if self.lights_enabled {
            self.lights.as_slice()
        } else {
            &[]
        };
        for (light, slot) in active.iter().zip(cache.lights.iter()) {
            w.vec3(slot.direction, light.direction());
            w.color(slot.ambient, light.ambient());
            w.color(slot.diffuse, light.diffuse());
            w.color(slot.specular, light.specular());
        }
        let light_count = active.len().min(cache.lights.len());
        w.int(cache.light_count, light_count as i32);

        // Material
        let colors = self.material.colors();
        w.color(cache.material_ambient, &colors.ambient);
        w.color(cache.material_diffuse, &colors.diffuse);
        w.color(cache.material_specular, &colors.specular);
        w.float(cache.material_specular_exponent, colors.specular_exponent);

        // Texture
        if let Some(texture) = self.material.texture() {
            w.gpu().active_texture(self.texture_unit);
            texture.bind(w.gpu());
            w.int(cache.texture0, self.texture_unit as i32);
        }

        w.color(cache.tint_color, self.material.tint_color());

        // Transforms
        w.mat4(cache.perspective, perspective);
        w.mat4(cache.view, view);
        w.mat4(cache.model, model);
        if cache.uv_transform_enabled {
            w.mat4(cache.uv_transform, self.material.uv_transform());
        }

        // Skinning
        w.mat4_array(cache.bone_matrices, self.skeleton.as_floats());
    }
}

impl Default for RenderStateBinder {
    fn default() -> Self {
        Self::new(&BinderConfig::default())
    }
}

impl fmt::Debug for RenderStateBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderStateBinder")
            .field("state", &self.state())
            .field("program", &self.program().and_then(|p| p.handle()))
            .field("material", &self.material)
            .field("lights", &self.lights)
            .field("bones_count", &self.skeleton.bones_count())
            .field("lights_enabled", &self.lights_enabled)
            .field("texture_unit", &self.texture_unit)
            .finish()
    }
}
