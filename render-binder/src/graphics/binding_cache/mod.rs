//! Binding cache
//!
//! Every uniform and attribute location the binder writes, resolved once per
//! assigned program. A location the program does not declare is `None` and
//! every write to it is skipped.

pub mod names;


use super::lighting::MAX_LIGHTS;
use super::program::{
    AttributeLocation, ProgramFeatures, ProgramHandle, ShaderProgram, UniformLocation,
};

/// Locations of one `u_lights[i]` element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightLocations {
    pub direction: Option<UniformLocation>,
    pub ambient: Option<UniformLocation>,
    pub diffuse: Option<UniformLocation>,
    pub specular: Option<UniformLocation>,
}

/// Render-state facts that decide which optional bindings are looked up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveInputs {
    /// A material texture is set
    pub texturing: bool,
    /// A non-empty skeleton buffer exists
    pub skinned: bool,
    /// Trace every name the program does not declare
    pub log_unresolved: bool,
}

/// Resolved locations for one linked program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingCache {
    pub program: ProgramHandle,
    pub uv_transform_enabled: bool,
    pub vertex_color_enabled: bool,
    /// The sampler and UV attribute have been looked up
    pub texturing_resolved: bool,

    pub perspective: Option<UniformLocation>,
    pub view: Option<UniformLocation>,
    pub model: Option<UniformLocation>,
    pub uv_transform: Option<UniformLocation>,
    pub light_count: Option<UniformLocation>,
    /// One entry per shader light slot, resolved even if fewer lights are ever bound
    pub lights: [LightLocations; MAX_LIGHTS],
    pub material_ambient: Option<UniformLocation>,
    pub material_diffuse: Option<UniformLocation>,
    pub material_specular: Option<UniformLocation>,
    pub material_specular_exponent: Option<UniformLocation>,
    pub texture0: Option<UniformLocation>,
    pub tint_color: Option<UniformLocation>,
    pub bone_matrices: Option<UniformLocation>,

    pub position: Option<AttributeLocation>,
    pub normal: Option<AttributeLocation>,
    pub uv: Option<AttributeLocation>,
    pub color: Option<AttributeLocation>,
    pub bone_id: Option<AttributeLocation>,
    pub bone_weight: Option<AttributeLocation>,
}

/// Lookup helper that optionally traces names the program does not declare
struct Resolver<'a> {
    program: &'a dyn ShaderProgram,
    handle: ProgramHandle,
    log_unresolved: bool,
}

impl Resolver<'_> {
    fn uniform(&self, name: &str) -> Option<UniformLocation> {
        let location = self.program.uniform_location(name);
        if location.is_none() && self.log_unresolved {
            tracing::trace!("Program {:?}: uniform '{}' not found", self.handle, name);
        }
        location
    }

    fn attribute(&self, name: &str) -> Option<AttributeLocation> {
        let location = self.program.attribute_location(name);
        if location.is_none() && self.log_unresolved {
            tracing::trace!("Program {:?}: attribute '{}' not found", self.handle, name);
        }
        location
    }

    fn light(&self, index: usize) -> LightLocations {
        let [direction, ambient, diffuse, specular] =
            names::LIGHT_FIELDS.map(|field| self.uniform(&names::light_uniform(index, field)));
        LightLocations {
            direction,
            ambient,
            diffuse,
            specular,
        }
    }
}

impl BindingCache {
    /// Resolve every binding of `program`.
    ///
    /// Returns `None` if the program has no linked GPU handle. Optional
    /// bindings are only looked up when they can apply: the UV transform and
    /// vertex color when the program declares the feature, the sampler and
    /// UV attribute when texturing, the bone bindings when skinned.
    pub fn resolve(program: &dyn ShaderProgram, inputs: ResolveInputs) -> Option<Self> {
        let handle = program.handle()?;
        let r = Resolver {
            program,
            handle,
            log_unresolved: inputs.log_unresolved,
        };

        let uv_transform_enabled = program.supports_features(ProgramFeatures::UV_TRANSFORM);
        let vertex_color_enabled = program.supports_features(ProgramFeatures::VERTEX_COLOR);

        tracing::debug!(
            "Resolving bindings: program={:?}, texturing={}, skinned={}, uv_transform={}, vertex_color={}",
            handle,
            inputs.texturing,
            inputs.skinned,
            uv_transform_enabled,
            vertex_color_enabled
        );

        let perspective = r.uniform(names::PERSPECTIVE);
        let view = r.uniform(names::VIEW);
        let model = r.uniform(names::MODEL);
        let light_count = r.uniform(names::LIGHT_COUNT);
        let uv_transform = if uv_transform_enabled {
            r.uniform(names::UV_TRANSFORM)
        } else {
            None
        };

        let lights = std::array::from_fn(|index| r.light(index));

        let material_ambient = r.uniform(names::MATERIAL_AMBIENT);
        let material_diffuse = r.uniform(names::MATERIAL_DIFFUSE);
        let material_specular = r.uniform(names::MATERIAL_SPECULAR);
        let material_specular_exponent = r.uniform(names::MATERIAL_SPECULAR_EXPONENT);

        let texture0 = if inputs.texturing {
            r.uniform(names::TEXTURE0)
        } else {
            None
        };
        let tint_color = r.uniform(names::TINT_COLOR);

        let position = r.attribute(names::ATTR_POSITION);
        let normal = r.attribute(names::ATTR_NORMAL);
        let uv = if inputs.texturing {
            r.attribute(names::ATTR_UV)
        } else {
            None
        };
        let color = if vertex_color_enabled {
            r.attribute(names::ATTR_COLOR)
        } else {
            None
        };

        let (bone_id, bone_weight, bone_matrices) = if inputs.skinned {
            (
                r.attribute(names::ATTR_BONE_ID),
                r.attribute(names::ATTR_BONE_WEIGHT),
                r.uniform(names::JOINT_MATRIX),
            )
        } else {
            (None, None, None)
        };

        Some(Self {
            program: handle,
            uv_transform_enabled,
            vertex_color_enabled,
            texturing_resolved: inputs.texturing,
            perspective,
            view,
            model,
            uv_transform,
            light_count,
            lights,
            material_ambient,
            material_diffuse,
            material_specular,
            material_specular_exponent,
            texture0,
            tint_color,
            bone_matrices,
            position,
            normal,
            uv,
            color,
            bone_id,
            bone_weight,
        })
    }

    /// Look up the sampler uniform and UV attribute if that has not happened
    /// yet, for a texture assigned after the cache was resolved.
    ///
    /// Runs at most once per cache; nothing else is re-resolved.
    pub fn resolve_texturing(&mut self, program: &dyn ShaderProgram, log_unresolved: bool) {
        if self.texturing_resolved {
            return;
        }
        let r = Resolver {
            program,
            handle: self.program,
            log_unresolved,
        };
        tracing::debug!("Resolving texturing bindings: program={:?}", self.program);
        self.texture0 = r.uniform(names::TEXTURE0);
        self.uv = r.attribute(names::ATTR_UV);
        self.texturing_resolved = true;
    }
}
