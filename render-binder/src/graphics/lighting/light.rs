use binder_shared::Color;
use glam::Vec3;
use smallvec::SmallVec;

use super::MAX_LIGHTS;

/// One directional light
///
/// Immutable once created; a light set is rebuilt rather than edited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    direction: Vec3,
    ambient: Color,
    diffuse: Color,
    specular: Color,
}

impl Light {
    pub fn new(direction: Vec3, ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            direction,
            ambient,
            diffuse,
            specular,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn ambient(&self) -> &Color {
        &self.ambient
    }

    pub fn diffuse(&self) -> &Color {
        &self.diffuse
    }

    pub fn specular(&self) -> &Color {
        &self.specular
    }
}

/// Ordered collection of directional lights with a generation id
///
/// The id identifies which light configuration the set currently holds, so
/// callers batching draws can tell whether two render states share lights.
/// Lights are uploaded in append order.
#[derive(Clone, Debug, Default)]
pub struct LightSet {
    id: u32,
    lights: SmallVec<[Light; MAX_LIGHTS]>,
}

impl LightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the generation id and drop every light
    pub fn reset(&mut self, id: u32) {
        self.id = id;
        self.lights.clear();
    }

    /// Append a light.
    ///
    /// The shader only has [`MAX_LIGHTS`] slots; lights past that bound are
    /// dropped with a warning. No deduplication is performed.
    pub fn add(&mut self, light: Light) {
        if self.lights.len() >= MAX_LIGHTS {
            tracing::warn!(
                "Light set {} already holds {} lights, dropping {:?}",
                self.id,
                MAX_LIGHTS,
                light
            );
            return;
        }
        self.lights.push(light);
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    pub fn as_slice(&self) -> &[Light] {
        &self.lights
    }
}
