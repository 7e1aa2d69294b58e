//! Shared test utilities for unit and integration tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;

use crate::graphics::{
    AttributeLocation, GpuContext, MAX_LIGHTS, ProgramFeatures, ProgramHandle, ShaderProgram,
    Texture, TextureTarget, UniformLocation, names,
};

/// Install a test-friendly tracing subscriber. Honors `RUST_LOG`; repeated
/// calls are ignored.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Recorded GPU calls
// ============================================================================

/// One call observed by the test GPU, program or texture
#[derive(Debug, Clone, PartialEq)]
pub enum GpuCall {
    UseProgram(u32),
    ActiveTexture(u32),
    BindTexture(u32),
    UnbindTexture(u32),
    Uniform1i(UniformLocation, i32),
    Uniform1f(UniformLocation, f32),
    Uniform3f(UniformLocation, [f32; 3]),
    Uniform4f(UniformLocation, [f32; 4]),
    UniformMatrix4fv(UniformLocation, Vec<f32>),
}

impl GpuCall {
    /// Location written by a uniform call, `None` for other calls
    pub fn uniform_location(&self) -> Option<UniformLocation> {
        match self {
            GpuCall::Uniform1i(l, _)
            | GpuCall::Uniform1f(l, _)
            | GpuCall::Uniform3f(l, _)
            | GpuCall::Uniform4f(l, _)
            | GpuCall::UniformMatrix4fv(l, _) => Some(*l),
            _ => None,
        }
    }
}

/// Call log shared between the test GPU and the fakes that talk to it
pub type CallLog = Rc<RefCell<Vec<GpuCall>>>;

// ============================================================================
// Test GPU
// ============================================================================

/// GPU context that records every call in order
#[derive(Default)]
pub struct RecordingGpu {
    log: CallLog,
}

impl RecordingGpu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the log, for fakes that must record into the same stream
    pub fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    pub fn calls(&self) -> Vec<GpuCall> {
        self.log.borrow().clone()
    }

    pub fn uniform_writes(&self) -> Vec<GpuCall> {
        self.log
            .borrow()
            .iter()
            .filter(|c| c.uniform_location().is_some())
            .cloned()
            .collect()
    }

    /// Every call that wrote `location`
    pub fn writes_to(&self, location: UniformLocation) -> Vec<GpuCall> {
        self.log
            .borrow()
            .iter()
            .filter(|c| c.uniform_location() == Some(location))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    fn push(&self, call: GpuCall) {
        self.log.borrow_mut().push(call);
    }
}

impl GpuContext for RecordingGpu {
    fn active_texture(&mut self, unit: u32) {
        self.push(GpuCall::ActiveTexture(unit));
    }

    fn uniform_1i(&mut self, location: UniformLocation, value: i32) {
        self.push(GpuCall::Uniform1i(location, value));
    }

    fn uniform_1f(&mut self, location: UniformLocation, value: f32) {
        self.push(GpuCall::Uniform1f(location, value));
    }

    fn uniform_3f(&mut self, location: UniformLocation, x: f32, y: f32, z: f32) {
        self.push(GpuCall::Uniform3f(location, [x, y, z]));
    }

    fn uniform_4f(&mut self, location: UniformLocation, value: &[f32; 4]) {
        self.push(GpuCall::Uniform4f(location, *value));
    }

    fn uniform_matrix4fv(&mut self, location: UniformLocation, matrices: &[f32]) {
        self.push(GpuCall::UniformMatrix4fv(location, matrices.to_vec()));
    }
}

// ============================================================================
// Test program
// ============================================================================

/// Shader program with a fixed name → location table
pub struct FakeProgram {
    handle: Option<ProgramHandle>,
    features: ProgramFeatures,
    uniforms: HashMap<String, UniformLocation>,
    attributes: HashMap<String, AttributeLocation>,
    activation_ok: Cell<bool>,
    uniform_lookups: RefCell<Vec<String>>,
    attribute_lookups: RefCell<Vec<String>>,
    log: CallLog,
}

impl FakeProgram {
    /// Program declaring every uniform and attribute the binder knows about,
    /// with both optional features enabled.
    pub fn standard(id: u32, log: CallLog) -> Self {
        let mut uniform_names: Vec<String> = vec![
            names::PERSPECTIVE.into(),
            names::VIEW.into(),
            names::MODEL.into(),
            names::UV_TRANSFORM.into(),
            names::LIGHT_COUNT.into(),
            names::MATERIAL_AMBIENT.into(),
            names::MATERIAL_DIFFUSE.into(),
            names::MATERIAL_SPECULAR.into(),
            names::MATERIAL_SPECULAR_EXPONENT.into(),
            names::TEXTURE0.into(),
            names::TINT_COLOR.into(),
            names::JOINT_MATRIX.into(),
        ];
        for index in 0..MAX_LIGHTS {
            for field in names::LIGHT_FIELDS {
                uniform_names.push(names::light_uniform(index, field));
            }
        }
        let uniforms = uniform_names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name, UniformLocation(i as u32)))
            .collect();

        let attributes = [
            names::ATTR_POSITION,
            names::ATTR_NORMAL,
            names::ATTR_UV,
            names::ATTR_COLOR,
            names::ATTR_BONE_ID,
            names::ATTR_BONE_WEIGHT,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name.to_string(), AttributeLocation(i as u32)))
        .collect();

        Self {
            handle: NonZeroU32::new(id).map(ProgramHandle),
            features: ProgramFeatures::all(),
            uniforms,
            attributes,
            activation_ok: Cell::new(true),
            uniform_lookups: RefCell::new(Vec::new()),
            attribute_lookups: RefCell::new(Vec::new()),
            log,
        }
    }

    pub fn with_features(mut self, features: ProgramFeatures) -> Self {
        self.features = features;
        self
    }

    /// Remove a uniform, as a shader variant that never uses it would
    pub fn without_uniform(mut self, name: &str) -> Self {
        self.uniforms.remove(name);
        self
    }

    /// Program whose GPU handle is zero
    pub fn unlinked(mut self) -> Self {
        self.handle = None;
        self
    }

    pub fn shared(self) -> Rc<FakeProgram> {
        Rc::new(self)
    }

    pub fn set_activation_ok(&self, ok: bool) {
        self.activation_ok.set(ok);
    }

    /// Location of a declared uniform
    pub fn uniform(&self, name: &str) -> UniformLocation {
        self.uniforms[name]
    }

    pub fn attribute(&self, name: &str) -> AttributeLocation {
        self.attributes[name]
    }

    pub fn uniform_lookups(&self) -> Vec<String> {
        self.uniform_lookups.borrow().clone()
    }

    pub fn attribute_lookups(&self) -> Vec<String> {
        self.attribute_lookups.borrow().clone()
    }

    /// How many times the binding cache was resolved against this program
    pub fn resolve_count(&self) -> usize {
        self.uniform_lookups
            .borrow()
            .iter()
            .filter(|name| name.as_str() == names::PERSPECTIVE)
            .count()
    }
}

impl ShaderProgram for FakeProgram {
    fn handle(&self) -> Option<ProgramHandle> {
        self.handle
    }

    fn enable(&self, _gpu: &mut dyn GpuContext) -> bool {
        let ok = self.activation_ok.get();
        if ok {
            let id = self.handle.map_or(0, |h| h.0.get());
            self.log.borrow_mut().push(GpuCall::UseProgram(id));
        }
        ok
    }

    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.uniform_lookups.borrow_mut().push(name.to_string());
        self.uniforms.get(name).copied()
    }

    fn attribute_location(&self, name: &str) -> Option<AttributeLocation> {
        self.attribute_lookups.borrow_mut().push(name.to_string());
        self.attributes.get(name).copied()
    }

    fn supports_features(&self, features: ProgramFeatures) -> bool {
        self.features.contains(features)
    }
}

// ============================================================================
// Test texture
// ============================================================================

/// Texture that records bind/unbind into a call log
pub struct FakeTexture {
    id: u32,
    target: TextureTarget,
    log: CallLog,
}

impl FakeTexture {
    pub fn new(id: u32, target: TextureTarget, log: CallLog) -> Self {
        Self { id, target, log }
    }

    /// Shared texture with its own private log
    pub fn shared(id: u32, target: TextureTarget) -> Rc<dyn Texture> {
        Rc::new(Self::new(id, target, CallLog::default()))
    }
}

impl Texture for FakeTexture {
    fn bind(&self, _gpu: &mut dyn GpuContext) {
        self.log.borrow_mut().push(GpuCall::BindTexture(self.id));
    }

    fn unbind(&self, _gpu: &mut dyn GpuContext) {
        self.log.borrow_mut().push(GpuCall::UnbindTexture(self.id));
    }

    fn target(&self) -> TextureTarget {
        self.target
    }
}
