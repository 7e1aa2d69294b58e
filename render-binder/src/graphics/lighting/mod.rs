// ============================================================================
// Lighting Module
// ============================================================================
//
// Directional lights and the generation-tagged collection the binder uploads
// on every enable.
//
// - light: Light value type and LightSet collection
// - tests: light set behaviour

mod light;


pub use light::{Light, LightSet};

/// Number of light slots declared by the shader's `u_lights` array
pub const MAX_LIGHTS: usize = 4;
