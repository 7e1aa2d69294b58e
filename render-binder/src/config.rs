//! Binder configuration (binder.toml)
//!
//! Defaults applied to freshly created render states. Stored in TOML format;
//! every field is optional and falls back to its default.

use std::path::Path;

use binder_shared::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Render-state binder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinderConfig {
    /// Texture unit used for the material texture (default: 0)
    #[serde(default)]
    pub texture_unit: u32,
    /// Initial value of the lights-enabled toggle (default: true)
    #[serde(default = "default_true")]
    pub lights_enabled: bool,
    /// Trace every uniform/attribute name the program does not declare (default: false)
    #[serde(default)]
    pub log_unresolved_bindings: bool,
    /// Initial material values
    #[serde(default)]
    pub material: MaterialDefaults,
}

/// Initial material values for new render states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefaults {
    /// Ambient color (default: 50% gray)
    #[serde(default = "default_ambient")]
    pub ambient: Color,
    /// Diffuse color (default: white)
    #[serde(default = "default_white")]
    pub diffuse: Color,
    /// Specular color (default: black)
    #[serde(default = "default_black")]
    pub specular: Color,
    /// Specular exponent (default: 0.0)
    #[serde(default)]
    pub specular_exponent: f32,
    /// Tint color (default: white)
    #[serde(default = "default_white")]
    pub tint: Color,
}

fn default_true() -> bool {
    true
}
fn default_ambient() -> Color {
    Color::new(0.5, 0.5, 0.5, 1.0)
}
fn default_white() -> Color {
    Color::WHITE
}
fn default_black() -> Color {
    Color::BLACK
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            texture_unit: 0,
            lights_enabled: default_true(),
            log_unresolved_bindings: false,
            material: MaterialDefaults::default(),
        }
    }
}

impl Default for MaterialDefaults {
    fn default() -> Self {
        Self {
            ambient: default_ambient(),
            diffuse: default_white(),
            specular: default_black(),
            specular_exponent: 0.0,
            tint: default_white(),
        }
    }
}

impl BinderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration file, falling back to defaults if it is missing or
    /// cannot be parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default binder config: {}", e);
                Self::default()
            }
        }
    }
}
