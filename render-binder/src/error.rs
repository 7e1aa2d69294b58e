//! Error types for the render-state binder
//!
//! All of these are local and recoverable: an [`EnableError`] means "skip this
//! draw and try again next frame", a [`ConfigError`] means "fall back to
//! defaults".

use std::path::PathBuf;

use thiserror::Error;

/// Reasons `RenderStateBinder::enable` refused to prepare a draw.
///
/// The caller must not issue the draw call when any of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnableError {
    #[error("no shader program assigned")]
    NoProgram,
    #[error("shader program could not be activated")]
    ActivationFailed,
    #[error("shader program has no linked GPU handle")]
    ProgramNotLinked,
}

/// Failure to read or parse a binder configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
