//! Error types for asset decoding and engine construction.

use thiserror::Error;

/// Errors that can occur while building a particle cloud
#[derive(Debug, Error)]
pub enum Error {
    /// The glTF/GLB container could not be parsed
    #[error("glTF parse error: {0}")]
    Gltf(#[from] gltf::Error),

    /// A buffer referenced by an accessor has no data
    #[error("buffer {index} has no data")]
    MissingBuffer { index: usize },

    /// Buffers stored outside the GLB binary chunk are not resolved
    #[error("external buffer not supported: {uri}")]
    ExternalBuffer { uri: String },

    /// The document defines no scene to walk
    #[error("model contains no scene")]
    NoScene,

    /// Cloud parameters failed validation
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, Error>;
