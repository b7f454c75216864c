use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a run description.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read run description {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The TOML is malformed or has the wrong shape.
    #[error("failed to parse run description: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but failed model validation.
    #[error(transparent)]
    Model(#[from] crate::model::Error),

    /// A layer entry is ambiguous or empty.
    #[error("layer {index}: {detail}")]
    InvalidLayer { index: usize, detail: String },

    /// A required section is missing.
    #[error("run description is incomplete: {0}")]
    Incomplete(String),
}

impl Error {
    pub fn invalid_layer(index: usize, details: impl Into<String>) -> Self {
        Self::InvalidLayer {
            index,
            detail: details.into(),
        }
    }
}
