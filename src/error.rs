//! Error types for conversion and export.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the document transcoder itself.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The export is not valid JSON or does not match the armature schema
    #[error("Malformed armature export: {0}")]
    Parse(#[from] serde_json::Error),

    /// `armature_data` is present but empty
    #[error("Armature export contains no armature")]
    MissingArmature,

    /// A clip time scale that would produce non-finite key times
    #[error("Clip '{clip}' has invalid time scale {value}")]
    InvalidTimeScale { clip: String, value: f64 },
}

/// Failures of the filesystem side: reading, writing and copying.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O failed on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },

    #[error("Failed to serialize skeleton: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid converter config: {0}")]
    Config(String),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> ExportError {
        let path = path.into();
        move |source| ExportError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
