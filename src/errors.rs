use std::{io, path::PathBuf};

/// Error type shared by every trash operation.
#[derive(thiserror::Error, Debug)]
pub enum TrashError {
    /// File system I/O failure.
    #[error("I/O error while accessing {0}")]
    Io(PathBuf, #[source] io::Error),

    /// The origin path, trashed item, or its record does not exist.
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// A directory was given without the recursive flag.
    #[error("{0} is a directory, recursive not set")]
    RecursiveRequired(PathBuf),

    /// Restore target is occupied and overwrite was not requested.
    #[error("file already exists in original location: {0}")]
    DestinationExists(PathBuf),

    /// A metadata record could not be parsed.
    #[error("malformed trash info {path}: {reason}")]
    MalformedRecord { path: PathBuf, reason: String },

    /// A path is invalid for the current operation.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A required input is missing.
    #[error("missing required value: {0}")]
    MissingValue(String),

    /// Emptying the trash stopped partway; `removed` lists what is already gone.
    #[error("emptying trash stopped after {} item(s): {source}", .removed.len())]
    Interrupted {
        removed: Vec<String>,
        #[source]
        source: Box<TrashError>,
    },
}

impl TrashError {
    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingValue(message.into())
    }

    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Names removed before the failure, for errors coming out of `empty`.
    pub fn removed(&self) -> &[String] {
        match self {
            Self::Interrupted { removed, .. } => removed,
            _ => &[],
        }
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, TrashError>;
