use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failed read or write of a user file.
/// Carries the rendered io error instead of the error itself so it can be
/// cloned into UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("could not read {}: {detail}", path.display())]
    Read { path: PathBuf, kind: io::ErrorKind, detail: String },

    #[error("could not write {}: {detail}", path.display())]
    Write { path: PathBuf, kind: io::ErrorKind, detail: String },
}

impl FileError {
    pub fn read(path: PathBuf, error: &io::Error) -> Self {
        Self::Read {
            path,
            kind: error.kind(),
            detail: error.to_string(),
        }
    }

    pub fn write(path: PathBuf, error: &io::Error) -> Self {
        Self::Write {
            path,
            kind: error.kind(),
            detail: error.to_string(),
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::Read { detail, .. } | Self::Write { detail, .. } => detail,
        }
    }
}
