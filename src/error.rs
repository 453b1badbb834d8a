use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that abort template generation.
///
/// Recoverable conditions (missing type directories, missing category files,
/// empty categories) are reported as warnings instead and never reach here.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("'{}' directory not found, cannot create translation template", .0.display())]
    MissingDirectory(PathBuf),

    #[error("cannot open '{}' for reading, permission denied", .0.display())]
    ReadDenied(PathBuf),

    #[error("cannot open '{}' for writing, permission denied", .0.display())]
    WriteDenied(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TemplateError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::ReadDenied(path),
            _ => Self::Read { path, source },
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::WriteDenied(path),
            _ => Self::Write { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
