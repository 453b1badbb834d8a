use std::process::ExitCode;

use crate::error::TemplateError;

/// Exit status of the tool.
///
/// Fatal filesystem conditions use the conventional errno values so callers
/// can tell "not found" apart from "permission denied".
///
/// - `Success` (0): template written
/// - `Error` (1): any other failure (usage errors, unreadable file contents)
/// - `NotFound` (2): a required directory is missing (ENOENT)
/// - `PermissionDenied` (13): a file could not be opened (EACCES)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
    NotFound,
    PermissionDenied,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Error => 1,
            ExitStatus::NotFound => 2,
            ExitStatus::PermissionDenied => 13,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl From<&TemplateError> for ExitStatus {
    fn from(err: &TemplateError) -> Self {
        match err {
            TemplateError::MissingDirectory(_) => ExitStatus::NotFound,
            TemplateError::ReadDenied(_) | TemplateError::WriteDenied(_) => {
                ExitStatus::PermissionDenied
            }
            TemplateError::Read { .. } | TemplateError::Write { .. } => ExitStatus::Error,
        }
    }
}

impl From<&anyhow::Error> for ExitStatus {
    fn from(err: &anyhow::Error) -> Self {
        err.downcast_ref::<TemplateError>()
            .map_or(ExitStatus::Error, ExitStatus::from)
    }
}
