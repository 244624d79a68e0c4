use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Io = 1,
    InvalidArguments = 2,
}

/// Fatal generation failures. Only I/O on the source or destination can
/// fail; parsing and rendering are total.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::ReadSource { .. } | Self::WriteOutput { .. } => ExitCode::Io,
        }
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;
