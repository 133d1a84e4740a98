//! Error types and exit codes for berray-doc

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use crate::resolve::ResolveError;

/// Main error type for berray-doc operations
#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("Source root not found: {path}")]
    SourceRootNotFound { path: String },

    #[error("Failed to parse file: {message}")]
    ParseFailure { message: String },

    #[error("Unresolved type in {path}: {source}")]
    Resolution {
        path: String,
        #[source]
        source: ResolveError,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error("IO error at {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocgenError {
    /// Convert error to the process exit code:
    /// - 0: Success
    /// - 1: Source root not found / IO error
    /// - 2: Usage error (reported by clap before we get here)
    /// - 3: Parse failure
    /// - 4: Resolution failure
    /// - 5: Configuration error
    /// - 6: Serialization failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::SourceRootNotFound { .. } => ExitCode::from(1),
            Self::IoError { .. } | Self::Io(_) => ExitCode::from(1),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::Resolution { .. } => ExitCode::from(4),
            Self::ConfigError { .. } => ExitCode::from(5),
            Self::Serialization { .. } => ExitCode::from(6),
        }
    }
}

/// Result type alias for berray-doc operations
pub type Result<T> = std::result::Result<T, DocgenError>;
