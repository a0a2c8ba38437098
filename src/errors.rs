//! Error types for test generation.
//!
//! Every stage of the generation pipeline reports failures through
//! [`GenerateError`]. The pipeline is first-failure-wins: the first error a
//! stage reports becomes the result of the whole run.
//!
//! # Categories
//!
//! - `InvalidInput`: a source or destination directory is missing, or a listed
//!   file vanished before it could be read
//! - `Parse`: source text could not be parsed
//! - `Io`: any other file system failure (permissions, disk full)
//! - `Config`: configuration file or knob values are invalid
//! - `Internal`: a stage worker panicked
//!
//! # Example
//!
//! ```rust
//! use testgen::errors::GenerateError;
//!
//! let err = GenerateError::invalid_input_with_path("Directory doesn't exist", "/missing");
//! assert_eq!(err.category(), "InvalidInput");
//! assert!(err.path().is_some());
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unified error type for test generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Missing directories or files that disappeared mid-run
    #[error("Invalid input: {message}{}", display_path(.path))]
    InvalidInput {
        message: String,
        path: Option<PathBuf>,
    },

    /// Malformed source text
    #[error("Parse error: {message}{}{}", display_path(.path), display_line(.line))]
    Parse {
        message: String,
        path: Option<PathBuf>,
        line: Option<usize>,
    },

    /// File system failures other than missing inputs
    #[error("I/O error: {message}{}", display_path(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}{}", display_path(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Worker failures that are not caused by the input
    #[error("Internal error: {0}")]
    Internal(String),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

fn display_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

impl GenerateError {
    /// Create an invalid-input error with a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            path: None,
        }
    }

    /// Create an invalid-input error with path context.
    pub fn invalid_input_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a parse error with a message.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: None,
            line: None,
        }
    }

    /// Create a parse error with full context.
    pub fn parse_with_context(
        message: impl Into<String>,
        path: impl AsRef<Path>,
        line: usize,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            line: Some(line),
        }
    }

    /// Create a parse error with path context (no line number).
    pub fn parse_with_path(message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::Parse {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            line: None,
        }
    }

    /// Create an I/O error with path context.
    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Map an `std::io::Error` raised while touching `path`.
    ///
    /// `NotFound` becomes `InvalidInput`; everything else is `Io`.
    pub fn from_io(context: &str, path: &Path, error: &std::io::Error) -> Self {
        let message = format!("{}: {}", context, error);
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::invalid_input_with_path(message, path),
            _ => Self::io_with_path(message, path),
        }
    }

    /// Get the error message without context details.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput { message, .. } => message,
            Self::Parse { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Config { message, .. } => message,
            Self::Internal(message) => message,
        }
    }

    /// Get the associated path, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidInput { path, .. } => path.as_ref(),
            Self::Parse { path, .. } => path.as_ref(),
            Self::Io { path, .. } => path.as_ref(),
            Self::Config { path, .. } => path.as_ref(),
            Self::Internal(_) => None,
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "InvalidInput",
            Self::Parse { .. } => "Parse",
            Self::Io { .. } => "Io",
            Self::Config { .. } => "Config",
            Self::Internal(_) => "Internal",
        }
    }

    /// Whether the user can fix this by changing inputs or configuration.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::Parse { .. } | Self::Config { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GenerateError>;
