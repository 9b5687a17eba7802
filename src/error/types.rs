//! Error types and definitions for Uniter
//!
//! Fatal conditions (traversal, configuration, output) are `UniterError`s.
//! Per-file parse and read failures are not errors at this level: they are
//! recorded inline in the analysis results and in the consolidated output.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error level - the run fails
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for Uniter operations
#[derive(Debug, Error)]
pub enum UniterError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// The source parser could not be set up
    #[error("Parser initialisation error: {message}")]
    ParserInit { message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },
}

impl UniterError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Critical errors - process should terminate
            UniterError::Config { .. } => ErrorSeverity::Critical,
            UniterError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            UniterError::ConfigRead { .. } => ErrorSeverity::Critical,
            UniterError::ConfigParse { .. } => ErrorSeverity::Critical,
            UniterError::ParserInit { .. } => ErrorSeverity::Critical,
            UniterError::StdoutWrite { .. } => ErrorSeverity::Critical,
            UniterError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            // Regular errors - current operation fails
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            UniterError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            UniterError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            UniterError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            UniterError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or pass options on the command line.", path.display())
            }
            UniterError::DirectoryTraversal { path, message } => {
                format!("Cannot scan '{}': {}", path.display(), message)
            }
            UniterError::OutputWrite { path, source } => {
                format!("Cannot write '{}': {}", path.display(), source)
            }
            UniterError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist. Please create the directory or specify a different output path.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        UniterError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        UniterError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        UniterError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        UniterError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output write error for the given file
    pub fn output_write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UniterError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for UniterError {
    fn from(err: std::io::Error) -> Self {
        UniterError::io_error(err)
    }
}

impl From<toml::de::Error> for UniterError {
    fn from(err: toml::de::Error) -> Self {
        UniterError::TomlParse { source: err }
    }
}

impl From<serde_json::Error> for UniterError {
    fn from(err: serde_json::Error) -> Self {
        UniterError::JsonSerialize { source: err }
    }
}

impl From<walkdir::Error> for UniterError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        if let Some(io_err) = err.io_error() {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                return UniterError::permission_denied(path);
            }
        }
        UniterError::directory_traversal_error(path, err.to_string())
    }
}

/// Result type alias for Uniter operations
pub type Result<T> = std::result::Result<T, UniterError>;
