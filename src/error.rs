//! Error types and handling infrastructure for input-signals.
//!
//! Sampling and axis conditioning are total and never fail. Errors only come out of the
//! layers around them: loading tuning profiles, reading recorded traces and parsing the
//! replay tool's arguments. Custom error types use `thiserror`; the replay binary wraps
//! them in `anyhow` for context.

use thiserror::Error;

/// The main error type for input-signals operations.
#[derive(Error, Debug)]
pub enum SignalError {
    /// File system related errors (profile or trace not readable, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Tuning profile could not be parsed or contained unusable values
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Recorded backend trace could not be parsed
    #[error("Trace error: {message}")]
    TraceError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for input-signals operations.
pub type Result<T> = std::result::Result<T, SignalError>;

impl SignalError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a TraceError with a descriptive message
    pub fn trace(message: impl Into<String>) -> Self {
        Self::TraceError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SignalError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::FileError {
            message: message.to_string(),
            source: err,
        }
    }
}

#[cfg(feature = "config")]
impl From<toml::de::Error> for SignalError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            message: err.message().to_string(),
        }
    }
}
