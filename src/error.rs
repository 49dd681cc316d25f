//! Error types for the workshop exercises
//!
//! Every failure is fatal to the running call; nothing here is retried
//! or recovered from.

use std::num::ParseIntError;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for the workshop exercises
#[derive(Error, Debug)]
pub enum WorkshopError {
    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Console read or write errors
    #[error("Console error: {operation} failed")]
    Console {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// A guess that is not an integer
    #[error("Parse error: invalid integer {input:?}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// A credential line that is not valid base64
    #[error("Decode error: line {line} of {path} is not valid base64")]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: base64::DecodeError,
    },

    /// A decoded credential value that is not UTF-8 text
    #[error("Decode error: line {line} of {path} is not UTF-8 text")]
    Utf8 {
        path: PathBuf,
        line: usize,
        #[source]
        source: FromUtf8Error,
    },

    /// A credential file without the requested line
    #[error("Credential file {path} has no line {line}")]
    MissingLine { path: PathBuf, line: usize },

    /// Standard input closed before the sentinel was read
    #[error("Input ended before the exit sentinel")]
    EndOfInput,

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WorkshopError {
    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new console error
    pub fn console(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Console {
            operation: operation.into(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse(input: impl Into<String>, source: ParseIntError) -> Self {
        Self::Parse {
            input: input.into(),
            source,
        }
    }

    /// Create a new base64 decode error
    pub fn decode<P: Into<PathBuf>>(path: P, line: usize, source: base64::DecodeError) -> Self {
        Self::Decode {
            path: path.into(),
            line,
            source,
        }
    }

    /// Create a new UTF-8 decode error
    pub fn utf8<P: Into<PathBuf>>(path: P, line: usize, source: FromUtf8Error) -> Self {
        Self::Utf8 {
            path: path.into(),
            line,
            source,
        }
    }

    /// Create a new missing line error
    pub fn missing_line<P: Into<PathBuf>>(path: P, line: usize) -> Self {
        Self::MissingLine {
            path: path.into(),
            line,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, WorkshopError>;
