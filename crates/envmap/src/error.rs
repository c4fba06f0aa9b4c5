//! Error types for env file discovery, parsing, and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, loading, or querying an env file.
#[derive(Debug, Error)]
pub enum EnvError {
    /// No file matching the filename hint was found under the search root.
    #[error("no file matching '{hint}*' found under {}", .root.display())]
    NotFound {
        /// The filename hint that was searched for.
        hint: String,
        /// The directory the recursive search started from.
        root: PathBuf,
    },

    /// The resolved file could not be opened or read.
    #[error("failed to read env file {}: {source}", .path.display())]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A non-blank, non-comment line lacks a well-formed `KEY=VALUE` split.
    #[error("invalid line '{line}': {reason}")]
    InvalidLine {
        /// The offending line, trimmed.
        line: String,
        /// Why the line was rejected.
        reason: String,
    },

    /// A load failed part-way; wraps the read or parse error that caused it.
    #[error("failed to load env file {}: {source}", .path.display())]
    Load {
        /// The file whose load failed.
        path: PathBuf,
        /// The underlying read or parse failure.
        source: Box<EnvError>,
    },

    /// An explicit lookup of a key that is not in the mapping.
    #[error("key '{0}' not found")]
    KeyNotFound(String),

    /// An attribute lookup that matched neither an intrinsic field nor a key.
    #[error("no attribute or key named '{0}'")]
    AttributeNotFound(String),
}

/// A specialized `Result` type for env file operations.
pub type Result<T> = std::result::Result<T, EnvError>;
