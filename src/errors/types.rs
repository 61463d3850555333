//! Error type definitions for stirr-guide

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Snapshot source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Snapshot loading specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    /// A snapshot file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file was not valid feed JSON
    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The lineup names a channel with no matching per-channel document
    #[error("Missing {kind} document for channel {channel_id}")]
    MissingChannel { channel_id: String, kind: String },
}

impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Create a read failure for `path`
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode failure for `path`
    pub fn decode<P: Into<PathBuf>>(path: P, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create a missing per-channel document error
    pub fn missing_channel<C: Into<String>, K: Into<String>>(channel_id: C, kind: K) -> Self {
        Self::MissingChannel {
            channel_id: channel_id.into(),
            kind: kind.into(),
        }
    }
}
