//! Centralized error handling for stirr-guide
//!
//! Errors are scoped as narrowly as the failure they describe. A malformed
//! wire timestamp only fails its programme and stays a
//! [`ParseError`](crate::utils::datetime::ParseError); it never ends a run.
//!
//! - **Source errors**: a snapshot file was missing or could not be decoded
//! - **Application errors**: configuration and output failures that end a run
//!
//! # Usage
//!
//! ```rust
//! use stirr_guide::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::configuration("snapshot_dir must not be empty"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Source Results
pub type SourceResult<T> = Result<T, SourceError>;
