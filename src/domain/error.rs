//! Error types for marsgrid operations.
//!
//! This module defines the centralized error type [`MarsGridError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for marsgrid operations.
///
/// This enum consolidates all error conditions that can occur while fetching
/// and decoding listings or loading configuration. The fetch controller
/// collapses every variant into [`FetchStatus::Error`](crate::domain::FetchStatus)
/// for observers; the variants exist so that call sites can log something more
/// specific than "fetch failed".
#[derive(Debug, Error)]
pub enum MarsGridError {
    /// The HTTP request to the listing API failed.
    ///
    /// Covers connection failures, non-success status codes, and body read
    /// errors. The string contains a description of what went wrong.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded into listings.
    ///
    /// Occurs when the API returns a payload that is not a JSON array of
    /// listing records.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or a value is
    /// malformed. The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, currently only
    /// reading configuration files. Automatically converts from
    /// `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for marsgrid operations.
///
/// This is a type alias for `std::result::Result<T, MarsGridError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MarsGridError>;
