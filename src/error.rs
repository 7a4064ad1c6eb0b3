//! Error types for client configuration.
//!
//! This module contains error types used when constructing and validating
//! configuration values.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use td_postback::{WriteKey, ConfigError};
//!
//! let result = WriteKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyWriteKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Write key cannot be empty.
    #[error("Write key cannot be empty. Please provide a valid Treasure Data write key.")]
    EmptyWriteKey,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://in.treasuredata.com').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },
}
