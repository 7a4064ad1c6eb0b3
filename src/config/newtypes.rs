//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// The default Treasure Data ingestion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://in.treasuredata.com";

/// A validated Treasure Data write key.
///
/// This newtype ensures the write key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `WriteKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use td_postback::WriteKey;
///
/// let key = WriteKey::new("my-write-key").unwrap();
/// assert_eq!(key.as_ref(), "my-write-key");
/// assert_eq!(format!("{:?}", key), "WriteKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct WriteKey(String);

impl WriteKey {
    /// Creates a new validated write key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyWriteKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyWriteKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for WriteKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for WriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WriteKey(*****)")
    }
}

/// A validated ingestion endpoint URL.
///
/// Defaults to the production Treasure Data ingestion host. An alternate
/// endpoint can be supplied for proxy setups or for pointing the client at
/// a local mock server in tests.
///
/// A trailing slash is trimmed so that path concatenation never produces
/// a double slash.
///
/// # Example
///
/// ```rust
/// use td_postback::Endpoint;
///
/// let endpoint = Endpoint::default();
/// assert_eq!(endpoint.as_ref(), "https://in.treasuredata.com");
///
/// let custom = Endpoint::new("https://proxy.example.com/").unwrap();
/// assert_eq!(custom.as_ref(), "https://proxy.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL does not start
    /// with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidEndpoint { url });
        }
        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
