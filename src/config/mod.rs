//! Configuration types for the Treasure Data postback client.
//!
//! This module provides the validated value types used to construct a
//! [`PostbackClient`](crate::PostbackClient):
//!
//! - [`WriteKey`]: A validated write key newtype with masked debug output
//! - [`Endpoint`]: A validated ingestion endpoint URL, defaulting to the
//!   production host
//!
//! # Example
//!
//! ```rust
//! use td_postback::{Endpoint, WriteKey};
//!
//! let key = WriteKey::new("my-write-key").unwrap();
//! let endpoint = Endpoint::default();
//! assert_eq!(endpoint.as_ref(), "https://in.treasuredata.com");
//! ```

mod newtypes;

pub use newtypes::{Endpoint, WriteKey, DEFAULT_ENDPOINT};
