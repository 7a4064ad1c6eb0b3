//! Client types for the Treasure Data postback API.
//!
//! This module contains the request/response pipeline:
//!
//! - [`PostbackClient`]: the client facade for sending records
//! - [`PostbackRequest`]: URL construction and record serialization
//! - [`RawResponse`]: status classification and error body parsing
//! - [`PostbackError`] / [`SendError`]: structured failure values

pub mod errors;
pub mod postback;
pub mod request;
pub mod response;

pub use errors::{PostbackError, SendError};
pub use postback::{PostbackClient, SendDataCallback, WRITE_KEY_HEADER};
pub use request::PostbackRequest;
pub use response::RawResponse;

/// Target used for all lifecycle log lines emitted by this library.
pub(crate) const LOG_TARGET: &str = "td_postback";
