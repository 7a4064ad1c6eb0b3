//! Error types for postback requests.
//!
//! This module contains the error types produced by the request pipeline:
//!
//! - [`PostbackError`]: A non-2xx HTTP response from the ingestion API,
//!   carrying the status code and the parsed error body (if any)
//! - [`SendError`]: Unified error type for the awaitable send path,
//!   covering both API errors and transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use td_postback::SendError;
//!
//! match client.send("mydb", "events", &record).await {
//!     Ok(()) => println!("record accepted"),
//!     Err(SendError::Api(e)) => {
//!         println!("rejected with status {}: {:?}", e.http_status, e.http_response);
//!     }
//!     Err(SendError::Network(e)) => {
//!         println!("transport failure: {e}");
//!     }
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Error produced when the ingestion API returns a non-2xx response.
///
/// `http_response` holds the response body parsed as JSON. It is
/// `Some(json!({}))` when the body was empty, and `None` when the body
/// could not be parsed as JSON. An unparsable body never blocks delivery
/// of the status code.
///
/// # Example
///
/// ```rust
/// use td_postback::PostbackError;
/// use serde_json::json;
///
/// let error = PostbackError {
///     http_status: 404,
///     http_response: Some(json!({"error": "database not found"})),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[error("postback request failed with HTTP status {http_status}")]
pub struct PostbackError {
    /// The HTTP status code of the response.
    pub http_status: u16,
    /// The response body parsed as JSON, if it could be parsed.
    pub http_response: Option<serde_json::Value>,
}

/// Unified error type for the awaitable send path.
///
/// Use pattern matching to distinguish API rejections from transport
/// failures. Callback-based sends ([`PostbackClient::send_data`]) only ever
/// observe the [`Api`](SendError::Api) variant; transport failures on that
/// path are a boundary condition reported through the debug log alone.
///
/// [`PostbackClient::send_data`]: crate::PostbackClient::send_data
#[derive(Debug, Error)]
pub enum SendError {
    /// The ingestion API returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] PostbackError),

    /// Network or connection error before a response was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
