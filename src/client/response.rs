//! Response interpretation for the postback API.
//!
//! This module provides the [`RawResponse`] type, which classifies the HTTP
//! status of a completed request and turns non-2xx outcomes into
//! [`PostbackError`] values with a best-effort parse of the error body.

use crate::client::errors::PostbackError;
use crate::client::LOG_TARGET;

/// A raw HTTP response as delivered by the transport: an integer status
/// code and the body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response from a status code and body text.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    ///
    /// Anything else is a failure, including 1xx and 3xx: redirect
    /// following is the transport's concern, not this layer's.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Classifies the response, producing an error value for any non-2xx
    /// status.
    ///
    /// On failure the body is parsed as JSON: an empty body becomes an
    /// empty mapping, and an unparsable body is downgraded to `None` so
    /// that a broken error payload never blocks reporting of the status
    /// code itself.
    ///
    /// Lifecycle logging is gated on `debug`.
    #[must_use]
    pub fn interpret(&self, debug: bool) -> Option<PostbackError> {
        if debug {
            tracing::debug!(
                target: LOG_TARGET,
                "received response: status={} body={}",
                self.code,
                self.body
            );
        }

        if self.is_ok() {
            return None;
        }

        Some(PostbackError {
            http_status: self.code,
            http_response: self.parse_error_body(debug),
        })
    }

    /// Attempts to parse the body of a failed response as JSON.
    ///
    /// Parse failures are recovered locally and never escalated.
    fn parse_error_body(&self, debug: bool) -> Option<serde_json::Value> {
        if self.body.is_empty() {
            return Some(serde_json::json!({}));
        }

        match serde_json::from_str(&self.body) {
            Ok(parsed) => Some(parsed),
            Err(parse_error) => {
                if debug {
                    tracing::debug!(
                        target: LOG_TARGET,
                        "failed to parse error response body as JSON: {parse_error}"
                    );
                }
                None
            }
        }
    }
}
