//! HTTP client for the Treasure Data postback API.
//!
//! This module provides the [`PostbackClient`] type for sending event
//! records to the ingestion API with write-key authentication.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::errors::{PostbackError, SendError};
use crate::client::request::PostbackRequest;
use crate::client::response::RawResponse;
use crate::client::LOG_TARGET;
use crate::config::{Endpoint, WriteKey};

/// Header carrying the caller's write key.
pub const WRITE_KEY_HEADER: &str = "X-TD-Write-Key";

/// Completion callback for [`PostbackClient::send_data`].
///
/// Invoked exactly once per call with the outcome (`None` on success) and
/// the exact record that was passed in, returned unchanged for correlation.
pub type SendDataCallback = Box<dyn FnOnce(Option<PostbackError>, serde_json::Value) + Send>;

/// Client for the Treasure Data postback ingestion API.
///
/// The client handles:
/// - URL construction from the fixed event path template
/// - Default headers including the `X-TD-Write-Key` auth header
/// - Response classification into success or a [`PostbackError`]
/// - Asynchronous callback delivery decoupled from the calling frame
///
/// Every call is single-shot: no retries, no batching, no rate limiting.
///
/// # Thread Safety
///
/// `PostbackClient` is `Clone + Send + Sync`. Configuration is immutable
/// after construction; the only mutable state is the debug flag, which is
/// shared across clones and in-flight calls.
///
/// # Example
///
/// ```rust,ignore
/// use td_postback::{PostbackClient, WriteKey};
/// use serde_json::json;
///
/// let client = PostbackClient::new(WriteKey::new("my-write-key").unwrap());
///
/// // Awaitable send
/// client.send("mydb", "events", &json!({"event": "signup"})).await?;
///
/// // Fire-and-forget with a completion callback
/// client.send_data(
///     "mydb",
///     "events",
///     json!({"event": "signup"}),
///     Some(Box::new(|error, data| match error {
///         None => println!("accepted: {data}"),
///         Some(e) => println!("rejected with status {}", e.http_status),
///     })),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct PostbackClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The ingestion endpoint.
    endpoint: Endpoint,
    /// Default headers included in every request.
    default_headers: HashMap<String, String>,
    /// Debug flag, shared with in-flight calls.
    debug: Arc<AtomicBool>,
}

// Verify PostbackClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PostbackClient>();
};

impl PostbackClient {
    /// Creates a new client for the production ingestion endpoint.
    ///
    /// Precomputes the header set (`Content-Type` plus the write-key auth
    /// header). Performs no I/O.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(write_key: WriteKey) -> Self {
        Self::with_endpoint(write_key, Endpoint::default())
    }

    /// Creates a new client for a custom ingestion endpoint.
    ///
    /// Useful for proxy setups and for pointing the client at a mock server
    /// in tests.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_endpoint(write_key: WriteKey, endpoint: Endpoint) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            WRITE_KEY_HEADER.to_string(),
            write_key.as_ref().to_string(),
        );

        // Redirects surface as 3xx failures instead of being followed.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            default_headers,
            debug: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns the ingestion endpoint for this client.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Enables or disables debug logging of request/response lifecycle
    /// events. Takes effect immediately for subsequent calls.
    ///
    /// Disabled by default.
    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    /// Returns `true` if debug logging is enabled.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Sends one record and awaits the outcome.
    ///
    /// The database and table names are substituted verbatim into the event
    /// path, with no URL-encoding and no local validation; malformed names
    /// surface as a remote 4xx error. The record may be an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Api`] for any non-2xx response, carrying the
    /// status code and the parsed error body, and [`SendError::Network`]
    /// if the transport failed before a response was received.
    pub async fn send(
        &self,
        db_name: &str,
        table_name: &str,
        record: &serde_json::Value,
    ) -> Result<(), SendError> {
        let request = PostbackRequest::new(db_name, table_name);
        let url = request.url(&self.endpoint);

        if self.debug_enabled() {
            tracing::debug!(target: LOG_TARGET, "sending record to {url}");
        }

        let mut req_builder = self.client.post(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(PostbackRequest::body(record)).send().await?;

        let code = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();

        match RawResponse::new(code, body).interpret(self.debug_enabled()) {
            None => Ok(()),
            Some(error) => Err(SendError::Api(error)),
        }
    }

    /// Sends one record without blocking the caller.
    ///
    /// Returns immediately; the request runs on a spawned task. If a
    /// callback is supplied it is invoked exactly once with
    /// `(outcome, record)` — never before `send_data` returns and never
    /// inline in the transport's completion path. Without a callback the
    /// outcome is observable only through the debug log: fire-and-forget.
    ///
    /// Concurrent calls are independent and their completions may
    /// interleave in any order. There is no cancellation: once issued, the
    /// request runs to completion or to transport-level failure. On
    /// transport failure no status/body pair exists, so the callback is not
    /// invoked; the failure is reported through the debug log only.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn send_data(
        &self,
        db_name: &str,
        table_name: &str,
        record: serde_json::Value,
        callback: Option<SendDataCallback>,
    ) {
        let client = self.clone();
        let db_name = db_name.to_string();
        let table_name = table_name.to_string();

        tokio::task::spawn(async move {
            let outcome = match client.send(&db_name, &table_name, &record).await {
                Ok(()) => None,
                Err(SendError::Api(error)) => Some(error),
                Err(SendError::Network(error)) => {
                    // No status/body pair was ever produced, so there is no
                    // error value to deliver.
                    if client.debug_enabled() {
                        tracing::error!(
                            target: LOG_TARGET,
                            "transport failure for {db_name}/{table_name}: {error}"
                        );
                    }
                    return;
                }
            };

            if let Some(error) = &outcome {
                if client.debug_enabled() {
                    tracing::error!(
                        target: LOG_TARGET,
                        "postback request failed with HTTP status {}",
                        error.http_status
                    );
                }
            }

            if let Some(callback) = callback {
                callback(outcome, record);
            }
        });
    }
}
