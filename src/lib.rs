//! # Treasure Data Postback Client
//!
//! A minimal Rust client for the Treasure Data postback event-ingestion API.
//! Records are posted to `https://in.treasuredata.com/postback/v3/event/{db}/{table}`
//! with write-key authentication, and the outcome is reported asynchronously.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration newtypes ([`WriteKey`], [`Endpoint`])
//! - An async client facade ([`PostbackClient`]) with an awaitable send and
//!   a fire-and-forget, callback-based send
//! - A structured error value ([`PostbackError`]) combining the HTTP status
//!   with the parsed error body, when one exists
//! - Optional debug logging of the request/response lifecycle via `tracing`
//!
//! There is deliberately no retry policy, no batching, no offline buffering,
//! and no rate limiting: every call is a single fire-and-forget request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use td_postback::{PostbackClient, WriteKey};
//! use serde_json::json;
//!
//! let client = PostbackClient::new(WriteKey::new("your-write-key").unwrap());
//!
//! // Awaitable send
//! client.send("mydb", "events", &json!({"event": "signup"})).await?;
//! ```
//!
//! ## Fire-and-Forget with a Callback
//!
//! `send_data` returns immediately and delivers the outcome to an optional
//! callback, invoked exactly once on a spawned task:
//!
//! ```rust,ignore
//! use td_postback::{PostbackClient, WriteKey};
//! use serde_json::json;
//!
//! let client = PostbackClient::new(WriteKey::new("your-write-key").unwrap());
//!
//! client.send_data(
//!     "mydb",
//!     "events",
//!     json!({"event": "signup", "plan": "pro"}),
//!     Some(Box::new(|error, data| match error {
//!         None => println!("accepted: {data}"),
//!         Some(e) => println!("rejected with status {}", e.http_status),
//!     })),
//! );
//! ```
//!
//! Callers that omit the callback can observe failures only through the
//! debug log, enabled per client with [`PostbackClient::set_debug`].
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **Thread-safe**: The client is `Clone + Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Errors as values**: Remote failures are delivered, never panicked

pub mod client;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use client::{
    PostbackClient, PostbackError, PostbackRequest, RawResponse, SendDataCallback, SendError,
    WRITE_KEY_HEADER,
};
pub use config::{Endpoint, WriteKey, DEFAULT_ENDPOINT};
pub use error::ConfigError;
