//! Request construction for the postback API.
//!
//! This module provides the [`PostbackRequest`] type, which composes the
//! target URL from the ingestion endpoint and the event path template, and
//! serializes the outbound record.

use crate::config::Endpoint;

/// A postback request addressed to one database/table pair.
///
/// The request path is built by literal substitution into the fixed
/// `/postback/v3/event/{db}/{table}` template. The database and table names
/// are substituted verbatim, with no URL-encoding: callers are responsible
/// for supplying URL-safe identifiers, and malformed names surface as a
/// remote 4xx error rather than a local one.
///
/// # Example
///
/// ```rust
/// use td_postback::{Endpoint, PostbackRequest};
///
/// let request = PostbackRequest::new("mydb", "events");
/// assert_eq!(request.path(), "/postback/v3/event/mydb/events");
/// assert_eq!(
///     request.url(&Endpoint::default()),
///     "https://in.treasuredata.com/postback/v3/event/mydb/events"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostbackRequest {
    db_name: String,
    table_name: String,
}

impl PostbackRequest {
    /// Creates a request for the given database and table.
    #[must_use]
    pub fn new(db_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            db_name: db_name.into(),
            table_name: table_name.into(),
        }
    }

    /// Returns the database name this request targets.
    #[must_use]
    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    /// Returns the table name this request targets.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Returns the request path with the database and table substituted
    /// verbatim into the event path template.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/postback/v3/event/{}/{}", self.db_name, self.table_name)
    }

    /// Returns the full request URL for the given endpoint.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", endpoint.as_ref(), self.path())
    }

    /// Serializes a record into the request body.
    ///
    /// Records are `serde_json::Value` mappings, so encoding is infallible;
    /// non-JSON-safe input is rejected where the caller builds the `Value`.
    #[must_use]
    pub fn body(record: &serde_json::Value) -> String {
        record.to_string()
    }
}
