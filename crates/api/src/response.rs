//! The shared response envelope.
//!
//! Every endpoint answers with `{status, message, records?, count?, data?}`.
//! The optional fields are omitted (not null) when unset, matching the
//! contract the client application was built against.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Uniform JSON response wrapper.
///
/// Build with [`Envelope::success`] / [`Envelope::error`] and chain the
/// optional fields:
///
/// ```ignore
/// Ok(Envelope::success("Favorites fetched")
///     .data(serde_json::to_value(by_type)?)
///     .count(total))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    fn new(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            records: None,
            count: None,
            data: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new("success", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message)
    }

    pub fn records(mut self, records: Value) -> Self {
        self.records = Some(records);
        self
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
