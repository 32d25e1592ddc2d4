use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel substituted for any missing identifying field.
pub const UNKNOWN: &str = "UNKNOWN";

/// An inbound job-status change notification.
///
/// `source` is required; a payload without it fails deserialization and the
/// fault propagates to the invoking environment. `detail` is an open mapping
/// whose shape depends on the source, so fields are read with default
/// substitution rather than validated.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JobEvent {
    /// Declared event source (e.g. `aws.batch`).
    pub source: String,

    /// Source-specific payload.
    #[serde(default)]
    pub detail: Map<String, Value>,
}

impl JobEvent {
    /// Reads a string field from `detail`, substituting [`UNKNOWN`] when the
    /// key is absent or its value is not a string.
    #[must_use]
    pub fn detail_str(&self, key: &str) -> String {
        self.detail
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN)
            .to_string()
    }
}

/// Invocation result returned to the trigger system.
///
/// Both handled and unhandled events acknowledge with status 200 so the
/// trigger never retries unknown event types.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    /// HTTP-style status code, 200 on every reachable path.
    pub status_code: u16,

    /// Human-readable description of what happened.
    pub body: String,
}

impl HandlerResponse {
    pub(crate) fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }
}
