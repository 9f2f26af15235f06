//! Request bodies and response envelopes.
//!
//! Action bodies are read leniently: a missing body, malformed JSON, or a
//! non-string `kind` all count as a missing kind, which the engine's
//! parsers reject with the endpoint's error message.

use bunny_logic::actions::{ActionError, Food, PlayKind};
use bunny_logic::engine::Snapshot;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRequest {
    pub kind: Option<String>,
    /// Any JSON number is honored, truncated toward zero and saturated to
    /// the `i64` range. Non-numbers default to one pellet.
    pub pellet_count: Option<i64>,
}

impl ActionRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
        Self {
            kind: value
                .get("kind")
                .and_then(Value::as_str)
                .map(str::to_owned),
            pellet_count: value.get("pelletCount").and_then(pellet_count),
        }
    }

    pub fn food(&self) -> Result<Food, ActionError> {
        Food::parse(self.kind.as_deref(), self.pellet_count)
    }

    pub fn play(&self) -> Result<PlayKind, ActionError> {
        PlayKind::parse(self.kind.as_deref())
    }
}

fn pellet_count(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
        .or_else(|| value.as_f64().map(|n| n as i64))
}

/// Either a snapshot or `{"error": "..."}`. Both are sent with HTTP 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Snapshot(Snapshot),
    Error { error: String },
}

impl From<Result<Snapshot, ActionError>> for ApiResponse {
    fn from(result: Result<Snapshot, ActionError>) -> Self {
        match result {
            Ok(snapshot) => ApiResponse::Snapshot(snapshot),
            Err(e) => ApiResponse::Error {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_body() {
        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":4}"#);
        assert_eq!(req.kind.as_deref(), Some("pellet"));
        assert_eq!(req.food(), Ok(Food::Pellet { count: 4 }));
    }

    #[test]
    fn test_pellet_count_defaults() {
        let req = ActionRequest::from_body(br#"{"kind":"pellet"}"#);
        assert_eq!(req.food(), Ok(Food::Pellet { count: 1 }));

        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":"lots"}"#);
        assert_eq!(req.food(), Ok(Food::Pellet { count: 1 }));
    }

    #[test]
    fn test_huge_and_float_pellet_counts() {
        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":18446744073709551615}"#);
        assert_eq!(req.pellet_count, Some(i64::MAX));

        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":100000000000000000000}"#);
        assert_eq!(req.pellet_count, Some(i64::MAX));

        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":1e20}"#);
        assert_eq!(req.pellet_count, Some(i64::MAX));

        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":-1e20}"#);
        assert_eq!(req.pellet_count, Some(i64::MIN));

        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":3.0}"#);
        assert_eq!(req.food(), Ok(Food::Pellet { count: 3 }));

        let req = ActionRequest::from_body(br#"{"kind":"pellet","pelletCount":2.7}"#);
        assert_eq!(req.food(), Ok(Food::Pellet { count: 2 }));
    }

    #[test]
    fn test_missing_or_garbage_body() {
        assert_eq!(ActionRequest::from_body(b""), ActionRequest::default());
        assert_eq!(ActionRequest::from_body(b"{not json"), ActionRequest::default());
        assert_eq!(ActionRequest::from_body(b"[1,2]"), ActionRequest::default());
        assert_eq!(
            ActionRequest::from_body(br#"{"kind":7}"#).food(),
            Err(ActionError::InvalidFeedKind)
        );
    }

    #[test]
    fn test_error_envelope() {
        let body: ApiResponse = Err(ActionError::InvalidPlayKind).into();
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Invalid play kind. Use 'pat' or 'toy'."})
        );
    }
}
