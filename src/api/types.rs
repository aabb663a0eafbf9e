//! API response types.
//!
//! Computed cases are returned as [`CaseReport`](crate::report::CaseReport)
//! JSON; request bodies are [`ProcessInputs`](crate::balance::ProcessInputs).

use serde::Serialize;

/// Names accepted by `GET /presets/{name}`.
#[derive(Debug, Serialize)]
pub struct PresetList {
    pub presets: Vec<&'static str>,
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_message() {
        let body = serde_json::to_value(ErrorResponse {
            error: "nope".to_string(),
        })
        .unwrap();
        assert_eq!(body["error"], "nope");
    }
}
