use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/v1.0/origin-ui/resetLogin`.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetLoginRequest {
    pub password: String,
}

impl ResetLoginRequest {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

impl fmt::Debug for ResetLoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetLoginRequest")
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Success body returned by the origin web UI API, e.g. `{"msg":"Success"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusMessage {
    #[serde(default = "StatusMessage::default_msg")]
    pub msg: String,
}

impl StatusMessage {
    fn default_msg() -> String {
        "Success".to_string()
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self {
            msg: Self::default_msg(),
        }
    }
}

/// Failure body returned by the origin web UI API, e.g.
/// `{"error":"Authentication required to perform this operation"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reset_request_serializes_to_password_only() {
        let body = serde_json::to_string(&ResetLoginRequest::new("Abc123!")).unwrap();
        assert_eq!(body, r#"{"password":"Abc123!"}"#);
    }

    #[test]
    fn reset_request_debug_hides_password() {
        let dbg = format!("{:?}", ResetLoginRequest::new("hunter2"));
        assert!(!dbg.contains("hunter2"));
    }

    #[test]
    fn status_message_parses_backend_success() {
        let msg: StatusMessage = serde_json::from_str(r#"{"msg":"Success"}"#).unwrap();
        assert_eq!(msg.msg, "Success");
    }

    #[test]
    fn status_message_defaults_missing_msg() {
        let msg: StatusMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg, StatusMessage::default());
    }

    #[test]
    fn error_body_parses_backend_failure() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":"Authentication required to perform this operation"}"#,
        )
        .unwrap();
        assert_eq!(body.error, "Authentication required to perform this operation");
    }
}
