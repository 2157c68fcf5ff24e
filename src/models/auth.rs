//! Login request and response bodies, plus the backend error envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `auth/login` and `auth-ong/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Error body as the backend sends it.
///
/// Both fields are optional and loosely typed: validation failures carry a list of
/// messages, other failures a single string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Value,
    #[serde(default)]
    pub error: Value,
}

impl ErrorBody {
    /// Read an error body. Anything that is not a JSON object reads as empty.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The backend message as display text, with lists joined by ", ".
    pub fn message(&self) -> Option<String> {
        let text = match &self.message {
            Value::Null => return None,
            Value::String(text) => text.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };
        Some(text).filter(|t| !t.trim().is_empty())
    }

    /// The backend error code, when it is a string.
    pub fn error(&self) -> Option<&str> {
        self.error.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message_list_is_joined() {
        let body = ErrorBody::parse(
            r#"{"message":["email must be an email","phone is too short"],"error":"Bad Request"}"#,
        );
        assert_eq!(
            body.message().as_deref(),
            Some("email must be an email, phone is too short")
        );
        assert_eq!(body.error(), Some("Bad Request"));
    }

    #[test]
    fn test_error_body_fields_are_read_independently() {
        let body = ErrorBody::parse(r#"{"message":{"detail":"x"},"error":"Invalid Token"}"#);
        assert_eq!(body.error(), Some("Invalid Token"));
        assert_eq!(body.message().as_deref(), Some(r#"{"detail":"x"}"#));

        let body = ErrorBody::parse(r#"{"message":"   ","error":42}"#);
        assert_eq!(body.message(), None);
        assert_eq!(body.error(), None);

        let body = ErrorBody::parse("<html>oops</html>");
        assert_eq!(body.message(), None);
    }
}
