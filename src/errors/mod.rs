//! Error handling module for the Be The Hero client.
//!
//! Every failure a page can observe is one `AppError` variant. Pages never let an
//! error escape: they turn it into a single notification with [`AppError::notification`].

use reqwest::StatusCode;

use crate::forms::FieldError;
use crate::models::ErrorBody;
use crate::ui::Notification;

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const AUTH_INVALID: &str = "AUTH_INVALID";
    pub const SERVER_REJECTED: &str = "SERVER_REJECTED";
    pub const NO_RESPONSE: &str = "NO_RESPONSE";
    pub const LOCAL_UNEXPECTED: &str = "LOCAL_UNEXPECTED";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
}

/// Backend error code that forces a logout regardless of the HTTP status.
pub const INVALID_TOKEN: &str = "Invalid Token";

/// Shown when the backend rejected a request without saying why.
pub const GENERIC_REJECTION: &str = "Please check your information and try again.";

/// Shown for failures that happened on this side of the wire.
pub const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again later.";

/// Client error type.
#[derive(Debug)]
pub enum AppError {
    /// The bearer token was rejected; the session for that kind must be dropped
    AuthInvalid,
    /// The backend answered with a non-success status
    ServerRejected {
        status: u16,
        message: Option<String>,
    },
    /// The request was sent but no response came back
    NoResponse(String),
    /// The request could not be built or its response could not be understood
    LocalUnexpected(String),
    /// Local form validation failed; no request was made
    Validation(Vec<FieldError>),
    /// Durable storage could not be read or written
    Storage(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::AuthInvalid => codes::AUTH_INVALID,
            AppError::ServerRejected { .. } => codes::SERVER_REJECTED,
            AppError::NoResponse(_) => codes::NO_RESPONSE,
            AppError::LocalUnexpected(_) => codes::LOCAL_UNEXPECTED,
            AppError::Validation(_) => codes::VALIDATION_FAILED,
            AppError::Storage(_) => codes::STORAGE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::AuthInvalid => "Invalid or expired credentials".to_string(),
            AppError::ServerRejected { status, message } => match message {
                Some(msg) => msg.clone(),
                None => format!("Request rejected with HTTP {}", status),
            },
            AppError::NoResponse(msg) => msg.clone(),
            AppError::LocalUnexpected(msg) => msg.clone(),
            AppError::Validation(errors) => errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join("; "),
            AppError::Storage(msg) => msg.clone(),
        }
    }

    /// Whether this error means the session for the requesting kind is gone.
    pub fn forces_logout(&self) -> bool {
        matches!(self, AppError::AuthInvalid)
    }

    /// The one user-visible notification reporting this error.
    ///
    /// `context` prefixes the message, e.g. "Registration failed".
    pub fn notification(&self, context: &str) -> Notification {
        match self {
            AppError::AuthInvalid => {
                Notification::warning("Your session has expired. Please sign in again.")
            }
            AppError::ServerRejected { message, .. } => Notification::error(format!(
                "{}: {}",
                context,
                message.as_deref().unwrap_or(GENERIC_REJECTION)
            )),
            AppError::NoResponse(_) => {
                Notification::error(format!("{}: no response from server.", context))
            }
            AppError::Validation(_) => Notification::warning(format!(
                "{}: please correct the highlighted fields.",
                context
            )),
            AppError::LocalUnexpected(_) | AppError::Storage(_) => {
                Notification::error(format!("{}: {}", context, GENERIC_FAILURE))
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        AppError::Storage(format!("Storage error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::LocalUnexpected(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            tracing::error!("Request error: {:?}", err);
            AppError::LocalUnexpected(format!("Request error: {}", err))
        } else if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            tracing::warn!("No response: {:?}", err);
            AppError::NoResponse(format!("No response from server: {}", err))
        } else {
            tracing::error!("Unexpected HTTP error: {:?}", err);
            AppError::LocalUnexpected(format!("Unexpected HTTP error: {}", err))
        }
    }
}

/// Classify a non-success response.
///
/// A 401 or an `Invalid Token` body only means `AuthInvalid` when the request carried
/// a bearer token; anonymous requests (login, registration) get a `ServerRejected`.
pub fn classify_response(status: StatusCode, body: &str, authenticated: bool) -> AppError {
    let parsed = ErrorBody::parse(body);

    if authenticated
        && (status == StatusCode::UNAUTHORIZED || parsed.error() == Some(INVALID_TOKEN))
    {
        return AppError::AuthInvalid;
    }

    AppError::ServerRejected {
        status: status.as_u16(),
        message: parsed.message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::NotificationLevel;

    #[test]
    fn test_401_is_auth_invalid_for_authenticated_requests() {
        let err = classify_response(StatusCode::UNAUTHORIZED, "", true);
        assert!(err.forces_logout());

        let err = classify_response(StatusCode::UNAUTHORIZED, r#"{"message":"nope"}"#, true);
        assert!(err.forces_logout());
    }

    #[test]
    fn test_invalid_token_body_is_auth_invalid_regardless_of_status() {
        let err = classify_response(StatusCode::BAD_REQUEST, r#"{"error":"Invalid Token"}"#, true);
        assert!(matches!(err, AppError::AuthInvalid));
    }

    #[test]
    fn test_401_on_anonymous_request_is_rejection() {
        let err = classify_response(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Wrong password"}"#,
            false,
        );
        match err {
            AppError::ServerRejected { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("Wrong password"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_server_error_message_surfaces() {
        let err = classify_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"Database down"}"#,
            true,
        );
        let note = err.notification("Error fetching user data");
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(note.message, "Error fetching user data: Database down");
    }

    #[test]
    fn test_server_error_without_message_uses_generic_text() {
        let err = classify_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>", true);
        assert!(!err.forces_logout());
        assert!(err.notification("Failed").message.ends_with(GENERIC_REJECTION));
    }

    #[test]
    fn test_validation_list_body_keeps_marker_and_message() {
        let body = r#"{"message":["email must be an email"],"error":"Invalid Token"}"#;

        let err = classify_response(StatusCode::BAD_REQUEST, body, true);
        assert!(matches!(err, AppError::AuthInvalid));

        match classify_response(StatusCode::BAD_REQUEST, body, false) {
            AppError::ServerRejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("email must be an email"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::AuthInvalid.error_code(), codes::AUTH_INVALID);
        assert_eq!(
            AppError::NoResponse("x".into()).to_string(),
            "NO_RESPONSE: x"
        );
    }
}
