//! Error model for calls against the REST backend.
//!
//! The backend answers non-2xx responses with a JSON body of the form
//! `{ "message": "...", "error": "...", "details": ... }`. The UI shows
//! `message` verbatim, so parsing keeps it untouched.

use crate::shared::validation::FieldError;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` comes from the response body when present.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Request could not be sent or was aborted.
    #[error("Ошибка сети: {0}")]
    Network(String),

    /// Response body did not match the expected shape.
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),

    /// Request was rejected before it left the browser.
    #[error("{0}")]
    Validation(String),
}

/// Error body returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Build an error from a failed response: status code plus raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        let message = non_empty(parsed.message)
            .or_else(|| non_empty(parsed.error))
            .unwrap_or_else(|| format!("HTTP {}", status));

        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Aborted requests are superseded, not failed; callers drop them silently.
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Network(msg) if msg.contains("AbortError"))
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_taken_verbatim() {
        let err = ApiError::from_response(
            400,
            r#"{"message":"Клиент с таким номером уже существует","error":"BAD_REQUEST"}"#,
        );
        assert_eq!(err.to_string(), "Клиент с таким номером уже существует");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn falls_back_to_error_then_status() {
        let err = ApiError::from_response(409, r#"{"error":"CONFLICT"}"#);
        assert_eq!(err.to_string(), "CONFLICT");

        let err = ApiError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");

        let err = ApiError::from_response(500, r#"{"message":"  "}"#);
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn not_found_and_abort_detection() {
        assert!(ApiError::from_response(404, "").is_not_found());
        assert!(ApiError::Network("AbortError: The user aborted a request.".into()).is_aborted());
        assert!(!ApiError::Network("connection refused".into()).is_aborted());
    }
}
