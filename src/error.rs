use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{ IntoResponse, Response },
    Json,
};
use thiserror::Error;

use crate::llm::chat::ChatError;
use crate::models::chat::ErrorBody;

pub const MISSING_INPUT: &str = "No message or history provided";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Error with Groq API: {0}")]
    Upstream(String),

    #[error("No response generated")]
    NoResponse,

    #[error("Timeout: Groq API did not respond within {0}s")]
    Timeout(u64),

    #[error("Server error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn missing_input() -> Self {
        RelayError::BadRequest(MISSING_INPUT.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Upstream(_) | RelayError::NoResponse | RelayError::Internal(_) =>
                StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ChatError> for RelayError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Timeout { secs } => RelayError::Timeout(secs),
            other => RelayError::Upstream(other.to_string()),
        }
    }
}

/// Body extraction fails before validation runs; the caller still gets `{"error": ...}`.
impl From<BytesRejection> for RelayError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RelayError::PayloadTooLarge(rejection.body_text())
        } else {
            RelayError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(RelayError::missing_input().status(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::Upstream("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(RelayError::NoResponse.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(RelayError::Internal("x".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(RelayError::Timeout(30).status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            RelayError::PayloadTooLarge("too big".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn messages_follow_the_wire_contract() {
        assert_eq!(RelayError::missing_input().to_string(), "No message or history provided");
        assert_eq!(RelayError::NoResponse.to_string(), "No response generated");
        assert_eq!(
            RelayError::Upstream("boom".into()).to_string(),
            "Error with Groq API: boom"
        );
        assert_eq!(RelayError::Internal("oops".into()).to_string(), "Server error: oops");
    }

    #[test]
    fn chat_errors_convert() {
        let api = ChatError::Api { status: 429, message: "Rate limit reached".into() };
        match RelayError::from(api) {
            RelayError::Upstream(desc) => assert!(desc.contains("Rate limit reached")),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(RelayError::from(ChatError::Timeout { secs: 5 }), RelayError::Timeout(5)));
    }
}
