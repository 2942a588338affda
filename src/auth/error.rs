// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{messages, ApiError};

/// Authentication error type.
///
/// Gate rejections (header or token structure) are `403`; handler-side
/// verification failures (signature or expiry) are `401`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Submitted credentials are missing or do not match
    InvalidCredentials,
    /// No authorization header present
    MissingAuthHeader,
    /// Authorization header is not a bearer credential
    InvalidAuthHeader,
    /// Token is structurally malformed or uses an unsupported algorithm
    MalformedToken,
    /// Token signature does not verify against the shared secret
    InvalidSignature,
    /// Token is past its expiry
    TokenExpired,
    /// Token could not be produced
    InternalError(String),
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MissingAuthHeader => "missing_auth_header",
            AuthError::InvalidAuthHeader => "invalid_auth_header",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::InternalError(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeader
            | AuthError::MalformedToken => StatusCode::FORBIDDEN,
            AuthError::InvalidSignature | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid user credentials"),
            AuthError::MissingAuthHeader => write!(f, "Authorization header is required"),
            AuthError::InvalidAuthHeader => {
                write!(f, "Invalid authorization header format (expected 'Bearer <token>')")
            }
            AuthError::MalformedToken => write!(f, "Token is malformed"),
            AuthError::InvalidSignature => write!(f, "Token signature is invalid"),
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::InternalError(msg) => write!(f, "Internal authentication error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        tracing::warn!(error_code = err.error_code(), error = %err, "Authentication rejected");
        match err.status_code() {
            StatusCode::BAD_REQUEST => ApiError::bad_request(messages::BAD_REQUEST),
            StatusCode::FORBIDDEN => ApiError::forbidden(err.to_string()),
            StatusCode::UNAUTHORIZED => ApiError::unauthorized(messages::UNAUTHORIZED),
            _ => ApiError::unknown(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn gate_errors_are_forbidden_and_handler_errors_unauthorized() {
        assert_eq!(AuthError::MissingAuthHeader.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::InvalidAuthHeader.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::MalformedToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::InvalidSignature.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_auth_returns_403_with_uniform_body() {
        let response = AuthError::MissingAuthHeader.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["status"], 403);
        assert_eq!(body["message"], "Authorization header is required");
    }

    #[tokio::test]
    async fn invalid_signature_uses_unauthorized_message() {
        let response = AuthError::InvalidSignature.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["message"], messages::UNAUTHORIZED);
    }

    #[test]
    fn gate_errors_keep_their_reason_and_handler_errors_share_one_message() {
        let forbidden: ApiError = AuthError::MalformedToken.into();
        assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
        assert_eq!(forbidden.message, "Token is malformed");

        let expired: ApiError = AuthError::TokenExpired.into();
        let forged: ApiError = AuthError::InvalidSignature.into();
        assert_eq!(expired.status, StatusCode::UNAUTHORIZED);
        assert_eq!(expired.message, forged.message);

        let credentials: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(credentials.status, StatusCode::BAD_REQUEST);
        assert_eq!(credentials.message, messages::BAD_REQUEST);
    }

    #[test]
    fn internal_error_hides_detail_from_client() {
        let api: ApiError = AuthError::InternalError("serializer exploded".into()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, messages::INTERNAL_SERVER_ERROR);
    }
}
