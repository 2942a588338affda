// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client-facing error messages.
pub mod messages {
    pub const RECIPE_NOT_FOUND: &str = "Requested recipe not found in DB";
    pub const RECIPES_NOT_FOUND: &str = "No recipes found in DB";
    pub const BAD_REQUEST: &str = "Bad Request, check request body / parameter type and value";
    pub const UNAUTHORIZED: &str = "JWT Token is not authorized to access end point";
    pub const INTERNAL_SERVER_ERROR: &str =
        "Unknown error occurred, check the logs for more details";
    pub const RESOURCE_CONFLICT: &str = "Recipe Id should be unique to be added to DB";
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

/// Uniform error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code.
    pub status: u16,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// A resource could not be stored.
    pub fn creation_failed() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::INTERNAL_SERVER_ERROR,
        )
    }

    /// Catch-all for failures with no more specific mapping.
    pub fn unknown() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            messages::INTERNAL_SERVER_ERROR,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::info!(status = self.status.as_u16(), message = %self.message, "Error response built");
        let body = Json(ErrorBody {
            status: self.status.as_u16(),
            message: self.message,
            timestamp: Utc::now(),
        });
        (self.status, body).into_response()
    }
}

/// Response for a handler that panicked, installed through
/// `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = detail, "Request handler panicked");
    ApiError::unknown().into_response()
}
