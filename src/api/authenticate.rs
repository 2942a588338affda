// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::json_body;
use crate::{error::ApiError, models::UserCredentials, state::AppState};

/// Exchange the configured credentials for a token.
///
/// The issued token (`Bearer <token>`) is returned in the `password` field of
/// the echoed credentials.
#[utoipa::path(
    post,
    path = "/api/authenticate",
    request_body = UserCredentials,
    tag = "Authentication",
    responses(
        (status = 202, description = "Token issued in the password field", body = UserCredentials),
        (status = 400, description = "Missing or wrong credentials", body = crate::error::ErrorBody),
    )
)]
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<UserCredentials>, JsonRejection>,
) -> Result<(StatusCode, Json<UserCredentials>), ApiError> {
    tracing::info!("Request received for authentication");
    let credentials = json_body(payload)?;

    let issued = state
        .authenticator()
        .authenticate(&credentials, Utc::now())?;

    tracing::info!(
        user = %issued.claims.sub,
        expires_at = issued.claims.exp,
        "Token generated and returned through response"
    );
    Ok((
        StatusCode::ACCEPTED,
        Json(UserCredentials {
            user_name: credentials.user_name,
            password: Some(issued.token),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token;

    #[tokio::test]
    async fn correct_credentials_return_token_in_password_field() {
        let state = AppState::for_tests();
        let request = UserCredentials {
            user_name: Some("abnamro".into()),
            password: Some("recipeKey".into()),
        };

        let (status, Json(response)) = authenticate(State(state.clone()), Ok(Json(request)))
            .await
            .expect("authentication succeeds");

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(response.user_name.as_deref(), Some("abnamro"));
        let issued = response.password.expect("token returned");
        assert!(issued.starts_with("Bearer "));
        assert!(token::verify_token(&issued, state.auth.secret.as_bytes(), Utc::now()));
    }

    #[tokio::test]
    async fn wrong_password_is_bad_request() {
        let request = UserCredentials {
            user_name: Some("recipeUser".into()),
            password: Some("wrongPassword".into()),
        };

        let err = authenticate(State(AppState::for_tests()), Ok(Json(request)))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
