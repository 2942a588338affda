// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in every protected handler:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Utc;

use super::{middleware::bearer_token, token, AuthError, AuthenticatedUser, RequestIdentity};
use crate::state::AppState;

/// Extractor for authenticated users.
///
/// Always performs full verification of the bearer token: signature under
/// the shared secret and expiry against the current wall clock. It does not
/// accept the request gate's [`RequestIdentity`] in place of that check, so
/// each protected handler authorizes independently.
///
/// A well-formed token that fails verification is rejected with `401`.
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = token::validate(token, state.auth.secret.as_bytes(), Utc::now()).map_err(
            |err| match err {
                AuthError::TokenExpired => AuthError::TokenExpired,
                _ => AuthError::InvalidSignature,
            },
        )?;
        let user = AuthenticatedUser::from_claims(claims);

        match parts.extensions.get::<RequestIdentity>() {
            Some(identity) => tracing::debug!(
                gate_user = %identity.user_name,
                gate_role = %identity.role,
                subject = %user.user_name,
                role = %user.role,
                expires_at = user.expires_at,
                "Token verified"
            ),
            None => tracing::debug!(
                subject = %user.user_name,
                role = %user.role,
                expires_at = user.expires_at,
                "Token verified without gate identity"
            ),
        }

        Ok(Auth(user))
    }
}
