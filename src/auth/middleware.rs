// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request gate for Axum.
//!
//! Every request passes through [`request_gate`]. Public routes (see
//! [`AccessPolicy`](super::AccessPolicy)) go straight through. For every
//! other route the gate:
//!
//! 1. clears any [`RequestIdentity`] already on the request,
//! 2. requires an `Authorization: Bearer <token>` header (`403` otherwise),
//! 3. structurally decodes the token (`403` when malformed or not HS512),
//! 4. attaches a [`RequestIdentity`] for the configured user and forwards.
//!
//! The gate never checks the signature or the expiry. Protected handlers do
//! that themselves through the [`Auth`](super::Auth) extractor, which answers
//! `401` on failure.
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .route("/api/recipes", get(list_recipes))
//!     .layer(axum::middleware::from_fn_with_state(state.clone(), request_gate))
//!     .with_state(state);
//! ```

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{
    policy::Access,
    token::{self, BEARER_PREFIX},
    AuthError, RequestIdentity, Role,
};
use crate::state::AppState;

/// Gate middleware; install with `axum::middleware::from_fn_with_state`.
pub async fn request_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    request.extensions_mut().remove::<RequestIdentity>();

    let access = state
        .policy
        .classify(request.method(), request.uri().path());
    if access == Access::Public {
        return next.run(request).await;
    }

    match resolve_identity(request.headers(), &state.auth.user_name) {
        Ok(identity) => {
            tracing::debug!(
                user = %identity.user_name,
                role = %identity.role,
                "Request identity set"
            );
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Token check failed, request rejected at gate"
            );
            err.into_response()
        }
    }
}

/// Shallow check: bearer header present and token structurally sound.
///
/// The identity is always the configured user; the token's own subject is
/// only trusted after full verification in the handler.
pub fn resolve_identity(headers: &HeaderMap, user_name: &str) -> Result<RequestIdentity, AuthError> {
    let token = bearer_token(headers)?;

    token::decode(token).map_err(|err| {
        tracing::warn!(error = %err, "Presented token is malformed");
        AuthError::MalformedToken
    })?;

    Ok(RequestIdentity {
        user_name: user_name.to_string(),
        role: Role::User,
    })
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::InvalidAuthHeader)
}
