// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential check and token issuance for the single configured user.

use chrono::{DateTime, Utc};

use super::{
    claims::{TokenClaims, TOKEN_TTL},
    token, AuthError, Role,
};
use crate::{config::AuthConfig, models::UserCredentials};

/// A freshly minted token and the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// `Bearer <header>.<payload>.<signature>`
    pub token: String,
    pub claims: TokenClaims,
}

/// Verifies submitted credentials against the configured identity.
///
/// Holds only a borrow of the read-only [`AuthConfig`]; create one per
/// request with [`crate::state::AppState::authenticator`].
pub struct Authenticator<'a> {
    config: &'a AuthConfig,
}

impl<'a> Authenticator<'a> {
    pub fn new(config: &'a AuthConfig) -> Self {
        Self { config }
    }

    /// Check `credentials` and issue a token valid from `now` for 10 minutes.
    ///
    /// Both fields must be present and non-empty and must equal the
    /// configured user name and shared secret exactly.
    pub fn authenticate(
        &self,
        credentials: &UserCredentials,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let (Some(user_name), Some(password)) = (
            non_empty(credentials.user_name.as_deref()),
            non_empty(credentials.password.as_deref()),
        ) else {
            tracing::warn!("Given user credentials are incomplete");
            return Err(AuthError::InvalidCredentials);
        };

        if user_name != self.config.user_name || !self.config.secret.matches(password) {
            tracing::warn!(user = %user_name, "Given user credentials are wrong");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::debug!(user = %user_name, "Generating token for authenticated user");
        let claims = TokenClaims::issue(user_name, Role::User, now, TOKEN_TTL);
        let token = token::encode(&claims, self.config.secret.as_bytes())
            .map_err(|err| AuthError::InternalError(err.to_string()))?;

        tracing::debug!(token_length = token.len(), "Generated token");
        Ok(IssuedToken { token, claims })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
