// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and the per-request identities derived from them.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::roles::Role;

/// Token id stamped into every issued token (`jti`).
pub const TOKEN_ID: &str = "recipeJWT";

/// Lifetime of an issued token: 10 minutes.
pub const TOKEN_TTL: Duration = Duration::from_millis(600_000);

/// Claims embedded in a token payload.
///
/// Timestamps are JWT NumericDates (seconds since the Unix epoch). `exp` is
/// absolute; verification compares it with the wall clock at the moment of
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Token id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Subject (the authenticated user name)
    pub sub: String,

    /// Granted authorities (`ROLE_USER`)
    #[serde(default)]
    pub authorities: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl TokenClaims {
    /// Claims for a token issued to `subject` at `issued_at`, valid for `ttl`.
    pub fn issue(subject: impl Into<String>, role: Role, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            jti: Some(TOKEN_ID.to_string()),
            sub: subject.into(),
            authorities: vec![role.authority().to_string()],
            iat,
            exp: iat.saturating_add(ttl.as_secs() as i64),
        }
    }

    /// First recognised role among the granted authorities.
    pub fn role(&self) -> Option<Role> {
        self.authorities
            .iter()
            .find_map(|authority| Role::from_authority(authority))
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Whether the token is past its expiry at `now`.
    ///
    /// An `exp` outside the representable range counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => now > expires_at,
            None => true,
        }
    }
}

/// User whose token passed full verification in a protected handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Token subject
    pub user_name: String,

    /// Role granted by the token
    pub role: Role,

    /// Token expiration (Unix timestamp)
    pub expires_at: i64,
}

impl AuthenticatedUser {
    /// Create from verified claims.
    pub fn from_claims(claims: TokenClaims) -> Self {
        let role = claims.role().unwrap_or_default();
        Self {
            user_name: claims.sub,
            role,
            expires_at: claims.exp,
        }
    }
}

/// Identity attached to a request by the request gate.
///
/// It records that a structurally sound bearer token was presented; the
/// signature has not been checked. Lives in the request's extensions for the
/// duration of that one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    /// The configured user name
    pub user_name: String,
    pub role: Role,
}
