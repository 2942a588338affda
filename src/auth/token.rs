// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token codec on top of `jsonwebtoken`.
//!
//! Tokens are compact HS512 JWTs handed out with the `Bearer ` scheme in
//! front.
//!
//! [`decode`] is the structural check used by the request gate: it recovers
//! header and claims but neither verifies the signature nor looks at the
//! clock. [`validate`] adds both and is what protected handlers run.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use super::{claims::TokenClaims, signing, AuthError};

/// Authorization scheme marker.
pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("unsupported signing algorithm {0:?}")]
    UnsupportedAlgorithm(Algorithm),
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// A structurally valid token whose signature has not been checked yet.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: Header,
    pub claims: TokenClaims,
}

/// Remove leading `Bearer ` scheme markers.
///
/// Issued tokens already carry the marker, so a client that hands the issued
/// string to a bearer-auth helper sends `Bearer Bearer <token>`; both forms
/// resolve to the same token.
pub fn strip_scheme(token: &str) -> &str {
    let mut rest = token.trim();
    while let Some(stripped) = rest.strip_prefix(BEARER_PREFIX) {
        rest = stripped.trim_start();
    }
    rest
}

/// Serialize and sign `claims`, returning `Bearer <header>.<payload>.<signature>`.
pub fn encode(claims: &TokenClaims, secret: &[u8]) -> Result<String, TokenError> {
    let token = jsonwebtoken::encode(
        &Header::new(signing::ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret),
    )?;
    Ok(format!("{BEARER_PREFIX}{token}"))
}

/// Recover header and claims without checking signature or expiry.
pub fn decode(token: &str) -> Result<DecodedToken, TokenError> {
    let data = jsonwebtoken::dangerous::insecure_decode::<TokenClaims>(strip_scheme(token))?;
    if data.header.alg != signing::ALGORITHM {
        return Err(TokenError::UnsupportedAlgorithm(data.header.alg));
    }

    Ok(DecodedToken {
        header: data.header,
        claims: data.claims,
    })
}

/// Fully validate a token: structure, signature under `secret`, and expiry.
///
/// `jsonwebtoken` checks `exp` against the system clock with no leeway; the
/// claims are then also checked against `now`.
pub fn validate(token: &str, secret: &[u8], now: DateTime<Utc>) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(signing::ALGORITHM);
    validation.leeway = 0;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = jsonwebtoken::decode::<TokenClaims>(
        strip_scheme(token),
        &DecodingKey::from_secret(secret),
        &validation,
    )
    .map_err(|err| {
        tracing::debug!(error = %err, "Token failed validation");
        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedToken,
        }
    })?;

    if data.claims.is_expired_at(now) {
        return Err(AuthError::TokenExpired);
    }

    Ok(data.claims)
}

/// Boolean form of [`validate`]. Never fails; the cause of a rejection is
/// logged.
pub fn verify_token(token: &str, secret: &[u8], now: DateTime<Utc>) -> bool {
    match validate(token, secret, now) {
        Ok(claims) => {
            tracing::debug!(subject = %claims.sub, "Given token is valid");
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Given token is invalid");
            false
        }
    }
}
