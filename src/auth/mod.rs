// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Self-issued, stateless bearer tokens for the Recipes API.
//!
//! ## Auth Flow
//!
//! 1. Client posts `{userName, password}` to `/api/authenticate`
//! 2. [`Authenticator`] compares them with the configured user and secret and
//!    issues an HS512 token valid for 10 minutes
//! 3. Client sends `Authorization: Bearer <token>` on every other call
//! 4. [`request_gate`] classifies the route ([`AccessPolicy`]) and, for
//!    protected routes, rejects missing headers and malformed tokens (`403`)
//! 5. Each protected handler re-validates signature and expiry through the
//!    [`Auth`] extractor (`401` on failure)
//!
//! ## Security
//!
//! - No server-side session or token store; a token is valid by signature and
//!   expiry alone and cannot be revoked early
//! - The shared secret is both the login password and the HMAC key

pub mod authenticator;
pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod policy;
pub mod roles;
pub mod signing;
pub mod token;

pub use authenticator::{Authenticator, IssuedToken};
pub use claims::{AuthenticatedUser, RequestIdentity, TokenClaims};
pub use error::AuthError;
pub use extractor::Auth;
pub use middleware::request_gate;
pub use policy::{Access, AccessPolicy};
pub use roles::Role;
