// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User roles carried in token claims.

/// Prefix Spring-style authority strings put in front of the role name.
const AUTHORITY_PREFIX: &str = "ROLE_";

/// Roles a token can grant.
///
/// Only one role exists: every authenticated caller is a `User`. Tokens
/// carry it as the authority string `ROLE_USER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    User,
}

impl Role {
    /// Authority string written into the token's `authorities` claim.
    pub fn authority(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
        }
    }

    /// Parse a role from either its authority string (`ROLE_USER`) or its
    /// bare name (`user`), case-insensitive.
    pub fn from_authority(s: &str) -> Option<Role> {
        let upper = s.to_ascii_uppercase();
        match upper.strip_prefix(AUTHORITY_PREFIX).unwrap_or(&upper) {
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
        }
    }
}
