// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Static route classification: which requests bypass the request gate.

use axum::http::Method;

/// What a request needs before it reaches a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Bypasses the request gate
    Public,
    /// Needs a bearer token
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathPattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(exact) => path == *exact,
            PathPattern::Prefix(prefix) => {
                path == prefix.trim_end_matches('/') || path.starts_with(prefix)
            }
        }
    }
}

/// A public route: a path pattern, optionally restricted to one method.
#[derive(Debug, Clone)]
struct PublicRoute {
    method: Option<Method>,
    pattern: PathPattern,
}

/// Ordered set of public routes; everything not listed is `Authenticated`.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    public: Vec<PublicRoute>,
}

impl AccessPolicy {
    /// An empty policy: every route requires authentication.
    pub fn authenticated_by_default() -> Self {
        Self { public: Vec::new() }
    }

    /// Allow `path` without a token, for any method.
    pub fn permit(mut self, path: &'static str) -> Self {
        self.public.push(PublicRoute {
            method: None,
            pattern: PathPattern::Exact(path),
        });
        self
    }

    /// Allow `method path` without a token.
    pub fn permit_method(mut self, method: Method, path: &'static str) -> Self {
        self.public.push(PublicRoute {
            method: Some(method),
            pattern: PathPattern::Exact(path),
        });
        self
    }

    /// Allow everything under `prefix` without a token.
    pub fn permit_prefix(mut self, prefix: &'static str) -> Self {
        self.public.push(PublicRoute {
            method: None,
            pattern: PathPattern::Prefix(prefix),
        });
        self
    }

    /// The service's route table.
    pub fn standard() -> Self {
        Self::authenticated_by_default()
            .permit("/")
            .permit("/error")
            .permit("/health")
            .permit_method(Method::POST, "/api/authenticate")
            .permit_prefix("/docs/")
            .permit("/api-doc/openapi.json")
    }

    pub fn classify(&self, method: &Method, path: &str) -> Access {
        let public = self.public.iter().any(|route| {
            route.method.as_ref().is_none_or(|m| m == method) && route.pattern.matches(path)
        });
        if public {
            Access::Public
        } else {
            Access::Authenticated
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
