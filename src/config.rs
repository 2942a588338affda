// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! [`ServiceConfig`] loaded from the environment once at startup. Nothing in
//! the configuration is mutated after the server starts.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `RECIPE_USER_NAME` | The single user allowed to authenticate | `abnamro` |
//! | `JWT_SECRET_KEY` | Shared secret (login password and HMAC key) | Required |
//! | `RECIPE_STORE_CAPACITY` | Maximum number of stored recipes | `10000` |
//! | `TLS_CERT_PATH` | PEM certificate chain, enables HTTPS with `TLS_KEY_PATH` | Optional |
//! | `TLS_KEY_PATH` | PEM private key, enables HTTPS with `TLS_CERT_PATH` | Optional |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{fmt, path::PathBuf, sync::Arc};

use crate::auth::signing;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const USER_NAME_ENV: &str = "RECIPE_USER_NAME";

/// Environment variable holding the shared secret.
///
/// The same value is the password accepted by `POST /api/authenticate` and
/// the HMAC-SHA-512 key for every issued token.
pub const SECRET_KEY_ENV: &str = "JWT_SECRET_KEY";
pub const STORE_CAPACITY_ENV: &str = "RECIPE_STORE_CAPACITY";
pub const TLS_CERT_PATH_ENV: &str = "TLS_CERT_PATH";
pub const TLS_KEY_PATH_ENV: &str = "TLS_KEY_PATH";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USER_NAME: &str = "abnamro";
pub const DEFAULT_STORE_CAPACITY: usize = 10_000;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("TLS_CERT_PATH and TLS_KEY_PATH must be set together")]
    PartialTls,
}

/// Process-wide shared secret.
///
/// Cloning is cheap (the bytes are shared) and the value never shows up in
/// `Debug` output. There is no `PartialEq`; compare with [`SharedSecret::matches`].
#[derive(Clone)]
pub struct SharedSecret(Arc<str>);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::from(secret.into()))
    }

    /// Raw key bytes for signing and verification.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Compare against a submitted password in constant time.
    ///
    /// Both values are MACed under the secret and the digests compared with
    /// `verify_slice`.
    pub fn matches(&self, candidate: &str) -> bool {
        let expected = signing::sign(self.as_bytes(), self.as_bytes());
        signing::verify(candidate.as_bytes(), &expected, self.as_bytes())
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(***)")
    }
}

/// The single configured identity and the key its tokens are signed with.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub user_name: String,
    pub secret: SharedSecret,
}

impl AuthConfig {
    pub fn new(user_name: impl Into<String>, secret: SharedSecret) -> Self {
        Self {
            user_name: user_name.into(),
            secret,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub auth: AuthConfig,
    pub store_capacity: usize,
    pub tls: Option<TlsPaths>,
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(&lookup, PORT_ENV, DEFAULT_PORT)?;
        let store_capacity = parse_or(&lookup, STORE_CAPACITY_ENV, DEFAULT_STORE_CAPACITY)?;

        let user_name = lookup(USER_NAME_ENV).unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
        if user_name.is_empty() {
            return Err(ConfigError::Empty(USER_NAME_ENV));
        }

        let secret = lookup(SECRET_KEY_ENV).ok_or(ConfigError::Missing(SECRET_KEY_ENV))?;
        if secret.is_empty() {
            return Err(ConfigError::Empty(SECRET_KEY_ENV));
        }

        let tls = match (lookup(TLS_CERT_PATH_ENV), lookup(TLS_KEY_PATH_ENV)) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialTls),
        };

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: LOG_FORMAT_ENV,
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            auth: AuthConfig::new(user_name, SharedSecret::new(secret)),
            store_capacity,
            tls,
            log_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
