// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Recipes Rust Server - Token-protected recipe management API
//!
//! An in-memory recipe repository behind a small REST API. Callers log in
//! with the configured user name and shared secret, receive a short-lived
//! HS512 bearer token, and present it on every recipe call.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Token issuance, request gate and handler-side verification
//! - `config` - Environment configuration
//! - `store` - In-memory recipe repository
//! - `telemetry` - Tracing subscriber setup

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
pub mod telemetry;
