// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    auth::{AccessPolicy, Authenticator},
    config::AuthConfig,
    store::RecipeStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<RecipeStore>>,
    /// Read-only after startup; shared by all requests without locking.
    pub auth: Arc<AuthConfig>,
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(store: RecipeStore, auth: AuthConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth: Arc::new(auth),
            policy: Arc::new(AccessPolicy::standard()),
        }
    }

    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    pub fn authenticator(&self) -> Authenticator<'_> {
        Authenticator::new(&self.auth)
    }
}

#[cfg(test)]
impl AppState {
    /// State with the `abnamro` / `recipeKey` identity and an empty store.
    pub fn for_tests() -> Self {
        use crate::config::SharedSecret;

        Self::new(
            RecipeStore::default(),
            AuthConfig::new("abnamro", SharedSecret::new("recipeKey")),
        )
    }
}
