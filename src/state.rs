// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Shared application state handed to every handler.

use crate::auth::TokenService;
use crate::config::JWT_SECRET_DEV_FALLBACK;
use crate::providers::GithubClient;
use crate::storage::{DocumentStore, StoragePaths};

/// State threaded through the router.
///
/// Cloning is cheap: the store is a path handle, the token service shares
/// its keys, and the GitHub client reuses one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub tokens: TokenService,
    pub github: GithubClient,
}

impl AppState {
    pub fn new(store: DocumentStore, tokens: TokenService, github: GithubClient) -> Self {
        Self {
            store,
            tokens,
            github,
        }
    }
}

impl Default for AppState {
    /// State backed by a fresh temp directory, for handler tests.
    fn default() -> Self {
        let dir = std::env::temp_dir().join(format!("devcircle-state-{}", uuid::Uuid::new_v4()));
        let mut store = DocumentStore::new(StoragePaths::new(&dir));
        store.initialize().expect("failed to initialize test storage");

        let tokens = TokenService::new(JWT_SECRET_DEV_FALLBACK);
        let github = GithubClient::new("https://api.github.com", None)
            .expect("failed to build GitHub client");

        Self::new(store, tokens, github)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_ready_for_handlers() {
        let state = AppState::default();
        assert!(state.store.is_initialized());

        let token = state.tokens.issue("user-1").unwrap();
        assert_eq!(state.tokens.verify(&token).unwrap().user_id, "user-1");
    }
}
