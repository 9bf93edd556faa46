// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! GitHub API integration for the profile repository lookup.

use std::time::Duration;

use reqwest::{header, Client};

use crate::config::{GITHUB_API_BASE_URL_ENV, GITHUB_TOKEN_ENV};
use crate::models::GithubRepo;

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const REPOS_PER_PAGE: &str = "5";
const REPOS_SORT: &str = "created:asc";

/// User-Agent GitHub requires on every API call.
const USER_AGENT_VALUE: &str = concat!("devcircle-server/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("GitHub request failed: {0}")]
    Request(String),

    #[error("GitHub returned {status} for user {username}")]
    UpstreamStatus { status: u16, username: String },

    #[error("GitHub response was invalid: {0}")]
    InvalidResponse(String),
}

/// Client for the public GitHub REST API.
///
/// Works unauthenticated; setting `GITHUB_TOKEN` raises the rate limit.
#[derive(Debug, Clone)]
pub struct GithubClient {
    api_base_url: String,
    token: Option<String>,
    http: Client,
}

impl GithubClient {
    /// Build a client from `GITHUB_API_BASE_URL` / `GITHUB_TOKEN`.
    pub fn from_env() -> Result<Self, GithubError> {
        let api_base_url = env_or_default(GITHUB_API_BASE_URL_ENV, DEFAULT_API_BASE_URL);
        let token = env_optional(GITHUB_TOKEN_ENV);
        Self::new(api_base_url, token)
    }

    /// Build a client against an explicit base URL.
    pub fn new(api_base_url: impl Into<String>, token: Option<String>) -> Result<Self, GithubError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| GithubError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_base_url: api_base_url.into(),
            token,
            http,
        })
    }

    /// Fetch a user's five earliest-created public repositories.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let mut request = self
            .http
            .get(self.repos_url(username))
            .query(&[("per_page", REPOS_PER_PAGE), ("sort", REPOS_SORT)])
            .header(header::USER_AGENT, USER_AGENT_VALUE);

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| GithubError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GithubError::UpstreamStatus {
                status: response.status().as_u16(),
                username: username.to_string(),
            });
        }

        response
            .json::<Vec<GithubRepo>>()
            .await
            .map_err(|e| GithubError::InvalidResponse(e.to_string()))
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{username}/repos",
            self.api_base_url.trim_end_matches('/')
        )
    }
}

fn env_optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
