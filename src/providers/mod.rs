// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! External collaborators.
//!
//! Everything the server reaches outside its own process for: the GitHub
//! REST API behind the profile repo lookup, and Gravatar's hash-addressed
//! avatar URLs.

pub mod github;
pub mod gravatar;

pub use github::{GithubClient, GithubError};
pub use gravatar::gravatar_url;
