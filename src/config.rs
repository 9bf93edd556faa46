// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for the document store | `data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `JWT_SECRET` | HS256 signing secret for issued tokens | Insecure dev fallback (logged) |
//! | `GITHUB_API_BASE_URL` | GitHub API base for the repo proxy | `https://api.github.com` |
//! | `GITHUB_TOKEN` | Optional token for authenticated GitHub calls | None |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the document store root directory.
///
/// All user, profile, post, and audit documents are stored under this
/// directory, one JSON file per document.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the token signing secret.
///
/// When unset the server falls back to [`JWT_SECRET_DEV_FALLBACK`] and logs
/// a warning; production deployments must set this.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Development-only signing secret used when `JWT_SECRET` is unset.
///
/// Tokens signed with this value are worthless outside local development.
pub const JWT_SECRET_DEV_FALLBACK: &str = "devcircle-dev-secret-do-not-use-in-prod";

/// Environment variable name for the GitHub API base URL override.
pub const GITHUB_API_BASE_URL_ENV: &str = "GITHUB_API_BASE_URL";

/// Environment variable name for the optional GitHub API token.
///
/// Unauthenticated GitHub calls are rate-limited per IP; setting a token
/// raises the limit. The repo proxy works without it.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable name for the log output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Lifetime of issued auth tokens, in seconds (100 hours).
pub const TOKEN_TTL_SECS: i64 = 360_000;
