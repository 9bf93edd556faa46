// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! DevCircle - Developer Community API
//!
//! REST backend for the DevCircle app: user accounts with token auth,
//! member profiles (experience, education, social links, GitHub repo
//! lookup), and a posts feed with likes and comments.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Token issuing/verification and password hashing
//! - `providers` - External collaborators (GitHub, Gravatar)
//! - `storage` - File-backed JSON document store and repositories

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod state;
pub mod storage;
pub mod validation;
