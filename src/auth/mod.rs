// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! # Authentication Module
//!
//! This module provides self-issued JWT authentication for the DevCircle API.
//!
//! ## Auth Flow
//!
//! 1. Client registers (`POST /api/users`) or logs in (`POST /api/auth`)
//! 2. Server verifies credentials and mints an HS256 JWT with `sub` set
//!    to the user's id
//! 3. Client sends `x-auth-token: <JWT>` on every private route
//! 4. The [`Auth`] extractor verifies signature and expiry and hands the
//!    handler an [`AuthenticatedUser`]
//!
//! ## Security
//!
//! - Passwords are stored as bcrypt hashes only
//! - Tokens are signed and verified with the `JWT_SECRET` the server owns;
//!   no third-party issuer or key fetching is involved
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod extractor;
pub mod password;
pub mod tokens;

pub use claims::{AuthenticatedUser, Claims};
pub use error::AuthError;
pub use extractor::{Auth, X_AUTH_TOKEN};
pub use password::{hash_password, verify_password};
pub use tokens::TokenService;
