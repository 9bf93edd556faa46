// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{AuthenticatedUser, AuthError};
use crate::state::AppState;

/// Header carrying the session token on private routes.
pub const X_AUTH_TOKEN: &str = "x-auth-token";

/// Extractor for authenticated users.
///
/// Reads the token from the `x-auth-token` header and verifies it with
/// the server's own signing secret.
///
/// # Example
///
/// ```rust,ignore
/// async fn current_user(
///     Auth(user): Auth,
///     State(state): State<AppState>,
/// ) -> Result<Json<UserResponse>, ApiError> {
///     // user.user_id contains the authenticated user's ID
/// }
/// ```
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // First check if an earlier layer already resolved the user
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        let token = parts
            .headers
            .get(X_AUTH_TOKEN)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidHeader)?;

        let user = state.tokens.verify(token)?;

        Ok(Auth(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::config::JWT_SECRET_DEV_FALLBACK;
    use axum::http::Request;

    fn parts_with_token(token: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(token) = token {
            builder = builder.header(X_AUTH_TOKEN, token);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn extractor_requires_token_header() {
        let state = AppState::default();
        let mut parts = parts_with_token(None);

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    #[tokio::test]
    async fn extractor_accepts_issued_token() {
        let state = AppState::default();
        let token = state.tokens.issue("user_123").unwrap();
        let mut parts = parts_with_token(Some(&token));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap().0.user_id, "user_123");
    }

    #[tokio::test]
    async fn extractor_rejects_expired_token() {
        let state = AppState::default();
        let stale = TokenService::with_ttl(JWT_SECRET_DEV_FALLBACK, -120);
        let token = stale.issue("user_123").unwrap();
        let mut parts = parts_with_token(Some(&token));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn extractor_rejects_tampered_token() {
        let state = AppState::default();
        let real = state.tokens.issue("user_123").unwrap();
        let other = state.tokens.issue("user_456").unwrap();

        let real_parts: Vec<&str> = real.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", real_parts[0], other_parts[1], real_parts[2]);
        let mut parts = parts_with_token(Some(&forged));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[tokio::test]
    async fn extractor_prefers_extensions() {
        let state = AppState::default();
        let mut parts = parts_with_token(None);

        let user = AuthenticatedUser {
            user_id: "user_from_layer".to_string(),
            expires_at: 0,
        };
        parts.extensions.insert(user.clone());

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap().0.user_id, "user_from_layer");
    }
}
