// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

use axum::{extract::State, Json};

use crate::{
    audit_log,
    auth::{verify_password, Auth},
    error::ApiError,
    models::{LoginRequest, TokenResponse, UserId, UserResponse},
    state::AppState,
    storage::{AuditEvent, AuditEventType, AuditRepository, StoredUser, UserRepository},
    validation::FieldErrors,
};

impl From<StoredUser> for UserResponse {
    fn from(user: StoredUser) -> Self {
        Self {
            id: UserId::from(user.id),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}

/// Record a failed login without revealing which check failed.
fn audit_login_failure(state: &AppState, reason: &str) {
    let event = AuditEvent::new(AuditEventType::LoginFailed).failed(reason);
    let _ = AuditRepository::new(&state.store).log(&event);
}

/// Authenticate with email and password.
///
/// Unknown email and wrong password produce the same response so the
/// endpoint cannot be used to probe which addresses have accounts.
#[utoipa::path(
    post,
    path = "/api/auth",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Login succeeded", body = TokenResponse),
        (status = 400, description = "Validation failed or invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut checks = FieldErrors::new();
    checks.require_email("email", &request.email, "Please include a valid email");
    checks.require("password", &request.password, "Password is required");
    checks.finish()?;

    let users = UserRepository::new(&state.store);
    let Some(user) = users.find_by_email(&request.email)? else {
        audit_login_failure(&state, "unknown email");
        return Err(ApiError::bad_request("Invalid credentials"));
    };

    if !verify_password(&request.password, &user.password_hash)? {
        audit_login_failure(&state, "password mismatch");
        return Err(ApiError::bad_request("Invalid credentials"));
    }

    audit_log!(&state.store, AuditEventType::LoginSucceeded, &user.id);
    tracing::info!(user_id = %user.id, "login succeeded");

    let token = state.tokens.issue(&user.id)?;
    Ok(Json(TokenResponse { token }))
}

/// Return the authenticated user's own record, minus the password hash.
#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "Auth",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Account no longer exists")
    )
)]
pub async fn current_user(
    Auth(authed): Auth,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let users = UserRepository::new(&state.store);
    let user = users.get(&authed.user_id)?;
    Ok(Json(UserResponse::from(user)))
}
