// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

use axum::{extract::State, Json};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit_log,
    auth::hash_password,
    error::ApiError,
    models::{RegisterRequest, TokenResponse},
    providers::gravatar_url,
    state::AppState,
    storage::{AuditEventType, StoredUser, UserRepository},
    validation::FieldErrors,
};

/// Register a new user.
///
/// Responds with a signed token so the client is logged in immediately.
/// The password is bcrypt-hashed before it touches disk; the avatar is
/// derived from the email so every account has one from the start.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    tag = "Users",
    responses(
        (status = 200, description = "User registered", body = TokenResponse),
        (status = 400, description = "Validation failed or email already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut checks = FieldErrors::new();
    checks.require("name", &request.name, "Name is required");
    checks.require_email("email", &request.email, "Please include a valid email");
    checks.require_min_len(
        "password",
        &request.password,
        6,
        "Please enter a password with 6 or more characters",
    );
    checks.finish()?;

    let users = UserRepository::new(&state.store);
    let email = request.email.trim().to_string();

    if users.find_by_email(&email)?.is_some() {
        return Err(ApiError::bad_request("User already exists"));
    }

    let user = StoredUser {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        avatar: gravatar_url(&email),
        email,
        password_hash: hash_password(&request.password)?,
        created_at: Utc::now(),
    };
    users.create(&user)?;

    audit_log!(&state.store, AuditEventType::UserRegistered, &user.id);
    tracing::info!(user_id = %user.id, "user registered");

    let token = state.tokens.issue(&user.id)?;
    Ok(Json(TokenResponse { token }))
}
