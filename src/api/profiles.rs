// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    audit_log,
    auth::Auth,
    error::ApiError,
    models::{
        AddEducationRequest, AddExperienceRequest, Education, Experience, GithubRepo,
        MessageResponse, Profile, ProfileUser, SocialLinks, UpsertProfileRequest, UserId,
    },
    state::AppState,
    storage::{
        AuditEventType, ProfileRepository, StorageError, StoredProfile, StoredUser,
        UserRepository,
    },
    validation::FieldErrors,
};

/// Join a stored profile with its owner's public fields.
fn populated(profile: StoredProfile, owner: &StoredUser) -> Profile {
    Profile {
        user: ProfileUser {
            id: UserId::from(owner.id.as_str()),
            name: owner.name.clone(),
            avatar: owner.avatar.clone(),
        },
        company: profile.company,
        website: profile.website,
        location: profile.location,
        status: profile.status,
        skills: profile.skills,
        bio: profile.bio,
        github_username: profile.github_username,
        experience: profile.experience,
        education: profile.education,
        social: profile.social,
        created_at: profile.created_at,
    }
}

/// Trim an optional field, treating blank input as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated skills string into a trimmed ordered list.
fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the caller's profile, translating absence into the route's message.
fn own_profile(state: &AppState, user_id: &str) -> Result<StoredProfile, ApiError> {
    ProfileRepository::new(&state.store)
        .get(user_id)
        .map_err(|err| match err {
            StorageError::NotFound(_) => {
                ApiError::not_found("There is no profile for this user")
            }
            other => other.into(),
        })
}

/// Get the authenticated user's own profile.
#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "Profiles",
    responses(
        (status = 200, description = "Caller's profile", body = Profile),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No profile yet")
    )
)]
pub async fn get_own(
    Auth(authed): Auth,
    State(state): State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    let profile = own_profile(&state, &authed.user_id)?;
    let owner = UserRepository::new(&state.store).get(&authed.user_id)?;
    Ok(Json(populated(profile, &owner)))
}

/// Create or update the caller's profile.
///
/// Partial update: only fields present in the request are touched. A
/// present `social` sub-object replaces all stored links at once; blank
/// strings count as absent, matching how clients send untouched inputs.
#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = UpsertProfileRequest,
    tag = "Profiles",
    responses(
        (status = 200, description = "Created or updated profile", body = Profile),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn upsert_profile(
    Auth(authed): Auth,
    State(state): State<AppState>,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    let profiles = ProfileRepository::new(&state.store);
    let mut profile = match profiles.get(&authed.user_id) {
        Ok(existing) => existing,
        Err(StorageError::NotFound(_)) => StoredProfile::new(&authed.user_id),
        Err(other) => return Err(other.into()),
    };

    if let Some(v) = non_empty(request.company) {
        profile.company = Some(v);
    }
    if let Some(v) = non_empty(request.website) {
        profile.website = Some(v);
    }
    if let Some(v) = non_empty(request.location) {
        profile.location = Some(v);
    }
    if let Some(v) = non_empty(request.status) {
        profile.status = Some(v);
    }
    if let Some(v) = non_empty(request.bio) {
        profile.bio = Some(v);
    }
    if let Some(v) = non_empty(request.github_username) {
        profile.github_username = Some(v);
    }
    if let Some(raw) = non_empty(request.skills) {
        profile.skills = split_skills(&raw);
    }
    if let Some(links) = request.social {
        profile.social = SocialLinks {
            youtube: non_empty(links.youtube),
            twitter: non_empty(links.twitter),
            facebook: non_empty(links.facebook),
            linkedin: non_empty(links.linkedin),
            instagram: non_empty(links.instagram),
        };
    }

    profiles.save(&profile)?;
    tracing::debug!(user_id = %authed.user_id, "profile saved");

    let owner = UserRepository::new(&state.store).get(&authed.user_id)?;
    Ok(Json(populated(profile, &owner)))
}

/// List all profiles, newest first.
///
/// Profiles whose owner record has been removed are skipped rather than
/// served half-populated.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profiles",
    responses((status = 200, description = "All profiles", body = [Profile]))
)]
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<Profile>>, ApiError> {
    let users = UserRepository::new(&state.store);
    let mut result = Vec::new();

    for profile in ProfileRepository::new(&state.store).list_all()? {
        match users.get(&profile.user_id) {
            Ok(owner) => result.push(populated(profile, &owner)),
            Err(StorageError::NotFound(_)) => {
                tracing::warn!(user_id = %profile.user_id, "skipping profile with missing owner");
            }
            Err(other) => return Err(other.into()),
        }
    }

    Ok(Json(result))
}

/// Get a profile by its owning user's id.
#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    params(("user_id" = String, Path, description = "Owning user's id")),
    tag = "Profiles",
    responses(
        (status = 200, description = "Profile for that user", body = Profile),
        (status = 404, description = "No profile for that user")
    )
)]
pub async fn get_by_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    let not_found = || ApiError::not_found("Profile not found");

    let profile = ProfileRepository::new(&state.store)
        .get(&user_id)
        .map_err(|err| match err {
            StorageError::NotFound(_) => not_found(),
            other => other.into(),
        })?;
    let owner = UserRepository::new(&state.store)
        .get(&user_id)
        .map_err(|err| match err {
            StorageError::NotFound(_) => not_found(),
            other => other.into(),
        })?;

    Ok(Json(populated(profile, &owner)))
}

/// Delete the caller's account: profile (if any) and user record.
///
/// The caller's posts are left in place; the feed keeps showing them with
/// the author fields denormalized at creation time.
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "Profiles",
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn delete_account(
    Auth(authed): Auth,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let profiles = ProfileRepository::new(&state.store);
    if profiles.exists(&authed.user_id) {
        profiles.delete(&authed.user_id)?;
    }
    UserRepository::new(&state.store).delete(&authed.user_id)?;

    audit_log!(&state.store, AuditEventType::AccountDeleted, &authed.user_id);
    tracing::info!(user_id = %authed.user_id, "account deleted");

    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}

/// Add a work experience entry to the caller's profile.
#[utoipa::path(
    put,
    path = "/api/profile/experience",
    request_body = AddExperienceRequest,
    tag = "Profiles",
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "No profile yet")
    )
)]
pub async fn add_experience(
    Auth(authed): Auth,
    State(state): State<AppState>,
    Json(request): Json<AddExperienceRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut checks = FieldErrors::new();
    checks.require("title", &request.title, "Title is required");
    checks.require("company", &request.company, "Company is required");
    checks.require_date("from", request.from, "From date is required");
    checks.finish()?;
    let Some(from) = request.from else {
        return Err(ApiError::bad_request("From date is required"));
    };

    let mut profile = own_profile(&state, &authed.user_id)?;
    profile.experience.insert(
        0,
        Experience {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            company: request.company,
            location: non_empty(request.location),
            from,
            to: request.to,
            current: request.current,
            description: non_empty(request.description),
        },
    );
    ProfileRepository::new(&state.store).save(&profile)?;

    let owner = UserRepository::new(&state.store).get(&authed.user_id)?;
    Ok(Json(populated(profile, &owner)))
}

/// Remove a work experience entry by id.
///
/// An id that matches nothing leaves the list as-is; the profile is still
/// written back and returned.
#[utoipa::path(
    delete,
    path = "/api/profile/experience/{exp_id}",
    params(("exp_id" = String, Path, description = "Experience entry id")),
    tag = "Profiles",
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 404, description = "No profile yet")
    )
)]
pub async fn remove_experience(
    Auth(authed): Auth,
    Path(exp_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = own_profile(&state, &authed.user_id)?;
    profile.experience.retain(|entry| entry.id != exp_id);
    ProfileRepository::new(&state.store).save(&profile)?;

    let owner = UserRepository::new(&state.store).get(&authed.user_id)?;
    Ok(Json(populated(profile, &owner)))
}

/// Add an education entry to the caller's profile.
#[utoipa::path(
    put,
    path = "/api/profile/education",
    request_body = AddEducationRequest,
    tag = "Profiles",
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "No profile yet")
    )
)]
pub async fn add_education(
    Auth(authed): Auth,
    State(state): State<AppState>,
    Json(request): Json<AddEducationRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut checks = FieldErrors::new();
    checks.require("school", &request.school, "School is required");
    checks.require("degree", &request.degree, "Degree is required");
    checks.require(
        "fieldofstudy",
        &request.field_of_study,
        "Field of study is required",
    );
    checks.require_date("from", request.from, "From date is required");
    checks.finish()?;
    let Some(from) = request.from else {
        return Err(ApiError::bad_request("From date is required"));
    };

    let mut profile = own_profile(&state, &authed.user_id)?;
    profile.education.insert(
        0,
        Education {
            id: Uuid::new_v4().to_string(),
            school: request.school,
            degree: request.degree,
            field_of_study: request.field_of_study,
            from,
            to: request.to,
            current: request.current,
            description: non_empty(request.description),
        },
    );
    ProfileRepository::new(&state.store).save(&profile)?;

    let owner = UserRepository::new(&state.store).get(&authed.user_id)?;
    Ok(Json(populated(profile, &owner)))
}

/// Remove an education entry by id.
#[utoipa::path(
    delete,
    path = "/api/profile/education/{edu_id}",
    params(("edu_id" = String, Path, description = "Education entry id")),
    tag = "Profiles",
    responses(
        (status = 200, description = "Updated profile", body = Profile),
        (status = 404, description = "No profile yet")
    )
)]
pub async fn remove_education(
    Auth(authed): Auth,
    Path(edu_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = own_profile(&state, &authed.user_id)?;
    profile.education.retain(|entry| entry.id != edu_id);
    ProfileRepository::new(&state.store).save(&profile)?;

    let owner = UserRepository::new(&state.store).get(&authed.user_id)?;
    Ok(Json(populated(profile, &owner)))
}

/// List a GitHub user's five most recent repositories.
///
/// Any upstream failure is reported as the profile not existing; the
/// real cause is only logged server-side.
#[utoipa::path(
    get,
    path = "/api/profile/github/{username}",
    params(("username" = String, Path, description = "GitHub username")),
    tag = "Profiles",
    responses(
        (status = 200, description = "Recent repositories", body = [GithubRepo]),
        (status = 404, description = "No GitHub profile found")
    )
)]
pub async fn github_repos(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<GithubRepo>>, ApiError> {
    match state.github.list_repos(&username).await {
        Ok(repos) => Ok(Json(repos)),
        Err(err) => {
            tracing::warn!(error = %err, username = %username, "github lookup failed");
            Err(ApiError::not_found("No Github profile found"))
        }
    }
}
