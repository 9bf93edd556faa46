// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## User Identity Type
//!
//! The [`UserId`] newtype wraps the UUID assigned to a user at registration.
//! It provides type safety and clear semantics wherever an owner identity
//! travels through the API.
//!
//! ## Model Categories
//!
//! - **Users & Auth**: registration, login, and the authenticated user view
//! - **Profiles**: professional profile with experience, education, socials
//! - **Posts**: feed posts with likes and comments
//! - **GitHub**: repository summaries proxied from the GitHub API
//!
//! Request bodies mark their fields `#[serde(default)]` so that a missing
//! field reaches the validators as an empty value and comes back as a
//! field-level message instead of a deserialization failure.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// User Identity Type
// =============================================================================

/// Opaque user identifier assigned at registration.
///
/// Provides type safety for owner identities throughout the API.
/// Format: UUID v4, generated server-side.
///
/// # Example
///
/// ```rust,ignore
/// let id = UserId::from("5f3a2b1c-9d8e-4f70-a1b2-c3d4e5f60718");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

// =============================================================================
// User & Auth Models
// =============================================================================

/// Request to register a new user account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name for the new account.
    #[serde(default)]
    pub name: String,
    /// Email address; doubles as the login identifier.
    #[serde(default)]
    pub email: String,
    /// Plaintext password; hashed before storage.
    #[serde(default)]
    pub password: String,
}

/// Request to log in with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address of the account.
    #[serde(default)]
    pub email: String,
    /// Plaintext password to verify.
    #[serde(default)]
    pub password: String,
}

/// Signed session token returned by registration and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT; send it back in the `x-auth-token` header.
    pub token: String,
}

/// The caller's own user record, minus the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserResponse {
    /// Unique identifier for this user.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Gravatar URL derived from the email address.
    pub avatar: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Confirmation message for delete-style operations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

// =============================================================================
// Profile Models
// =============================================================================

/// Optional social network links, each independent of the others.
///
/// Unset links are omitted from JSON output entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A single work experience entry on a profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Experience {
    /// Unique identifier for this entry.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Employer name.
    pub company: String,
    /// Where the job was located.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start date.
    pub from: NaiveDate,
    /// End date; absent while the position is current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    /// Whether this is the user's current position.
    #[serde(default)]
    pub current: bool,
    /// Free-form description of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single education entry on a profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Education {
    /// Unique identifier for this entry.
    pub id: String,
    /// School or institution name.
    pub school: String,
    /// Degree or certificate earned.
    pub degree: String,
    /// Field of study.
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    /// Start date.
    pub from: NaiveDate,
    /// End date; absent while the course is ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    /// Whether the user is currently enrolled.
    #[serde(default)]
    pub current: bool,
    /// Free-form description of the course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Author summary embedded in profile and post responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ProfileUser {
    /// Unique identifier of the owning user.
    pub id: UserId,
    /// Display name of the owning user.
    pub name: String,
    /// Gravatar URL of the owning user.
    pub avatar: String,
}

/// A user's professional profile with the owning user populated.
///
/// At most one profile exists per user; every field except the owner
/// reference is optional.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Profile {
    /// The user this profile belongs to.
    pub user: ProfileUser,
    /// Current employer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Personal or company website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Where the user is based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Professional status, e.g. "Senior Developer".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Ordered list of skills.
    pub skills: Vec<String>,
    /// Short biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// GitHub username for the repository lookup.
    #[serde(rename = "githubusername", default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    /// Work experience entries, newest first.
    pub experience: Vec<Experience>,
    /// Education entries, newest first.
    pub education: Vec<Education>,
    /// Social network links.
    pub social: SocialLinks,
    /// When the profile was first created.
    pub created_at: DateTime<Utc>,
}

/// Request to create or update the caller's profile.
///
/// Every field is optional; only present fields are applied. A present
/// `social` sub-object replaces the stored links as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    /// Comma-separated list, split and trimmed server-side.
    pub skills: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub social: Option<SocialLinks>,
}

/// Request to add a work experience entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Request to add an education entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddEducationRequest {
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

// =============================================================================
// Post Models
// =============================================================================

/// A like on a post; one per user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Like {
    /// The user who liked the post.
    pub user: UserId,
}

/// A comment on a post.
///
/// Author name and avatar are denormalized from the user record at
/// creation time, so later account changes do not rewrite old comments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Comment {
    /// Unique identifier for this comment.
    pub id: String,
    /// The user who wrote the comment.
    pub user: UserId,
    /// Comment body.
    pub text: String,
    /// Author display name at creation time.
    pub name: String,
    /// Author avatar URL at creation time.
    pub avatar: String,
    /// When the comment was written.
    pub created_at: DateTime<Utc>,
}

/// A feed post with denormalized author details.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Post {
    /// Unique identifier for this post.
    pub id: String,
    /// The user who wrote the post.
    pub user: UserId,
    /// Post body.
    pub text: String,
    /// Author display name at creation time.
    pub name: String,
    /// Author avatar URL at creation time.
    pub avatar: String,
    /// Likes, newest first.
    pub likes: Vec<Like>,
    /// Comments, newest first.
    pub comments: Vec<Comment>,
    /// When the post was written.
    pub created_at: DateTime<Utc>,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    /// Post body.
    #[serde(default)]
    pub text: String,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    /// Comment body.
    #[serde(default)]
    pub text: String,
}

// =============================================================================
// GitHub Models
// =============================================================================

/// Summary of a public GitHub repository.
///
/// Field names mirror the GitHub REST API so the upstream response can be
/// deserialized directly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct GithubRepo {
    /// GitHub's numeric repository id.
    pub id: u64,
    /// Repository name.
    pub name: String,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Repository description, if any.
    pub description: Option<String>,
    /// Stargazer count.
    pub stargazers_count: u64,
    /// Watcher count.
    pub watchers_count: u64,
    /// Fork count.
    pub forks_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_from_and_into_string() {
        let from_str: UserId = "abc".into();
        assert_eq!(from_str.0, "abc");

        let from_string: UserId = String::from("def").into();
        assert_eq!(from_string.0, "def");

        let to_string: String = UserId("ghi".into()).into();
        assert_eq!(to_string, "ghi");
    }

    #[test]
    fn education_uses_wire_field_names() {
        let entry = Education {
            id: "e1".into(),
            school: "MIT".into(),
            degree: "BSc".into(),
            field_of_study: "Computer Science".into(),
            from: NaiveDate::from_ymd_opt(2019, 9, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["fieldofstudy"], "Computer Science");
        assert!(json.get("field_of_study").is_none());
        // unset optionals are omitted, not serialized as null
        assert!(json.get("to").is_none());
    }

    #[test]
    fn unset_social_links_are_omitted() {
        let social = SocialLinks {
            twitter: Some("https://twitter.com/dev".into()),
            ..SocialLinks::default()
        };
        let json = serde_json::to_value(&social).unwrap();
        assert_eq!(json["twitter"], "https://twitter.com/dev");
        assert!(json.get("youtube").is_none());
        assert!(json.get("linkedin").is_none());
    }
}
