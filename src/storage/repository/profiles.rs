// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Profile repository.
//!
//! Profiles are stored one per user under `data/profiles/`, keyed by the
//! owning user's id. The key choice makes "at most one profile per user"
//! a structural fact: a second upsert can only land on the same file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Education, Experience, SocialLinks};

use super::super::{DocumentStore, StorageError, StorageResult};

/// Profile as stored on disk.
///
/// Carries the owner's id instead of the populated user summary; the API
/// layer joins in name and avatar when building responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StoredProfile {
    /// Owning user's id (also the document key)
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Ordered list of skills
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "githubusername", default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    /// Work experience entries, newest first
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Education entries, newest first
    #[serde(default)]
    pub education: Vec<Education>,
    /// Social network links
    #[serde(default)]
    pub social: SocialLinks,
    /// When the profile was first created
    pub created_at: DateTime<Utc>,
}

impl StoredProfile {
    /// Create an empty profile for a user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            company: None,
            website: None,
            location: None,
            status: None,
            skills: Vec::new(),
            bio: None,
            github_username: None,
            experience: Vec::new(),
            education: Vec::new(),
            social: SocialLinks::default(),
            created_at: Utc::now(),
        }
    }
}

/// Repository for profile operations.
pub struct ProfileRepository<'a> {
    storage: &'a DocumentStore,
}

impl<'a> ProfileRepository<'a> {
    /// Create a new ProfileRepository.
    pub fn new(storage: &'a DocumentStore) -> Self {
        Self { storage }
    }

    /// Check if a user has a profile.
    pub fn exists(&self, user_id: &str) -> bool {
        self.storage.exists(self.storage.paths().profile(user_id))
    }

    /// Get the profile owned by a user.
    pub fn get(&self, user_id: &str) -> StorageResult<StoredProfile> {
        let path = self.storage.paths().profile(user_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("Profile".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Write a profile, creating or replacing the owner's document.
    ///
    /// This is the upsert primitive: merge semantics live with the caller,
    /// which reads, applies fields, then saves.
    pub fn save(&self, profile: &StoredProfile) -> StorageResult<()> {
        self.storage
            .write_json(self.storage.paths().profile(&profile.user_id), profile)
    }

    /// Delete the profile owned by a user.
    pub fn delete(&self, user_id: &str) -> StorageResult<()> {
        if !self.exists(user_id) {
            return Err(StorageError::NotFound("Profile".to_string()));
        }

        self.storage.delete(self.storage.paths().profile(user_id))
    }

    /// List every profile, newest first.
    pub fn list_all(&self) -> StorageResult<Vec<StoredProfile>> {
        let user_ids = self
            .storage
            .list_files(self.storage.paths().profiles_dir(), "json")?;

        let mut profiles = Vec::new();
        for id in user_ids {
            if let Ok(profile) = self.get(&id) {
                profiles.push(profile);
            }
        }

        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }
}
