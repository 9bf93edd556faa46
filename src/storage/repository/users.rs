// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! User account repository.
//!
//! Each account is stored as a separate JSON file under `data/users/`,
//! keyed by the UUID assigned at registration. Email uniqueness is
//! enforced by scanning the collection before a create; see
//! [`UserRepository::find_by_email`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStore, StorageError, StorageResult};

/// User account as stored on disk.
///
/// The password hash never leaves this layer; API responses are built
/// from the other fields only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StoredUser {
    /// Unique user identifier (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address, doubles as the login identifier
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Gravatar URL derived from the email
    pub avatar: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Repository for user account operations.
pub struct UserRepository<'a> {
    storage: &'a DocumentStore,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository.
    pub fn new(storage: &'a DocumentStore) -> Self {
        Self { storage }
    }

    /// Check if a user exists.
    pub fn exists(&self, user_id: &str) -> bool {
        self.storage.exists(self.storage.paths().user(user_id))
    }

    /// Get a user by ID.
    pub fn get(&self, user_id: &str) -> StorageResult<StoredUser> {
        let path = self.storage.paths().user(user_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("User".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Create a new user record.
    ///
    /// Callers must have already checked email uniqueness via
    /// [`Self::find_by_email`]; this only guards against id collisions.
    pub fn create(&self, user: &StoredUser) -> StorageResult<()> {
        if self.exists(&user.id) {
            return Err(StorageError::AlreadyExists("User".to_string()));
        }

        self.storage
            .write_json(self.storage.paths().user(&user.id), user)
    }

    /// Delete a user record.
    pub fn delete(&self, user_id: &str) -> StorageResult<()> {
        if !self.exists(user_id) {
            return Err(StorageError::NotFound("User".to_string()));
        }

        self.storage.delete(self.storage.paths().user(user_id))
    }

    /// Find a user by email, scanning the collection.
    ///
    /// Returns `Ok(None)` when no account uses the address. Matching is
    /// exact after trimming, mirroring a unique index on the raw value.
    pub fn find_by_email(&self, email: &str) -> StorageResult<Option<StoredUser>> {
        let email = email.trim();
        let user_ids = self
            .storage
            .list_files(self.storage.paths().users_dir(), "json")?;

        for id in user_ids {
            if let Ok(user) = self.get(&id) {
                if user.email == email {
                    return Ok(Some(user));
                }
            }
        }

        Ok(None)
    }
}
