// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Post repository.
//!
//! Posts are stored whole under `data/posts/`, one JSON document per
//! post with likes and comments embedded. Mutations read the document,
//! edit the embedded lists in memory, and save it back; concurrent
//! writers of the same post are last-write-wins.

use crate::models::{Comment, Post};

use super::super::{DocumentStore, OwnedResource, StorageError, StorageResult};

impl OwnedResource for Post {
    fn owner_user_id(&self) -> &str {
        &self.user.0
    }
}

impl OwnedResource for Comment {
    fn owner_user_id(&self) -> &str {
        &self.user.0
    }
}

/// Repository for post operations.
pub struct PostRepository<'a> {
    storage: &'a DocumentStore,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository.
    pub fn new(storage: &'a DocumentStore) -> Self {
        Self { storage }
    }

    /// Check if a post exists.
    pub fn exists(&self, post_id: &str) -> bool {
        self.storage.exists(self.storage.paths().post(post_id))
    }

    /// Get a post by ID.
    pub fn get(&self, post_id: &str) -> StorageResult<Post> {
        let path = self.storage.paths().post(post_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound("Post".to_string()));
        }
        self.storage.read_json(path)
    }

    /// Create a new post.
    pub fn create(&self, post: &Post) -> StorageResult<()> {
        if self.exists(&post.id) {
            return Err(StorageError::AlreadyExists("Post".to_string()));
        }

        self.storage
            .write_json(self.storage.paths().post(&post.id), post)
    }

    /// Save an existing post after editing its embedded lists.
    pub fn save(&self, post: &Post) -> StorageResult<()> {
        if !self.exists(&post.id) {
            return Err(StorageError::NotFound("Post".to_string()));
        }

        self.storage
            .write_json(self.storage.paths().post(&post.id), post)
    }

    /// Delete a post.
    pub fn delete(&self, post_id: &str) -> StorageResult<()> {
        if !self.exists(post_id) {
            return Err(StorageError::NotFound("Post".to_string()));
        }

        self.storage.delete(self.storage.paths().post(post_id))
    }

    /// List every post, newest first.
    pub fn list_all(&self) -> StorageResult<Vec<Post>> {
        let post_ids = self
            .storage
            .list_files(self.storage.paths().posts_dir(), "json")?;

        let mut posts = Vec::new();
        for id in post_ids {
            if let Ok(post) = self.get(&id) {
                posts.push(post);
            }
        }

        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
