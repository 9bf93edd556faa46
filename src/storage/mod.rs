// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! # Document Storage Module
//!
//! This module provides persistent storage as a tree of plain JSON
//! documents under the data root (`DATA_DIR`, default `data/`). One
//! entity, one file; collections are directories.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//!   users/
//!     {user_id}.json       # Account record (includes password hash)
//!   profiles/
//!     {user_id}.json       # Profile, keyed by owner (one per user)
//!   posts/
//!     {post_id}.json       # Post with embedded likes and comments
//!   audit/
//!     {date}/events.jsonl  # Daily audit logs
//! ```
//!
//! ## Important Notes
//!
//! - Writes are atomic (temp file + rename), so a crash never leaves a
//!   half-written document behind
//! - Nothing here locks: concurrent writers of the same document are
//!   last-write-wins, matching the upstream store this layer stands in for

pub mod audit;
pub mod document_store;
pub mod ownership;
pub mod paths;
pub mod repository;

pub use audit::{AuditEvent, AuditEventType, AuditRepository};
pub use document_store::{DocumentStore, StorageError, StorageResult};
pub use ownership::{OwnedResource, OwnershipEnforcer};
pub use paths::StoragePaths;
pub use repository::{PostRepository, ProfileRepository, StoredProfile, StoredUser, UserRepository};
