// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Repository layer providing typed access to the document store.
//!
//! Each repository provides CRUD operations for a specific entity type,
//! using the DocumentStore for all file operations.

pub mod posts;
pub mod profiles;
pub mod users;

pub use posts::PostRepository;
pub use profiles::{ProfileRepository, StoredProfile};
pub use users::{StoredUser, UserRepository};
