// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Password hashing.
//!
//! bcrypt with the library's default cost. Verification is
//! constant-time inside the bcrypt crate.

use bcrypt::{hash, verify, DEFAULT_COST};

use super::AuthError;

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    hash(plain, DEFAULT_COST).map_err(|e| AuthError::InternalError(e.to_string()))
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(plain: &str, password_hash: &str) -> Result<bool, AuthError> {
    verify(plain, password_hash).map_err(|e| AuthError::InternalError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_not_the_plaintext() {
        let hashed = hash_password("hunter22").unwrap();
        assert_ne!(hashed, "hunter22");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn same_password_hashes_differently() {
        // salted: two hashes of one password must not collide
        let first = hash_password("hunter22").unwrap();
        let second = hash_password("hunter22").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn verify_accepts_correct_password() {
        let hashed = hash_password("hunter22").unwrap();
        assert!(verify_password("hunter22", &hashed).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hashed = hash_password("hunter22").unwrap();
        assert!(!verify_password("hunter23", &hashed).unwrap());
    }
}
