// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Gravatar URL derivation.
//!
//! Avatars are pinned at registration time: the email is normalized,
//! hashed with SHA-256, and baked into a Gravatar URL stored on the
//! user record.

use sha2::{Digest, Sha256};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Query string: 200px, PG-rated, "mystery person" fallback image.
const GRAVATAR_OPTIONS: &str = "s=200&r=pg&d=mm";

/// Derive the Gravatar URL for an email address.
///
/// Gravatar hashes the trimmed, lowercased address; two spellings of the
/// same mailbox always map to the same avatar.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("{GRAVATAR_BASE_URL}/{hex}?{GRAVATAR_OPTIONS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_deterministic() {
        assert_eq!(
            gravatar_url("dev@example.com"),
            gravatar_url("dev@example.com")
        );
    }

    #[test]
    fn email_is_normalized_before_hashing() {
        let canonical = gravatar_url("dev@example.com");
        assert_eq!(gravatar_url("  dev@example.com  "), canonical);
        assert_eq!(gravatar_url("DEV@Example.COM"), canonical);
    }

    #[test]
    fn url_carries_size_rating_and_default() {
        let url = gravatar_url("dev@example.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));

        // 32-byte digest as lowercase hex
        let hash = url
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .split('?')
            .next()
            .unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_emails_get_different_avatars() {
        assert_ne!(gravatar_url("ada@example.com"), gravatar_url("grace@example.com"));
    }
}
