// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 DevCircle

//! Request field validation.
//!
//! Handlers collect every failing field into a [`FieldErrors`] and convert
//! the lot into a single 400 response, so clients see all problems at once
//! instead of fixing them one request at a time.

use chrono::NaiveDate;

use crate::error::{ApiError, FieldError};

/// Collector for per-field validation failures.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-empty value (after trimming).
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, message));
        }
    }

    /// Require a syntactically valid email address.
    pub fn require_email(&mut self, field: &str, value: &str, message: &str) {
        if !is_valid_email(value) {
            self.errors.push(FieldError::new(field, message));
        }
    }

    /// Require at least `min` characters.
    pub fn require_min_len(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.errors.push(FieldError::new(field, message));
        }
    }

    /// Require a date to be present.
    pub fn require_date(&mut self, field: &str, value: Option<NaiveDate>, message: &str) {
        if value.is_none() {
            self.errors.push(FieldError::new(field, message));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a single aggregated 400, or pass if nothing failed.
    pub fn finish(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(self.errors))
        }
    }
}

/// Pragmatic email syntax check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
