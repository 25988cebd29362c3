// ABOUTME: Session and profile service over pluggable storage
// ABOUTME: Login, signup, logout, and partial profile merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

//! # Session/Profile Store
//!
//! "Being logged in" means an auth record exists in storage; there is no
//! server round-trip and no credential verification. Any well-formed
//! email/password pair succeeds. The profile record lives under its own key
//! and survives logout.

use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::{ProfileUpdate, User, UserProfile};
use crate::storage::{StorageKey, StorageProvider};

/// Minimum password length accepted at login
const LOGIN_PASSWORD_MIN: usize = 6;
/// Minimum password length accepted at signup
const SIGNUP_PASSWORD_MIN: usize = 8;

/// Session and profile operations over a storage backend
#[derive(Debug, Clone)]
pub struct SessionManager<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SessionManager<S> {
    /// Create a session manager over the given storage backend
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The storage backend this manager writes through
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Log in, overwriting any existing auth record
    ///
    /// The display name is derived from the email local part (the text
    /// before `@`).
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed email or a password
    /// shorter than 6 characters, or a storage error if the write fails.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        validate_email(email)?;
        validate_password(password, LOGIN_PASSWORD_MIN)?;

        let name = email.split('@').next().unwrap_or(email);
        let user = User::new(email, name);
        self.storage.set_json(&StorageKey::Auth, &user).await?;

        info!(user_id = %user.id, "user logged in");
        Ok(user)
    }

    /// Create an account record and log in
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed email, a missing name, or
    /// a password shorter than 8 characters, or a storage error if the
    /// write fails.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> AppResult<User> {
        validate_email(email)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("Name"));
        }
        validate_password(password, SIGNUP_PASSWORD_MIN)?;

        let user = User::new(email, name);
        self.storage.set_json(&StorageKey::Auth, &user).await?;

        info!(user_id = %user.id, "user signed up");
        Ok(user)
    }

    /// Remove the auth record; the profile record is kept
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete fails.
    pub async fn logout(&self) -> AppResult<()> {
        self.storage.remove(&StorageKey::Auth).await?;
        info!("user logged out");
        Ok(())
    }

    /// The stored auth record, if a session exists
    ///
    /// # Errors
    ///
    /// Returns a storage or deserialization error.
    pub async fn current_user(&self) -> AppResult<Option<User>> {
        self.storage.get_json(&StorageKey::Auth).await
    }

    /// The stored profile, or an empty one when none has been saved yet
    ///
    /// # Errors
    ///
    /// Returns a storage or deserialization error.
    pub async fn profile(&self) -> AppResult<UserProfile> {
        Ok(self
            .storage
            .get_json(&StorageKey::Profile)
            .await?
            .unwrap_or_default())
    }

    /// Merge a partial update over the stored profile and persist the result
    ///
    /// Fields left as `None` keep their stored value; the whole record is
    /// rewritten.
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error.
    pub async fn update_profile(&self, update: ProfileUpdate) -> AppResult<UserProfile> {
        let mut profile = self.profile().await?;
        profile.apply(update);
        self.storage.set_json(&StorageKey::Profile, &profile).await?;

        debug!("profile updated");
        Ok(profile)
    }
}

fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::missing_field("Email"));
    }
    if !is_well_formed_email(email) {
        return Err(AppError::invalid_format(
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

fn validate_password(password: &str, min_len: usize) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::missing_field("Password"));
    }
    if password.chars().count() < min_len {
        return Err(AppError::invalid_input(format!(
            "Password must be at least {min_len} characters"
        )));
    }
    Ok(())
}

/// Shape check only: one `@`, a non-empty local part, and a dot strictly
/// inside the domain. No whitespace anywhere.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}
