// ABOUTME: Local key-value storage abstraction for persisted app records
// ABOUTME: Pluggable backend support (in-memory, JSON files) behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymFit

/// JSON-file storage implementation
pub mod file;
/// In-memory storage implementation
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::storage_keys;
use crate::errors::AppResult;

/// Storage provider trait for pluggable backend implementations
///
/// Each record is an independent JSON blob under a fixed key, read wholesale
/// and written wholesale. There is no schema versioning and no partial
/// update; callers rewrite the full value on every mutation.
///
/// # Examples
///
/// ```rust
/// use gymfit_core::storage::{StorageKey, StorageProvider};
/// use gymfit_core::storage::memory::MemoryStorage;
/// # async fn example() -> Result<(), gymfit_core::errors::AppError> {
///
/// let storage = MemoryStorage::new();
///
/// // Store a record
/// storage
///     .set_json(&StorageKey::LastGreetingDate, &"2025-08-22")
///     .await?;
///
/// // Read it back (returns None when the key is absent)
/// let date: Option<String> = storage.get_json(&StorageKey::LastGreetingDate).await?;
/// assert_eq!(date.as_deref(), Some("2025-08-22"));
///
/// // Remove it
/// storage.remove(&StorageKey::LastGreetingDate).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait StorageProvider: Send + Sync + Clone {
    /// Read the raw bytes stored under a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails
    async fn get(&self, key: &StorageKey) -> AppResult<Option<Vec<u8>>>;

    /// Store raw bytes under a key, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails
    async fn set(&self, key: &StorageKey, value: Vec<u8>) -> AppResult<()>;

    /// Remove the value stored under a key; removing an absent key is not an
    /// error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend delete fails
    async fn remove(&self, key: &StorageKey) -> AppResult<()>;

    /// Remove every stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the backend clear fails
    async fn clear(&self) -> AppResult<()>;

    /// Deserialize the JSON record stored under a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read or deserialization fails
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        key: &StorageKey,
    ) -> AppResult<Option<T>> {
        match self.get(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize a record to JSON and store it under a key
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails
    async fn set_json<T: Serialize + Send + Sync>(
        &self,
        key: &StorageKey,
        value: &T,
    ) -> AppResult<()> {
        let serialized = serde_json::to_vec(value)?;
        self.set(key, serialized).await
    }
}

/// The fixed set of persisted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Auth session record
    Auth,
    /// Body-metric profile record
    Profile,
    /// Progress photo collection
    ProgressPhotos,
    /// Calendar date of the last greeting shown
    LastGreetingDate,
}

impl StorageKey {
    /// Every key, for whole-store operations
    pub const ALL: [Self; 4] = [
        Self::Auth,
        Self::Profile,
        Self::ProgressPhotos,
        Self::LastGreetingDate,
    ];

    /// The stored key string, unchanged from the mobile app's records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => storage_keys::AUTH_RECORD,
            Self::Profile => storage_keys::PROFILE_RECORD,
            Self::ProgressPhotos => storage_keys::PROGRESS_PHOTOS,
            Self::LastGreetingDate => storage_keys::LAST_GREETING_DATE,
        }
    }

    /// File stem used by the file backend
    #[must_use]
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Profile => "profile",
            Self::ProgressPhotos => "progress_photos",
            Self::LastGreetingDate => "last_greeting",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
