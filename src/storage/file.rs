// ABOUTME: JSON-file storage implementation, one file per record key
// ABOUTME: Writes go to a temp file first, then rename into place
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 GymFit

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use super::{StorageKey, StorageProvider};
use crate::constants::env_config;
use crate::errors::{AppError, AppResult};

/// File-backed storage
///
/// Each key maps to `<root>/<stem>.json`. A write lands in a sibling temp
/// file and is renamed over the target, so a crash mid-write leaves the old
/// record intact rather than a truncated one.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store at the platform data directory
    /// (`GYMFIT_DATA_DIR` overrides it)
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(env_config::data_dir())
    }

    /// The directory holding the record files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.root.join(format!("{}.json", key.file_stem()))
    }

    fn temp_path_for(&self, key: &StorageKey) -> PathBuf {
        self.root.join(format!("{}.json.tmp", key.file_stem()))
    }
}

#[async_trait::async_trait]
impl StorageProvider for JsonFileStorage {
    async fn get(&self, key: &StorageKey) -> AppResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(
                AppError::storage(format!("failed to read {}", path.display())).with_source(err),
            ),
        }
    }

    async fn set(&self, key: &StorageKey, value: Vec<u8>) -> AppResult<()> {
        fs::create_dir_all(&self.root).await.map_err(|err| {
            AppError::storage(format!("failed to create {}", self.root.display()))
                .with_source(err)
        })?;

        let temp = self.temp_path_for(key);
        let target = self.path_for(key);

        fs::write(&temp, value).await.map_err(|err| {
            AppError::storage(format!("failed to write {}", temp.display())).with_source(err)
        })?;
        fs::rename(&temp, &target).await.map_err(|err| {
            AppError::storage(format!("failed to replace {}", target.display())).with_source(err)
        })?;

        tracing::trace!(key = %key, path = %target.display(), "stored record");
        Ok(())
    }

    async fn remove(&self, key: &StorageKey) -> AppResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::trace!(key = %key, "removed record");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(
                AppError::storage(format!("failed to remove {}", path.display())).with_source(err),
            ),
        }
    }

    async fn clear(&self) -> AppResult<()> {
        for key in StorageKey::ALL {
            self.remove(&key).await?;
        }
        Ok(())
    }
}
