// ABOUTME: In-memory storage implementation backed by a shared HashMap
// ABOUTME: Default backend for tests and ephemeral sessions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 GymFit

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{StorageKey, StorageProvider};
use crate::errors::AppResult;

/// In-memory storage
///
/// Uses `Arc<RwLock<HashMap>>` so clones share one store; the session
/// manager, gallery, and scheduler can all hold the same backend. Nothing is
/// persisted across process restarts.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    store: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &StorageKey) -> AppResult<Option<Vec<u8>>> {
        let store = self.store.read().await;
        let value = store.get(key.as_str()).cloned();
        drop(store);
        Ok(value)
    }

    async fn set(&self, key: &StorageKey, value: Vec<u8>) -> AppResult<()> {
        self.store.write().await.insert(key.as_str().to_owned(), value);
        tracing::trace!(key = %key, "stored record");
        Ok(())
    }

    async fn remove(&self, key: &StorageKey) -> AppResult<()> {
        self.store.write().await.remove(key.as_str());
        tracing::trace!(key = %key, "removed record");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.store.write().await.clear();
        Ok(())
    }
}
