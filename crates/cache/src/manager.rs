// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `CacheManager`: the public handle other crates hold. Owns a
//! [`CacheStore`] plus the sampler task's lifecycle.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value as Json;
use tokio_util::sync::CancellationToken;

use crate::sampler::{self, SamplerConfig};
use crate::store::CacheStore;

pub struct CacheManagerConfig {
    pub default_ttl: Duration,
    pub sampler: SamplerConfig,
}

impl Default for CacheManagerConfig {
    fn default() -> Self {
        Self { default_ttl: Duration::from_secs(3600), sampler: SamplerConfig::default() }
    }
}

pub struct CacheManager {
    store: Arc<CacheStore>,
    token: CancellationToken,
    sampler_handle: Option<tokio::task::JoinHandle<()>>,
}

impl CacheManager {
    /// Starts the background sampler immediately, matching the original's
    /// "start on init" behavior.
    pub fn new(config: CacheManagerConfig) -> Self {
        let store = Arc::new(CacheStore::new(config.default_ttl));
        let token = CancellationToken::new();
        let sampler_handle = Some(sampler::spawn(store.clone(), config.sampler, token.clone()));
        Self { store, token, sampler_handle }
    }

    /// Constructs a manager with the sampler task not spawned — for
    /// synchronous unit tests that never enter a tokio runtime.
    pub fn without_sampler(default_ttl: Duration) -> Self {
        Self { store: Arc::new(CacheStore::new(default_ttl)), token: CancellationToken::new(), sampler_handle: None }
    }

    pub fn get(&self, key: &str) -> Option<Json> {
        self.store.get(key)
    }

    pub fn set(&self, key: impl Into<String>, value: Json, ttl: Option<Duration>) {
        self.store.set(key, value, ttl);
    }

    pub fn delete(&self, key: &str) -> bool {
        self.store.delete(key)
    }

    pub fn exists(&self, key: &str) -> bool {
        self.store.exists(key)
    }

    pub fn clear(&self) -> usize {
        self.store.clear()
    }

    pub fn invalidate_pattern(&self, pattern: &str) -> usize {
        self.store.invalidate_pattern(pattern)
    }

    /// Cancels the sampler task. Reads/writes remain valid afterward; the
    /// cache simply stops actively expiring entries in the background.
    pub async fn shutdown(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.sampler_handle.take() {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
