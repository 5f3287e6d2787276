// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The in-process key/value store: two parallel maps under one mutex,
//! lazy expiry on read, pattern-based invalidation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde_json::Value as Json;

struct Inner {
    values: HashMap<String, Json>,
    expires_at: HashMap<String, Instant>,
}

/// Process-local cache. Cheap to clone (wraps an `Arc` internally via the
/// caller holding it behind one); every method takes `&self`.
pub struct CacheStore {
    inner: Mutex<Inner>,
    default_ttl: Duration,
}

impl CacheStore {
    pub fn new(default_ttl: Duration) -> Self {
        Self { inner: Mutex::new(Inner { values: HashMap::new(), expires_at: HashMap::new() }), default_ttl }
    }

    /// Lazy expiry: a key past its `expires_at` is evicted right here and
    /// treated as absent.
    pub fn get(&self, key: &str) -> Option<Json> {
        let mut inner = self.inner.lock();
        if Self::is_expired(&inner, key) {
            inner.values.remove(key);
            inner.expires_at.remove(key);
            return None;
        }
        inner.values.get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: Json, ttl: Option<Duration>) {
        let key = key.into();
        let mut inner = self.inner.lock();
        let ttl = ttl.unwrap_or(self.default_ttl);
        inner.expires_at.insert(key.clone(), Instant::now() + ttl);
        inner.values.insert(key, value);
    }

    pub fn delete(&self, key: &str) -> bool {
        let mut inner = self.inner.lock();
        if Self::is_expired(&inner, key) {
            inner.values.remove(key);
            inner.expires_at.remove(key);
            return false;
        }
        let removed = inner.values.remove(key).is_some();
        inner.expires_at.remove(key);
        removed
    }

    pub fn exists(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn clear(&self) -> usize {
        let mut inner = self.inner.lock();
        let count = inner.values.len();
        inner.values.clear();
        inner.expires_at.clear();
        count
    }

    /// Supports the four pattern forms: `prefix:*`, `*:suffix`, `a*b`
    /// single-wildcard, and exact literal match.
    pub fn invalidate_pattern(&self, pattern: &str) -> usize {
        let matching: Vec<String> = {
            let inner = self.inner.lock();
            inner.values.keys().filter(|k| pattern_matches(pattern, k)).cloned().collect()
        };
        let mut deleted = 0;
        for key in matching {
            if self.delete(&key) {
                deleted += 1;
            }
        }
        deleted
    }

    fn is_expired(inner: &Inner, key: &str) -> bool {
        if !inner.values.contains_key(key) {
            return false;
        }
        match inner.expires_at.get(key) {
            Some(deadline) => Instant::now() >= *deadline,
            None => false,
        }
    }

    /// For the active sampler: a snapshot of keys that carry a TTL, plus
    /// whether each one is currently expired.
    pub(crate) fn ttl_keys(&self) -> Vec<String> {
        self.inner.lock().expires_at.keys().cloned().collect()
    }

    pub(crate) fn is_key_expired(&self, key: &str) -> bool {
        let inner = self.inner.lock();
        match inner.expires_at.get(key) {
            Some(deadline) => Instant::now() >= *deadline,
            None => false,
        }
    }

    pub(crate) fn evict_many(&self, keys: &[String]) {
        let mut inner = self.inner.lock();
        for key in keys {
            inner.values.remove(key);
            inner.expires_at.remove(key);
        }
    }
}

fn pattern_matches(pattern: &str, key: &str) -> bool {
    if let Some(prefix) = pattern.strip_suffix(":*") {
        return key.starts_with(&format!("{prefix}:"));
    }
    if let Some(suffix) = pattern.strip_prefix("*:") {
        return key.ends_with(&format!(":{suffix}"));
    }
    if let Some(star) = pattern.find('*') {
        let (prefix, suffix) = (&pattern[..star], &pattern[star + 1..]);
        return key.starts_with(prefix) && key.ends_with(suffix);
    }
    key == pattern
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
