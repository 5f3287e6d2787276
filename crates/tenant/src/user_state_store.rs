// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-user conversational state storage, grounded on the original's
//! `_get_user_state_with_cleanup` / `set_user_state`: a state with a
//! past `expires_at` is treated as absent and evicted on read rather
//! than ever being handed back to a caller.

use std::sync::Arc;
use std::time::Duration;

use sx_cache::CacheManager;
use sx_core::{Clock, UserState};

use crate::cache_keys::user_state_key;

pub struct UserStateStore<C> {
    cache: Arc<CacheManager>,
    clock: C,
}

impl<C: Clock> UserStateStore<C> {
    pub fn new(cache: Arc<CacheManager>, clock: C) -> Self {
        Self { cache, clock }
    }

    /// Returns `None` if no state is stored, or if it is stored but has
    /// already expired — in the latter case the stale entry is deleted.
    pub fn get(&self, user_id: &str) -> Option<UserState> {
        let key = user_state_key(user_id);
        let raw = self.cache.get(&key)?;
        let state: UserState = serde_json::from_value(raw).ok()?;
        if state.is_expired(self.clock.epoch_ms()) {
            self.cache.delete(&key);
            return None;
        }
        Some(state)
    }

    /// TTL is derived from the state's own `expires_at`, falling back to
    /// the cache's default TTL when the state never expires.
    pub fn set(&self, user_id: &str, state: &UserState) {
        let ttl = state.expires_at.map(|deadline_ms| {
            let remaining_ms = deadline_ms.saturating_sub(self.clock.epoch_ms());
            Duration::from_millis(remaining_ms)
        });
        let value = serde_json::to_value(state).unwrap_or(serde_json::Value::Null);
        self.cache.set(user_state_key(user_id), value, ttl);
    }

    pub fn clear(&self, user_id: &str) -> bool {
        self.cache.delete(&user_state_key(user_id))
    }
}

#[cfg(test)]
#[path = "user_state_store_tests.rs"]
mod tests;
