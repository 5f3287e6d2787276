// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-bot webhook secret tokens: `MD5(bot_id ∥ process-start-timestamp)`,
//! grounded on `hash_manager.py`'s hashing style and
//! `test_webhook_manager.py`'s `_generate_secret_token` (stable per bot
//! for the lifetime of one process, distinct across bots). Cached under
//! `webhook_secret:<token>` -> bot_id with a 10-year TTL so a restart
//! never invalidates a secret already handed to a vendor webhook config.

use std::sync::Arc;
use std::time::Duration;

use md5::{Digest, Md5};

use sx_cache::CacheManager;
use sx_core::{BotId, Clock};

use crate::cache_keys::webhook_secret_key;

/// Ten years, expressed in seconds — effectively "does not expire" for a
/// secret that is only ever invalidated by deliberately rotating it.
const SECRET_TTL: Duration = Duration::from_secs(10 * 365 * 24 * 3600);

pub struct WebhookSecretDeriver<C: Clock> {
    process_start_epoch_ms: u64,
    _clock: C,
}

impl<C: Clock> WebhookSecretDeriver<C> {
    /// Captures `clock.epoch_ms()` once, at construction, as the
    /// process-start timestamp fed into every derived secret.
    pub fn new(clock: C) -> Self {
        let process_start_epoch_ms = clock.epoch_ms();
        Self { process_start_epoch_ms, _clock: clock }
    }

    pub fn derive(&self, bot_id: BotId) -> String {
        let mut hasher = Md5::new();
        hasher.update(bot_id.0.to_string());
        hasher.update(self.process_start_epoch_ms.to_string());
        hex::encode(hasher.finalize())
    }
}

/// Registers a freshly derived secret in the cache so inbound webhook
/// requests can resolve `token -> bot_id` without a database round trip.
pub fn register_secret(cache: &Arc<CacheManager>, token: &str, bot_id: BotId) {
    cache.set(webhook_secret_key(token), serde_json::json!(bot_id.0), Some(SECRET_TTL));
}

pub fn resolve_secret(cache: &Arc<CacheManager>, token: &str) -> Option<BotId> {
    cache.get(&webhook_secret_key(token))?.as_i64().map(BotId)
}

#[cfg(test)]
#[path = "webhook_secret_tests.rs"]
mod tests;
