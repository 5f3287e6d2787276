// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `TenantDirectory`: the bot-by-tenant cache, tenant config cache, and
//! tenant meta (last-updated/last-failed) tracking, grounded directly on
//! `tenant_cache.py`. The cache is treated as permanent (§4.6's "filled
//! on first request") — entries only move on explicit invalidation.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value as Json};
use tracing::warn;

use sx_cache::CacheManager;
use sx_core::{BotId, Clock, TenantId};
use sx_wire::{BotRecord, BotRepository, TenantConfigRepository};

use crate::cache_keys::{
    bot_cache_key, tenant_bot_id_key, tenant_bot_id_pattern, tenant_config_key, tenant_meta_key,
};

/// Fields the DB row carries that are never surfaced through the cache.
const EXCLUDED_CONFIG_FIELDS: &[&str] = &["id", "processed_at"];

pub struct TenantDirectory<B, T, C> {
    bots: Arc<B>,
    configs: Arc<T>,
    cache: Arc<CacheManager>,
    clock: C,
    cache_ttl: Duration,
}

impl<B, T, C> TenantDirectory<B, T, C>
where
    B: BotRepository,
    T: TenantConfigRepository,
    C: Clock,
{
    pub fn new(bots: Arc<B>, configs: Arc<T>, cache: Arc<CacheManager>, clock: C, cache_ttl: Duration) -> Self {
        Self { bots, configs, cache, clock, cache_ttl }
    }

    /// Always returns structured data with a `bot_id` field once found, per
    /// §4.6 — builds and caches the structured form on first request.
    ///
    /// When the tenant-to-bot mapping is not yet cached, the DB row fetched
    /// to resolve it is reused to build the structured form too, rather
    /// than fetching it a second time.
    pub async fn get_bot_by_tenant_id(&self, tenant_id: TenantId) -> Result<Option<Json>, sx_core::SxError> {
        let mapping_key = tenant_bot_id_key(tenant_id);
        let mut fetched: Option<BotRecord> = None;

        let bot_id = match self.cache.get(&mapping_key).and_then(|v| v.as_i64()) {
            Some(id) => BotId(id),
            None => {
                let record = match self.bots.find_bot_for_tenant(tenant_id).await? {
                    Some(record) => record,
                    None => {
                        warn!(%tenant_id, "bot not found");
                        return Ok(None);
                    }
                };
                self.cache.set(mapping_key, Json::from(record.bot_id.0), Some(self.cache_ttl));
                let bot_id = record.bot_id;
                fetched = Some(record);
                bot_id
            }
        };

        let bot_key = bot_cache_key(bot_id);
        if let Some(cached) = self.cache.get(&bot_key) {
            return Ok(Some(cached));
        }

        let record = match fetched {
            Some(record) => record,
            None => match self.bots.find_bot_for_tenant(tenant_id).await? {
                Some(record) => record,
                None => return Ok(None),
            },
        };
        let structured = structured_bot_info(&record);
        self.cache.set(bot_key, structured.clone(), Some(self.cache_ttl));
        Ok(Some(structured))
    }

    pub async fn get_bot_id_by_tenant_id(&self, tenant_id: TenantId) -> Result<Option<BotId>, sx_core::SxError> {
        Ok(self
            .get_bot_by_tenant_id(tenant_id)
            .await?
            .and_then(|bot| bot.get("bot_id")?.as_i64())
            .map(BotId))
    }

    pub fn invalidate_bot_cache(&self, tenant_id: TenantId) {
        self.cache.delete(&tenant_bot_id_key(tenant_id));
    }

    pub fn clear_bot_cache(&self) -> usize {
        self.cache.invalidate_pattern(tenant_bot_id_pattern())
    }

    /// Clears `last_error`/`last_failed_at` as a side effect, mirroring
    /// the original's "a successful run clears the stale failure".
    pub fn set_last_updated(&self, tenant_id: TenantId) {
        let key = tenant_meta_key(tenant_id);
        let mut meta = self.meta_object(&key);
        meta.insert("last_updated_at".to_string(), Json::from(self.clock.epoch_ms()));
        meta.remove("last_error");
        meta.remove("last_failed_at");
        self.cache.set(key, Json::Object(meta), Some(self.cache_ttl));
    }

    pub fn set_last_failed(&self, tenant_id: TenantId, error: Json) {
        let key = tenant_meta_key(tenant_id);
        let mut meta = self.meta_object(&key);
        meta.insert("last_failed_at".to_string(), Json::from(self.clock.epoch_ms()));
        meta.insert("last_error".to_string(), error);
        self.cache.set(key, Json::Object(meta), Some(self.cache_ttl));
    }

    pub fn get_tenant_meta(&self, tenant_id: TenantId) -> Json {
        Json::Object(self.meta_object(&tenant_meta_key(tenant_id)))
    }

    fn meta_object(&self, key: &str) -> Map<String, Json> {
        match self.cache.get(key) {
            Some(Json::Object(map)) => map,
            _ => Map::new(),
        }
    }

    pub async fn get_tenant_config(&self, tenant_id: TenantId) -> Result<Option<Json>, sx_core::SxError> {
        let key = tenant_config_key(tenant_id);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(Some(cached));
        }

        let config = match self.build_config(tenant_id).await? {
            Some(config) => config,
            None => return Ok(None),
        };
        self.cache.set(key, config.clone(), Some(self.cache_ttl));
        Ok(Some(config))
    }

    /// Re-reads the source row and overwrites the cached config
    /// unconditionally, for callers that just wrote to the DB directly.
    pub async fn update_tenant_config_cache(&self, tenant_id: TenantId) -> Result<(), sx_core::SxError> {
        let key = tenant_config_key(tenant_id);
        match self.build_config(tenant_id).await? {
            Some(config) => self.cache.set(key, config, Some(self.cache_ttl)),
            None => {
                self.cache.delete(&key);
            }
        }
        Ok(())
    }

    async fn build_config(&self, tenant_id: TenantId) -> Result<Option<Json>, sx_core::SxError> {
        let Some(row) = self.configs.load_tenant_config(tenant_id).await? else { return Ok(None) };
        let Json::Object(fields) = row else { return Ok(Some(Json::Object(Map::new()))) };

        let mut config = Map::new();
        for (key, value) in fields {
            if EXCLUDED_CONFIG_FIELDS.contains(&key.as_str()) || value.is_null() {
                continue;
            }
            config.insert(key, value);
        }
        Ok(Some(Json::Object(config)))
    }
}

fn structured_bot_info(record: &BotRecord) -> Json {
    serde_json::json!({
        "bot_id": record.bot_id.0,
        "telegram_bot_id": record.telegram_bot_id,
        "tenant_id": record.tenant_id.0,
        "bot_token": record.bot_token,
        "username": record.username,
        "first_name": record.first_name,
        "is_active": record.is_active,
        "bot_command": record.commands,
    })
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
