// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use sx_cache::CacheManager;
use sx_core::{FakeClock, SxError};
use sx_wire::{BotRecord, BotRepository, TenantConfigRepository};

use super::*;

struct StubBotRepo {
    calls: AtomicUsize,
    record: Option<BotRecord>,
}

#[async_trait]
impl BotRepository for StubBotRepo {
    async fn find_bot_for_tenant(&self, _tenant_id: TenantId) -> Result<Option<BotRecord>, SxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.record.clone())
    }

    async fn find_bot_by_webhook_secret(&self, _secret: &str) -> Result<Option<BotRecord>, SxError> {
        Ok(None)
    }
}

struct StubConfigRepo {
    calls: AtomicUsize,
    row: Option<Json>,
}

#[async_trait]
impl TenantConfigRepository for StubConfigRepo {
    async fn load_tenant_config(&self, _tenant_id: TenantId) -> Result<Option<Json>, SxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.row.clone())
    }
}

fn sample_record() -> BotRecord {
    BotRecord {
        bot_id: BotId(42),
        tenant_id: TenantId(7),
        telegram_bot_id: Some("tg-42".to_string()),
        bot_token: Some("tok".to_string()),
        username: Some("ajbot".to_string()),
        first_name: Some("Alfred".to_string()),
        is_active: true,
        commands: vec![json!({"name": "start"})],
    }
}

fn directory(
    bot_repo: StubBotRepo,
    config_repo: StubConfigRepo,
) -> TenantDirectory<StubBotRepo, StubConfigRepo, FakeClock> {
    TenantDirectory::new(
        Arc::new(bot_repo),
        Arc::new(config_repo),
        Arc::new(CacheManager::without_sampler(Duration::from_secs(60))),
        FakeClock::new(),
        Duration::from_secs(315_360_000),
    )
}

#[tokio::test]
async fn get_bot_by_tenant_id_builds_and_caches_structured_data() {
    let dir = directory(
        StubBotRepo { calls: AtomicUsize::new(0), record: Some(sample_record()) },
        StubConfigRepo { calls: AtomicUsize::new(0), row: None },
    );

    let bot = dir.get_bot_by_tenant_id(TenantId(7)).await.unwrap().unwrap();
    assert_eq!(bot["bot_id"], json!(42));
    assert_eq!(bot["username"], json!("ajbot"));

    let again = dir.get_bot_by_tenant_id(TenantId(7)).await.unwrap().unwrap();
    assert_eq!(again, bot);
}

#[tokio::test]
async fn second_lookup_does_not_hit_the_repository_again() {
    let repo = StubBotRepo { calls: AtomicUsize::new(0), record: Some(sample_record()) };
    let dir = directory(repo, StubConfigRepo { calls: AtomicUsize::new(0), row: None });

    dir.get_bot_by_tenant_id(TenantId(7)).await.unwrap();
    dir.get_bot_by_tenant_id(TenantId(7)).await.unwrap();
    assert_eq!(dir.bots.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_bot_returns_none() {
    let dir = directory(
        StubBotRepo { calls: AtomicUsize::new(0), record: None },
        StubConfigRepo { calls: AtomicUsize::new(0), row: None },
    );
    assert!(dir.get_bot_by_tenant_id(TenantId(1)).await.unwrap().is_none());
}

#[tokio::test]
async fn invalidate_bot_cache_forces_a_fresh_mapping_lookup() {
    let repo = StubBotRepo { calls: AtomicUsize::new(0), record: Some(sample_record()) };
    let dir = directory(repo, StubConfigRepo { calls: AtomicUsize::new(0), row: None });

    dir.get_bot_id_by_tenant_id(TenantId(7)).await.unwrap();
    dir.invalidate_bot_cache(TenantId(7));
    dir.get_bot_id_by_tenant_id(TenantId(7)).await.unwrap();
    assert_eq!(dir.bots.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn set_last_failed_then_set_last_updated_clears_the_error() {
    let dir = directory(
        StubBotRepo { calls: AtomicUsize::new(0), record: None },
        StubConfigRepo { calls: AtomicUsize::new(0), row: None },
    );

    dir.set_last_failed(TenantId(1), json!({"code": "TIMEOUT_ERROR", "message": "slow"}));
    let meta = dir.get_tenant_meta(TenantId(1));
    assert_eq!(meta["last_error"]["code"], json!("TIMEOUT_ERROR"));

    dir.set_last_updated(TenantId(1));
    let meta = dir.get_tenant_meta(TenantId(1));
    assert!(meta.get("last_error").is_none());
    assert!(meta.get("last_failed_at").is_none());
    assert!(meta.get("last_updated_at").is_some());
}

#[tokio::test]
async fn tenant_config_excludes_system_and_null_fields() {
    let dir = directory(
        StubBotRepo { calls: AtomicUsize::new(0), record: None },
        StubConfigRepo {
            calls: AtomicUsize::new(0),
            row: Some(json!({"id": 1, "processed_at": "x", "ai_token": "abc", "webhook_url": null})),
        },
    );

    let config = dir.get_tenant_config(TenantId(1)).await.unwrap().unwrap();
    assert_eq!(config, json!({"ai_token": "abc"}));
}

#[tokio::test]
async fn update_tenant_config_cache_deletes_when_row_is_gone() {
    let dir = directory(
        StubBotRepo { calls: AtomicUsize::new(0), record: None },
        StubConfigRepo { calls: AtomicUsize::new(0), row: None },
    );
    dir.cache.set(tenant_config_key(TenantId(1)), json!({"stale": true}), None);
    dir.update_tenant_config_cache(TenantId(1)).await.unwrap();
    assert!(dir.cache.get(&tenant_config_key(TenantId(1))).is_none());
}
