// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use serde_json::json;

use super::*;

#[test]
fn basic_get_set_without_sampler() {
    let cache = CacheManager::without_sampler(Duration::from_secs(60));
    cache.set("k", json!("v"), None);
    assert_eq!(cache.get("k"), Some(json!("v")));
}

#[test]
fn invalidate_pattern_delegates_to_store() {
    let cache = CacheManager::without_sampler(Duration::from_secs(60));
    cache.set("tenant:1:bot_id", json!(1), None);
    cache.set("tenant:2:bot_id", json!(2), None);
    assert_eq!(cache.invalidate_pattern("tenant:1:*"), 1);
}

#[tokio::test]
async fn shutdown_stops_the_sampler_task() {
    let mut cache = CacheManager::new(CacheManagerConfig {
        default_ttl: Duration::from_secs(60),
        sampler: SamplerConfig { interval: Duration::from_millis(10), sample_size: 10, expired_threshold: 0.25 },
    });
    cache.set("k", json!(1), None);
    cache.shutdown().await;
    assert_eq!(cache.get("k"), Some(json!(1)));
}
