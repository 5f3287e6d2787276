// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Active expiration sampler: a background task that periodically samples
//! a subset of TTL-bearing keys and, if enough of them are expired, sweeps
//! the whole set — mirroring Redis's active-expire cycle.

use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use tokio_util::sync::CancellationToken;

use crate::store::CacheStore;

pub struct SamplerConfig {
    pub interval: Duration,
    pub sample_size: usize,
    pub expired_threshold: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(60), sample_size: 50, expired_threshold: 0.25 }
    }
}

/// Spawns the sampler loop, returning its `JoinHandle`. Cancelled via
/// `token`; the loop observes cancellation between sweeps, never mid-sweep.
pub fn spawn(store: Arc<CacheStore>, config: SamplerConfig, token: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::info!("cache sampler stopped");
                    return;
                }
                _ = tokio::time::sleep(config.interval) => {
                    sweep(&store, &config);
                }
            }
        }
    })
}

fn sweep(store: &CacheStore, config: &SamplerConfig) {
    let mut keys = store.ttl_keys();
    if keys.is_empty() {
        return;
    }
    let sample_size = config.sample_size.min(keys.len());
    let mut rng = rand::thread_rng();
    keys.shuffle(&mut rng);
    let sample = &keys[..sample_size];

    let expired_in_sample = sample.iter().filter(|k| store.is_key_expired(k)).count();
    let ratio = expired_in_sample as f64 / sample_size as f64;

    if ratio >= config.expired_threshold {
        let all_expired: Vec<String> = keys.into_iter().filter(|k| store.is_key_expired(k)).collect();
        store.evict_many(&all_expired);
    } else {
        let expired: Vec<String> = sample.iter().filter(|k| store.is_key_expired(k)).cloned().collect();
        store.evict_many(&expired);
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
