// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon entrypoint: load settings, stand up the cache/task-manager/
//! action-hub/scenario-engine stack, and idle until shutdown — the HTTP
//! listener that would feed `WebhookIngress::ingest` is out of scope
//! and left to whatever process embeds this crate's library surface.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing_subscriber::EnvFilter;

use sx_cache::CacheManager;
use sx_core::clock::SystemClock;
use sx_core::{ParsedScenario, QueueName, SxError, TenantId};
use sx_daemon::{env, Settings, WebhookIngress};
use sx_engine::action::ActionHub;
use sx_engine::engine::{ScenarioEngine, ScenarioSource};
use sx_tasks::TaskManager;
use sx_tenant::UserStateStore;

/// Placeholder scenario source: until a file- or DB-backed
/// `sx_wire::ScenarioFileParser` pipeline is wired in, every tenant
/// loads with no scenarios and every event is silently ignored.
struct EmptyScenarioSource;

#[async_trait]
impl ScenarioSource for EmptyScenarioSource {
    async fn load_scenarios(&self, _tenant_id: TenantId) -> Result<Vec<ParsedScenario>, SxError> {
        Ok(Vec::new())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings_path = env::settings_path();
    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!(path = %settings_path.display(), %err, "failed to load settings");
            std::process::exit(1);
        }
    };

    let cache = Arc::new(CacheManager::new((&settings.cache).into()));

    let queues: Vec<QueueName> = settings.task_manager.queues.iter().map(|q| QueueName::from(q.as_str())).collect();
    let shutdown_timeout = Duration::from_secs(settings.task_manager.shutdown_timeout_secs);
    let tasks = Arc::new(TaskManager::new(&queues, shutdown_timeout));
    let tasks_handle = tasks.clone();

    let hub = ActionHub::new(tasks);
    let default_queue = queues.first().cloned().unwrap_or_else(|| QueueName::from("default"));
    let user_states = UserStateStore::new(cache.clone(), SystemClock);

    let engine = Arc::new(ScenarioEngine::new(EmptyScenarioSource, hub, default_queue, user_states));
    let _ingress = WebhookIngress::new(cache, engine);

    tracing::info!("sxd ready");

    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install ctrl-c handler; exiting immediately");
    }
    tracing::info!("sxd shutting down");
    tasks_handle.shutdown().await;
}
