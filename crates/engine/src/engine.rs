// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The scenario engine: ties `TriggerMatcher`, `StepExecutor`, and
//! `ActionHub` together behind `process_event`, and owns the per-tenant
//! `ScenarioIndex` cache that `reload_tenant_scenarios` rebuilds.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Map;
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;

use sx_core::{Clock, Event, ParsedScenario, QueueName, ScenarioIndex, SxError, TenantId};
use sx_expand::{Context, Expander};
use sx_tenant::UserStateStore;
use sx_wire::{ResultKind, TaskResultEnvelope};

use crate::action::ActionHub;
use crate::condition::ConditionEngine;
use crate::step::{StepExecutor, StepOutcome};
use crate::trigger::TriggerMatcher;

/// Loads the flat scenario list a tenant's `ScenarioIndex` is built from.
/// The YAML-to-`ParsedScenario` pipeline itself lives outside this crate
/// (`sx-wire::ScenarioFileParser` plus whatever storage backs it in
/// `sx-daemon`); the engine only needs something that can hand it a list.
#[async_trait]
pub trait ScenarioSource: Send + Sync {
    async fn load_scenarios(&self, tenant_id: TenantId) -> Result<Vec<ParsedScenario>, SxError>;
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("event has no tenant_id")]
    MissingTenantId,
    #[error("no scenarios loaded for tenant {0}")]
    NotLoaded(TenantId),
    #[error("matched scenario key not present in its own index")]
    DanglingScenarioKey,
}

/// What `process_event` did with one event.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// No trigger matched; the event was dropped silently, as spec'd.
    Ignored,
    /// The scenario ran to completion (no further `next` step order).
    Completed { steps_run: u32 },
    /// A step's guard condition failed to evaluate.
    Failed { steps_run: u32, error: String },
}

/// Upper bound on step hops per event, guarding against a misconfigured
/// scenario whose `transition` table cycles back on itself.
const MAX_STEPS_PER_EVENT: u32 = 256;

pub struct ScenarioEngine<C: Clock, S: ScenarioSource> {
    source: S,
    trigger: TriggerMatcher,
    expander: Expander,
    conditions: ConditionEngine,
    hub: ActionHub,
    queue: QueueName,
    user_states: UserStateStore<C>,
    indexes: RwLock<HashMap<TenantId, Arc<ScenarioIndex>>>,
    build_locks: parking_lot::Mutex<HashMap<TenantId, Arc<AsyncMutex<()>>>>,
}

impl<C: Clock, S: ScenarioSource> ScenarioEngine<C, S> {
    pub fn new(source: S, hub: ActionHub, queue: QueueName, user_states: UserStateStore<C>) -> Self {
        Self {
            source,
            trigger: TriggerMatcher::new(),
            expander: Expander::new(),
            conditions: ConditionEngine::new(),
            hub,
            queue,
            user_states,
            indexes: RwLock::new(HashMap::new()),
            build_locks: parking_lot::Mutex::new(HashMap::new()),
        }
    }

    /// Rebuild a tenant's `ScenarioIndex` from scratch and swap it in
    /// atomically. Concurrent reloads for the same tenant serialize on a
    /// per-tenant lock rather than racing to build the same thing twice.
    pub async fn reload_tenant_scenarios(&self, tenant_id: TenantId) -> Result<(), SxError> {
        let lock = self
            .build_locks
            .lock()
            .entry(tenant_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let scenarios = self.source.load_scenarios(tenant_id).await?;
        let index = Arc::new(ScenarioIndex::build(scenarios));
        self.indexes.write().insert(tenant_id, index);
        Ok(())
    }

    fn index_for(&self, tenant_id: TenantId) -> Option<Arc<ScenarioIndex>> {
        self.indexes.read().get(&tenant_id).cloned()
    }

    /// Drives the `IDLE -> MATCHING -> RUNNING_STEP_i -> ... -> DONE|FAILED`
    /// state machine for a single inbound event.
    pub async fn process_event(&self, event: &Event) -> Result<ProcessOutcome, EngineError> {
        let tenant_id = event.tenant_id().ok_or(EngineError::MissingTenantId)?;
        let Some(index) = self.index_for(tenant_id) else {
            return Err(EngineError::NotLoaded(tenant_id));
        };

        let active_state = match event.user_id() {
            Some(user_id) => {
                let user_id = user_id.as_str().map(str::to_string).unwrap_or_else(|| user_id.to_string());
                self.user_states.get(&user_id)
            }
            None => None,
        };

        let Some(key) = self.trigger.match_event(event, &index, active_state.as_ref()) else {
            return Ok(ProcessOutcome::Ignored);
        };
        let Some(scenario) = index.scenario_index.get(&key) else {
            return Err(EngineError::DanglingScenarioKey);
        };

        let steps_by_order: HashMap<u32, _> = scenario.steps.iter().map(|s| (s.step_order, s)).collect();
        let Some(mut current) = scenario.steps.first().map(|s| s.step_order) else {
            return Ok(ProcessOutcome::Completed { steps_run: 0 });
        };

        let ctx = Context::from_event_and_cache(event.as_json(), Map::new());
        let executor = StepExecutor { expander: &self.expander, conditions: &self.conditions };

        let mut steps_run = 0u32;
        loop {
            if steps_run >= MAX_STEPS_PER_EVENT {
                return Ok(ProcessOutcome::Failed {
                    steps_run,
                    error: "step loop exceeded the per-event step bound".to_string(),
                });
            }
            let Some(step) = steps_by_order.get(&current).copied() else {
                return Ok(ProcessOutcome::Completed { steps_run });
            };

            match executor.run(step, &ctx, &self.hub, &self.queue).await {
                StepOutcome::GuardError(err) => {
                    return Ok(ProcessOutcome::Failed { steps_run, error: err });
                }
                StepOutcome::Advance { next, envelope } => {
                    steps_run += 1;
                    if let Some(TaskResultEnvelope { result: ResultKind::Error, error, .. }) = &envelope {
                        let message = error.as_ref().map(|e| e.message.clone()).unwrap_or_default();
                        return Ok(ProcessOutcome::Failed { steps_run, error: message });
                    }
                    match next {
                        Some(next_order) => current = next_order,
                        None => return Ok(ProcessOutcome::Completed { steps_run }),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
