// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-step execution: guard evaluation, placeholder expansion, action
//! dispatch, and transition resolution — the
//! `RUNNING_STEP_i -> (await transition or next_order) -> ...` edge of
//! §4.1's state machine.

use serde_json::Value as Json;

use sx_core::{QueueName, Step};
use sx_expand::{Context, Expander};
use sx_wire::{ResultKind, TaskResultEnvelope};

use crate::action::ActionHub;
use crate::condition::ConditionEngine;

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The step ran (or was skipped by its guard); carries the next
    /// step order to run, or `None` when the scenario is done.
    Advance { next: Option<u32>, envelope: Option<TaskResultEnvelope> },
    /// The guard condition itself failed to evaluate.
    GuardError(String),
}

pub struct StepExecutor<'a> {
    pub expander: &'a Expander,
    pub conditions: &'a ConditionEngine,
}

impl<'a> StepExecutor<'a> {
    pub async fn run(&self, step: &Step, ctx: &Context, hub: &ActionHub, queue: &QueueName) -> StepOutcome {
        if let Some(guard) = &step.guard_condition {
            match self.conditions.eval(guard, ctx.as_json()) {
                Ok(true) => {}
                Ok(false) => return StepOutcome::Advance { next: next_order(step), envelope: None },
                Err(err) => return StepOutcome::GuardError(err.to_string()),
            }
        }

        let params = self.expander.expand_value(&Json::Object(step.params.clone()), ctx);
        let fire_and_forget = step.is_async;
        let envelope = hub.execute_action(&step.action_name, &params, fire_and_forget, queue).await;

        let result_key = match envelope.result {
            ResultKind::Success => "success",
            ResultKind::Failed => "failed",
            ResultKind::Error => "error",
        };
        let next = step
            .transition
            .as_ref()
            .and_then(|t| t.get(result_key))
            .copied()
            .or_else(|| next_order(step));

        StepOutcome::Advance { next, envelope: Some(envelope) }
    }
}

fn next_order(step: &Step) -> Option<u32> {
    Some(step.step_order + 1)
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
