// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action Hub (§4.7): a name-to-handler registry. `execute_action`
//! validates input against the handler's declared schema, then either
//! calls it inline or routes it through [`sx_tasks::TaskManager`] for
//! fire-and-forget dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value as Json};

use sx_core::{QueueName, SxError};
use sx_tasks::TaskManager;
use sx_wire::TaskResultEnvelope;

use crate::validator::{self, ActionSchema};

#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn call(&self, data: Map<String, Json>) -> Result<Json, SxError>;
}

struct Registration {
    schema: ActionSchema,
    handler: Arc<dyn ActionHandler>,
}

/// Registry is keyed by `"<service>.<action>"`, matching how scenario
/// steps name an `action_name`.
pub struct ActionHub {
    registrations: HashMap<String, Registration>,
    tasks: Arc<TaskManager>,
}

impl ActionHub {
    pub fn new(tasks: Arc<TaskManager>) -> Self {
        Self { registrations: HashMap::new(), tasks }
    }

    pub fn register(&mut self, name: impl Into<String>, schema: ActionSchema, handler: Arc<dyn ActionHandler>) {
        self.registrations.insert(name.into(), Registration { schema, handler });
    }

    pub async fn execute_action(
        &self,
        name: &str,
        data: &Json,
        fire_and_forget: bool,
        queue: &QueueName,
    ) -> TaskResultEnvelope {
        let Some(registration) = self.registrations.get(name) else {
            return TaskResultEnvelope::error(&SxError::NotFound(format!("unknown action '{name}'")));
        };

        let validated = match validator::validate(&registration.schema, data) {
            Ok(fields) => fields,
            Err(err) => return TaskResultEnvelope::error(&err),
        };

        if fire_and_forget {
            let handler = registration.handler.clone();
            let submitted = self.tasks.fire_and_forget(queue, Box::pin(async move {
                handler.call(validated).await
            }));
            return match submitted {
                Ok(()) => TaskResultEnvelope::success(None),
                Err(err) => TaskResultEnvelope::error(&SxError::Internal(err.to_string())),
            };
        }

        match registration.handler.call(validated).await {
            Ok(response_data) => TaskResultEnvelope::success(Some(response_data)),
            Err(err) => TaskResultEnvelope::error(&err),
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
