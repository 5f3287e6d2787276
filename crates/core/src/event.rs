// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Incoming event envelope (§3).
//!
//! An `Event` is a hierarchical mapping with a required `system` sub-map
//! carrying `tenant_id`/`bot_id`/`source`, plus event-type-specific
//! fields. Events are immutable from the engine's perspective; the
//! trigger matcher and step executor read through typed accessors here
//! rather than poking at the underlying JSON directly.

use serde_json::Value as Json;

use crate::ids::{BotId, TenantId};
use crate::value::{resolve_path, Value};

/// Where an event originated, per §3's `system.source` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Webhook,
    Scheduled,
    Internal,
}

impl EventSource {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "webhook" => Some(EventSource::Webhook),
            "scheduled" => Some(EventSource::Scheduled),
            "internal" => Some(EventSource::Internal),
            _ => None,
        }
    }
}

/// An incoming event, wrapping the raw JSON body with typed accessors
/// for the fields the engine reads most.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    root: Json,
}

impl Event {
    pub fn new(root: Json) -> Self {
        Self { root }
    }

    pub fn as_json(&self) -> &Json {
        &self.root
    }

    fn system(&self) -> &Json {
        self.root.get("system").unwrap_or(&Json::Null)
    }

    pub fn tenant_id(&self) -> Option<TenantId> {
        self.system().get("tenant_id")?.as_i64().map(TenantId)
    }

    pub fn bot_id(&self) -> Option<BotId> {
        self.system().get("bot_id")?.as_i64().map(BotId)
    }

    pub fn source(&self) -> Option<EventSource> {
        self.system().get("source")?.as_str().and_then(EventSource::from_str)
    }

    pub fn event_type(&self) -> Option<&str> {
        self.root.get("event_type")?.as_str()
    }

    pub fn event_text(&self) -> Option<&str> {
        self.root.get("event_text")?.as_str()
    }

    pub fn callback_data(&self) -> Option<&str> {
        self.root.get("callback_data")?.as_str()
    }

    pub fn chat_id(&self) -> Option<&Json> {
        self.root.get("chat_id")
    }

    pub fn user_id(&self) -> Option<&Json> {
        self.root.get("user_id")
    }

    pub fn chat_type(&self) -> Option<&str> {
        self.root.get("chat_type")?.as_str()
    }

    pub fn attachments(&self) -> &[Json] {
        match self.root.get("event_attachment") {
            Some(Json::Array(items)) => items,
            _ => &[],
        }
    }

    /// Resolve a dotted/indexed path against the raw event body, used by
    /// both the placeholder expander and the condition evaluator.
    pub fn resolve(&self, path: &str) -> Value {
        resolve_path(&self.root, path)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
