// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The context a template is expanded against: event fields, a `_cache`
//! overlay subtree, and step-local bindings, all addressed by the same
//! dotted-path grammar (`_cache.x.y` simply walks into the `_cache` key
//! like any other field).

use serde_json::{Map, Value as Json};

use sx_core::value::{resolve_path, Value};

#[derive(Debug, Clone)]
pub struct Context {
    root: Json,
}

impl Context {
    pub fn new(root: Json) -> Self {
        Self { root }
    }

    /// Build a context from an event body plus a `_cache` overlay map.
    pub fn from_event_and_cache(event: &Json, cache: Map<String, Json>) -> Self {
        let mut root = event.clone();
        if let Json::Object(map) = &mut root {
            map.insert("_cache".to_string(), Json::Object(cache));
        }
        Self { root }
    }

    pub fn resolve(&self, path: &str) -> Value {
        resolve_path(&self.root, path)
    }

    /// The raw backing JSON — used by the condition evaluator, which
    /// walks the same path grammar directly over a `serde_json::Value`.
    pub fn as_json(&self) -> &Json {
        &self.root
    }

    /// Config lookup per §4.2: try `data.<field>`, else `data._config.<field>`.
    pub fn resolve_config(&self, field: &str) -> Value {
        let direct = self.resolve(field);
        if !direct.is_missing() {
            return direct;
        }
        self.resolve(&format!("_config.{field}"))
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
