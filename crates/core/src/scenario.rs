// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario data model (§3), plus the `ParsedScenario` shape supplemented
//! from `scenario_parser.py` (original_source) for the (out-of-scope)
//! YAML loader to produce and `sx-engine` to consume.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::ids::ScenarioKey;

/// Tagged union of trigger shapes from §3's `TriggerDescriptor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriggerDescriptor {
    TextExact { key: String },
    TextStartsWith { prefix: String },
    TextContains { substring: String },
    TextRegex { pattern: String },
    TextState { state_type: String },
    CallbackExact { key: String },
    CallbackContains { substring: String },
    NewMemberGroup,
    NewMemberLink,
    NewMemberCreator,
    NewMemberInitiator,
    NewMemberDefault,
}

/// Successor mapping for a step: `{result: next_step_order}`.
pub type StepTransition = HashMap<String, u32>;

/// A single step in a scenario's ordered step list (§3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub step_order: u32,
    pub action_name: String,
    #[serde(default)]
    pub params: serde_json::Map<String, Json>,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub guard_condition: Option<String>,
    #[serde(default)]
    pub transition: Option<StepTransition>,
}

/// Record keyed by `(tenant_id, scenario_name)` in §3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    pub triggers: Vec<TriggerDescriptor>,
    pub steps: Vec<Step>,
}

/// A raw step straight off the YAML loader, before `action`/`action_name`
/// resolution (§9 Open Question: `action` wins when present and
/// non-empty, else `action_name` is used — ported from
/// `step_data.get("action") or step_data.get("action_name")`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStep {
    pub step_order: u32,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub action_name: Option<String>,
    #[serde(default)]
    pub params: serde_json::Map<String, Json>,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub guard_condition: Option<String>,
    #[serde(default)]
    pub transition: Option<StepTransition>,
}

impl RawStep {
    /// Resolve `action` vs `action_name`: `action` wins whenever present
    /// and non-empty.
    pub fn resolved_action_name(&self) -> &str {
        match &self.action {
            Some(a) if !a.is_empty() => a,
            _ => self.action_name.as_deref().unwrap_or(""),
        }
    }

    pub fn into_step(self) -> Step {
        let action_name = self.resolved_action_name().to_string();
        Step {
            step_order: self.step_order,
            action_name,
            params: self.params,
            is_async: self.is_async,
            action_id: self.action_id,
            guard_condition: self.guard_condition,
            transition: self.transition,
        }
    }
}

/// The shape the (out-of-scope) YAML scenario loader produces, per
/// `scenario_parser.py`: a scenario entry before it is folded into the
/// per-tenant `ScenarioIndex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedScenario {
    /// Fully-qualified key: `"<relative-path-without-ext>.<scenario_name>"`.
    pub key: ScenarioKey,
    pub short_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    pub triggers: Vec<TriggerDescriptor>,
    pub raw_steps: Vec<RawStep>,
}

impl ParsedScenario {
    /// Resolve into the engine-facing `Scenario`, applying the
    /// `action`/`action_name` precedence rule and sorting steps by
    /// `step_order`.
    pub fn into_scenario(self) -> Scenario {
        let mut steps: Vec<Step> = self.raw_steps.into_iter().map(RawStep::into_step).collect();
        steps.sort_by_key(|s| s.step_order);
        Scenario {
            name: self.short_name,
            description: self.description,
            schedule: self.schedule,
            triggers: self.triggers,
            steps,
        }
    }
}

/// Per-tenant derived index held in cache (§3).
#[derive(Debug, Clone, Default)]
pub struct ScenarioIndex {
    /// `event_type -> sub_field -> bucket -> scenario key`, ordered by
    /// YAML load order within each bucket so the matcher can try
    /// multi-candidate tiers (e.g. `regex`, `contains`) in load order.
    pub search_tree: IndexMap<String, IndexMap<String, IndexMap<String, ScenarioKey>>>,
    pub scenario_index: HashMap<ScenarioKey, Scenario>,
    /// Short name -> fully-qualified key, for unambiguous short lookups.
    pub scenario_name_index: HashMap<String, ScenarioKey>,
}

impl ScenarioIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index atomically from a flat scenario list, per §3's
    /// "rebuilt atomically... partial updates are never observable"
    /// invariant — the caller swaps the returned index in wholesale.
    pub fn build(scenarios: Vec<ParsedScenario>) -> Self {
        let mut index = Self::new();
        let mut short_name_counts: HashMap<String, u32> = HashMap::new();
        for parsed in &scenarios {
            *short_name_counts.entry(parsed.short_name.clone()).or_insert(0) += 1;
        }
        for parsed in scenarios {
            let key = parsed.key.clone();
            let short_name = parsed.short_name.clone();
            let scenario = parsed.clone().into_scenario();

            for trigger in &parsed.triggers {
                insert_trigger(&mut index.search_tree, trigger, &key);
            }

            if short_name_counts.get(&short_name).copied() == Some(1) {
                index.scenario_name_index.insert(short_name, key.clone());
            }
            index.scenario_index.insert(key, scenario);
        }
        index
    }

    /// Resolve a fully-qualified key or unambiguous short name to the
    /// fully-qualified key stored in `scenario_index`.
    pub fn resolve_key(&self, name_or_key: &str) -> Option<&ScenarioKey> {
        if let Some((key, _)) = self
            .scenario_index
            .iter()
            .find(|(k, _)| k.as_str() == name_or_key)
        {
            return Some(key);
        }
        self.scenario_name_index.get(name_or_key)
    }
}

fn insert_trigger(
    tree: &mut IndexMap<String, IndexMap<String, IndexMap<String, ScenarioKey>>>,
    trigger: &TriggerDescriptor,
    key: &ScenarioKey,
) {
    let (event_type, sub_field, bucket) = match trigger {
        TriggerDescriptor::TextExact { key: k } => ("text", "exact", k.clone()),
        TriggerDescriptor::TextStartsWith { prefix } => ("text", "starts_with", prefix.clone()),
        TriggerDescriptor::TextContains { substring } => ("text", "contains", substring.clone()),
        TriggerDescriptor::TextRegex { pattern } => ("text", "regex", pattern.clone()),
        TriggerDescriptor::TextState { state_type } => ("text", "state", state_type.clone()),
        TriggerDescriptor::CallbackExact { key: k } => ("callback", "exact", k.clone()),
        TriggerDescriptor::CallbackContains { substring } => {
            ("callback", "contains", substring.clone())
        }
        TriggerDescriptor::NewMemberGroup => ("new_member", "group", "group".to_string()),
        TriggerDescriptor::NewMemberLink => ("new_member", "link", "link".to_string()),
        TriggerDescriptor::NewMemberCreator => ("new_member", "creator", "creator".to_string()),
        TriggerDescriptor::NewMemberInitiator => {
            ("new_member", "initiator", "initiator".to_string())
        }
        TriggerDescriptor::NewMemberDefault => ("new_member", "default", "default".to_string()),
    };
    tree.entry(event_type.to_string())
        .or_default()
        .entry(sub_field.to_string())
        .or_default()
        .insert(bucket, key.clone());
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
