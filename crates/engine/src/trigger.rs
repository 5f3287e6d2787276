// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger matching — the 9-tier priority table from `trigger_processing.py`,
//! generalized onto `sx_core::ScenarioIndex`'s `search_tree`.

use regex::Regex;
use tracing::warn;

use sx_core::{Event, ScenarioIndex, ScenarioKey, UserState};

use crate::button;

/// Chat types that never participate in matching — e.g. broadcast
/// channels have no concept of a responding scenario.
fn is_excluded_chat_type(chat_type: &str) -> bool {
    chat_type.eq_ignore_ascii_case("channel")
}

/// Finds the single scenario an event matches, walking the priority
/// tiers in order and returning on the first hit.
pub struct TriggerMatcher;

impl TriggerMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn match_event(
        &self,
        event: &Event,
        index: &ScenarioIndex,
        active_state: Option<&UserState>,
    ) -> Option<ScenarioKey> {
        if let Some(chat_type) = event.chat_type() {
            if is_excluded_chat_type(chat_type) {
                return None;
            }
        }

        match event.event_type() {
            Some("text") => self.match_text(event, index, active_state),
            Some("callback") => self.match_callback(event, index),
            Some("new_member") => self.match_new_member(event, index),
            _ => None,
        }
    }

    fn match_text(
        &self,
        event: &Event,
        index: &ScenarioIndex,
        active_state: Option<&UserState>,
    ) -> Option<ScenarioKey> {
        let Some(text_bucket) = index.search_tree.get("text") else { return None };
        let event_text = event.event_text().unwrap_or("");
        let lowered = event_text.to_lowercase();

        // Tier 1: exact.
        if let Some(exact) = text_bucket.get("exact") {
            if let Some(key) = exact.get(lowered.as_str()) {
                return Some(key.clone());
            }
        }

        // Tier 2: state, checked even when event_text is empty.
        if let (Some(state_bucket), Some(state)) = (text_bucket.get("state"), active_state) {
            if let Some(key) = state_bucket.get(state.state_type.as_str()) {
                return Some(key.clone());
            }
        }

        // Tier 3: regex, first match in load order; bad patterns are
        // logged and skipped rather than failing the whole match.
        if let Some(regex_bucket) = text_bucket.get("regex") {
            for (pattern, key) in regex_bucket {
                match Regex::new(&format!("(?i){pattern}")) {
                    Ok(re) if re.is_match(event_text) => return Some(key.clone()),
                    Ok(_) => {}
                    Err(err) => warn!(%pattern, %err, "skipping invalid trigger regex"),
                }
            }
        }

        // Tier 4: starts_with.
        if let Some(bucket) = text_bucket.get("starts_with") {
            for (prefix, key) in bucket {
                if lowered.starts_with(prefix.as_str()) {
                    return Some(key.clone());
                }
            }
        }

        // Tier 5: contains.
        if let Some(bucket) = text_bucket.get("contains") {
            for (substring, key) in bucket {
                if lowered.contains(substring.as_str()) {
                    return Some(key.clone());
                }
            }
        }

        None
    }

    fn match_callback(&self, event: &Event, index: &ScenarioIndex) -> Option<ScenarioKey> {
        let Some(callback_bucket) = index.search_tree.get("callback") else { return None };
        let callback_data = event.callback_data().unwrap_or("");

        // Tier 6: explicit ":<scenario_name>" jump.
        if let Some(short_name) = callback_data.strip_prefix(':') {
            if let Some(key) = index.resolve_key(short_name) {
                return Some(key.clone());
            }
        }

        let normalized = button::normalize(callback_data);

        // Tier 7: exact normalized.
        if let Some(exact) = callback_bucket.get("exact") {
            if let Some(key) = exact.get(normalized.as_str()) {
                return Some(key.clone());
            }
        }

        // Tier 8: contains normalized.
        if let Some(bucket) = callback_bucket.get("contains") {
            for (substring, key) in bucket {
                if normalized.contains(substring.as_str()) {
                    return Some(key.clone());
                }
            }
        }

        None
    }

    fn match_new_member(&self, event: &Event, index: &ScenarioIndex) -> Option<ScenarioKey> {
        let Some(bucket) = index.search_tree.get("new_member") else { return None };
        let kind = event
            .as_json()
            .get("new_member_type")
            .and_then(|v| v.as_str())
            .unwrap_or("default");

        // Tier 9: group -> link -> creator -> initiator -> default.
        for tier in ["group", "link", "creator", "initiator", "default"] {
            if tier != kind && tier != "default" {
                continue;
            }
            if let Some(key) = bucket.get(tier) {
                return Some(key.clone());
            }
        }
        None
    }
}

impl Default for TriggerMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
