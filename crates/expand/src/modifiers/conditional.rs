// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conditional modifiers: predicates (`equals`, `in_list`, `exists`,
//! `is_null`, `ready`, `not_ready`) set [`EvalState::decision`], and the
//! following `value:`/`fallback:` branch modifier consumes it.
//!
//! `fallback` additionally replaces a bare `MISSING` value even with no
//! preceding predicate, per §4.2 rule 3 ("modifiers may short-circuit —
//! fallback replaces MISSING").

use std::collections::HashMap;

use serde_json::Value as Json;

use super::{EvalState, ModifierFn, ModifierOutcome};
use crate::context::Context;
use crate::expander::expand_placeholder_text;
use sx_core::value::Value;

pub fn register(map: &mut HashMap<&'static str, ModifierFn>) {
    map.insert("equals", equals);
    map.insert("in_list", in_list);
    map.insert("exists", exists);
    map.insert("is_null", is_null);
    map.insert("ready", ready);
    map.insert("not_ready", not_ready);
    map.insert("value", value_branch);
    map.insert("fallback", fallback_branch);
}

fn equals(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let Some(expected) = arg else { return ModifierOutcome::TypeMismatch };
    state.decision = Some(state.value.to_display_string() == expected);
    ModifierOutcome::Applied
}

fn in_list(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let Some(list) = arg else { return ModifierOutcome::TypeMismatch };
    let current = state.value.to_display_string();
    state.decision = Some(list.split(',').any(|item| item.trim() == current));
    ModifierOutcome::Applied
}

fn exists(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    state.decision = Some(!state.value.is_missing());
    ModifierOutcome::Applied
}

fn is_null(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    state.decision = Some(state.value.is_null_ish());
    ModifierOutcome::Applied
}

/// Inspects a pending-computation handle, represented as
/// `{"ready": bool, "value"?: any}` (the shape a `return_future` task
/// handle serializes to at the wire boundary).
fn handle_ready(value: &Value) -> Option<bool> {
    match value.as_json() {
        Some(Json::Object(map)) => map.get("ready").and_then(Json::as_bool),
        _ => None,
    }
}

fn ready(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    match handle_ready(&state.value) {
        Some(r) => {
            state.decision = Some(r);
            ModifierOutcome::Applied
        }
        None => ModifierOutcome::TypeMismatch,
    }
}

fn not_ready(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    match handle_ready(&state.value) {
        Some(r) => {
            state.decision = Some(!r);
            ModifierOutcome::Applied
        }
        None => ModifierOutcome::TypeMismatch,
    }
}

fn value_branch(state: &mut EvalState, arg: Option<&str>, ctx: &Context) -> ModifierOutcome {
    let Some(source) = arg else { return ModifierOutcome::TypeMismatch };
    if state.decision == Some(true) {
        state.value = expand_placeholder_text(source, ctx);
        state.decision = None;
    }
    ModifierOutcome::Applied
}

fn fallback_branch(state: &mut EvalState, arg: Option<&str>, ctx: &Context) -> ModifierOutcome {
    let Some(source) = arg else { return ModifierOutcome::TypeMismatch };
    let decision_false = state.decision == Some(false);
    if state.value.is_missing() || decision_false {
        state.value = expand_placeholder_text(source, ctx);
        state.decision = None;
    }
    ModifierOutcome::Applied
}

#[cfg(test)]
#[path = "conditional_tests.rs"]
mod tests;
