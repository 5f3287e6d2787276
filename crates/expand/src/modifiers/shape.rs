// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Data-shape modifiers: `length`, `truncate:N`, `regex:PATTERN`, `list`,
//! `comma`, `expand`, `code`, case transforms.

use std::collections::HashMap;

use regex::Regex;
use serde_json::Value as Json;

use super::{EvalState, ModifierFn, ModifierOutcome};
use crate::context::Context;
use sx_core::value::Value;

pub fn register(map: &mut HashMap<&'static str, ModifierFn>) {
    map.insert("length", length);
    map.insert("truncate", truncate);
    map.insert("regex", regex_first_match);
    map.insert("list", list);
    map.insert("comma", comma);
    map.insert("expand", expand_marker);
    map.insert("code", code);
    map.insert("upper", upper);
    map.insert("lower", lower);
    map.insert("title", title);
    map.insert("capitalize", capitalize);
    map.insert("case", case);
}

fn length(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let len = match state.value.as_json() {
        Some(Json::String(s)) => Some(s.chars().count()),
        Some(Json::Array(a)) => Some(a.len()),
        _ => None,
    };
    match len {
        Some(n) => {
            state.value = Value::Json(Json::Number(n.into()));
            ModifierOutcome::Applied
        }
        None => ModifierOutcome::TypeMismatch,
    }
}

fn truncate(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let Some(n) = arg.and_then(|a| a.trim().parse::<usize>().ok()) else {
        return ModifierOutcome::TypeMismatch;
    };
    let s = state.value.to_display_string();
    let truncated: String = s.chars().take(n).collect();
    state.value = Value::Json(Json::String(truncated));
    ModifierOutcome::Applied
}

fn regex_first_match(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let Some(pattern) = arg else { return ModifierOutcome::TypeMismatch };
    let Ok(re) = Regex::new(pattern) else {
        // Regex compile errors return the input unchanged (§4.2 failure semantics).
        return ModifierOutcome::Applied;
    };
    let s = state.value.to_display_string();
    if let Some(m) = re.find(&s) {
        state.value = Value::Json(Json::String(m.as_str().to_string()));
    }
    ModifierOutcome::Applied
}

fn list(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    match state.value.as_json() {
        Some(Json::Array(_)) => ModifierOutcome::Applied,
        Some(Json::String(s)) => {
            let items: Vec<Json> =
                s.split(',').map(|piece| Json::String(piece.trim().to_string())).collect();
            state.value = Value::Json(Json::Array(items));
            ModifierOutcome::Applied
        }
        _ => ModifierOutcome::TypeMismatch,
    }
}

fn comma(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let Some(Json::Array(items)) = state.value.as_json() else {
        return ModifierOutcome::TypeMismatch;
    };
    let joined = items
        .iter()
        .map(|v| Value::Json(v.clone()).to_display_string())
        .collect::<Vec<_>>()
        .join(", ");
    state.value = Value::Json(Json::String(joined));
    ModifierOutcome::Applied
}

/// No-op marker: `expand` splicing is applied as a post-pass over the
/// materialized parent list, not during modifier evaluation (§4.2).
fn expand_marker(_state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    ModifierOutcome::Applied
}

fn code(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let s = state.value.to_display_string();
    state.value = Value::Json(Json::String(format!("<code>{s}</code>")));
    ModifierOutcome::Applied
}

fn upper(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    state.value = Value::Json(Json::String(state.value.to_display_string().to_uppercase()));
    ModifierOutcome::Applied
}

fn lower(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    state.value = Value::Json(Json::String(state.value.to_display_string().to_lowercase()));
    ModifierOutcome::Applied
}

fn title(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let titled = state
        .value
        .to_display_string()
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ");
    state.value = Value::Json(Json::String(titled));
    ModifierOutcome::Applied
}

fn capitalize(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    state.value = Value::Json(Json::String(capitalize_word(&state.value.to_display_string())));
    ModifierOutcome::Applied
}

fn case(state: &mut EvalState, arg: Option<&str>, ctx: &Context) -> ModifierOutcome {
    match arg {
        Some("upper") => upper(state, None, ctx),
        Some("lower") => lower(state, None, ctx),
        _ => ModifierOutcome::TypeMismatch,
    }
}

fn capitalize_word(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
