// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn plain_path_splices_into_surrounding_text() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"user": {"name": "ada"}}));
    let out = expander.expand_value(&json!("hello {user.name}!"), &ctx);
    assert_eq!(out, json!("hello ada!"));
}

#[test]
fn missing_path_renders_original_literal_text() {
    let expander = Expander::new();
    let ctx = Context::new(json!({}));
    let out = expander.expand_value(&json!("{user.name}"), &ctx);
    assert_eq!(out, json!("{user.name}"));
}

#[test]
fn whole_string_placeholder_infers_integer_type() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"count": 5}));
    let out = expander.expand_value(&json!("{count|+2}"), &ctx);
    assert_eq!(out, json!(7));
}

#[test]
fn whole_string_placeholder_infers_boolean_type() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"flag": true}));
    let out = expander.expand_value(&json!("{flag}"), &ctx);
    assert_eq!(out, json!(true));
}

#[test]
fn embedded_placeholder_stays_string_spliced() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"count": 5}));
    let out = expander.expand_value(&json!("count={count}"), &ctx);
    assert_eq!(out, json!("count=5"));
}

#[test]
fn recurses_through_nested_maps_and_arrays() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"name": "ada"}));
    let out = expander.expand_value(
        &json!({"greeting": "hi {name}", "list": ["{name}", "static"]}),
        &ctx,
    );
    assert_eq!(out, json!({"greeting": "hi ada", "list": ["ada", "static"]}));
}

#[test]
fn expand_modifier_splices_list_into_parent_list() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"items": ["a", "b", "c"]}));
    let out = expander.expand_value(&json!(["prefix", "{items|expand}", "suffix"]), &ctx);
    assert_eq!(out, json!(["prefix", "a", "b", "c", "suffix"]));
}

#[test]
fn literal_source_bypasses_path_lookup() {
    let expander = Expander::new();
    let ctx = Context::new(json!({}));
    let out = expander.expand_value(&json!("{'static text'}"), &ctx);
    assert_eq!(out, json!("static text"));
}

#[test]
fn unknown_modifier_is_ignored_and_value_passes_through() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"name": "ada"}));
    let out = expander.expand_value(&json!("{name|no_such_modifier}"), &ctx);
    assert_eq!(out, json!("ada"));
}

#[test]
fn nested_placeholder_in_modifier_arg_resolves_from_context() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"base": 10, "amount": 5}));
    let out = expander.expand_value(&json!("{base|+{amount}}"), &ctx);
    assert_eq!(out, json!(15));
}

#[test]
fn conditional_branch_picks_value_then_fallback() {
    let expander = Expander::new();
    let ctx = Context::new(json!({"status": "active"}));
    let out =
        expander.expand_value(&json!("{status|equals:active|value:'on'|fallback:'off'}"), &ctx);
    assert_eq!(out, json!("on"));

    let ctx = Context::new(json!({"status": "inactive"}));
    let out =
        expander.expand_value(&json!("{status|equals:active|value:'on'|fallback:'off'}"), &ctx);
    assert_eq!(out, json!("off"));
}

#[test]
fn config_field_overlay_reachable_via_underscore_cache_path() {
    let expander = Expander::new();
    let mut cache = serde_json::Map::new();
    cache.insert("discount".to_string(), json!(0.1));
    let ctx = Context::from_event_and_cache(&json!({}), cache);
    let out = expander.expand_value(&json!("{_cache.discount|format:percent}"), &ctx);
    assert_eq!(out, json!("10.0%"));
}
