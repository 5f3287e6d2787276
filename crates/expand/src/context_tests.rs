// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn resolves_event_fields() {
    let ctx = Context::new(json!({"user": {"name": "ada"}}));
    assert_eq!(ctx.resolve("user.name"), Value::Json(json!("ada")));
}

#[test]
fn cache_overlay_reachable_under_underscore_cache() {
    let mut cache = Map::new();
    cache.insert("greeting".to_string(), json!("hi"));
    let ctx = Context::from_event_and_cache(&json!({"user": "ada"}), cache);
    assert_eq!(ctx.resolve("_cache.greeting"), Value::Json(json!("hi")));
    assert_eq!(ctx.resolve("user"), Value::Json(json!("ada")));
}

#[test]
fn config_lookup_falls_back_to_underscore_config() {
    let ctx = Context::new(json!({"_config": {"timeout": 30}}));
    assert_eq!(ctx.resolve_config("timeout"), Value::Json(json!(30)));
    assert_eq!(ctx.resolve_config("missing"), Value::Missing);
}

#[test]
fn config_lookup_prefers_direct_field() {
    let ctx = Context::new(json!({"timeout": 5, "_config": {"timeout": 30}}));
    assert_eq!(ctx.resolve_config("timeout"), Value::Json(json!(5)));
}
