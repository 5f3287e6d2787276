// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn missing_is_distinct_from_null() {
    let root = json!({"a": null});
    assert_eq!(resolve_path(&root, "a"), Value::null());
    assert_eq!(resolve_path(&root, "b"), Value::Missing);
    assert!(resolve_path(&root, "a").is_null_ish());
    assert!(resolve_path(&root, "b").is_null_ish());
}

#[test]
fn dotted_field_access() {
    let root = json!({"user": {"name": "ada"}});
    assert_eq!(
        resolve_path(&root, "user.name"),
        Value::Json(json!("ada"))
    );
}

#[test]
fn array_index_positive_and_negative() {
    let root = json!({"items": [1, 2, 3]});
    assert_eq!(resolve_path(&root, "items[0]"), Value::Json(json!(1)));
    assert_eq!(resolve_path(&root, "items[-1]"), Value::Json(json!(3)));
    assert_eq!(resolve_path(&root, "items[5]"), Value::Missing);
    assert_eq!(resolve_path(&root, "items[-5]"), Value::Missing);
}

#[test]
fn nested_path_stops_at_first_missing() {
    let root = json!({"a": {"b": 1}});
    assert_eq!(resolve_path(&root, "a.c.d"), Value::Missing);
}

#[test]
fn malformed_path_is_missing() {
    let root = json!({"a": [1]});
    assert_eq!(resolve_path(&root, "a[0"), Value::Missing);
}

#[test]
fn display_string_unwraps_string_values() {
    assert_eq!(Value::Json(json!("hi")).to_display_string(), "hi");
    assert_eq!(Value::Json(json!(42)).to_display_string(), "42");
    assert_eq!(Value::Missing.to_display_string(), "");
}

#[test]
fn as_f64_parses_numeric_strings() {
    assert_eq!(Value::Json(json!("3.5")).as_f64(), Some(3.5));
    assert_eq!(Value::Json(json!("nope")).as_f64(), None);
    assert_eq!(Value::Json(json!(3)).as_f64(), Some(3.0));
}
