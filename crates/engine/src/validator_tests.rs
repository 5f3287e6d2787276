// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;

use super::*;

fn simple_schema() -> ActionSchema {
    let mut properties = HashMap::new();
    properties.insert("name".to_string(), FieldSchema::required(FieldType::String));
    properties.insert("age".to_string(), FieldSchema::optional(FieldType::Integer));
    ActionSchema { properties }
}

#[test]
fn succeeds_with_required_and_optional_field() {
    let result = validate(&simple_schema(), &json!({"name": "Test", "age": 25}));
    assert!(result.is_ok());
}

#[test]
fn succeeds_without_optional_field() {
    let result = validate(&simple_schema(), &json!({"name": "Test"}));
    assert!(result.is_ok());
}

#[test]
fn fails_on_missing_required_field() {
    let result = validate(&simple_schema(), &json!({}));
    assert!(result.is_err());
}

#[test]
fn fails_on_wrong_type_for_required_field() {
    let mut properties = HashMap::new();
    properties.insert("name".to_string(), FieldSchema::required(FieldType::String));
    let schema = ActionSchema { properties };
    let result = validate(&schema, &json!({"name": 5}));
    assert!(result.is_err());
}

fn constrained_schema() -> ActionSchema {
    let mut properties = HashMap::new();
    properties.insert(
        "prompt".to_string(),
        FieldSchema { field_type: FieldType::String, min_length: Some(1), max_length: Some(100), ..Default::default() },
    );
    properties.insert(
        "temperature".to_string(),
        FieldSchema { field_type: FieldType::Float, optional: true, min: Some(0.0), max: Some(2.0), ..Default::default() },
    );
    ActionSchema { properties }
}

#[test]
fn required_field_constraint_violation_fails() {
    let result = validate(&constrained_schema(), &json!({"prompt": ""}));
    assert!(result.is_err());
}

#[test]
fn required_field_too_long_fails() {
    let result = validate(&constrained_schema(), &json!({"prompt": "a".repeat(101)}));
    assert!(result.is_err());
}

#[test]
fn optional_field_constraint_violation_does_not_fail_validation() {
    let result = validate(&constrained_schema(), &json!({"prompt": "ok", "temperature": 3.0}));
    assert!(result.is_ok());
}

#[test]
fn optional_field_can_be_empty_string_coerced_to_null_for_non_string_type() {
    let result = validate(&constrained_schema(), &json!({"prompt": "ok", "temperature": ""})).unwrap();
    assert!(result["temperature"].is_null());
}

#[test]
fn union_typed_field_skips_constraints_entirely() {
    let mut properties = HashMap::new();
    properties.insert("prompt".to_string(), FieldSchema::required(FieldType::String));
    properties.insert(
        "payload".to_string(),
        FieldSchema { field_type: FieldType::Union, optional: true, min: Some(10.0), ..Default::default() },
    );
    let schema = ActionSchema { properties };
    let result = validate(&schema, &json!({"prompt": "ok", "payload": 1}));
    assert!(result.is_ok());
}

#[test]
fn from_config_fills_in_missing_field_from_config_subtree() {
    let mut properties = HashMap::new();
    properties.insert(
        "api_key".to_string(),
        FieldSchema { field_type: FieldType::String, from_config: true, ..Default::default() },
    );
    let schema = ActionSchema { properties };
    let result = validate(&schema, &json!({"_config": {"api_key": "secret"}})).unwrap();
    assert_eq!(result["api_key"], json!("secret"));
}
