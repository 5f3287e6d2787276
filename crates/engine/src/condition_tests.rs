// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;

use super::*;

#[test]
fn evaluates_a_simple_condition_against_json() {
    let engine = ConditionEngine::new();
    let ctx = json!({"age": 25});
    assert!(engine.eval("$age > 18", &ctx).unwrap());
}

#[test]
fn reuses_the_compiled_condition_across_calls() {
    let engine = ConditionEngine::new();
    let ctx_a = json!({"age": 10});
    let ctx_b = json!({"age": 25});
    assert!(!engine.eval("$age > 18", &ctx_a).unwrap());
    assert!(engine.eval("$age > 18", &ctx_b).unwrap());
}

#[test]
fn parse_errors_surface_as_condition_error() {
    let engine = ConditionEngine::new();
    let err = engine.eval("$age >", &json!({})).unwrap_err();
    assert!(matches!(err, ConditionError::Parse(_)));
}
