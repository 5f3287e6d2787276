// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

fn ctx() -> Context {
    Context::new(json!({}))
}

#[test]
fn equals_sets_decision_true_on_match() {
    let mut state = EvalState::new(Value::Json(json!("yes")));
    equals(&mut state, Some("yes"), &ctx());
    assert_eq!(state.decision, Some(true));
}

#[test]
fn in_list_checks_membership() {
    let mut state = EvalState::new(Value::Json(json!("b")));
    in_list(&mut state, Some("a, b, c"), &ctx());
    assert_eq!(state.decision, Some(true));

    let mut state = EvalState::new(Value::Json(json!("z")));
    in_list(&mut state, Some("a, b, c"), &ctx());
    assert_eq!(state.decision, Some(false));
}

#[test]
fn exists_false_for_missing() {
    let mut state = EvalState::new(Value::Missing);
    exists(&mut state, None, &ctx());
    assert_eq!(state.decision, Some(false));
}

#[test]
fn is_null_true_for_missing_null_and_empty_string() {
    for v in [Value::Missing, Value::Json(json!(null)), Value::Json(json!(""))] {
        let mut state = EvalState::new(v);
        is_null(&mut state, None, &ctx());
        assert_eq!(state.decision, Some(true));
    }
}

#[test]
fn value_branch_applies_only_when_decision_true() {
    let mut state = EvalState::new(Value::Json(json!("x")));
    state.decision = Some(true);
    value_branch(&mut state, Some("picked"), &ctx());
    assert_eq!(state.value, Value::Json(json!("picked")));
    assert_eq!(state.decision, None);
}

#[test]
fn value_branch_no_op_when_decision_false() {
    let mut state = EvalState::new(Value::Json(json!("x")));
    state.decision = Some(false);
    value_branch(&mut state, Some("picked"), &ctx());
    assert_eq!(state.value, Value::Json(json!("x")));
}

#[test]
fn fallback_replaces_missing_without_a_predicate() {
    let mut state = EvalState::new(Value::Missing);
    fallback_branch(&mut state, Some("default"), &ctx());
    assert_eq!(state.value, Value::Json(json!("default")));
}

#[test]
fn fallback_applies_on_false_decision() {
    let mut state = EvalState::new(Value::Json(json!("x")));
    state.decision = Some(false);
    fallback_branch(&mut state, Some("other"), &ctx());
    assert_eq!(state.value, Value::Json(json!("other")));
}

#[test]
fn ready_reads_pending_handle_shape() {
    let mut state = EvalState::new(Value::Json(json!({"ready": true})));
    ready(&mut state, None, &ctx());
    assert_eq!(state.decision, Some(true));

    let mut state = EvalState::new(Value::Json(json!({"ready": false})));
    not_ready(&mut state, None, &ctx());
    assert_eq!(state.decision, Some(true));
}
