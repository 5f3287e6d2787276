// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::json;

use crate::parser::parse;

use super::eval;

fn check(expr: &str, ctx: &serde_json::Value) -> bool {
    let cond = parse(expr).unwrap();
    eval(&cond, ctx).unwrap()
}

#[test]
fn string_equality() {
    assert!(check("$status == 'active'", &json!({"status": "active"})));
    assert!(!check("$status == 'active'", &json!({"status": "idle"})));
}

#[test]
fn numeric_string_coercion_on_equality() {
    assert!(check("$count == 5", &json!({"count": "5"})));
    assert!(check("$count == '5'", &json!({"count": 5})));
}

#[test]
fn missing_field_equality_and_inequality() {
    assert!(!check("$missing == 'x'", &json!({})));
    assert!(check("$missing != 'x'", &json!({})));
}

#[test]
fn missing_field_equals_none_is_true() {
    assert!(check("$missing == None", &json!({})));
}

#[test]
fn missing_field_ordered_comparison_is_false() {
    assert!(!check("$missing > 5", &json!({})));
}

#[test]
fn is_null_true_for_missing_null_and_empty_string() {
    assert!(check("$a is_null", &json!({})));
    assert!(check("$a is_null", &json!({"a": null})));
    assert!(check("$a is_null", &json!({"a": ""})));
    assert!(!check("$a is_null", &json!({"a": "x"})));
}

#[test]
fn not_is_null_negates() {
    assert!(check("$a not is_null", &json!({"a": "x"})));
    assert!(!check("$a not is_null", &json!({})));
}

#[test]
fn in_list_membership() {
    assert!(check("$role in ['admin', 'owner']", &json!({"role": "owner"})));
    assert!(!check("$role in ['admin', 'owner']", &json!({"role": "guest"})));
    assert!(!check("$role in ['admin', 'owner']", &json!({})));
}

#[test]
fn not_in_negates_membership() {
    assert!(check("$role not in ['admin']", &json!({"role": "guest"})));
}

#[test]
fn contains_and_not_contains() {
    assert!(check("$name ~ 'da'", &json!({"name": "ada"})));
    assert!(check("$name !~ 'zz'", &json!({"name": "ada"})));
}

#[test]
fn regex_operator_matches_pattern() {
    assert!(check("$name regex '^ad.$'", &json!({"name": "ada"})));
    assert!(!check("$name regex '^zz.$'", &json!({"name": "ada"})));
}

#[test]
fn and_or_not_compose() {
    let ctx = json!({"a": 1, "b": 2});
    assert!(check("$a == 1 and $b == 2", &ctx));
    assert!(check("$a == 9 or $b == 2", &ctx));
    assert!(check("not $a == 9", &ctx));
}

#[test]
fn array_index_out_of_range_is_missing() {
    let ctx = json!({"items": ["a", "b"]});
    assert!(check("$items[5] == None", &ctx));
    assert!(check("$items[-5] == None", &ctx));
}

#[test]
fn ordered_comparisons_are_numeric_when_possible() {
    let ctx = json!({"score": 10});
    assert!(check("$score > 5", &ctx));
    assert!(check("$score < 20", &ctx));
    assert!(check("$score >= 10", &ctx));
    assert!(check("$score <= 10", &ctx));
}
