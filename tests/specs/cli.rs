// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box checks against the built `sx` binary.

use assert_cmd::Command;

fn sx() -> Command {
    Command::cargo_bin("sx").expect("sx binary should build")
}

#[test]
fn button_normalizes_callback_text() {
    sx()
        .args(["button", "  Hello, World!!  "])
        .assert()
        .success()
        .stdout("hello_world\n");
}

#[test]
fn expand_renders_a_placeholder_against_context() {
    sx()
        .args(["expand", "hi {name}", "--context", r#"{"name": "ada"}"#])
        .assert()
        .success()
        .stdout("hi ada\n");
}

#[test]
fn condition_evaluates_against_context() {
    sx()
        .args(["condition", "$age > 18", "--context", r#"{"age": 25}"#])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn condition_parse_error_exits_nonzero() {
    sx().args(["condition", "$age >"]).assert().failure();
}

#[test]
fn config_check_reports_a_missing_file() {
    sx().args(["config", "/no/such/settings.yaml"]).assert().failure();
}
