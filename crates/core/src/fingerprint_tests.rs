// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn same_input_same_fingerprint() {
    assert_eq!(fingerprint("{user.name|upper}"), fingerprint("{user.name|upper}"));
}

#[test]
fn different_input_different_fingerprint() {
    assert_ne!(fingerprint("{user.name|upper}"), fingerprint("{user.name|lower}"));
}

#[test]
fn empty_string_is_stable() {
    assert_eq!(fingerprint(""), fingerprint(""));
}
