// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn lowercases_and_replaces_spaces_with_underscore() {
    assert_eq!(normalize("Main Menu"), "main_menu");
}

#[test]
fn strips_punctuation() {
    assert_eq!(normalize("Settings!! (beta)"), "settings_beta");
}

#[test]
fn collapses_repeated_separators() {
    assert_eq!(normalize("a   b__c"), "a_b_c");
}

#[test]
fn trims_leading_and_trailing_separators() {
    assert_eq!(normalize("  _hello_  "), "hello");
}

#[test]
fn truncates_to_sixty_characters() {
    let long = "x".repeat(100);
    assert_eq!(normalize(&long).len(), 60);
}

#[test]
fn transliterates_cyrillic_to_ascii() {
    assert_eq!(normalize("Привет"), "privet");
}
