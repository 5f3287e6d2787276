// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn plain_path_source() {
    let ph = parse_placeholder("user.name");
    assert_eq!(ph.source, Source::Path("user.name".to_string()));
    assert!(ph.modifiers.is_empty());
}

#[test]
fn quoted_literal_source_unescapes() {
    let ph = parse_placeholder(r#"'it\'s here'"#);
    assert_eq!(ph.source, Source::Literal("it's here".to_string()));
}

#[test]
fn double_quoted_literal() {
    let ph = parse_placeholder(r#""hello""#);
    assert_eq!(ph.source, Source::Literal("hello".to_string()));
}

#[test]
fn modifier_chain_with_args() {
    let ph = parse_placeholder("value|truncate:10|upper");
    assert_eq!(ph.source, Source::Path("value".to_string()));
    assert_eq!(
        ph.modifiers,
        vec![
            ModifierCall { name: "truncate".to_string(), arg: Some("10".to_string()) },
            ModifierCall { name: "upper".to_string(), arg: None },
        ]
    );
}

#[test]
fn modifier_arg_with_nested_placeholder_stays_intact() {
    let ph = parse_placeholder("value|shift:{offset}");
    assert_eq!(ph.modifiers[0].arg.as_deref(), Some("{offset}"));
}

#[test]
fn modifier_arg_keeps_remaining_colons() {
    let ph = parse_placeholder("value|format:pg_datetime");
    assert_eq!(ph.modifiers[0].name, "format");
    assert_eq!(ph.modifiers[0].arg.as_deref(), Some("pg_datetime"));
}

#[test]
fn arithmetic_modifier_keeps_operator_and_operand() {
    let ph = parse_placeholder("value|+5");
    assert_eq!(
        ph.modifiers[0],
        ModifierCall { name: "+".to_string(), arg: Some("5".to_string()) }
    );
    let ph = parse_placeholder("value|*2");
    assert_eq!(ph.modifiers[0], ModifierCall { name: "*".to_string(), arg: Some("2".to_string()) });
}

#[test]
fn array_index_path_parses_as_path_not_literal() {
    let ph = parse_placeholder("items[-1]");
    assert_eq!(ph.source, Source::Path("items[-1]".to_string()));
}

#[test]
fn template_single_placeholder_detection() {
    let t = parse_template("{value}");
    assert!(t.is_single_placeholder());
    let t2 = parse_template("prefix {value}");
    assert!(!t2.is_single_placeholder());
}
