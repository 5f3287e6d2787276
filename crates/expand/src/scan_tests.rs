// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn plain_literal_has_no_placeholders() {
    assert_eq!(scan("hello world"), vec![Span::Literal("hello world".to_string())]);
}

#[test]
fn single_placeholder() {
    assert_eq!(
        scan("{user.name}"),
        vec![Span::Placeholder("user.name".to_string())]
    );
}

#[test]
fn placeholder_embedded_in_text() {
    assert_eq!(
        scan("hi {user.name}!"),
        vec![
            Span::Literal("hi ".to_string()),
            Span::Placeholder("user.name".to_string()),
            Span::Literal("!".to_string()),
        ]
    );
}

#[test]
fn nested_placeholder_in_modifier_arg() {
    let spans = scan("{value|shift:{offset}}");
    assert_eq!(spans, vec![Span::Placeholder("value|shift:{offset}".to_string())]);
}

#[test]
fn brace_inside_quoted_literal_does_not_close_early() {
    let spans = scan("{'a}b'|upper}");
    assert_eq!(spans, vec![Span::Placeholder("'a}b'|upper".to_string())]);
}

#[test]
fn unterminated_brace_is_literal() {
    assert_eq!(scan("broken {oops"), vec![Span::Literal("broken {oops".to_string())]);
}

#[test]
fn multiple_placeholders() {
    let spans = scan("{a} and {b}");
    assert_eq!(
        spans,
        vec![
            Span::Placeholder("a".to_string()),
            Span::Literal(" and ".to_string()),
            Span::Placeholder("b".to_string()),
        ]
    );
}
