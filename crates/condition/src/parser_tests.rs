// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::ast::{CompareOp, Condition, Literal, Operand};

#[test]
fn parses_simple_equality() {
    let cond = parse("$status == 'active'").unwrap();
    assert_eq!(
        cond,
        Condition::Compare {
            lhs: Operand::Path("status".to_string()),
            op: CompareOp::Eq,
            rhs: Operand::Literal(Literal::Str("active".to_string())),
        }
    );
}

#[test]
fn and_binds_tighter_than_or() {
    let cond = parse("$a == 1 or $b == 2 and $c == 3").unwrap();
    match cond {
        Condition::Or(lhs, rhs) => {
            assert!(matches!(*lhs, Condition::Compare { .. }));
            assert!(matches!(*rhs, Condition::And(_, _)));
        }
        other => panic!("expected Or at the top, got {other:?}"),
    }
}

#[test]
fn not_wraps_the_whole_following_comparison() {
    let cond = parse("not $a == 1").unwrap();
    match cond {
        Condition::Not(inner) => assert!(matches!(*inner, Condition::Compare { .. })),
        other => panic!("expected Not at the top, got {other:?}"),
    }
}

#[test]
fn not_and_or_compose_left_to_right() {
    let cond = parse("not $a == 1 and $b == 2").unwrap();
    match cond {
        Condition::And(lhs, rhs) => {
            assert!(matches!(*lhs, Condition::Not(_)));
            assert!(matches!(*rhs, Condition::Compare { .. }));
        }
        other => panic!("expected And at the top, got {other:?}"),
    }
}

#[test]
fn parens_group_or_inside_and() {
    let cond = parse("$a == 1 and ($b == 2 or $c == 3)").unwrap();
    match cond {
        Condition::And(_, rhs) => assert!(matches!(*rhs, Condition::Or(_, _))),
        other => panic!("expected And at the top, got {other:?}"),
    }
}

#[test]
fn not_in_parses_as_single_operator() {
    let cond = parse("$tag not in ['a', 'b']").unwrap();
    match cond {
        Condition::Compare { op: CompareOp::NotIn, rhs: Operand::Literal(Literal::List(items)), .. } => {
            assert_eq!(items.len(), 2);
        }
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn not_is_null_parses_as_negated_is_null() {
    let cond = parse("$x not is_null").unwrap();
    assert_eq!(cond, Condition::IsNull { operand: Operand::Path("x".to_string()), negate: true });
}

#[test]
fn bareword_booleans_and_none_classify() {
    let cond = parse("$flag == True").unwrap();
    assert_eq!(
        cond,
        Condition::Compare {
            lhs: Operand::Path("flag".to_string()),
            op: CompareOp::Eq,
            rhs: Operand::Literal(Literal::Bool(true)),
        }
    );
}

#[test]
fn bareword_date_fragment_stays_a_string() {
    let cond = parse("$created == 02.12.2012").unwrap();
    match cond {
        Condition::Compare { rhs: Operand::Literal(Literal::Str(s)), .. } => assert_eq!(s, "02.12.2012"),
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn regex_operator_takes_a_pattern_operand() {
    let cond = parse("$name regex '^ada'").unwrap();
    assert_eq!(
        cond,
        Condition::Compare {
            lhs: Operand::Path("name".to_string()),
            op: CompareOp::Regex,
            rhs: Operand::Literal(Literal::Str("^ada".to_string())),
        }
    );
}

#[test]
fn trailing_garbage_is_a_parse_error() {
    assert!(parse("$a == 1 $b").is_err());
}
