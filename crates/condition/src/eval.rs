// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluates a compiled [`Condition`] against a [`ContextLookup`],
//! applying the type-coercion and missing-field rules.

use regex::Regex;
use serde_json::Value as Json;

use sx_core::value::{resolve_path, Value};

use crate::ast::{CompareOp, Condition, Literal, Operand};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EvalError {
    #[error("invalid regex pattern: {0}")]
    BadRegex(String),
}

/// Anything a condition can read operands from. Implemented for
/// [`sx_core::Event`] and for plain merged context maps so the same
/// evaluator serves scenario guards and ad-hoc lookups alike.
pub trait ContextLookup {
    fn lookup(&self, path: &str) -> Value;
}

impl ContextLookup for Json {
    fn lookup(&self, path: &str) -> Value {
        resolve_path(self, path)
    }
}

impl ContextLookup for sx_core::Event {
    fn lookup(&self, path: &str) -> Value {
        self.resolve(path)
    }
}

pub fn eval(condition: &Condition, ctx: &dyn ContextLookup) -> Result<bool, EvalError> {
    match condition {
        Condition::Or(lhs, rhs) => Ok(eval(lhs, ctx)? || eval(rhs, ctx)?),
        Condition::And(lhs, rhs) => Ok(eval(lhs, ctx)? && eval(rhs, ctx)?),
        Condition::Not(inner) => Ok(!eval(inner, ctx)?),
        Condition::IsNull { operand, negate } => {
            let value = resolve_operand(operand, ctx);
            let is_null = value.is_null_ish();
            Ok(if *negate { !is_null } else { is_null })
        }
        Condition::Compare { lhs, op, rhs } => eval_compare(lhs, *op, rhs, ctx),
    }
}

fn resolve_operand(operand: &Operand, ctx: &dyn ContextLookup) -> Value {
    match operand {
        Operand::Path(path) => ctx.lookup(path),
        Operand::Literal(lit) => literal_to_value(lit),
    }
}

fn literal_to_value(lit: &Literal) -> Value {
    match lit {
        Literal::Str(s) => Value::Json(Json::String(s.clone())),
        Literal::Num(n) => Value::Json(serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number)),
        Literal::Bool(b) => Value::Json(Json::Bool(*b)),
        Literal::None => Value::null(),
        Literal::List(items) => Value::Json(Json::Array(items.iter().map(literal_to_json).collect())),
    }
}

fn literal_to_json(lit: &Literal) -> Json {
    match literal_to_value(lit) {
        Value::Missing => Json::Null,
        Value::Json(j) => j,
    }
}

fn eval_compare(lhs: &Operand, op: CompareOp, rhs: &Operand, ctx: &dyn ContextLookup) -> Result<bool, EvalError> {
    let lhs_missing = matches!(lhs, Operand::Path(p) if ctx.lookup(p).is_missing());
    let left = resolve_operand(lhs, ctx);

    if lhs_missing {
        return Ok(missing_lhs_result(op, rhs));
    }

    match op {
        CompareOp::Eq => Ok(compare_eq(&left, &resolve_operand(rhs, ctx))),
        CompareOp::Ne => Ok(!compare_eq(&left, &resolve_operand(rhs, ctx))),
        CompareOp::Gt | CompareOp::Lt | CompareOp::Ge | CompareOp::Le => {
            Ok(compare_ordered(op, &left, &resolve_operand(rhs, ctx)))
        }
        CompareOp::Contains => Ok(left.to_display_string().contains(&resolve_operand(rhs, ctx).to_display_string())),
        CompareOp::NotContains => {
            Ok(!left.to_display_string().contains(&resolve_operand(rhs, ctx).to_display_string()))
        }
        CompareOp::Regex => {
            let Operand::Literal(Literal::Str(pattern)) = rhs else {
                return Err(EvalError::BadRegex("regex operand must be a string literal".to_string()));
            };
            let re = Regex::new(pattern).map_err(|e| EvalError::BadRegex(e.to_string()))?;
            Ok(re.is_match(&left.to_display_string()))
        }
        CompareOp::In => Ok(list_membership(&left, rhs)),
        CompareOp::NotIn => Ok(!list_membership(&left, rhs)),
    }
}

fn missing_lhs_result(op: CompareOp, rhs: &Operand) -> bool {
    match op {
        CompareOp::Ne => true,
        CompareOp::Eq => matches!(rhs, Operand::Literal(Literal::None)),
        _ => false,
    }
}

fn list_membership(left: &Value, rhs: &Operand) -> bool {
    let Operand::Literal(Literal::List(items)) = rhs else { return false };
    let current = left.to_display_string();
    items.iter().any(|item| literal_to_value(item).to_display_string() == current)
}

fn compare_eq(lhs: &Value, rhs: &Value) -> bool {
    if matches!(rhs, Value::Missing) || rhs.as_json() == Some(&Json::Null) {
        return lhs.is_null_ish();
    }
    if let (Some(l), Some(r)) = (numeric_of(lhs), numeric_of(rhs)) {
        return l == r;
    }
    lhs.to_display_string() == rhs.to_display_string()
}

fn compare_ordered(op: CompareOp, lhs: &Value, rhs: &Value) -> bool {
    let (Some(l), Some(r)) = (numeric_of(lhs), numeric_of(rhs)) else {
        return match op {
            CompareOp::Gt => lhs.to_display_string() > rhs.to_display_string(),
            CompareOp::Lt => lhs.to_display_string() < rhs.to_display_string(),
            CompareOp::Ge => lhs.to_display_string() >= rhs.to_display_string(),
            CompareOp::Le => lhs.to_display_string() <= rhs.to_display_string(),
            _ => false,
        };
    };
    match op {
        CompareOp::Gt => l > r,
        CompareOp::Lt => l < r,
        CompareOp::Ge => l >= r,
        CompareOp::Le => l <= r,
        _ => false,
    }
}

fn numeric_of(value: &Value) -> Option<f64> {
    value.as_f64()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
