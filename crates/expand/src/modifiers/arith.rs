// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Arithmetic modifiers: `+N`, `-N`, `*N`, `/N`, `%N`. The operand may
//! itself have been a placeholder — by the time it reaches here it is
//! already expanded to plain text.

use std::collections::HashMap;

use serde_json::{Number, Value as Json};

use super::{EvalState, ModifierFn, ModifierOutcome};
use crate::context::Context;
use sx_core::value::Value;

pub fn register(map: &mut HashMap<&'static str, ModifierFn>) {
    map.insert("+", add);
    map.insert("-", sub);
    map.insert("*", mul);
    map.insert("/", div);
    map.insert("%", rem);
}

fn is_int_literal(value: &Value, operand_text: &str) -> bool {
    let value_is_int = matches!(value.as_json(), Some(Json::Number(n)) if n.is_i64() || n.is_u64());
    value_is_int && !operand_text.contains('.')
}

fn apply(
    state: &mut EvalState,
    arg: Option<&str>,
    op: fn(f64, f64) -> Option<f64>,
) -> ModifierOutcome {
    let Some(operand_text) = arg else { return ModifierOutcome::TypeMismatch };
    let Some(lhs) = state.value.as_f64() else { return ModifierOutcome::TypeMismatch };
    let Ok(rhs) = operand_text.trim().parse::<f64>() else {
        return ModifierOutcome::TypeMismatch;
    };
    let Some(result) = op(lhs, rhs) else { return ModifierOutcome::TypeMismatch };

    let number = if is_int_literal(&state.value, operand_text) && result.fract() == 0.0 {
        Number::from(result as i64)
    } else {
        match Number::from_f64(result) {
            Some(n) => n,
            None => return ModifierOutcome::TypeMismatch,
        }
    };
    state.value = Value::Json(Json::Number(number));
    ModifierOutcome::Applied
}

fn add(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    apply(state, arg, |a, b| Some(a + b))
}

fn sub(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    apply(state, arg, |a, b| Some(a - b))
}

fn mul(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    apply(state, arg, |a, b| Some(a * b))
}

fn div(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    apply(state, arg, |a, b| if b == 0.0 { None } else { Some(a / b) })
}

fn rem(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    apply(state, arg, |a, b| if b == 0.0 { None } else { Some(a % b) })
}

#[cfg(test)]
#[path = "arith_tests.rs"]
mod tests;
