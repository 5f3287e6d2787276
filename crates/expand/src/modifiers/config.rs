// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config-lookup modifier: when a validator schema marks a field
//! `from_config: true`, the expander tries `data.<field>` first, then
//! `data._config.<field>` (§4.2).

use std::collections::HashMap;

use super::{EvalState, ModifierFn, ModifierOutcome};
use crate::context::Context;

pub fn register(map: &mut HashMap<&'static str, ModifierFn>) {
    map.insert("config", config);
}

/// `{field|config}` resolves `field`'s value with the `data.<field>` /
/// `data._config.<field>` fallback, overriding whatever the bare path
/// lookup already produced.
fn config(state: &mut EvalState, arg: Option<&str>, ctx: &Context) -> ModifierOutcome {
    let Some(field) = arg else { return ModifierOutcome::TypeMismatch };
    state.value = ctx.resolve_config(field);
    ModifierOutcome::Applied
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
