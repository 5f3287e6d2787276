// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin wrapper tying `sx_condition`'s compiler/cache to the engine's
//! `Context`-shaped JSON root, so step guards and transitions share one
//! compiled-condition cache per engine instance.

use thiserror::Error;

use serde_json::Value as Json;
use sx_condition::ConditionCache;

#[derive(Debug, Error)]
pub enum ConditionError {
    #[error("failed to parse condition: {0}")]
    Parse(#[from] sx_condition::ParseError),
    #[error("failed to evaluate condition: {0}")]
    Eval(#[from] sx_condition::EvalError),
}

pub struct ConditionEngine {
    cache: ConditionCache,
}

impl ConditionEngine {
    pub fn new() -> Self {
        Self { cache: ConditionCache::new() }
    }

    pub fn eval(&self, source: &str, ctx: &Json) -> Result<bool, ConditionError> {
        let compiled = self.cache.compile(source)?;
        Ok(sx_condition::eval(&compiled, ctx)?)
    }
}

impl Default for ConditionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
