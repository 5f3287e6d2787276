// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sx-condition: the boolean expression language scenario triggers and
//! step guards are written in.
//!
//! Compiles a condition string into a [`Condition`] tree once, caches the
//! compiled form by a hash of the source, and evaluates it against
//! anything implementing [`ContextLookup`].

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;

pub use ast::{CompareOp, Condition, Literal, Operand};
pub use eval::{eval, ContextLookup, EvalError};
pub use parser::{parse, ParseError};

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use sx_core::fingerprint;

/// Compiles and caches conditions by a hash of their source text, mirroring
/// `sx-expand`'s template cache so both crates share the same "compiled
/// form keyed by fingerprint" pattern.
#[derive(Default)]
pub struct ConditionCache {
    cache: RwLock<HashMap<u64, Arc<Condition>>>,
}

impl ConditionCache {
    pub fn new() -> Self {
        Self { cache: RwLock::new(HashMap::new()) }
    }

    pub fn compile(&self, source: &str) -> Result<Arc<Condition>, ParseError> {
        let hash = fingerprint(source);
        if let Some(cached) = self.cache.read().get(&hash) {
            return Ok(cached.clone());
        }
        let compiled = Arc::new(parse(source)?);
        self.cache.write().insert(hash, compiled.clone());
        Ok(compiled)
    }
}

/// One trigger entry as `build_condition` consumes it: a field map plus an
/// optional free-form `condition` substring, combined as
/// `($k1 == 'v1' and $k2 == v2 and <condition>)`.
pub struct FieldMap<'a> {
    pub fields: &'a [(&'a str, &'a str)],
    pub condition: Option<&'a str>,
}

/// Builds the canonical OR-of-ANDs expression string from a list of field
/// maps, each optionally carrying its own free-form condition substring —
/// one AND-clause per list entry, joined with `or` across entries.
pub fn build_condition(configs: &[FieldMap<'_>]) -> String {
    let clauses: Vec<String> = configs
        .iter()
        .map(|cfg| {
            let mut parts: Vec<String> =
                cfg.fields.iter().map(|(k, v)| format!("${k} == '{v}'")).collect();
            if let Some(extra) = cfg.condition {
                if !extra.is_empty() {
                    parts.push(extra.to_string());
                }
            }
            format!("({})", parts.join(" and "))
        })
        .collect();
    clauses.join(" or ")
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
