// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The expander: compiles templates, walks the evaluation rules from
//! §4.2, and recurses over the JSON shapes (`strings`, `mappings`,
//! `sequences`) that step params are made of.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value as Json};

use sx_core::fingerprint;
use sx_core::value::Value;

use crate::ast::{parse_placeholder, parse_template, Piece, Placeholder, Source, Template};
use crate::context::Context;
use crate::modifiers::{self, EvalState, ModifierFn, ModifierOutcome};

/// Compiles and evaluates placeholders over a [`Context`]. Cheap to
/// construct; holds its own template cache, so share one `Expander`
/// across calls that reuse the same templates (e.g. one per tenant's
/// scenario index) rather than building a fresh one per step.
pub struct Expander {
    registry: HashMap<&'static str, ModifierFn>,
    cache: RwLock<HashMap<u64, Arc<Template>>>,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new()
    }
}

impl Expander {
    pub fn new() -> Self {
        Self { registry: modifiers::registry(), cache: RwLock::new(HashMap::new()) }
    }

    fn compile(&self, template_str: &str) -> Arc<Template> {
        let hash = fingerprint(template_str);
        if let Some(cached) = self.cache.read().get(&hash) {
            return cached.clone();
        }
        let compiled = Arc::new(parse_template(template_str));
        self.cache.write().insert(hash, compiled.clone());
        compiled
    }

    /// Recursively expand placeholders through a JSON value: strings are
    /// rendered through the template pipeline (rule 5's type-inference
    /// pass applies when the whole string is one placeholder), arrays
    /// and objects recurse, with `expand` splicing (rule 6) applied as a
    /// post-pass over array elements.
    pub fn expand_value(&self, value: &Json, ctx: &Context) -> Json {
        match value {
            Json::String(s) => self.expand_string(s, ctx),
            Json::Array(items) => self.expand_array(items, ctx),
            Json::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), self.expand_value(v, ctx));
                }
                Json::Object(out)
            }
            other => other.clone(),
        }
    }

    fn expand_string(&self, s: &str, ctx: &Context) -> Json {
        let template = self.compile(s);
        if template.is_single_placeholder() {
            if let Piece::Placeholder(ph) = &template.pieces[0] {
                let value = self.eval_placeholder(ph, ctx);
                return match value {
                    Value::Missing => Json::String(ph.raw.clone()),
                    Value::Json(j) => infer_type(j),
                };
            }
        }
        Json::String(render_pieces(&template.pieces, ctx, &self.registry))
    }

    fn expand_array(&self, items: &[Json], ctx: &Context) -> Json {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if let Json::String(s) = item {
                let template = self.compile(s);
                if template.is_single_placeholder() {
                    if let Piece::Placeholder(ph) = &template.pieces[0] {
                        if ph.modifiers.last().is_some_and(|m| m.name == "expand") {
                            let value = self.eval_placeholder(ph, ctx);
                            if let Value::Json(Json::Array(children)) = value {
                                out.extend(children);
                                continue;
                            }
                        }
                    }
                }
            }
            out.push(self.expand_value(item, ctx));
        }
        Json::Array(out)
    }

    fn eval_placeholder(&self, ph: &Placeholder, ctx: &Context) -> Value {
        eval_placeholder_with(ph, ctx, &self.registry)
    }
}

fn eval_placeholder_with(
    ph: &Placeholder,
    ctx: &Context,
    registry: &HashMap<&'static str, ModifierFn>,
) -> Value {
    let mut state = EvalState::new(match &ph.source {
        Source::Path(path) => ctx.resolve(path),
        Source::Literal(text) => Value::Json(Json::String(text.clone())),
    });
    for call in &ph.modifiers {
        // `value:`/`fallback:` take a nested *source* (their own
        // placeholder grammar, quoted literal or path), not pre-expanded
        // template text, so they parse their own argument.
        let pre_expand = !matches!(call.name.as_str(), "value" | "fallback");
        let arg = call.arg.as_ref().map(|raw_arg| {
            if pre_expand {
                expand_template(&parse_template(raw_arg), ctx)
            } else {
                raw_arg.clone()
            }
        });
        match registry.get(call.name.as_str()) {
            Some(apply) => {
                if apply(&mut state, arg.as_deref(), ctx) == ModifierOutcome::TypeMismatch {
                    tracing::warn!(modifier = %call.name, "placeholder modifier got an incompatible operand");
                }
            }
            None => tracing::warn!(modifier = %call.name, "unknown placeholder modifier"),
        }
    }
    state.value
}

fn render_pieces(pieces: &[Piece], ctx: &Context, registry: &HashMap<&'static str, ModifierFn>) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Placeholder(ph) => match eval_placeholder_with(ph, ctx, registry) {
                Value::Missing => out.push_str(&ph.raw),
                value => out.push_str(&value.to_display_string()),
            },
        }
    }
    out
}

/// Render a template to a plain string, applying the full modifier
/// chain. Used for nested placeholder arguments (`shift:{offset}`) and
/// the `value:`/`fallback:` conditional branches, which only ever need
/// string output rather than the top-level type-inference pass.
pub fn expand_template(template: &Template, ctx: &Context) -> String {
    let registry = modifiers::registry();
    render_pieces(&template.pieces, ctx, &registry)
}

/// Also used directly by callers that already have a raw modifier
/// argument string and want it parsed and expanded in one step.
pub fn expand_placeholder_text(body: &str, ctx: &Context) -> Value {
    let registry = modifiers::registry();
    eval_placeholder_with(&parse_placeholder(body), ctx, &registry)
}

/// Type-inference pass (rule 5): pure-numeric/boolean strings become
/// `int`/`float`/`bool` when the placeholder comprised the entire
/// enclosing string. Non-string JSON values pass through unchanged.
fn infer_type(value: Json) -> Json {
    let Json::String(s) = &value else { return value };
    let trimmed = s.trim();
    match trimmed {
        "true" => return Json::Bool(true),
        "false" => return Json::Bool(false),
        _ => {}
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Json::Number(i.into());
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Json::Number(n);
        }
    }
    value
}

#[cfg(test)]
#[path = "expander_tests.rs"]
mod tests;
