// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sx condition` — evaluate a condition expression against a JSON
//! context, for checking a scenario step's `guard_condition` in
//! isolation.

use anyhow::{Context as _, Result};
use clap::Args;
use serde_json::Value as Json;

use sx_engine::condition::ConditionEngine;

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct ConditionArgs {
    /// Condition source, e.g. `"$age > 18 and $country == 'US'"`.
    pub expression: String,

    /// JSON object to evaluate against. Defaults to `{}`.
    #[arg(long)]
    pub context: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ConditionArgs) -> Result<()> {
    let ctx: Json = match &args.context {
        Some(raw) => serde_json::from_str(raw).context("--context must be a JSON object")?,
        None => Json::Object(serde_json::Map::new()),
    };
    let engine = ConditionEngine::new();
    let result = engine.eval(&args.expression, &ctx).context("failed to evaluate condition")?;
    print_value(args.format, &Json::Bool(result));
    Ok(())
}
