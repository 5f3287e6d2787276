// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sx expand` — render a placeholder template against a JSON context,
//! for checking a scenario step's `params` expansion without running
//! the whole engine.

use anyhow::{Context as _, Result};
use clap::Args;
use serde_json::Value as Json;

use sx_expand::{Context, Expander};

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct ExpandArgs {
    /// Placeholder template, e.g. `"hello {user.name|upper}"`.
    pub template: String,

    /// JSON object to expand against. Defaults to `{}`.
    #[arg(long)]
    pub context: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ExpandArgs) -> Result<()> {
    let root: Json = match &args.context {
        Some(raw) => serde_json::from_str(raw).context("--context must be a JSON object")?,
        None => Json::Object(serde_json::Map::new()),
    };
    let ctx = Context::new(root);
    let expander = Expander::new();
    let result = expander.expand_value(&Json::String(args.template), &ctx);
    print_value(args.format, &result);
    Ok(())
}
