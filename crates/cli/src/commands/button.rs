// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sx button` — normalize callback-button text the way the trigger
//! matcher's callback tiers do, for checking what a `callback.exact`/
//! `callback.contains` trigger would actually match against.

use anyhow::Result;
use clap::Args;
use serde_json::Value as Json;

use sx_engine::button;

use crate::output::{print_value, OutputFormat};

#[derive(Args)]
pub struct ButtonArgs {
    /// Raw callback_data text.
    pub text: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: ButtonArgs) -> Result<()> {
    let normalized = button::normalize(&args.text);
    print_value(args.format, &Json::String(normalized));
    Ok(())
}
