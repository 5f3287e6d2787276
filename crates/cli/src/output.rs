// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde_json::Value as Json;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a single JSON value in the requested format — `text` unwraps
/// strings/bools/numbers to their bare form, everything else falls back
/// to pretty JSON either way.
pub fn print_value(format: OutputFormat, value: &Json) {
    match (format, value) {
        (OutputFormat::Text, Json::String(s)) => println!("{s}"),
        (OutputFormat::Text, Json::Bool(b)) => println!("{b}"),
        (OutputFormat::Text, Json::Number(n)) => println!("{n}"),
        _ => println!("{}", serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())),
    }
}
