// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sx`: a thin operator CLI for the pieces of the scenario engine that
//! run standalone, without a daemon connection — expanding a placeholder
//! template, evaluating a condition expression, normalizing callback
//! text, and sanity-checking a settings file. Anything that needs a live
//! daemon (scenario reload, tenant status) is out of scope until a real
//! IPC transport exists (`sx-wire::WebhookServer` and friends are still
//! trait stubs).

mod commands;
mod output;

use clap::{Parser, Subcommand};

use commands::{button, condition, config, expand};

#[derive(Parser)]
#[command(name = "sx", version, about = "Scenario engine operator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expand a placeholder template against a JSON context.
    Expand(expand::ExpandArgs),
    /// Evaluate a condition expression against a JSON context.
    Condition(condition::ConditionArgs),
    /// Normalize callback-button text the way the trigger matcher does.
    Button(button::ButtonArgs),
    /// Parse and sanity-check a settings YAML file.
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Expand(args) => expand::run(args),
        Command::Condition(args) => condition::run(args),
        Command::Button(args) => button::run(args),
        Command::Config(args) => config::run(args),
    }
}
