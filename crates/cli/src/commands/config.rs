// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sx config check` — parse a settings YAML file and report whether it
//! is well-formed, without starting anything.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use sx_daemon::Settings;

#[derive(Args)]
pub struct ConfigArgs {
    /// Path to a settings YAML file.
    pub path: PathBuf,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let settings = Settings::load(&args.path).context("settings file failed to load")?;
    println!("ok: backup_dir={} tenants_config_path={}", settings.backup_dir, settings.tenants_config_path);
    println!(
        "cache: default_ttl={}s cleanup_interval={}s",
        settings.cache.default_ttl_secs, settings.cache.cleanup_interval_secs
    );
    println!("queues: {}", settings.task_manager.queues.join(", "));
    Ok(())
}
