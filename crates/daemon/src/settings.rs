// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! YAML settings loader. `${NAME}` placeholders are substituted from the
//! process environment before the document is parsed; a placeholder with
//! no matching environment variable is left as-is and logged, not fatal —
//! the same posture as `oj-runbook::template`'s `${VAR:-default}`
//! expansion, adapted here for settings files rather than shell commands.

use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use sx_core::SxError;

#[allow(clippy::expect_used)]
static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("constant regex pattern is valid"));

fn substitute_env(raw: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(raw, |caps: &regex::Captures| {
            let name = &caps[1];
            match std::env::var(name) {
                Ok(value) => value,
                Err(_) => {
                    warn!(%name, "settings file references an unset environment variable");
                    caps[0].to_string()
                }
            }
        })
        .to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShutdownSettings {
    #[serde(default = "default_plugin_timeout_secs")]
    pub plugin_timeout_secs: u64,
}

fn default_plugin_timeout_secs() -> u64 {
    10
}

impl ShutdownSettings {
    pub fn plugin_timeout(&self) -> Duration {
        Duration::from_secs(self.plugin_timeout_secs)
    }
}

impl Default for ShutdownSettings {
    fn default() -> Self {
        Self { plugin_timeout_secs: default_plugin_timeout_secs() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
    #[serde(default = "default_cleanup_sample_size")]
    pub cleanup_sample_size: usize,
    #[serde(default = "default_cleanup_expired_threshold")]
    pub cleanup_expired_threshold: f64,
}

fn default_ttl_secs() -> u64 {
    3600
}
fn default_cleanup_interval_secs() -> u64 {
    60
}
fn default_cleanup_sample_size() -> usize {
    50
}
fn default_cleanup_expired_threshold() -> f64 {
    0.25
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_ttl_secs: default_ttl_secs(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
            cleanup_sample_size: default_cleanup_sample_size(),
            cleanup_expired_threshold: default_cleanup_expired_threshold(),
        }
    }
}

impl From<&CacheSettings> for sx_cache::CacheManagerConfig {
    fn from(settings: &CacheSettings) -> Self {
        sx_cache::CacheManagerConfig {
            default_ttl: Duration::from_secs(settings.default_ttl_secs),
            sampler: sx_cache::SamplerConfig {
                interval: Duration::from_secs(settings.cleanup_interval_secs),
                sample_size: settings.cleanup_sample_size,
                expired_threshold: settings.cleanup_expired_threshold,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaskManagerSettings {
    pub queues: Vec<String>,
    #[serde(default = "default_task_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

fn default_task_shutdown_timeout_secs() -> u64 {
    10
}

impl Default for TaskManagerSettings {
    fn default() -> Self {
        Self { queues: vec!["default".to_string()], shutdown_timeout_secs: default_task_shutdown_timeout_secs() }
    }
}

/// Top-level settings document (§4.5/§4.6 config, plus shutdown/backup).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub shutdown: ShutdownSettings,
    pub backup_dir: String,
    pub tenants_config_path: String,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub task_manager: TaskManagerSettings,
}

impl Settings {
    pub fn from_yaml_str(raw: &str) -> Result<Self, SxError> {
        let substituted = substitute_env(raw);
        serde_yaml::from_str(&substituted).map_err(|err| SxError::Parse(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, SxError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| SxError::Config(format!("failed to read settings file {}: {err}", path.display())))?;
        Self::from_yaml_str(&raw)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
