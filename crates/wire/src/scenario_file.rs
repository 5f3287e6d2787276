// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk scenario file shapes (YAML) and the trait-only loader that
//! turns a tenant's scenario directory into parsed `sx_core::Scenario`
//! values. Deserialization structs are real; the filesystem walk and
//! the git-backed repo sync are out of scope here.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use sx_core::SxError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerFile {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub callback_data: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepFile {
    pub name: String,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub send: Option<Json>,
    #[serde(default)]
    pub transitions: Vec<TransitionFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionFile {
    #[serde(default)]
    pub condition: Option<String>,
    pub next: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub key: String,
    #[serde(default)]
    pub triggers: Vec<TriggerFile>,
    pub steps: Vec<StepFile>,
}

/// Loads and parses every scenario file for a tenant. Out of scope: the
/// actual filesystem/git sync that populates the directory this reads.
pub trait ScenarioFileParser: Send + Sync {
    fn parse_one(&self, raw_yaml: &str) -> Result<ScenarioFile, SxError>;
    fn load_all(&self, tenant_dir: &str) -> Result<Vec<ScenarioFile>, SxError>;
}

#[cfg(test)]
#[path = "scenario_file_tests.rs"]
mod tests;
