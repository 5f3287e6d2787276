// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action input validation (§4.7), grounded on the `action_validator`
//! test suite: required fields are enforced unconditionally, optional
//! fields' type/constraint checks are advisory (a violation never fails
//! validation), union-typed fields skip constraint enforcement
//! entirely, and `from_config`-flagged fields fall back to `_config.*`.

use std::collections::HashMap;

use serde_json::{Map, Value as Json};
use sx_core::SxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Bool,
    Array,
    Object,
    /// Accepts any JSON type; constraint enforcement is always skipped.
    Union,
}

#[derive(Debug, Clone, Default)]
pub struct FieldSchema {
    pub field_type: FieldType,
    pub optional: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub enum_values: Option<Vec<Json>>,
    pub pattern: Option<regex::Regex>,
    pub from_config: bool,
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::String
    }
}

impl FieldSchema {
    pub fn required(field_type: FieldType) -> Self {
        Self { field_type, ..Default::default() }
    }

    pub fn optional(field_type: FieldType) -> Self {
        Self { field_type, optional: true, ..Default::default() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionSchema {
    pub properties: HashMap<String, FieldSchema>,
}

/// Validates and normalizes `data` against `schema`, returning the
/// (possibly rewritten) input map or a validation error.
pub fn validate(schema: &ActionSchema, data: &Json) -> Result<Map<String, Json>, SxError> {
    let mut out = match data {
        Json::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for (name, field) in &schema.properties {
        // Step 3: from_config fallback.
        if field.from_config && !out.contains_key(name) {
            if let Some(config) = out.get("_config").and_then(Json::as_object) {
                if let Some(value) = config.get(name) {
                    out.insert(name.clone(), value.clone());
                }
            }
        }

        // Step 4: empty-string-to-None for optional non-string fields.
        if field.optional && field.field_type != FieldType::String && field.field_type != FieldType::Union {
            if matches!(out.get(name), Some(Json::String(s)) if s.is_empty()) {
                out.insert(name.clone(), Json::Null);
            }
        }

        let value = out.get(name).cloned().unwrap_or(Json::Null);
        let present = out.contains_key(name) && !value.is_null();

        if !present {
            if !field.optional {
                return Err(SxError::Validation(format!("missing required field '{name}'")));
            }
            continue;
        }

        if field.field_type == FieldType::Union {
            continue;
        }

        if !type_matches(field.field_type, &value) {
            if !field.optional {
                return Err(SxError::Validation(format!("field '{name}' has the wrong type")));
            }
            continue;
        }

        // Step 5: constraints are advisory on optional fields.
        if let Err(err) = check_constraints(name, field, &value) {
            if !field.optional {
                return Err(err);
            }
        }
    }

    Ok(out)
}

fn type_matches(field_type: FieldType, value: &Json) -> bool {
    match field_type {
        FieldType::String => value.is_string(),
        FieldType::Integer => value.is_i64() || value.is_u64(),
        FieldType::Float => value.is_number(),
        FieldType::Bool => value.is_boolean(),
        FieldType::Array => value.is_array(),
        FieldType::Object => value.is_object(),
        FieldType::Union => true,
    }
}

fn check_constraints(name: &str, field: &FieldSchema, value: &Json) -> Result<(), SxError> {
    if let Some(s) = value.as_str() {
        if let Some(min) = field.min_length {
            if s.chars().count() < min {
                return Err(SxError::Validation(format!("'{name}' is shorter than {min} characters")));
            }
        }
        if let Some(max) = field.max_length {
            if s.chars().count() > max {
                return Err(SxError::Validation(format!("'{name}' is longer than {max} characters")));
            }
        }
        if let Some(pattern) = &field.pattern {
            if !pattern.is_match(s) {
                return Err(SxError::Validation(format!("'{name}' does not match the required pattern")));
            }
        }
    }

    if let Some(n) = value.as_f64() {
        if let Some(min) = field.min {
            if n < min {
                return Err(SxError::Validation(format!("'{name}' is below the minimum {min}")));
            }
        }
        if let Some(max) = field.max {
            if n > max {
                return Err(SxError::Validation(format!("'{name}' is above the maximum {max}")));
            }
        }
    }

    if let Some(allowed) = &field.enum_values {
        if !allowed.contains(value) {
            return Err(SxError::Validation(format!("'{name}' is not one of the allowed values")));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
