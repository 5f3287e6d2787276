// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A context value with an explicit "missing" sentinel.
//!
//! Both the placeholder expander (§4.2) and the condition evaluator (§4.3)
//! need to distinguish "path resolved to JSON null" from "path does not
//! exist in the context" — `serde_json::Value` alone cannot express that
//! distinction, so path resolution in this workspace always returns
//! `Value` rather than `Option<serde_json::Value>`.

use std::fmt;

use serde_json::Value as Json;

/// A resolved context value, or the explicit absence sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The path does not exist in the context (distinct from JSON `null`).
    Missing,
    Json(Json),
}

impl Value {
    pub fn null() -> Self {
        Value::Json(Json::Null)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// True for `Missing`, JSON `null`, and the empty string — matches the
    /// `is_null` condition operator's semantics from §4.3.
    pub fn is_null_ish(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Json(Json::Null) => true,
            Value::Json(Json::String(s)) => s.is_empty(),
            Value::Json(_) => false,
        }
    }

    pub fn as_json(&self) -> Option<&Json> {
        match self {
            Value::Missing => None,
            Value::Json(j) => Some(j),
        }
    }

    pub fn into_json(self) -> Option<Json> {
        match self {
            Value::Missing => None,
            Value::Json(j) => Some(j),
        }
    }

    /// Render for string splicing: `Missing` renders empty, JSON string
    /// unwraps its quotes, everything else uses its JSON text form.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Missing => String::new(),
            Value::Json(Json::String(s)) => s.clone(),
            Value::Json(Json::Null) => String::new(),
            Value::Json(other) => other.to_string(),
        }
    }

    /// Attempt to coerce to `f64`, parsing numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Json(Json::Number(n)) => n.as_f64(),
            Value::Json(Json::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Index into an array-shaped value, with Python-style negative
    /// indexing (`-1` is the last element). Out-of-range (either
    /// direction) yields `Missing`, per spec.md §8 boundary behavior.
    pub fn index(&self, idx: i64) -> Value {
        let Some(Json::Array(arr)) = self.as_json() else {
            return Value::Missing;
        };
        let len = arr.len() as i64;
        let real = if idx < 0 { len + idx } else { idx };
        if real < 0 || real >= len {
            return Value::Missing;
        }
        Value::Json(arr[real as usize].clone())
    }

    /// Field access into an object-shaped value.
    pub fn field(&self, name: &str) -> Value {
        match self.as_json() {
            Some(Json::Object(map)) => match map.get(name) {
                Some(v) => Value::Json(v.clone()),
                None => Value::Missing,
            },
            _ => Value::Missing,
        }
    }
}

impl From<Json> for Value {
    fn from(j: Json) -> Self {
        Value::Json(j)
    }
}

impl From<Option<Json>> for Value {
    fn from(j: Option<Json>) -> Self {
        match j {
            Some(j) => Value::Json(j),
            None => Value::Missing,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

/// Resolve a dotted path with optional `[index]` suffixes against a root
/// JSON value. Shared by the placeholder expander and the condition
/// evaluator so `{a.b[0]}` and `$a.b[0]` walk identically.
pub fn resolve_path(root: &Json, path: &str) -> Value {
    let segments = match parse_path(path) {
        Some(s) => s,
        None => return Value::Missing,
    };
    let mut current = Value::Json(root.clone());
    for seg in segments {
        current = match seg {
            PathSegment::Field(name) => current.field(&name),
            PathSegment::Index(idx) => current.index(idx),
        };
        if current.is_missing() {
            return Value::Missing;
        }
    }
    current
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Field(String),
    Index(i64),
}

/// Parse `a.b[0].c[-1]` into segments. Returns `None` only for a
/// structurally malformed path (unterminated `[`).
pub fn parse_path(path: &str) -> Option<Vec<PathSegment>> {
    let mut segments = Vec::new();
    for dotted in path.split('.') {
        let mut rest = dotted;
        // Split the leading field name from any trailing [idx] groups.
        let field_end = rest.find('[').unwrap_or(rest.len());
        let (name, mut bracket_rest) = rest.split_at(field_end);
        if !name.is_empty() {
            segments.push(PathSegment::Field(name.to_string()));
        }
        while !bracket_rest.is_empty() {
            if !bracket_rest.starts_with('[') {
                return None;
            }
            let close = bracket_rest.find(']')?;
            let idx_str = &bracket_rest[1..close];
            let idx: i64 = idx_str.trim().parse().ok()?;
            segments.push(PathSegment::Index(idx));
            bracket_rest = &bracket_rest[close + 1..];
        }
        rest = bracket_rest;
        debug_assert!(rest.is_empty());
    }
    Some(segments)
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
