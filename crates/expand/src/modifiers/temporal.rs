// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Temporal modifiers: `seconds`, `shift:+1 day|...`, the `to_*`
//! truncation family, and `format:*`.
//!
//! `shift`/`to_*` pass an intermediate tagged value
//! (`{"_sx_dt": "<naive datetime>", "_sx_has_time": bool}`) down the
//! chain so a later `format:*` knows whether the original input carried
//! a time component, per §4.2's "preserves time-presence of input" rule.
//! Pure Unix-seconds input (int or digit-string) is accepted directly by
//! every date-emitting `format:*` form, per spec.md §6.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde_json::Value as Json;

use super::{EvalState, ModifierFn, ModifierOutcome};
use crate::context::Context;
use sx_core::value::Value;

pub fn register(map: &mut HashMap<&'static str, ModifierFn>) {
    map.insert("seconds", seconds);
    map.insert("shift", shift);
    map.insert("to_date", to_period("date"));
    map.insert("to_hour", to_period("hour"));
    map.insert("to_minute", to_period("minute"));
    map.insert("to_second", to_period("second"));
    map.insert("to_week", to_period("week"));
    map.insert("to_month", to_period("month"));
    map.insert("to_year", to_period("year"));
    map.insert("format", format);
}

const DT_KEY: &str = "_sx_dt";
const HAS_TIME_KEY: &str = "_sx_has_time";

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1970, 1, 1)
        .expect("constant date")
        .and_hms_opt(0, 0, 0)
        .expect("constant time")
}

fn tag(dt: NaiveDateTime, has_time: bool) -> Value {
    Value::Json(Json::Object(
        [
            (DT_KEY.to_string(), Json::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string())),
            (HAS_TIME_KEY.to_string(), Json::Bool(has_time)),
        ]
        .into_iter()
        .collect(),
    ))
}

fn parse_temporal(value: &Value) -> Option<(NaiveDateTime, bool)> {
    match value.as_json() {
        Some(Json::Object(map)) if map.contains_key(DT_KEY) => {
            let dt_str = map.get(DT_KEY)?.as_str()?;
            let dt = NaiveDateTime::parse_from_str(dt_str, "%Y-%m-%dT%H:%M:%S").ok()?;
            let has_time = map.get(HAS_TIME_KEY).and_then(Json::as_bool).unwrap_or(true);
            Some((dt, has_time))
        }
        Some(Json::Number(n)) => {
            let secs = n.as_i64()?;
            Some((epoch() + Duration::seconds(secs), true))
        }
        Some(Json::String(s)) if s.chars().all(|c| c.is_ascii_digit()) && !s.is_empty() => {
            let secs: i64 = s.parse().ok()?;
            Some((epoch() + Duration::seconds(secs), true))
        }
        _ => None,
    }
}

/// Parse expressions like `"1w 2d 3h 4m 5s"` into total seconds.
fn parse_duration_seconds(spec: &str) -> Option<i64> {
    let mut total: i64 = 0;
    let mut matched_any = false;
    for token in spec.split_whitespace() {
        let digits_end = token.find(|c: char| !c.is_ascii_digit() && c != '+' && c != '-')?;
        if digits_end == 0 {
            return None;
        }
        let (num_str, unit) = token.split_at(digits_end);
        let num: i64 = num_str.parse().ok()?;
        let unit_secs = match unit {
            "w" | "week" | "weeks" => 7 * 24 * 3600,
            "d" | "day" | "days" => 24 * 3600,
            "h" | "hour" | "hours" => 3600,
            "m" | "min" | "mins" | "minute" | "minutes" => 60,
            "s" | "sec" | "secs" | "second" | "seconds" => 1,
            _ => return None,
        };
        total += num * unit_secs;
        matched_any = true;
    }
    matched_any.then_some(total)
}

fn seconds(state: &mut EvalState, _arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let text = state.value.to_display_string();
    match parse_duration_seconds(&text) {
        Some(total) => {
            state.value = Value::Json(Json::Number(total.into()));
            ModifierOutcome::Applied
        }
        None => ModifierOutcome::TypeMismatch,
    }
}

/// Parse a PostgreSQL-style interval: optional sign, then
/// `<N> <unit>` pairs (`"+1 day"`, `"-3 hours"`, `"+1 day 3 hours"`).
fn parse_interval(spec: &str) -> Option<Duration> {
    let mut remaining = spec.trim();
    let mut total = Duration::zero();
    let mut matched_any = false;
    while !remaining.is_empty() {
        let (sign, rest) = match remaining.chars().next() {
            Some('+') => (1i64, &remaining[1..]),
            Some('-') => (-1i64, &remaining[1..]),
            _ => (1i64, remaining),
        };
        let rest = rest.trim_start();
        let digits_end = rest.find(|c: char| !c.is_ascii_digit())?;
        if digits_end == 0 {
            return None;
        }
        let (num_str, after_num) = rest.split_at(digits_end);
        let num: i64 = num_str.parse().ok()?;
        let after_num = after_num.trim_start();
        let unit_end = after_num.find(char::is_whitespace).unwrap_or(after_num.len());
        let (unit, after_unit) = after_num.split_at(unit_end);
        let unit = unit.trim_end_matches('s');
        let duration = match unit {
            "week" => Duration::weeks(num),
            "day" => Duration::days(num),
            "hour" => Duration::hours(num),
            "minute" | "min" => Duration::minutes(num),
            "second" | "sec" => Duration::seconds(num),
            "month" => Duration::days(num * 30),
            "year" => Duration::days(num * 365),
            _ => return None,
        };
        total = total + duration * (sign as i32);
        matched_any = true;
        remaining = after_unit.trim_start();
    }
    matched_any.then_some(total)
}

fn shift(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let Some(spec) = arg else { return ModifierOutcome::TypeMismatch };
    let Some((dt, has_time)) = parse_temporal(&state.value) else {
        return ModifierOutcome::TypeMismatch;
    };
    let Some(delta) = parse_interval(spec) else { return ModifierOutcome::TypeMismatch };
    state.value = tag(dt + delta, has_time);
    ModifierOutcome::Applied
}

fn to_period(period: &'static str) -> ModifierFn {
    match period {
        "date" => |state, _arg, _ctx| truncate_to(state, |dt| dt.date().and_hms_opt(0, 0, 0), false),
        "hour" => |state, _arg, _ctx| {
            truncate_to(state, |dt| dt.date().and_hms_opt(dt.hour(), 0, 0), true)
        },
        "minute" => |state, _arg, _ctx| {
            truncate_to(state, |dt| dt.date().and_hms_opt(dt.hour(), dt.minute(), 0), true)
        },
        "second" => |state, _arg, _ctx| truncate_to(state, Some, true),
        "week" => |state, _arg, _ctx| {
            truncate_to(
                state,
                |dt| {
                    let back = dt.weekday().num_days_from_monday() as i64;
                    (dt.date() - Duration::days(back)).and_hms_opt(0, 0, 0)
                },
                false,
            )
        },
        "month" => |state, _arg, _ctx| {
            truncate_to(
                state,
                |dt| NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1)?.and_hms_opt(0, 0, 0),
                false,
            )
        },
        "year" => |state, _arg, _ctx| {
            truncate_to(state, |dt| NaiveDate::from_ymd_opt(dt.year(), 1, 1)?.and_hms_opt(0, 0, 0), false)
        },
        _ => unreachable!("closed set of period names"),
    }
}

fn truncate_to(
    state: &mut EvalState,
    f: impl Fn(NaiveDateTime) -> Option<NaiveDateTime>,
    keeps_time: bool,
) -> ModifierOutcome {
    let Some((dt, has_time)) = parse_temporal(&state.value) else {
        return ModifierOutcome::TypeMismatch;
    };
    let Some(truncated) = f(dt) else { return ModifierOutcome::TypeMismatch };
    state.value = tag(truncated, has_time && keeps_time);
    ModifierOutcome::Applied
}

fn format(state: &mut EvalState, arg: Option<&str>, _ctx: &Context) -> ModifierOutcome {
    let Some(kind) = arg else { return ModifierOutcome::TypeMismatch };
    match kind {
        "number" => format_number(state),
        "currency" => format_currency(state),
        "percent" => format_percent(state),
        _ => format_date(state, kind),
    }
}

fn format_date(state: &mut EvalState, kind: &str) -> ModifierOutcome {
    let Some((dt, _has_time)) = parse_temporal(&state.value) else {
        return ModifierOutcome::TypeMismatch;
    };
    let rendered = match kind {
        "date" => dt.format("%d.%m.%Y").to_string(),
        "time" => dt.format("%H:%M").to_string(),
        "time_full" => dt.format("%H:%M:%S").to_string(),
        "datetime" => dt.format("%d.%m.%Y %H:%M").to_string(),
        "datetime_full" => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        "pg_date" => dt.format("%Y-%m-%d").to_string(),
        "pg_datetime" => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        "timestamp" => (dt - epoch()).num_seconds().to_string(),
        _ => return ModifierOutcome::TypeMismatch,
    };
    state.value = Value::Json(Json::String(rendered));
    ModifierOutcome::Applied
}

fn format_number(state: &mut EvalState) -> ModifierOutcome {
    match state.value.as_f64() {
        Some(n) => {
            state.value = Value::Json(Json::String(format!("{n}")));
            ModifierOutcome::Applied
        }
        None => ModifierOutcome::TypeMismatch,
    }
}

fn format_currency(state: &mut EvalState) -> ModifierOutcome {
    match state.value.as_f64() {
        Some(n) => {
            state.value = Value::Json(Json::String(format!("{n:.2} \u{20bd}")));
            ModifierOutcome::Applied
        }
        None => ModifierOutcome::TypeMismatch,
    }
}

fn format_percent(state: &mut EvalState) -> ModifierOutcome {
    match state.value.as_f64() {
        Some(n) => {
            state.value = Value::Json(Json::String(format!("{:.1}%", n * 100.0)));
            ModifierOutcome::Applied
        }
        None => ModifierOutcome::TypeMismatch,
    }
}

#[cfg(test)]
#[path = "temporal_tests.rs"]
mod tests;
