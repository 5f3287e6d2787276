// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback-data normalization, grounded on `button_mapper.py`'s
//! `normalize`: transliterate to ASCII, lower-case, drop everything
//! outside `[a-z0-9 _-]`, collapse whitespace/underscore runs, truncate
//! to the Telegram callback-data budget.
//!
//! The original transliterates via `unidecode`; `deunicode` is its
//! closest Rust equivalent (same Unicode-to-ASCII folding table
//! lineage) and is used here for the same step.

use deunicode::deunicode;

const CALLBACK_DATA_LIMIT: usize = 60;

pub fn normalize(text: &str) -> String {
    let transliterated = deunicode(text);
    let lowered = transliterated.to_lowercase();
    let filtered: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '_' || *c == '-')
        .collect();

    let mut collapsed = String::with_capacity(filtered.len());
    let mut last_was_sep = false;
    for c in filtered.trim().chars() {
        if c.is_whitespace() {
            if !last_was_sep {
                collapsed.push('_');
                last_was_sep = true;
            }
        } else {
            collapsed.push(c);
            last_was_sep = c == '_';
        }
    }

    let deduped = collapse_underscore_runs(&collapsed);
    let trimmed = deduped.trim_matches('_');
    truncate_chars(trimmed, CALLBACK_DATA_LIMIT)
}

fn collapse_underscore_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_underscore = false;
    for c in s.chars() {
        if c == '_' {
            if !last_was_underscore {
                out.push('_');
            }
            last_was_underscore = true;
        } else {
            out.push(c);
            last_was_underscore = false;
        }
    }
    out
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
#[path = "button_tests.rs"]
mod tests;
