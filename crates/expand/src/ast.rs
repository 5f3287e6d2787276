// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder AST: a `source` plus a left-to-right chain of modifiers,
//! parsed once per template string and cacheable by
//! [`sx_core::fingerprint`] of the raw template text.

/// The left-hand side of a placeholder body, before any modifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A dotted/indexed context path, e.g. `user.name`, `items[-1]`.
    Path(String),
    /// A quoted literal, already unescaped.
    Literal(String),
}

/// One `|modifier[:arg]` step. `arg` keeps any nested placeholder text
/// unresolved — it is expanded recursively at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierCall {
    pub name: String,
    pub arg: Option<String>,
}

/// A single parsed placeholder: `{source|mod1:arg1|mod2}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub source: Source,
    pub modifiers: Vec<ModifierCall>,
    /// The original `{...}` text, used to render an unresolved
    /// placeholder back unchanged (§4.2 rule 4).
    pub raw: String,
}

/// A template string compiled into an ordered sequence of literal and
/// placeholder pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub pieces: Vec<Piece>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Literal(String),
    Placeholder(Placeholder),
}

impl Template {
    /// True when the entire template is exactly one placeholder with no
    /// surrounding literal text — the case where the type-inference pass
    /// (rule 5) applies and splicing (rule 6) is possible.
    pub fn is_single_placeholder(&self) -> bool {
        matches!(self.pieces.as_slice(), [Piece::Placeholder(_)])
    }
}

/// Parse a full template string (possibly containing several
/// placeholders interleaved with literal text) into a [`Template`].
pub fn parse_template(template: &str) -> Template {
    use crate::scan::{scan, Span};
    let pieces = scan(template)
        .into_iter()
        .map(|span| match span {
            Span::Literal(s) => Piece::Literal(s),
            Span::Placeholder(body) => Piece::Placeholder(parse_placeholder(&body)),
        })
        .collect();
    Template { pieces }
}

/// Parse a placeholder body (the text between `{` and `}`, exclusive).
pub fn parse_placeholder(body: &str) -> Placeholder {
    let parts = split_top_level(body, '|');
    let mut iter = parts.into_iter();
    let source = parse_source(iter.next().unwrap_or_default().trim());
    let modifiers = iter.map(|part| parse_modifier(part.trim())).collect();
    Placeholder { source, modifiers, raw: format!("{{{body}}}") }
}

/// Parse one `|`-separated modifier segment. Arithmetic modifiers
/// (`+N`, `-N`, `*N`, `/N`, `%N`) carry their operand directly after the
/// operator symbol rather than after a colon, so they are recognized
/// before the generic `name:arg` split.
fn parse_modifier(part: &str) -> ModifierCall {
    if let Some(first) = part.chars().next() {
        if matches!(first, '+' | '-' | '*' | '/' | '%') && part.len() > 1 {
            return ModifierCall { name: first.to_string(), arg: Some(part[first.len_utf8()..].to_string()) };
        }
    }
    match part.split_once(':') {
        Some((name, arg)) => ModifierCall { name: name.trim().to_string(), arg: Some(arg.to_string()) },
        None => ModifierCall { name: part.to_string(), arg: None },
    }
}

fn parse_source(raw: &str) -> Source {
    if raw.len() >= 2 {
        let first = raw.as_bytes()[0];
        let last = raw.as_bytes()[raw.len() - 1];
        if (first == b'\'' || first == b'"') && last == first {
            return Source::Literal(unescape(&raw[1..raw.len() - 1], first as char));
        }
    }
    Source::Path(raw.to_string())
}

fn unescape(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&next) if next == quote || next == '\\' => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Split `s` on top-level occurrences of `sep`, ignoring separators that
/// fall inside quoted regions or nested `{...}` spans (so a modifier
/// argument like `shift:{offset}` or `in_list:'a|b',c` is not split
/// incorrectly).
fn split_top_level(s: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            current.push(c);
            if c == '\\' {
                if let Some(&next) = chars.peek() {
                    current.push(next);
                    chars.next();
                }
                continue;
            }
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                current.push(c);
            }
            '{' => {
                depth += 1;
                current.push(c);
            }
            '}' => {
                depth -= 1;
                current.push(c);
            }
            _ if c == sep && depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
