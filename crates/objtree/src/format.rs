// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value-to-text formatting.
//!
//! Produces the inline token for a terminal value and the header line for a
//! composite one: the (possibly overridden) value text with control
//! characters escaped, quoted for strings and chars, plus the optional type
//! label. Formatting never fails.

use crate::config::DumpConfig;
use crate::inspect::{Inspect, Kind};

/// Render a value's inline text under the given configuration.
///
/// Null prints `(null)` with no type label. Everything else prints its value
/// text (the custom string conversion when the type supplies one), escaped,
/// quoted for `Text`/`Char`, and suffixed with ` (TypeName)` when
/// `show_type` is set.
pub fn format_value(value: &dyn Inspect, config: &DumpConfig) -> String {
    let kind = value.kind();
    if kind == Kind::Null {
        return "(null)".to_string();
    }

    let raw = value
        .display_override()
        .unwrap_or_else(|| value.value_text());
    let escaped = escape_control_chars(&raw);

    let mut text = match kind {
        Kind::Text => format!("\"{escaped}\""),
        Kind::Char => format!("'{escaped}'"),
        _ => escaped,
    };

    if config.show_type {
        let name = value.type_name();
        if config.short_type_names {
            text.push_str(&format!(" ({})", short_type_name(name)));
        } else {
            text.push_str(&format!(" ({name})"));
        }
    }

    text
}

/// Escape the C0 control characters that would break the one-line-per-value
/// layout into their two-character backslash forms.
fn escape_control_chars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            _ => out.push(c),
        }
    }
    out
}

/// Strip every `path::` prefix from a type name, including inside generic
/// arguments: `alloc::vec::Vec<alloc::string::String>` becomes
/// `Vec<String>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}
