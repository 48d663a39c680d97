// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value classification.
//!
//! Maps a value's intrinsic [`Kind`] plus the active [`DumpConfig`] onto the
//! closed [`Shape`] variant the engine dispatches on, once per value. The
//! check order is fixed: null and primitives, then enums, then callables,
//! then the terminal-type allowlist, then the string-conversion override.

use crate::config::DumpConfig;
use crate::inspect::{Inspect, Kind};

/// How the engine treats a value: printed inline or expanded, and if
/// expanded, through which accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Printed as a single inline token, never recursed into.
    Terminal,
    /// Expanded member by member.
    Structured,
    /// Expanded element by element with positional indices.
    Iterable,
    /// Expanded through an array walker: jagged for rank 1, rectangular
    /// for rank >= 2.
    Array { rank: usize },
}

/// Classify a value under the given configuration. Never fails.
pub fn classify(value: &dyn Inspect, config: &DumpConfig) -> Shape {
    let kind = value.kind();

    match kind {
        Kind::Null | Kind::Scalar | Kind::Char | Kind::Text | Kind::Enum => {
            return Shape::Terminal;
        }
        Kind::Callable if !config.recurse_callables => return Shape::Terminal,
        _ => {}
    }

    // Allowlist and override apply to whatever is left: structured values,
    // collections, arrays, and callables with recursion enabled.
    if config.terminal_types.contains(value.type_name()) {
        return Shape::Terminal;
    }
    if config.use_display_override && value.display_override().is_some() {
        return Shape::Terminal;
    }

    match kind {
        Kind::Iterable => Shape::Iterable,
        Kind::Array { rank } => Shape::Array { rank },
        _ => Shape::Structured,
    }
}
