// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dump configuration.
//!
//! An explicit caller-owned value rather than process-wide state: build one,
//! tweak fields, pass it to [`crate::dump_to_string_with`] and reuse it
//! across as many dumps as you like. No locking is involved; sharing a
//! mutable instance across threads is the caller's problem.

use std::collections::BTreeSet;

use crate::inspect::Visibility;

/// Which instance members a dump shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberFilter {
    /// Public members only (the default).
    Public,
    /// Private members only.
    Private,
    /// Everything.
    All,
}

impl MemberFilter {
    /// Whether a member with the given visibility passes the filter.
    pub fn admits(self, visibility: Visibility) -> bool {
        match self {
            Self::Public => visibility == Visibility::Public,
            Self::Private => visibility == Visibility::Private,
            Self::All => true,
        }
    }
}

/// Formatting policy for a dump.
///
/// Plain public fields with documented defaults, like a QoS profile: build
/// with struct-update syntax and hand a reference to the dump entry points.
///
/// # Examples
///
/// ```
/// use objtree::{DumpConfig, MemberFilter};
///
/// let config = DumpConfig {
///     indent_width: 2,
///     member_filter: MemberFilter::All,
///     ..DumpConfig::default()
/// };
/// assert_eq!(config.max_depth, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Spaces per nesting level. Default 4.
    pub indent_width: usize,
    /// Deepest stack depth that still expands; a composite met beyond it
    /// prints the too-deep marker instead of its contents. The comparison is
    /// inclusive: depth `d` expands while `d <= max_depth`, so 0 still
    /// enumerates the root's own members. Default 5.
    pub max_depth: usize,
    /// Which members of structured values are shown. Default public only.
    pub member_filter: MemberFilter,
    /// Append ` (TypeName)` to every printed value. Default true.
    pub show_type: bool,
    /// With `show_type`, strip module paths from the type label, including
    /// inside generic arguments (`Vec<i32>` instead of
    /// `alloc::vec::Vec<i32>`). Default false.
    pub short_type_names: bool,
    /// Type names always treated as terminal, never recursed into.
    /// Default empty.
    pub terminal_types: BTreeSet<String>,
    /// Expand callables as structured values instead of printing them
    /// inline. Default false.
    pub recurse_callables: bool,
    /// Treat any value with a custom string conversion as terminal, printed
    /// via that conversion. Default false.
    pub use_display_override: bool,
    /// Skip members whose value is null entirely. Default false.
    pub suppress_null_members: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            max_depth: 5,
            member_filter: MemberFilter::Public,
            show_type: true,
            short_type_names: false,
            terminal_types: BTreeSet::new(),
            recurse_callables: false,
            use_display_override: false,
            suppress_null_members: false,
        }
    }
}

impl DumpConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for dense output: two-space indent, no type labels.
    pub fn compact() -> Self {
        Self {
            indent_width: 2,
            show_type: false,
            ..Self::default()
        }
    }

    /// Restore every field to its documented default, clearing the
    /// terminal-type allowlist.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add `T` to the terminal-type allowlist.
    pub fn mark_terminal<T>(&mut self) {
        self.terminal_types
            .insert(std::any::type_name::<T>().to_string());
    }

    /// Add a type by its reported name, for types not nameable at the call
    /// site.
    pub fn mark_terminal_name(&mut self, name: impl Into<String>) {
        self.terminal_types.insert(name.into());
    }

    /// Remove `T` from the terminal-type allowlist.
    pub fn unmark_terminal<T>(&mut self) {
        self.terminal_types.remove(std::any::type_name::<T>());
    }

    /// Empty the terminal-type allowlist.
    pub fn clear_terminal_types(&mut self) {
        self.terminal_types.clear();
    }
}
