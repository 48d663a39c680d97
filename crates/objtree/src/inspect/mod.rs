// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # The `Inspect` capability
//!
//! Rust has no runtime reflection, so the "list the visible instance members
//! of a value's runtime type" capability is an explicit trait. A type that
//! wants to appear in dumps implements [`Inspect`] (usually via
//! `#[derive(Inspect)]`); the traversal engine consumes nothing else.
//!
//! The trait is object-safe and every method except [`Inspect::kind`] has a
//! default, so a scalar-like impl is one line. Member and element access is
//! callback-based rather than reference-returning: an impl that must hold a
//! guard (`RefCell`, `Mutex`) delegates while the guard is alive.
//!
//! `impls.rs` provides blanket coverage for the std types a debugging dump
//! meets in practice: scalars, strings, `Option`, smart pointers and cells,
//! the common collections, slices and arrays, tuples, and fn pointers.

mod impls;
#[cfg(test)]
mod tests;

pub use impls::MapEntry;

/// Intrinsic presentation kind of a value, independent of configuration.
///
/// The classifier maps this (plus the active [`crate::DumpConfig`]) onto the
/// [`crate::Shape`] the engine dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Absent reference (`Option::None`). Prints `(null)`.
    Null,
    /// Numeric/boolean primitive. Prints its `Display` form.
    Scalar,
    /// Single character. Printed single-quoted after escaping.
    Char,
    /// Text string. Printed double-quoted after escaping.
    Text,
    /// Enumerated constant. Prints the variant name.
    Enum,
    /// Function value. Terminal unless `recurse_callables` is set.
    Callable,
    /// Named members in declaration order, via [`Inspect::members`].
    Structured,
    /// Positional elements in iteration order, via [`Inspect::elements`].
    Iterable,
    /// Array geometry. Rank 1 walks jagged via [`Inspect::elements`];
    /// rank >= 2 walks rectangular via [`Inspect::dims`] and
    /// [`Inspect::element_at`].
    Array { rank: usize },
}

/// Opaque identity token for cycle detection.
///
/// Equality on both fields: the data address alone cannot tell a struct from
/// its first field (same address, different type). Smart-pointer impls
/// forward identity to the pointee, so every `Rc` clone of a node yields the
/// same token and reference cycles are caught across clones. Value-equal but
/// distinct instances compare unequal, as required - cycle detection is by
/// identity, never by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectId {
    /// Address of the value's data.
    pub addr: usize,
    /// The value's reported type name.
    pub type_name: &'static str,
}

/// Member visibility as reported by an [`Inspect`] impl.
///
/// The derive macro maps `pub` fields to `Public` and everything else to
/// `Private`; [`crate::MemberFilter`] decides which ones a dump shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// A failed member read.
///
/// The explicit fallible-read result: the engine prints the message in place
/// of the member's value and keeps going. This is the only place where
/// failures are swallowed by design - a dump always completes, even over
/// partially-broken objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    message: String,
}

impl ReadError {
    /// Create a read error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message printed in place of the member's value.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// One named member of a [`Kind::Structured`] value.
pub struct Member<'a> {
    /// Member name, in declaration order.
    pub name: &'a str,
    /// Reported visibility, tested against the configured member filter.
    pub visibility: Visibility,
    /// The member's value, or the read failure to print in its place.
    pub value: Result<&'a dyn Inspect, ReadError>,
}

/// Describes a value's shape and contents to the traversal engine.
///
/// Only [`Inspect::kind`] is required. The accessors that matter depend on
/// the kind:
///
/// - `Structured` implements [`Inspect::members`]
/// - `Iterable` and rank-1 `Array` implement [`Inspect::elements`]
/// - rank >= 2 `Array` implements [`Inspect::dims`] and
///   [`Inspect::element_at`]
/// - terminals usually override [`Inspect::value_text`]
pub trait Inspect {
    /// Intrinsic presentation kind, independent of configuration.
    fn kind(&self) -> Kind;

    /// Fully qualified type name. Defaults to the compiler-reported name;
    /// delegating impls forward to the wrapped value instead.
    fn type_name(&self) -> &'static str {
        std::any::type_name_of_val(self)
    }

    /// Base string conversion, the analog of a default to-string. Defaults
    /// to the type name, which is what a plain object with no better text
    /// prints as its header.
    fn value_text(&self) -> String {
        self.type_name().to_string()
    }

    /// A custom string conversion distinct from the generic default, or
    /// `None`. When present it replaces [`Inspect::value_text`] in the
    /// output; when `use_display_override` is also set, the value is
    /// additionally treated as terminal.
    fn display_override(&self) -> Option<String> {
        None
    }

    /// Identity token for cycle detection. Defaults to the value's own
    /// address; smart-pointer impls forward to the pointee.
    fn identity(&self) -> ObjectId {
        ObjectId {
            addr: (std::ptr::from_ref(self).cast::<()>()) as usize,
            type_name: self.type_name(),
        }
    }

    /// Visit the named members, in declaration order. Meaningful for
    /// [`Kind::Structured`]; the default visits nothing.
    fn members(&self, visit: &mut dyn FnMut(Member<'_>)) {
        let _ = visit;
    }

    /// Visit the positional elements, in iteration order. Meaningful for
    /// [`Kind::Iterable`] and rank-1 arrays; the default visits nothing.
    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        let _ = visit;
    }

    /// Extent of each dimension, outermost first. Non-empty only for
    /// rank >= 2 arrays, where its length must equal the reported rank.
    fn dims(&self) -> Vec<usize> {
        Vec::new()
    }

    /// Visit the element at a full multi-dimensional index. Meaningful for
    /// rank >= 2 arrays; the default visits nothing.
    fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
        let _ = (index, visit);
    }
}
