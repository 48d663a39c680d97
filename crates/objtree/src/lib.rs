// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # objtree - Deterministic object-graph dumps
//!
//! Renders an arbitrary in-memory object graph - structs, collections, and
//! arrays (including jagged and multi-dimensional ones) - into a
//! deterministic, human-readable nested-text representation, primarily for
//! debugging and test assertions.
//!
//! ## Quick Start
//!
//! ```rust
//! use objtree::{dump_to_string, DumpConfig, Inspect};
//!
//! #[derive(Inspect)]
//! struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! let text = dump_to_string(&Point { x: 1, y: 2 });
//! assert!(text.contains("x = 1 (i32)"));
//!
//! // Tune the output shape with an explicit configuration.
//! let config = DumpConfig {
//!     short_type_names: true,
//!     ..DumpConfig::default()
//! };
//! let text = objtree::dump_to_string_with(&config, &Point { x: 1, y: 2 });
//! assert!(text.starts_with("Point (Point)"));
//! ```
//!
//! ## Output shape
//!
//! Terminal values (numbers, booleans, chars, strings, enums, callables)
//! print as a single inline token. Composite values expand into a
//! brace-delimited block, one line per member or element:
//!
//! ```text
//! Point (Point)
//! {
//!     x = 1 (i32)
//!     y = 2 (i32)
//! }
//! ```
//!
//! Reference cycles are cut with a `<LoopReference>` marker and the depth
//! limit with a `<TooDeep>` marker; a dump always runs to completion, even
//! over partially-broken objects (a failing member read prints the error
//! message in place of the value).
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`dump_to_string`] | Dump a value with the default configuration |
//! | [`DumpConfig`] | Formatting policy: indent, depth limit, type display, filters |
//! | [`Inspect`] | Capability trait describing a value's shape and members |
//! | [`Grid`] | Rectangular (rank >= 2) array carrier with row-major storage |
//! | [`matrix_to_string`] | Fixed-width tabular rendering of rank-2 values |
//!
//! ## Concurrency
//!
//! A dump is synchronous and single-threaded; every call allocates its own
//! ancestor stack. [`DumpConfig`] is a plain value with no interior locking:
//! sharing one instance across threads while mutating it yields
//! nondeterministic formatting, exactly like any other unsynchronized shared
//! value. Clone the config per thread if that matters.

// Lets the derive macro's generated `objtree::...` paths resolve inside this
// crate's own tests.
extern crate self as objtree;

/// Panic-assertion helpers for tests.
pub mod assertions;
/// Value classification into the closed shape variant.
pub mod classify;
/// Dump configuration: indent, depth limit, member filter, type display.
pub mod config;
/// The recursive traversal engine and the public dump entry points.
pub mod engine;
/// Error type and result alias.
pub mod error;
/// Terminal-value and header formatting.
pub mod format;
/// Rectangular array carrier.
pub mod grid;
/// The `Inspect` capability trait and its std implementations.
pub mod inspect;
/// Fixed-width matrix rendering of rank-2 values.
pub mod matrix;
/// Jagged and rectangular array walkers.
pub mod walker;

pub use assertions::{expect_panic, expect_panic_containing};
pub use classify::{classify, Shape};
pub use config::{DumpConfig, MemberFilter};
pub use engine::{dump_to_string, dump_to_string_with, print, print_with};
pub use error::{Error, Result};
pub use format::format_value;
pub use grid::Grid;
pub use inspect::{Inspect, Kind, MapEntry, Member, ObjectId, ReadError, Visibility};
pub use matrix::{matrix_to_string, print_matrix};
pub use walker::{JaggedWalker, RectangularWalker};

pub use objtree_codegen::Inspect;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
