// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The recursive traversal engine.
//!
//! A dump runs as one [`DumpSession`]: an output buffer plus the ancestor
//! stack of identity tokens for the composites currently being expanded on
//! the path from the root. Cycles and the depth limit are handled
//! structurally with marker lines, never as errors; the only swallowed
//! failure is a member read, whose message is printed in place of the value.

use crate::classify::{classify, Shape};
use crate::config::DumpConfig;
use crate::format::format_value;
use crate::inspect::{Inspect, Kind, Member, ObjectId};
use crate::walker::{JaggedWalker, RectangularWalker};

/// Marker appended to a line whose value is already being expanded higher in
/// the current path.
const LOOP_MARKER: &str = "<LoopReference>";
/// Marker emitted in place of further expansion past the depth limit.
const TOO_DEEP_MARKER: &str = "<TooDeep>";

/// Platform-native line ending.
pub(crate) const NEWLINE: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Dump a value with the default configuration.
///
/// Terminal values print as a single line with no trailing newline;
/// composite values print a header followed by a brace-delimited block, each
/// line ending with the platform newline.
pub fn dump_to_string(value: &dyn Inspect) -> String {
    dump_to_string_with(&DumpConfig::default(), value)
}

/// Dump a value under an explicit configuration.
pub fn dump_to_string_with(config: &DumpConfig, value: &dyn Inspect) -> String {
    let mut session = DumpSession::new(config);
    session.dump(value);
    session.into_text()
}

/// Write [`dump_to_string`] of the value to stdout, terminated with the
/// platform newline.
pub fn print(value: &dyn Inspect) {
    print!("{}{}", dump_to_string(value), NEWLINE);
}

/// Write [`dump_to_string_with`] of the value to stdout, terminated with the
/// platform newline.
pub fn print_with(config: &DumpConfig, value: &dyn Inspect) {
    print!("{}{}", dump_to_string_with(config, value), NEWLINE);
}

/// One top-level dump invocation: output buffer plus ancestor stack.
struct DumpSession<'a> {
    config: &'a DumpConfig,
    out: String,
    ancestors: Vec<ObjectId>,
}

impl<'a> DumpSession<'a> {
    fn new(config: &'a DumpConfig) -> Self {
        Self {
            config,
            out: String::new(),
            ancestors: Vec::new(),
        }
    }

    fn into_text(self) -> String {
        self.out
    }

    fn dump(&mut self, root: &dyn Inspect) {
        self.out.push_str(&format_value(root, self.config));
        if classify(root, self.config) == Shape::Terminal {
            return;
        }
        self.out.push_str(NEWLINE);
        self.expand(root);
    }

    /// Expand a composite as a brace-delimited block. Terminal values are
    /// ignored; the caller has already printed their inline text.
    fn expand(&mut self, value: &dyn Inspect) {
        let shape = classify(value, self.config);
        if shape == Shape::Terminal {
            return;
        }

        let depth = self.ancestors.len();
        self.line(depth, "{");
        self.ancestors.push(value.identity());

        if depth <= self.config.max_depth {
            match shape {
                Shape::Array { rank } if rank >= 2 => self.expand_rectangular(value),
                Shape::Array { .. } => self.expand_jagged(value),
                Shape::Iterable => self.expand_iterable(value),
                Shape::Structured => self.expand_structured(value),
                Shape::Terminal => {}
            }
        } else {
            log::trace!(
                "[dump] depth limit {} reached at {}",
                self.config.max_depth,
                value.type_name()
            );
            self.line(depth + 1, TOO_DEEP_MARKER);
        }

        self.ancestors.pop();
        self.line(depth, "}");
    }

    fn expand_structured(&mut self, value: &dyn Inspect) {
        let depth = self.ancestors.len();
        value.members(&mut |member: Member<'_>| {
            if !self.config.member_filter.admits(member.visibility) {
                return;
            }
            match member.value {
                Ok(child) => {
                    if self.config.suppress_null_members && child.kind() == Kind::Null {
                        return;
                    }
                    let looping = self.is_ancestor(child);
                    self.indent(depth);
                    self.out.push_str(member.name);
                    self.out.push_str(" = ");
                    self.out.push_str(&format_value(child, self.config));
                    if looping {
                        self.out.push_str(LOOP_MARKER);
                    }
                    self.out.push_str(NEWLINE);
                    if !looping {
                        self.expand(child);
                    }
                }
                Err(err) => {
                    // The one swallowed failure: print the message in place
                    // of the value and keep going.
                    log::debug!("[dump] member {} read failed: {}", member.name, err);
                    self.indent(depth);
                    self.out.push_str(member.name);
                    self.out.push_str(" = ");
                    self.out.push_str(err.message());
                    self.out.push_str(NEWLINE);
                }
            }
        });
    }

    fn expand_iterable(&mut self, value: &dyn Inspect) {
        let depth = self.ancestors.len();
        let mut index = 0usize;
        value.elements(&mut |item| {
            let label = format!("[{index}]");
            self.element_line(depth, &label, item);
            index += 1;
        });
    }

    fn expand_jagged(&mut self, value: &dyn Inspect) {
        let depth = self.ancestors.len();
        match JaggedWalker::new(value) {
            Ok(walker) => walker.walk(&mut |item, path| {
                let label = format!("[{}]", join_indices(path, "]["));
                self.element_line(depth, &label, item);
            }),
            // Unreachable from the public entry points: rank is checked
            // before walker selection.
            Err(err) => {
                log::debug!("[dump] jagged walk failed: {err}");
                self.line(depth, &err.to_string());
            }
        }
    }

    fn expand_rectangular(&mut self, value: &dyn Inspect) {
        let depth = self.ancestors.len();
        match RectangularWalker::new(value) {
            Ok(walker) => walker.walk(&mut |item, path| {
                let label = format!("[{}]", join_indices(path, ","));
                self.element_line(depth, &label, item);
            }),
            // Reachable only through an Inspect impl whose dims() disagrees
            // with its reported rank.
            Err(err) => {
                log::debug!("[dump] rectangular walk failed: {err}");
                self.line(depth, &err.to_string());
            }
        }
    }

    /// Emit one `[index] value` element line, then recurse unless the
    /// element is terminal or already on the ancestor stack.
    fn element_line(&mut self, depth: usize, label: &str, item: &dyn Inspect) {
        let looping = self.is_ancestor(item);
        self.indent(depth);
        self.out.push_str(label);
        self.out.push(' ');
        self.out.push_str(&format_value(item, self.config));
        if looping {
            self.out.push_str(LOOP_MARKER);
        }
        self.out.push_str(NEWLINE);
        if !looping {
            self.expand(item);
        }
    }

    fn is_ancestor(&self, value: &dyn Inspect) -> bool {
        let looping = self.ancestors.contains(&value.identity());
        if looping {
            log::trace!("[dump] cycle detected at {}", value.type_name());
        }
        looping
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        self.out.push_str(text);
        self.out.push_str(NEWLINE);
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth * self.config.indent_width {
            self.out.push(' ');
        }
    }
}

fn join_indices(path: &[usize], separator: &str) -> String {
    let mut text = String::new();
    for (i, index) in path.iter().enumerate() {
        if i > 0 {
            text.push_str(separator);
        }
        text.push_str(&index.to_string());
    }
    text
}
