// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Panic-assertion helpers for tests.
//!
//! The companion to the dumper in test code: assert that a closure panics
//! and get the message back for further checks. Rust's analog of an
//! exception-assertion utility, built on `std::panic::catch_unwind`.

use std::panic::{catch_unwind, AssertUnwindSafe};

/// Run the closure and return its panic message.
///
/// # Panics
///
/// Panics if the closure completes without panicking.
pub fn expect_panic<F: FnOnce()>(f: F) -> String {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("closure completed without panicking"),
        Err(payload) => {
            if let Some(s) = payload.downcast_ref::<&'static str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_string()
            }
        }
    }
}

/// Run the closure and assert its panic message contains the fragment;
/// returns the full message.
///
/// # Panics
///
/// Panics if the closure does not panic, or if the message does not contain
/// the fragment.
pub fn expect_panic_containing<F: FnOnce()>(f: F, fragment: &str) -> String {
    let message = expect_panic(f);
    assert!(
        message.contains(fragment),
        "panic message {message:?} does not contain {fragment:?}"
    );
    message
}
