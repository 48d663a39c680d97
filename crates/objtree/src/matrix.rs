// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed-width matrix rendering.
//!
//! A formatting convenience for rank-2 values: every cell right-aligned to
//! the widest cell's text, one row per line, with a configurable column
//! separator. Cell text is the raw value text with no quoting, escaping, or
//! type label; null cells render `(null)`.

use crate::engine::NEWLINE;
use crate::error::{Error, Result};
use crate::inspect::{Inspect, Kind};

/// Render a rank-2 value as a fixed-width table.
///
/// # Errors
///
/// [`Error::NotAnArray`] when the value has no array geometry,
/// [`Error::MatrixRank`] when its rank is not exactly 2.
///
/// # Examples
///
/// ```
/// use objtree::{matrix_to_string, Grid};
///
/// let grid = Grid::from_rows(vec![vec![1, 22, 333], vec![4, 5, 6]]).unwrap();
/// let text = matrix_to_string(&grid, " ").unwrap();
/// assert!(text.starts_with("  1  22 333"));
/// ```
pub fn matrix_to_string(value: &dyn Inspect, separator: &str) -> Result<String> {
    match value.kind() {
        Kind::Array { rank: 2 } => {}
        Kind::Array { rank } => return Err(Error::MatrixRank(rank)),
        _ => return Err(Error::NotAnArray),
    }
    let dims = value.dims();
    if dims.len() != 2 {
        return Err(Error::MatrixRank(dims.len()));
    }
    let (height, width) = (dims[0], dims[1]);

    let mut cells = Vec::with_capacity(height * width);
    for y in 0..height {
        for x in 0..width {
            let mut text = String::new();
            value.element_at(&[y, x], &mut |item| {
                text = cell_text(item);
            });
            cells.push(text);
        }
    }
    let cell_width = cells.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            let cell = &cells[y * width + x];
            out.push_str(&format!("{cell:>cell_width$}"));
            if x != width - 1 {
                out.push_str(separator);
            }
        }
        out.push_str(NEWLINE);
    }
    Ok(out)
}

/// Write [`matrix_to_string`] of the value to stdout.
///
/// # Errors
///
/// Same conditions as [`matrix_to_string`].
pub fn print_matrix(value: &dyn Inspect, separator: &str) -> Result<()> {
    print!("{}", matrix_to_string(value, separator)?);
    Ok(())
}

fn cell_text(item: &dyn Inspect) -> String {
    if item.kind() == Kind::Null {
        return "(null)".to_string();
    }
    item.display_override().unwrap_or_else(|| item.value_text())
}
