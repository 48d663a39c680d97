// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type for objtree operations.
//!
//! Dumping itself never fails: cycles and depth cuts are handled
//! structurally, and a failing member read is printed in place of the value
//! (see [`crate::inspect::ReadError`]). The variants here cover walker and
//! matrix construction contracts and [`crate::Grid`] geometry validation.

use std::fmt;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// objtree error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Walker Construction Errors
    // ========================================================================
    /// The value carries no array geometry at all.
    NotAnArray,
    /// A jagged walker was handed an array of the given rank (must be 1).
    JaggedRank(usize),
    /// A rectangular walker was handed an array of the given rank (must be
    /// >= 2, with `dims()` reporting one extent per dimension).
    RectangularRank(usize),

    // ========================================================================
    // Matrix Errors
    // ========================================================================
    /// The matrix printer requires rank exactly 2.
    MatrixRank(usize),

    // ========================================================================
    // Grid Construction Errors
    // ========================================================================
    /// Cell count does not match the product of the dimension extents.
    CellCount { expected: usize, actual: usize },
    /// A row of a rank-2 grid differs in length from the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnArray => write!(f, "value has no array geometry"),
            Self::JaggedRank(rank) => {
                write!(f, "jagged walker requires rank 1, got rank {rank}")
            }
            Self::RectangularRank(rank) => {
                write!(f, "rectangular walker requires rank >= 2, got rank {rank}")
            }
            Self::MatrixRank(rank) => {
                write!(f, "matrix rendering requires rank 2, got rank {rank}")
            }
            Self::CellCount { expected, actual } => {
                write!(f, "grid expects {expected} cells, got {actual}")
            }
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "grid row {row} has {actual} cells, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
