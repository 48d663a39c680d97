// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Rectangular array carrier.
//!
//! Rust has no native multi-dimensional array type, so [`Grid`] carries the
//! geometry: dimension extents plus row-major cell storage. A rank >= 2 grid
//! dumps through the rectangular walker with comma-joined indices; a rank-1
//! grid behaves like a slice.

use crate::error::{Error, Result};
use crate::inspect::{Inspect, Kind};

/// Dimension extents plus row-major cells.
///
/// # Examples
///
/// ```
/// use objtree::Grid;
///
/// let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.rank(), 2);
/// assert_eq!(grid.get(&[1, 2]), Some(&6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    dims: Vec<usize>,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from explicit extents and row-major cells.
    ///
    /// # Errors
    ///
    /// [`Error::NotAnArray`] when `dims` is empty, [`Error::CellCount`] when
    /// the cell count does not match the product of the extents.
    pub fn new(dims: Vec<usize>, cells: Vec<T>) -> Result<Self> {
        if dims.is_empty() {
            return Err(Error::NotAnArray);
        }
        let expected: usize = dims.iter().product();
        if cells.len() != expected {
            return Err(Error::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// Build a rank-2 grid from equal-length rows.
    ///
    /// # Errors
    ///
    /// [`Error::RaggedRows`] when a row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedRows {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
        }
        Ok(Self {
            dims: vec![height, width],
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Extent of each dimension, outermost first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total cell count.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a full multi-dimensional index, or `None` when the index has
    /// the wrong arity or any component is out of range.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).map(|off| &self.cells[off])
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&i, &extent) in index.iter().zip(&self.dims) {
            if i >= extent {
                return None;
            }
            offset = offset * extent + i;
        }
        Some(offset)
    }
}

impl<T: Inspect> Inspect for Grid<T> {
    fn kind(&self) -> Kind {
        Kind::Array {
            rank: self.dims.len(),
        }
    }

    fn dims(&self) -> Vec<usize> {
        if self.dims.len() >= 2 {
            self.dims.clone()
        } else {
            Vec::new()
        }
    }

    fn elements(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        // Rank 1 walks like a slice; higher ranks go through element_at.
        if self.dims.len() == 1 {
            for cell in &self.cells {
                visit(cell);
            }
        }
    }

    fn element_at(&self, index: &[usize], visit: &mut dyn FnMut(&dyn Inspect)) {
        if let Some(cell) = self.get(index) {
            visit(cell);
        }
    }
}
