// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Array walkers.
//!
//! Both walkers enumerate every leaf element of an array exactly once, in
//! row-major / outer-to-inner order, handing the visit callback the full
//! index path. The engine picks the walker from the array's rank before
//! construction, so the rank errors here mark contract violations in an
//! `Inspect` impl rather than reachable user errors.

use crate::error::{Error, Result};
use crate::inspect::{Inspect, Kind};

/// Walks a rank-1 array whose elements may themselves be rank-1 arrays of
/// varying length, descending structurally as deep as the nesting goes.
///
/// The index path carries one entry per nesting level; the engine renders it
/// as one bracket group per level (`[1][0]`). Heterogeneous element shapes
/// are walked as encountered, with no uniformity check.
pub struct JaggedWalker<'a> {
    root: &'a dyn Inspect,
}

impl std::fmt::Debug for JaggedWalker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JaggedWalker").finish_non_exhaustive()
    }
}

impl<'a> JaggedWalker<'a> {
    /// Construct over a rank-1 array.
    ///
    /// # Errors
    ///
    /// [`Error::NotAnArray`] when the value has no array geometry,
    /// [`Error::JaggedRank`] when its rank is not 1.
    pub fn new(root: &'a dyn Inspect) -> Result<Self> {
        match root.kind() {
            Kind::Array { rank: 1 } => Ok(Self { root }),
            Kind::Array { rank } => Err(Error::JaggedRank(rank)),
            _ => Err(Error::NotAnArray),
        }
    }

    /// Visit every leaf element with its full index path.
    pub fn walk(&self, visit: &mut dyn FnMut(&dyn Inspect, &[usize])) {
        let mut path = Vec::new();
        descend_jagged(self.root, &mut path, visit);
    }
}

fn descend_jagged(
    array: &dyn Inspect,
    path: &mut Vec<usize>,
    visit: &mut dyn FnMut(&dyn Inspect, &[usize]),
) {
    let mut index = 0usize;
    array.elements(&mut |item| {
        path.push(index);
        if matches!(item.kind(), Kind::Array { rank: 1 }) {
            descend_jagged(item, path, visit);
        } else {
            visit(item, path);
        }
        path.pop();
        index += 1;
    });
}

/// Walks a rectangular (rank >= 2) array in row-major order via random
/// access, one nested loop per dimension.
///
/// The index path always has exactly `rank` entries; the engine renders it
/// comma-joined (`[1,0,2]`).
pub struct RectangularWalker<'a> {
    root: &'a dyn Inspect,
    dims: Vec<usize>,
}

impl std::fmt::Debug for RectangularWalker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RectangularWalker")
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

impl<'a> RectangularWalker<'a> {
    /// Construct over a rank >= 2 array whose `dims()` report one extent per
    /// dimension.
    ///
    /// # Errors
    ///
    /// [`Error::NotAnArray`] when the value has no array geometry,
    /// [`Error::RectangularRank`] on rank 1 or when `dims()` disagrees with
    /// the reported rank.
    pub fn new(root: &'a dyn Inspect) -> Result<Self> {
        let rank = match root.kind() {
            Kind::Array { rank } if rank >= 2 => rank,
            Kind::Array { rank } => return Err(Error::RectangularRank(rank)),
            _ => return Err(Error::NotAnArray),
        };

        let dims = root.dims();
        if dims.len() != rank {
            return Err(Error::RectangularRank(dims.len()));
        }
        Ok(Self { root, dims })
    }

    /// Extent of each dimension, outermost first.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Visit every element with its full index path, innermost dimension
    /// varying fastest.
    pub fn walk(&self, visit: &mut dyn FnMut(&dyn Inspect, &[usize])) {
        if self.dims.iter().any(|&extent| extent == 0) {
            return;
        }
        let mut path = Vec::with_capacity(self.dims.len());
        self.descend(0, &mut path, visit);
    }

    fn descend(
        &self,
        dim: usize,
        path: &mut Vec<usize>,
        visit: &mut dyn FnMut(&dyn Inspect, &[usize]),
    ) {
        for i in 0..self.dims[dim] {
            path.push(i);
            if dim + 1 < self.dims.len() {
                self.descend(dim + 1, path, visit);
            } else {
                self.root.element_at(path, &mut |item| visit(item, path));
            }
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn collect_jagged(root: &dyn Inspect) -> Vec<(String, Vec<usize>)> {
        let walker = JaggedWalker::new(root).unwrap();
        let mut seen = Vec::new();
        walker.walk(&mut |item, path| {
            seen.push((item.value_text(), path.to_vec()));
        });
        seen
    }

    #[test]
    fn test_jagged_flat() {
        let array = [10, 20, 30];
        let seen = collect_jagged(&array);

        assert_eq!(
            seen,
            vec![
                ("10".to_string(), vec![0]),
                ("20".to_string(), vec![1]),
                ("30".to_string(), vec![2]),
            ]
        );
    }

    #[test]
    fn test_jagged_two_levels_row_major() {
        let array: [&[i32]; 2] = [&[1, 2, 3], &[4, 5, 6, 7]];
        let seen = collect_jagged(&array);

        assert_eq!(seen.len(), 7);
        assert_eq!(seen[0], ("1".to_string(), vec![0, 0]));
        assert_eq!(seen[2], ("3".to_string(), vec![0, 2]));
        assert_eq!(seen[3], ("4".to_string(), vec![1, 0]));
        assert_eq!(seen[6], ("7".to_string(), vec![1, 3]));
    }

    #[test]
    fn test_jagged_heterogeneous_shapes() {
        // A leaf next to a nested array: walked structurally as encountered.
        let nested: [i32; 2] = [8, 9];
        let array: [&dyn Inspect; 2] = [&5i32, &nested];
        let seen = collect_jagged(&array);

        assert_eq!(
            seen,
            vec![
                ("5".to_string(), vec![0]),
                ("8".to_string(), vec![1, 0]),
                ("9".to_string(), vec![1, 1]),
            ]
        );
    }

    #[test]
    fn test_jagged_rejects_wrong_input() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(
            JaggedWalker::new(&grid).unwrap_err(),
            Error::JaggedRank(2)
        );
        assert_eq!(JaggedWalker::new(&1i32).unwrap_err(), Error::NotAnArray);
    }

    #[test]
    fn test_rectangular_row_major() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let walker = RectangularWalker::new(&grid).unwrap();

        let mut seen = Vec::new();
        walker.walk(&mut |item, path| {
            seen.push((item.value_text(), path.to_vec()));
        });

        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], ("1".to_string(), vec![0, 0]));
        assert_eq!(seen[2], ("3".to_string(), vec![0, 2]));
        assert_eq!(seen[3], ("4".to_string(), vec![1, 0]));
        assert_eq!(seen[5], ("6".to_string(), vec![1, 2]));
    }

    #[test]
    fn test_rectangular_three_dimensions() {
        let grid = Grid::new(vec![2, 2, 2], (0..8).collect()).unwrap();
        let walker = RectangularWalker::new(&grid).unwrap();

        let mut seen = Vec::new();
        walker.walk(&mut |item, path| {
            seen.push((item.value_text(), path.to_vec()));
        });

        assert_eq!(seen.len(), 8);
        // Innermost index varies fastest.
        assert_eq!(seen[0], ("0".to_string(), vec![0, 0, 0]));
        assert_eq!(seen[1], ("1".to_string(), vec![0, 0, 1]));
        assert_eq!(seen[2], ("2".to_string(), vec![0, 1, 0]));
        assert_eq!(seen[7], ("7".to_string(), vec![1, 1, 1]));
    }

    #[test]
    fn test_rectangular_rejects_wrong_input() {
        let array = [1, 2, 3];
        assert_eq!(
            RectangularWalker::new(&array).unwrap_err(),
            Error::RectangularRank(1)
        );
        assert_eq!(
            RectangularWalker::new(&"text").unwrap_err(),
            Error::NotAnArray
        );
    }

    #[test]
    fn test_rectangular_empty_dimension_visits_nothing() {
        let grid = Grid::new(vec![0, 3], Vec::<i32>::new()).unwrap();
        let walker = RectangularWalker::new(&grid).unwrap();

        let mut count = 0;
        walker.walk(&mut |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
