/*
stitcher.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazetour.

Mazetour is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazetour is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazetour. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Join the precomputed paths between consecutive tour nodes into a single path.

use log::debug;
use std::collections::HashSet;

use super::cell::Cell;
use super::path::Path;
use crate::error::MazeError;
use crate::solver::SolveError;

/// Build the path that visits the cells of `order` in sequence.
///
/// For each pair of consecutive cells, the path joining them is taken from `paths`, and reversed
/// if it was computed in the other direction.
/// The result stops on the cell that completes the visit of every cell in `order`.
///
/// # Errors
///
/// Fail with [`MazeError::MissingSegment`] if `paths` does not join two consecutive cells.
pub fn stitch(order: &[Cell], paths: &[Path]) -> Result<Path, MazeError> {
    let mut cells: Vec<Cell> = Vec::new();
    if let Some(first) = order.first() {
        cells.push(*first);
    }

    for pair in order.windows(2) {
        let segment: Vec<Cell> = paths
            .iter()
            .find_map(|p| p.oriented(pair[0], pair[1]))
            .ok_or(MazeError::MissingSegment {
                from: pair[0],
                to: pair[1],
            })?;
        let mut iter = segment.into_iter().peekable();
        if iter.peek() == cells.last() {
            iter.next();
        }
        cells.extend(iter);
    }
    cells.dedup();

    // Truncate after the last tour node reached for the first time
    let mut pending: HashSet<Cell> = order.iter().copied().collect();
    if let Some(end) = cells.iter().position(|c| {
        pending.remove(c);
        pending.is_empty()
    }) {
        cells.truncate(end + 1);
    }

    debug!("Stitched path: {} cells", cells.len());
    Path::from_cells(cells).ok_or(MazeError::Solve(SolveError::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Grid;
    use crate::generator::pathfinder::{PairwisePaths, Pathfinder};

    const LINE: &str = "
#######
#.....#
#######
";

    #[test]
    fn coverage_truncates_the_path() {
        let grid: Grid = Grid::parse(LINE).unwrap();
        let a: Cell = Cell::new(1, 1);
        let b: Cell = Cell::new(3, 1);
        let c: Cell = Cell::new(5, 1);
        let pairs: PairwisePaths = Pathfinder::new(&grid).all_pairs(&[a, b, c]).unwrap();

        // Going to C goes through B, so the walk back to B is not needed
        let p: Path = stitch(&[a, c, b], &pairs.paths).unwrap();
        assert_eq!(p.from(), a);
        assert_eq!(p.to(), c);
        assert_eq!(p.length(), 4.0);
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn segments_are_joined_without_duplicates() {
        let grid: Grid = Grid::parse(LINE).unwrap();
        let a: Cell = Cell::new(1, 1);
        let b: Cell = Cell::new(3, 1);
        let c: Cell = Cell::new(5, 1);
        let pairs: PairwisePaths = Pathfinder::new(&grid).all_pairs(&[a, b, c]).unwrap();

        let p: Path = stitch(&[b, a, c], &pairs.paths).unwrap();
        assert_eq!(p.from(), b);
        assert_eq!(p.to(), c);
        // B to A is 2 moves, A to C is 4 moves
        assert_eq!(p.length(), 6.0);
        for w in p.cells().windows(2) {
            assert_ne!(w[0], w[1]);
        }
        assert!(p.contains(a));
    }

    #[test]
    fn missing_segment_is_an_error() {
        let a: Cell = Cell::new(1, 1);
        let b: Cell = Cell::new(2, 1);
        let c: Cell = Cell::new(3, 1);
        let paths: Vec<Path> = vec![Path::from_cells(vec![a, b]).unwrap()];
        assert_eq!(
            stitch(&[a, b, c], &paths),
            Err(MazeError::MissingSegment { from: b, to: c })
        );
    }

    #[test]
    fn single_node() {
        let a: Cell = Cell::new(1, 1);
        let p: Path = stitch(&[a], &[]).unwrap();
        assert_eq!(p.cells(), &[a]);
        assert_eq!(p.length(), 0.0);
        assert!(stitch(&[], &[]).is_err());
    }
}
