/*
pathfinder.rs

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

//! Shortest paths between the tour nodes.
//!
//! Moves are orthogonal, through any non-wall cell, and all cost one.
//! A breadth-first search therefore reaches every cell by a shortest route.

use log::{Level, debug, log_enabled};
use std::collections::VecDeque;
use std::time::Instant;

use super::cell::Cell;
use super::grid::Grid;
use super::path::Path;
use crate::error::MazeError;
use crate::solver::matrix::DistanceMatrix;

/// Output of [`Pathfinder::all_pairs`].
#[derive(Debug, Clone, PartialEq)]
pub struct PairwisePaths {
    /// Tour nodes. The index in this list is the node ID in the matrix.
    pub nodes: Vec<Cell>,

    /// One shortest path per unordered pair of nodes.
    pub paths: Vec<Path>,

    /// Length of these paths.
    pub matrix: DistanceMatrix,
}

/// [`Pathfinder`] object.
pub struct Pathfinder<'a> {
    /// Grid to search.
    grid: &'a Grid,

    /// Number of neighbor inspections and path cells walked back since the object was created.
    pub iteration: usize,

    /// Duration in seconds of the last [`Pathfinder::all_pairs`] call.
    pub duration: f32,
}

impl<'a> Pathfinder<'a> {
    /// Create the object.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Return a shortest path between two cells, or `None` if `end` cannot be reached.
    pub fn shortest_path(&mut self, start: Cell, end: Cell) -> Option<Path> {
        if !self.grid.is_open(start) || !self.grid.is_open(end) {
            return None;
        }

        let width: usize = self.grid.width();
        let size: usize = width * self.grid.height();
        let index = |c: Cell| c.y * width + c.x;

        let mut distances: Vec<Option<usize>> = vec![None; size];
        let mut previous: Vec<Option<Cell>> = vec![None; size];
        let mut queue: VecDeque<Cell> = VecDeque::new();

        distances[index(start)] = Some(0);
        queue.push_back(start);

        // The first visit of a cell is always through a shortest route
        let mut found: bool = false;
        while let Some(current) = queue.pop_front() {
            if current == end {
                found = true;
                break;
            }
            let next_distance: usize = distances[index(current)].unwrap_or(0) + 1;
            for neighbor in self.grid.open_neighbors(current) {
                self.iteration += 1;
                let i: usize = index(neighbor);
                if distances[i].is_none() {
                    distances[i] = Some(next_distance);
                    previous[i] = Some(current);
                    queue.push_back(neighbor);
                }
            }
        }

        if !found {
            debug!("No path from {start} to {end}");
            return None;
        }

        let mut cells: Vec<Cell> = vec![end];
        let mut current: Cell = end;
        while let Some(p) = previous[index(current)] {
            self.iteration += 1;
            cells.push(p);
            current = p;
        }
        cells.reverse();
        Path::from_cells(cells)
    }

    /// Compute a shortest path between every pair of nodes, and the distance matrix.
    ///
    /// # Errors
    ///
    /// Fail with [`MazeError::Unreachable`] if two nodes are not connected, which cannot happen
    /// in a carved maze.
    pub fn all_pairs(&mut self, nodes: &[Cell]) -> Result<PairwisePaths, MazeError> {
        let start: Instant = Instant::now();
        let n: usize = nodes.len();
        let mut matrix: DistanceMatrix = DistanceMatrix::new(n);
        let mut paths: Vec<Path> = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for i in 0..n {
            for j in i + 1..n {
                let path: Path =
                    self.shortest_path(nodes[i], nodes[j])
                        .ok_or(MazeError::Unreachable {
                            from: nodes[i],
                            to: nodes[j],
                        })?;
                matrix.set(i, j, path.length())?;
                paths.push(path);
            }
        }

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "{} paths between {n} nodes in {}s",
            paths.len(),
            self.duration
        );
        if log_enabled!(Level::Debug) {
            matrix.debug();
        }
        Ok(PairwisePaths {
            nodes: nodes.to_vec(),
            paths,
            matrix,
        })
    }
}
