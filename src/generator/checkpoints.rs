/*
checkpoints.rs

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

//! Scatter checkpoints over the path cells of a carved maze.
//!
//! The request is first resolved to an absolute count with [`CheckpointPlacer::resolve`], which
//! applies the limits and reports every adjustment as a [`Notice`].
//! The checkpoints are then placed with [`CheckpointPlacer::place`].
//! The placement order is meaningful: checkpoint `i` becomes tour node `i + 1`, node `0` being
//! the maze entrance.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::grid::{CellType, Grid};
use super::snapshots::Snapshots;
use crate::notices::Notice;
use crate::solver::SolveStrategy;

/// Number of checkpoints requested by the user.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckpointRequest {
    /// Absolute number of checkpoints.
    Count(usize),

    /// Percentage of the path cells, between 0 and 100.
    Percentage(u8),
}

impl Default for CheckpointRequest {
    fn default() -> Self {
        CheckpointRequest::Count(5)
    }
}

/// Result of [`CheckpointPlacer::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Count computed from the request, before any adjustment.
    pub requested: usize,

    /// Number of checkpoints to place.
    pub count: usize,

    /// Adjustments made to go from `requested` to `count`.
    pub notices: Vec<Notice>,
}

/// [`CheckpointPlacer`] object.
#[derive(Debug, Default)]
pub struct CheckpointPlacer {
    /// Number of random draws it took to place the last checkpoints.
    pub iteration: usize,
}

impl CheckpointPlacer {
    /// Create the object.
    pub fn new() -> Self {
        Self { iteration: 0 }
    }

    /// Turn the request into the number of checkpoints to place.
    ///
    /// `path_cells` is the number of free path cells in the maze.
    /// A resolved count is either 0 or at least 2, and never exceeds the strategy maximum nor
    /// `path_cells`.
    pub fn resolve(
        request: CheckpointRequest,
        path_cells: usize,
        strategy: SolveStrategy,
    ) -> Resolution {
        let requested: usize = match request {
            CheckpointRequest::Count(n) => n,
            CheckpointRequest::Percentage(p) => path_cells * p as usize / 100,
        };
        let mut count: usize = requested;
        let mut notices: Vec<Notice> = Vec::new();

        if count == 1 {
            count = 2;
            notices.push(Notice::CheckpointsRaised {
                requested,
                placed: count,
            });
        }

        if let Some(max) = strategy.max_checkpoints()
            && count > max
        {
            notices.push(Notice::CheckpointsCapped {
                requested: count,
                allowed: max,
                strategy,
            });
            count = max;
        }

        // A single free cell cannot hold a tour either
        if count > path_cells {
            let placed: usize = if path_cells >= 2 { path_cells } else { 0 };
            notices.push(Notice::NotEnoughPathCells {
                requested: count,
                placed,
                available: path_cells,
            });
            count = placed;
        }

        debug!("Checkpoints: {request:?} -> requested {requested}, resolved {count}");
        Resolution {
            requested,
            count,
            notices,
        }
    }

    /// Turn `count` random path cells into checkpoints and return them in placement order.
    ///
    /// `count` must not exceed the number of path cells in the grid; use
    /// [`CheckpointPlacer::resolve`] to compute it.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        count: usize,
        rng: &mut R,
        snapshots: &mut Snapshots,
    ) -> Vec<Cell> {
        self.iteration = 0;
        let count: usize = count.min(grid.count(CellType::Path));
        let mut checkpoints: Vec<Cell> = Vec::with_capacity(count);

        while checkpoints.len() < count {
            self.iteration += 1;
            let cell: Cell = Cell::new(
                rng.random_range(0..grid.width()),
                rng.random_range(0..grid.height()),
            );
            // Walls, the start cell, and already placed checkpoints are rejected
            if grid.get(cell) == CellType::Path {
                grid.set(cell, CellType::Checkpoint);
                checkpoints.push(cell);
                snapshots.record(grid);
            }
        }

        debug!(
            "Placed {} checkpoints in {} draws",
            checkpoints.len(),
            self.iteration
        );
        checkpoints
    }
}
