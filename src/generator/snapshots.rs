/*
snapshots.rs

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

//! Step-by-step copies of the grid, for replaying the generation.
//!
//! Every stage that mutates the grid records a copy after each step.
//! Visualizers receive the sequence from [`Snapshots::into_frames`], without consecutive
//! duplicates.

use log::debug;

use super::grid::Grid;

/// Append-only sequence of grid copies.
#[derive(Debug, Clone, Default)]
pub struct Snapshots {
    /// Whether copies are recorded at all.
    enabled: bool,

    /// Recorded copies, in order.
    frames: Vec<Grid>,
}

impl Snapshots {
    /// Create a [`Snapshots`] object.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            frames: Vec::new(),
        }
    }

    /// Whether copies are recorded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a copy of the grid.
    pub fn record(&mut self, grid: &Grid) {
        if self.enabled {
            self.frames.push(grid.clone());
        }
    }

    /// Number of recorded copies.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no copy has been recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Remove the copies identical to the one before, and return the sequence.
    pub fn into_frames(mut self) -> Vec<Grid> {
        let recorded: usize = self.frames.len();
        self.frames.dedup();
        debug!(
            "Snapshots: {} recorded, {} after filtering",
            recorded,
            self.frames.len()
        );
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cell::Cell;
    use crate::generator::grid::CellType;

    #[test]
    fn disabled_recorder_keeps_nothing() {
        let mut snapshots: Snapshots = Snapshots::new(false);
        snapshots.record(&Grid::new(5, 5));
        assert!(snapshots.is_empty());
        assert!(snapshots.into_frames().is_empty());
    }

    #[test]
    fn consecutive_duplicates_are_filtered() {
        let mut grid: Grid = Grid::new(5, 5);
        let mut snapshots: Snapshots = Snapshots::new(true);
        snapshots.record(&grid);
        snapshots.record(&grid);
        grid.set(Cell::new(1, 1), CellType::Path);
        snapshots.record(&grid);
        snapshots.record(&grid);
        grid.set(Cell::new(1, 1), CellType::Wall);
        snapshots.record(&grid);
        assert_eq!(snapshots.len(), 5);

        let frames: Vec<Grid> = snapshots.into_frames();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], frames[2]);
        assert!(frames.windows(2).all(|w| w[0] != w[1]));
    }
}
