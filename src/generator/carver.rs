/*
carver.rs

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

//! Carve a random perfect maze.
//!
//! The maze cells sit on the odd coordinates of the grid, and the even coordinates between them
//! are walls that can be knocked down.
//! The carver grows a spanning tree from a random seed cell: at each step it picks a random cell
//! from the frontier and opens a passage to a random lattice neighbor that has not been reached
//! yet.
//! A frontier cell with no such neighbor left is dropped.
//! The result has exactly one route between any two open cells.

use log::{debug, info};
use rand::Rng;
use std::time::Instant;

use super::cell::{Cell, Direction};
use super::grid::{CellType, Grid};
use super::snapshots::Snapshots;

/// Round the dimension up to the next odd number, so that the lattice has walls on both borders.
///
/// Dimensions below 3 become 3, the smallest grid with one open cell.
pub fn normalize_dimension(value: usize) -> usize {
    let value: usize = value.max(3);
    if value % 2 == 0 { value + 1 } else { value }
}

/// [`MazeCarver`] object.
pub struct MazeCarver {
    /// Number of columns, always odd.
    pub width: usize,

    /// Number of rows, always odd.
    pub height: usize,

    /// Number of neighbor inspections it took to carve the last maze.
    pub iteration: usize,

    /// Duration in seconds it took to carve the last maze.
    pub duration: f32,
}

impl MazeCarver {
    /// Create the object. The dimensions are normalized with [`normalize_dimension`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: normalize_dimension(width),
            height: normalize_dimension(height),
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Carve a maze, mark a random start cell, and return the grid.
    ///
    /// A copy of the grid is recorded in `snapshots` after every carving step and after the start
    /// cell is placed.
    pub fn carve<R: Rng + ?Sized>(&mut self, rng: &mut R, snapshots: &mut Snapshots) -> Grid {
        let start: Instant = Instant::now();
        self.iteration = 0;

        let mut grid: Grid = Grid::new(self.width, self.height);

        let seed: Cell = Cell::new(
            rng.random_range(0..self.width / 2) * 2 + 1,
            rng.random_range(0..self.height / 2) * 2 + 1,
        );
        debug!(
            "Carving a {}x{} maze from seed cell {seed}",
            self.width, self.height
        );
        grid.set(seed, CellType::Path);
        snapshots.record(&grid);

        let mut frontier: Vec<Cell> = vec![seed];
        while !frontier.is_empty() {
            let current_index: usize = rng.random_range(0..frontier.len());
            let current: Cell = frontier[current_index];

            let mut candidates: Vec<Cell> = Vec::with_capacity(4);
            for direction in Direction::ALL {
                self.iteration += 1;
                if let Some(target) = current.step(direction, 2)
                    && grid.contains(target)
                    && grid.get(target) == CellType::Wall
                {
                    candidates.push(target);
                }
            }

            if candidates.is_empty() {
                // Exhausted: nothing to carve from this cell anymore
                frontier.swap_remove(current_index);
                continue;
            }

            let target: Cell = candidates[rng.random_range(0..candidates.len())];
            grid.set(current.midpoint(&target), CellType::Path);
            grid.set(target, CellType::Path);
            frontier.push(target);
            snapshots.record(&grid);
        }

        let open: Vec<Cell> = grid.cells_of(CellType::Path);
        let entrance: Cell = open[rng.random_range(0..open.len())];
        grid.set(entrance, CellType::Start);
        snapshots.record(&grid);

        self.duration = start.elapsed().as_secs_f32();
        info!(
            "Carved {} open cells in {}s ({} iterations), start at {entrance}",
            open.len(),
            self.duration,
            self.iteration
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashSet, VecDeque};

    fn open_cells(grid: &Grid) -> Vec<Cell> {
        grid.iter().filter(|(_, t)| t.is_open()).map(|(c, _)| c).collect()
    }

    fn reachable_from(grid: &Grid, from: Cell) -> HashSet<Cell> {
        let mut seen: HashSet<Cell> = HashSet::from([from]);
        let mut queue: VecDeque<Cell> = VecDeque::from([from]);
        while let Some(c) = queue.pop_front() {
            for n in grid.open_neighbors(c) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    #[test]
    fn dimensions_are_rounded_up_to_odd() {
        assert_eq!(normalize_dimension(4), 5);
        assert_eq!(normalize_dimension(5), 5);
        let carver: MazeCarver = MazeCarver::new(10, 7);
        assert_eq!((carver.width, carver.height), (11, 7));
    }

    #[test]
    fn tiny_dimensions_give_a_single_cell_maze() {
        assert_eq!(normalize_dimension(0), 3);
        assert_eq!(normalize_dimension(1), 3);
        assert_eq!(normalize_dimension(2), 3);

        for (width, height) in [(0, 0), (1, 2), (2, 9)] {
            let mut rng: StdRng = StdRng::seed_from_u64(3);
            let mut carver: MazeCarver = MazeCarver::new(width, height);
            let grid: Grid = carver.carve(&mut rng, &mut Snapshots::new(false));
            assert_eq!(grid.width(), 3);
            assert_eq!(grid.height(), normalize_dimension(height));
            assert!(grid.find(CellType::Start).is_some());
            // A single column of lattice cells joined by their connectors
            assert_eq!(open_cells(&grid).len(), grid.height() - 2);
        }

        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let grid: Grid = MazeCarver::new(0, 0).carve(&mut rng, &mut Snapshots::new(false));
        assert_eq!(grid.find(CellType::Start), Some(Cell::new(1, 1)));
    }

    #[test]
    fn carved_maze_is_a_spanning_tree_of_the_lattice() {
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let mut carver: MazeCarver = MazeCarver::new(17, 12);
            let grid: Grid = carver.carve(&mut rng, &mut Snapshots::new(false));

            // Every odd lattice cell is carved
            for y in (1..grid.height()).step_by(2) {
                for x in (1..grid.width()).step_by(2) {
                    assert!(grid.is_open(Cell::new(x, y)), "seed {seed}: ({x}, {y})");
                }
            }

            // Borders stay walls
            for x in 0..grid.width() {
                assert!(!grid.is_open(Cell::new(x, 0)));
                assert!(!grid.is_open(Cell::new(x, grid.height() - 1)));
            }

            // Connected, and edges = nodes - 1
            let open: Vec<Cell> = open_cells(&grid);
            let lattice: usize = (grid.width() / 2) * (grid.height() / 2);
            assert_eq!(open.len(), 2 * lattice - 1);

            let start: Cell = grid.find(CellType::Start).unwrap();
            assert_eq!(grid.count(CellType::Start), 1);
            assert_eq!(reachable_from(&grid, start).len(), open.len());

            let edges: usize = open
                .iter()
                .map(|c| {
                    [Direction::Right, Direction::Down]
                        .iter()
                        .filter_map(|d| c.step(*d, 1))
                        .filter(|n| grid.is_open(*n))
                        .count()
                })
                .sum();
            assert_eq!(edges, open.len() - 1);
        }
    }

    #[test]
    fn snapshots_show_monotonic_progress() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let mut snapshots: Snapshots = Snapshots::new(true);
        let mut carver: MazeCarver = MazeCarver::new(9, 9);
        let grid: Grid = carver.carve(&mut rng, &mut snapshots);

        let frames: Vec<Grid> = snapshots.into_frames();
        let lattice: usize = 4 * 4;
        // Seed, one frame per carving step, then the start cell
        assert_eq!(frames.len(), 1 + (lattice - 1) + 1);
        assert_eq!(frames.last(), Some(&grid));
        let counts: Vec<usize> = frames.iter().map(|f| open_cells(f).len()).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        assert!(carver.iteration >= 4 * lattice);
    }

    #[test]
    fn same_seed_same_maze() {
        let a: Grid =
            MazeCarver::new(21, 21).carve(&mut StdRng::seed_from_u64(42), &mut Snapshots::new(false));
        let b: Grid =
            MazeCarver::new(21, 21).carve(&mut StdRng::seed_from_u64(42), &mut Snapshots::new(false));
        assert_eq!(a, b);
    }
}
