/*
maze.rs

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

//! Run every stage, from carving to the marked solution.

use log::{Level, debug, info, log_enabled};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::time::Instant;

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::generator::carver::MazeCarver;
use crate::generator::cell::Cell;
use crate::generator::checkpoints::{CheckpointPlacer, Resolution};
use crate::generator::grid::{CellType, Grid};
use crate::generator::path::Path;
use crate::generator::pathfinder::{PairwisePaths, Pathfinder};
use crate::generator::snapshots::Snapshots;
use crate::generator::stitcher::stitch;
use crate::notices::Notice;
use crate::solver::{self, Solution, SolveStrategy, Tour};
use crate::stats::{StageIterations, Stats};

/// Generated maze and its solution.
#[derive(Serialize, Debug, Clone)]
pub struct Maze {
    /// Final grid. When the tour is solved, the stitched path is marked on it.
    pub grid: Grid,

    /// Copies of the grid after every step, without consecutive duplicates.
    /// Empty when the recording was disabled.
    #[serde(skip_serializing)]
    pub snapshots: Vec<Grid>,

    /// Start cell chosen by the carver, which is tour node `0`.
    pub entrance: Cell,

    /// Checkpoints in placement order. Checkpoint `i` is tour node `i + 1`.
    pub checkpoints: Vec<Cell>,

    /// Tour computed by the solver, as node IDs.
    pub solution: Option<Tour>,

    /// Path through the maze that follows the tour.
    pub tour: Option<Path>,

    pub stats: Stats,

    /// Adjustments made to the checkpoint request.
    pub notices: Vec<Notice>,
}

impl Maze {
    /// Generate a maze, place the checkpoints, and solve the tour.
    ///
    /// The tour is only solved when the strategy is not [`SolveStrategy::None`] and at least two
    /// checkpoints were placed.
    ///
    /// # Errors
    ///
    /// Fail when the configuration is not valid. The other errors denote a bug.
    pub fn generate(config: &MazeConfig) -> Result<Maze, MazeError> {
        config.validate()?;
        let start: Instant = Instant::now();
        let mut rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut snapshots: Snapshots = Snapshots::new(config.record_snapshots);
        let mut stages: StageIterations = StageIterations::default();

        //
        // Carve the maze
        //
        let mut carver: MazeCarver = MazeCarver::new(config.width, config.height);
        let mut grid: Grid = carver.carve(&mut rng, &mut snapshots);
        stages.carving = carver.iteration;
        let entrance: Cell = grid
            .find(CellType::Start)
            .ok_or(MazeError::InvalidGrid(String::from("no start cell")))?;

        //
        // Place the checkpoints
        //
        let resolution: Resolution = CheckpointPlacer::resolve(
            config.checkpoints,
            grid.count(CellType::Path),
            config.strategy,
        );
        for notice in &resolution.notices {
            notice.log();
        }
        let mut placer: CheckpointPlacer = CheckpointPlacer::new();
        let checkpoints: Vec<Cell> =
            placer.place(&mut grid, resolution.count, &mut rng, &mut snapshots);
        stages.placement = placer.iteration;

        //
        // Solve the tour and mark it on the grid
        //
        let mut solution: Option<Tour> = None;
        let mut tour: Option<Path> = None;
        if config.strategy != SolveStrategy::None && checkpoints.len() >= 2 {
            let mut nodes: Vec<Cell> = Vec::with_capacity(checkpoints.len() + 1);
            nodes.push(entrance);
            nodes.extend(&checkpoints);

            let mut finder: Pathfinder = Pathfinder::new(&grid);
            let pairs: PairwisePaths = finder.all_pairs(&nodes)?;
            stages.pathfinding = finder.iteration;

            if let Some(s) = solver::solve(&pairs.matrix, config.strategy, config.solver_threads)?
            {
                let Solution { tour: t, iterations } = s;
                stages.solving = iterations;
                let order: Vec<Cell> = t.order.iter().map(|i| nodes[*i]).collect();
                let path: Path = stitch(&order, &pairs.paths)?;
                mark_path(&mut grid, &path, &nodes, &mut snapshots);
                solution = Some(t);
                tour = Some(path);
            }
        }

        let stats: Stats = Stats {
            elapsed: start.elapsed(),
            iterations: stages.total(),
            stages,
            requested_checkpoints: resolution.requested,
            actual_checkpoints: checkpoints.len(),
            tour_length: tour.as_ref().map(|p| p.len() - 1),
            strategy: config.strategy,
        };
        info!(
            "Maze {}x{}: {} checkpoints, tour length {:?}, {} iterations in {}s",
            grid.width(),
            grid.height(),
            stats.actual_checkpoints,
            stats.tour_length,
            stats.iterations,
            stats.elapsed.as_secs_f32()
        );
        if log_enabled!(Level::Debug) {
            debug!("Final grid:\n{grid}");
        }

        Ok(Maze {
            grid,
            snapshots: snapshots.into_frames(),
            entrance,
            checkpoints,
            solution,
            tour,
            stats,
            notices: resolution.notices,
        })
    }
}

/// Walk the path on the grid, recording a snapshot at every step.
///
/// The walker is shown as [`CellType::CurrentPosition`] and leaves [`CellType::TraversedPath`] or
/// [`CellType::TraversedCheckpoint`] cells behind.
/// The first cell of the path becomes the [`CellType::Start`] cell and the last one the
/// [`CellType::End`] cell.
pub fn mark_path(grid: &mut Grid, path: &Path, nodes: &[Cell], snapshots: &mut Snapshots) {
    let cells: &[Cell] = path.cells();
    let first: Cell = path.from();
    let last: usize = cells.len() - 1;

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            let previous: Cell = cells[i - 1];
            let cell_type: CellType = if previous == first {
                CellType::Start
            } else if nodes.contains(&previous) {
                CellType::TraversedCheckpoint
            } else {
                CellType::TraversedPath
            };
            grid.set(previous, cell_type);
        }
        grid.set(
            *cell,
            if i == last {
                CellType::End
            } else {
                CellType::CurrentPosition
            },
        );
        snapshots.record(grid);
    }
}
