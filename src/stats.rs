/*
stats.rs

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

//! Figures collected while generating a maze.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::solver::SolveStrategy;

/// Iteration counters, one per stage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageIterations {
    /// Neighbor inspections while carving.
    pub carving: usize,

    /// Random draws while placing the checkpoints.
    pub placement: usize,

    /// Breadth-first search steps.
    pub pathfinding: usize,

    /// States or orderings evaluated by the tour solver.
    pub solving: usize,
}

impl StageIterations {
    pub fn total(&self) -> usize {
        self.carving + self.placement + self.pathfinding + self.solving
    }
}

/// Generation statistics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stats {
    /// Wall-clock time of the whole generation.
    pub elapsed: Duration,

    /// Sum of the stage iterations.
    pub iterations: usize,

    pub stages: StageIterations,

    /// Checkpoint count computed from the request, before any adjustment.
    pub requested_checkpoints: usize,

    /// Checkpoints actually placed.
    pub actual_checkpoints: usize,

    /// Number of moves in the stitched path, if the tour was solved.
    pub tour_length: Option<usize>,

    pub strategy: SolveStrategy,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tour: String = match self.tour_length {
            Some(l) => l.to_string(),
            None => String::from("-"),
        };
        write!(
            f,
            "            time = {}s
      iterations = {}
         carving = {}
       placement = {}
     pathfinding = {}
         solving = {}
     checkpoints = {} (requested {})
        strategy = {}
     tour length = {}",
            self.elapsed.as_secs_f32(),
            self.iterations,
            self.stages.carving,
            self.stages.placement,
            self.stages.pathfinding,
            self.stages.solving,
            self.actual_checkpoints,
            self.requested_checkpoints,
            self.strategy,
            tour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_figure() {
        let stages: StageIterations = StageIterations {
            carving: 10,
            placement: 3,
            pathfinding: 40,
            solving: 7,
        };
        let s: Stats = Stats {
            elapsed: Duration::from_millis(1500),
            iterations: stages.total(),
            stages,
            requested_checkpoints: 1,
            actual_checkpoints: 2,
            tour_length: None,
            strategy: SolveStrategy::BruteForce,
        };
        assert_eq!(s.iterations, 60);

        let text: String = s.to_string();
        assert!(text.contains("time = 1.5s"));
        assert!(text.contains("checkpoints = 2 (requested 1)"));
        assert!(text.contains("strategy = brute force"));
        assert!(text.contains("tour length = -"));

        let json: String = serde_json::to_string(&s).unwrap();
        let back: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
