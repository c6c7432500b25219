/*
config.rs

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

//! Generation parameters and limits.
//!
//! A [`MazeConfig`] object can be built in code, from the command-line options, or loaded from a
//! JSON file such as:
//!
//! ```json
//! {
//!     "width": 31,
//!     "height": 21,
//!     "checkpoints": { "percentage": 10 },
//!     "strategy": "held-karp",
//!     "seed": 42,
//!     "record_snapshots": false,
//!     "solver_threads": null
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::MazeError;
use crate::generator::checkpoints::CheckpointRequest;
use crate::solver::SolveStrategy;

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n\
     License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>."
);

/// Smallest accepted width, before normalization to an odd value.
pub const MIN_WIDTH: usize = 4;

/// Smallest accepted height, before normalization to an odd value.
pub const MIN_HEIGHT: usize = 4;

/// Largest checkpoint percentage.
pub const MAX_PERCENTAGE: u8 = 100;

/// Most checkpoints the Held-Karp strategies accept.
pub const HELD_KARP_MAX_CHECKPOINTS: usize = 23;

/// Most checkpoints the brute force strategy accepts.
pub const BRUTE_FORCE_MAX_CHECKPOINTS: usize = 12;

/// Parameters for generating and solving a maze.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MazeConfig {
    /// Grid width in cells. Even values are raised to the next odd value.
    pub width: usize,

    /// Grid height in cells. Even values are raised to the next odd value.
    pub height: usize,

    /// Number of checkpoints.
    pub checkpoints: CheckpointRequest,

    /// Algorithm for ordering the checkpoints.
    pub strategy: SolveStrategy,

    /// Seed for the random generator. A random seed is used when not set.
    pub seed: Option<u64>,

    /// Keep a copy of the grid after every step.
    pub record_snapshots: bool,

    /// Bound on the number of threads for the parallel strategy. `None` uses the available
    /// parallelism of the host.
    pub solver_threads: Option<usize>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            checkpoints: CheckpointRequest::default(),
            strategy: SolveStrategy::default(),
            seed: None,
            record_snapshots: true,
            solver_threads: None,
        }
    }
}

impl MazeConfig {
    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// The dimensions must be at least [`MIN_WIDTH`] and [`MIN_HEIGHT`] and a percentage cannot
    /// exceed [`MAX_PERCENTAGE`].
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width < MIN_WIDTH {
            return Err(MazeError::InvalidWidth(self.width));
        }
        if self.height < MIN_HEIGHT {
            return Err(MazeError::InvalidHeight(self.height));
        }
        if let CheckpointRequest::Percentage(p) = self.checkpoints
            && p > MAX_PERCENTAGE
        {
            return Err(MazeError::InvalidPercentage(p));
        }
        Ok(())
    }

    /// Read the configuration from a JSON file.
    ///
    /// Missing parameters take their default value.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Configuration file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: MazeConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
