/*
notices.rs

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

//! Non-fatal adjustments made to the user's request.
//!
//! Generation carries on with the adjusted value, but the caller must be able to tell the user.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::solver::SolveStrategy;

/// Adjustment made while resolving the checkpoint request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A single checkpoint cannot make a tour, so two are placed.
    CheckpointsRaised { requested: usize, placed: usize },

    /// The solving strategy does not support that many checkpoints.
    CheckpointsCapped {
        requested: usize,
        allowed: usize,
        strategy: SolveStrategy,
    },

    /// The maze does not have that many free path cells.
    /// When fewer than two cells are free, no checkpoint is placed.
    NotEnoughPathCells {
        requested: usize,
        placed: usize,
        available: usize,
    },
}

impl Notice {
    /// Whether the value was decreased, as opposed to raised.
    pub fn is_decrease(&self) -> bool {
        !matches!(self, Notice::CheckpointsRaised { .. })
    }

    /// Send the notice to the log, as a warning when the value was decreased.
    pub fn log(&self) {
        if self.is_decrease() {
            warn!("{self}");
        } else {
            info!("{self}");
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notice::CheckpointsRaised { requested, placed } => write!(
                f,
                "The number of checkpoints was increased from {requested} to {placed}."
            ),
            Notice::CheckpointsCapped {
                requested,
                allowed,
                strategy,
            } => write!(
                f,
                "The number of checkpoints was decreased from {requested} to the maximum allowed \
                 {allowed} for the {strategy} algorithm."
            ),
            Notice::NotEnoughPathCells {
                requested,
                placed,
                available,
            } => write!(
                f,
                "The number of checkpoints was decreased from {requested} to {placed}: the maze \
                 has {available} free path cells."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let n: Notice = Notice::CheckpointsCapped {
            requested: 30,
            allowed: 12,
            strategy: SolveStrategy::BruteForce,
        };
        assert!(n.is_decrease());
        assert_eq!(
            n.to_string(),
            "The number of checkpoints was decreased from 30 to the maximum allowed 12 for the \
             brute force algorithm."
        );

        let n: Notice = Notice::CheckpointsRaised {
            requested: 1,
            placed: 2,
        };
        assert!(!n.is_decrease());
        assert_eq!(
            serde_json::to_string(&n).unwrap(),
            r#"{"CheckpointsRaised":{"requested":1,"placed":2}}"#
        );
    }
}
