/*
error.rs

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

//! Errors raised while generating and solving a maze.
//!
//! Recoverable situations, such as a checkpoint count that had to be decreased, are not errors.
//! They are reported as [`crate::notices::Notice`] values instead.

use std::error::Error;
use std::fmt;

use crate::generator::cell::Cell;
use crate::solver::SolveError;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum MazeError {
    /// The requested width is below the minimum.
    InvalidWidth(usize),

    /// The requested height is below the minimum.
    InvalidHeight(usize),

    /// The checkpoint percentage is above 100.
    InvalidPercentage(u8),

    /// No route between two cells. The carved maze is connected, so this is a bug.
    Unreachable { from: Cell, to: Cell },

    /// A distance between two distinct tour nodes must be a positive finite number.
    InvalidDistance { from: usize, to: usize, distance: f64 },

    /// The path stitcher did not find any precomputed path between two consecutive tour nodes.
    MissingSegment { from: Cell, to: Cell },

    /// The grid description cannot be parsed.
    InvalidGrid(String),

    /// The distance matrix is not square or not symmetric.
    InvalidMatrix(String),

    /// The tour solver failed.
    Solve(SolveError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidWidth(w) => write!(
                f,
                "the width must be at least {} (got {w})",
                crate::config::MIN_WIDTH
            ),
            MazeError::InvalidHeight(h) => write!(
                f,
                "the height must be at least {} (got {h})",
                crate::config::MIN_HEIGHT
            ),
            MazeError::InvalidPercentage(p) => write!(
                f,
                "the checkpoint percentage must be between 0 and {} (got {p})",
                crate::config::MAX_PERCENTAGE
            ),
            MazeError::Unreachable { from, to } => {
                write!(f, "cell {to} cannot be reached from cell {from}")
            }
            MazeError::InvalidDistance { from, to, distance } => {
                write!(f, "invalid distance {distance} between nodes {from} and {to}")
            }
            MazeError::MissingSegment { from, to } => {
                write!(f, "no precomputed path between {from} and {to}")
            }
            MazeError::InvalidGrid(msg) => write!(f, "invalid grid: {msg}"),
            MazeError::InvalidMatrix(msg) => write!(f, "invalid distance matrix: {msg}"),
            MazeError::Solve(e) => write!(f, "cannot solve the tour: {e}"),
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MazeError::Solve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SolveError> for MazeError {
    fn from(e: SolveError) -> Self {
        MazeError::Solve(e)
    }
}
