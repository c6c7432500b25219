/*
lib.rs

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

//! Generate a random maze, scatter checkpoints in it, and find the shortest route that visits
//! every checkpoint from the start cell.
//!
//! [`maze::Maze::generate`] runs the whole pipeline from a [`config::MazeConfig`] object.
//! The stages are also available individually in the [`generator`] and [`solver`] modules.
//!
//! ```no_run
//! use mazetour::config::MazeConfig;
//! use mazetour::maze::Maze;
//!
//! let maze: Maze = Maze::generate(&MazeConfig::default()).unwrap();
//! println!("{}", maze.grid);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod maze;
pub mod notices;
pub mod solver;
pub mod stats;
