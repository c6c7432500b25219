/*
generator.rs

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

//! Build the maze and the paths through it.
//!
//! The stages run in this order, each one mutating or reading the [`grid::Grid`]:
//!
//! * [`carver::MazeCarver`] carves a perfect maze out of a grid full of walls and picks the start
//!   cell.
//!   Every path cell is reachable from any other path cell by exactly one route.
//!
//! * [`checkpoints::CheckpointPlacer`] turns random path cells into checkpoints.
//!
//! * [`pathfinder::Pathfinder`] computes a shortest path between every pair of tour nodes, the
//!   start cell and the checkpoints, and fills the distance matrix that the
//!   [`crate::solver`] module orders.
//!
//! * [`stitcher::stitch`] joins the paths between consecutive nodes of the solved tour into a
//!   single [`path::Path`].
//!
//! Every stage that mutates the grid records its steps in a [`snapshots::Snapshots`] object.

pub mod carver;
pub mod cell;
pub mod checkpoints;
pub mod grid;
pub mod path;
pub mod pathfinder;
pub mod snapshots;
pub mod stitcher;
