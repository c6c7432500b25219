/*
cell.rs

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

//! Grid coordinates and moves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell in the grid.
///
/// `x` is the column and `y` is the row, both starting at zero in the top-left corner.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the cell reached by moving `steps` times in the given direction, or `None` if the
    /// move goes past the top or left border.
    ///
    /// The right and bottom borders are not checked here: use [`super::grid::Grid::contains`].
    pub fn step(&self, direction: Direction, steps: usize) -> Option<Cell> {
        let (dx, dy) = direction.offset();
        let x: usize = self.x.checked_add_signed(dx * steps as isize)?;
        let y: usize = self.y.checked_add_signed(dy * steps as isize)?;
        Some(Cell { x, y })
    }

    /// Return the cell halfway between two cells of the odd lattice.
    pub fn midpoint(&self, other: &Cell) -> Cell {
        Cell {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four orthogonal moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All the directions, in the order used by the maze carver and the path finder.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column and row offsets for a single step.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_the_top_left_border() {
        let origin: Cell = Cell::new(0, 0);
        assert_eq!(origin.step(Direction::Up, 1), None);
        assert_eq!(origin.step(Direction::Left, 1), None);
        assert_eq!(origin.step(Direction::Right, 2), Some(Cell::new(2, 0)));
        assert_eq!(origin.step(Direction::Down, 2), Some(Cell::new(0, 2)));
    }

    #[test]
    fn midpoint_of_lattice_neighbors() {
        let a: Cell = Cell::new(3, 1);
        let b: Cell = Cell::new(3, 3);
        assert_eq!(a.midpoint(&b), Cell::new(3, 2));
        assert_eq!(b.midpoint(&a), Cell::new(3, 2));
    }
}
