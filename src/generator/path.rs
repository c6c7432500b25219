/*
path.rs

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

//! Route through the maze.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// Path object.
///
/// Only the cells are read back from the serialized form; the other fields are recomputed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawPath")]
pub struct Path {
    /// Path as an ordered list of cells, both ends included.
    cells: Vec<Cell>,

    /// Number of moves, which is the number of cells minus one.
    /// Stored as a float to add up with the tour solver costs.
    length: f64,

    /// First cell.
    from: Cell,

    /// Last cell.
    to: Cell,
}

impl Path {
    /// Create a [`Path`] object from a non-empty list of cells.
    ///
    /// Return `None` for an empty list.
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        let from: Cell = *cells.first()?;
        let to: Cell = *cells.last()?;
        Some(Self {
            length: (cells.len() - 1) as f64,
            cells,
            from,
            to,
        })
    }

    /// Return a reference to the list of cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of moves.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A path always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the first cell.
    pub fn from(&self) -> Cell {
        self.from
    }

    /// Return the last cell.
    pub fn to(&self) -> Cell {
        self.to
    }

    /// Whether the path joins the two cells, in any direction.
    pub fn connects(&self, a: Cell, b: Cell) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Return the cells going from `a` to `b`, reversing the path if it was computed the other
    /// way round, or `None` if the path does not join these cells.
    pub fn oriented(&self, a: Cell, b: Cell) -> Option<Vec<Cell>> {
        if self.from == a && self.to == b {
            Some(self.cells.clone())
        } else if self.from == b && self.to == a {
            Some(self.cells.iter().rev().copied().collect())
        } else {
            None
        }
    }

    /// Whether the cell is in the path.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

/// Serialized form of a [`Path`] object.
#[derive(Deserialize)]
struct RawPath {
    cells: Vec<Cell>,
}

impl TryFrom<RawPath> for Path {
    type Error = String;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        Path::from_cells(raw.cells).ok_or(String::from("a path needs at least one cell"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_moves() {
        assert!(Path::from_cells(Vec::new()).is_none());

        let single: Path = Path::from_cells(vec![Cell::new(1, 1)]).unwrap();
        assert_eq!(single.length(), 0.0);
        assert_eq!(single.from(), single.to());

        let p: Path =
            Path::from_cells(vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]).unwrap();
        assert_eq!(p.length(), 2.0);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn oriented_reverses_when_needed() {
        let a: Cell = Cell::new(1, 1);
        let b: Cell = Cell::new(1, 2);
        let c: Cell = Cell::new(1, 3);
        let p: Path = Path::from_cells(vec![a, b, c]).unwrap();

        assert!(p.connects(c, a));
        assert_eq!(p.oriented(a, c), Some(vec![a, b, c]));
        assert_eq!(p.oriented(c, a), Some(vec![c, b, a]));
        assert_eq!(p.oriented(a, b), None);
    }

    #[test]
    fn json_form_is_rebuilt_from_the_cells() {
        let p: Path = serde_json::from_str(
            r#"{"cells":[{"x":1,"y":1},{"x":2,"y":1}],"length":5.0,"from":{"x":9,"y":9},"to":{"x":9,"y":9}}"#,
        )
        .unwrap();
        assert_eq!(p.length(), 1.0);
        assert_eq!(p.from(), Cell::new(1, 1));
        assert_eq!(p.to(), Cell::new(2, 1));

        let json: String = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Path>(&json).unwrap(), p);

        assert!(serde_json::from_str::<Path>(r#"{"cells":[],"length":5.0}"#).is_err());
        assert!(serde_json::from_str::<Path>(r#"{"length":0.0}"#).is_err());
    }
}
