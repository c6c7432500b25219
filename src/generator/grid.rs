/*
grid.rs

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

//! Cell matrix of the maze.

use log::{Level, debug, log_enabled};
use serde::Deserialize;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use strum_macros::FromRepr;

use super::cell::{Cell, Direction};
use crate::error::MazeError;

/// Type of a grid cell.
///
/// The numeric codes are stable: they are used in the serialized form of the grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum CellType {
    Path = 0,
    #[default]
    Wall = 1,
    Checkpoint = 2,
    TraversedPath = 3,
    TraversedCheckpoint = 4,
    CurrentPosition = 5,
    Start = 6,
    End = 7,
}

impl CellType {
    /// Character used by [`Grid::parse`] and by the text representation of the grid.
    pub fn symbol(&self) -> char {
        match self {
            CellType::Path => '.',
            CellType::Wall => '#',
            CellType::Checkpoint => '*',
            CellType::TraversedPath => 'o',
            CellType::TraversedCheckpoint => '+',
            CellType::CurrentPosition => '@',
            CellType::Start => 'S',
            CellType::End => 'E',
        }
    }

    /// Return the cell type for the given character, if any.
    pub fn from_symbol(c: char) -> Option<CellType> {
        match c {
            '.' | ' ' => Some(CellType::Path),
            '#' => Some(CellType::Wall),
            '*' => Some(CellType::Checkpoint),
            'o' => Some(CellType::TraversedPath),
            '+' => Some(CellType::TraversedCheckpoint),
            '@' => Some(CellType::CurrentPosition),
            'S' => Some(CellType::Start),
            'E' => Some(CellType::End),
            _ => None,
        }
    }

    /// Numeric code of the cell type.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Whether the cell can be walked through.
    pub fn is_open(&self) -> bool {
        *self != CellType::Wall
    }
}

/// Rectangular matrix of cells, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a [`Grid`] object filled with walls.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellType::Wall; width * height],
        }
    }

    /// Build a grid from its text representation, one line per row:
    ///
    /// ```text
    /// #####
    /// #S..#
    /// ###.#
    /// #*..#
    /// #####
    /// ```
    ///
    /// See [`CellType::symbol`] for the characters. A space is read as a path cell. Trailing
    /// whitespace and empty lines are ignored.
    pub fn parse(source: &str) -> Result<Self, MazeError> {
        let mut width: usize = 0;
        let mut cells: Vec<CellType> = Vec::new();
        let mut height: usize = 0;

        for row in source.lines() {
            let r: &str = row.trim_end();
            if r.is_empty() {
                continue;
            }
            let row_length: usize = r.chars().count();
            if height == 0 {
                width = row_length;
            } else if row_length != width {
                return Err(MazeError::InvalidGrid(format!(
                    "row {height} has {row_length} cells instead of {width}"
                )));
            }
            for c in r.chars() {
                match CellType::from_symbol(c) {
                    Some(t) => cells.push(t),
                    None => {
                        return Err(MazeError::InvalidGrid(format!(
                            "unknown cell symbol '{c}' in row {height}"
                        )));
                    }
                }
            }
            height += 1;
        }

        if height == 0 {
            return Err(MazeError::InvalidGrid(String::from("empty grid")));
        }

        let grid: Grid = Self {
            width,
            height,
            cells,
        };
        if log_enabled!(Level::Debug) {
            debug!("Parsed grid {}x{}", grid.width, grid.height);
            for line in grid.to_string().lines() {
                debug!("{line}");
            }
        }
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell is inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Get the type of the cell. Cells outside the grid are walls.
    pub fn get(&self, cell: Cell) -> CellType {
        if self.contains(cell) {
            self.cells[cell.y * self.width + cell.x]
        } else {
            CellType::Wall
        }
    }

    /// Set the type of the cell. Cells outside the grid are ignored.
    pub fn set(&mut self, cell: Cell, cell_type: CellType) {
        if self.contains(cell) {
            self.cells[cell.y * self.width + cell.x] = cell_type;
        }
    }

    /// Whether the cell is inside the grid and is not a wall.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell).is_open()
    }

    /// Return the open cells adjacent to the given cell, in the [`Direction::ALL`] order.
    pub fn open_neighbors(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .iter()
            .filter_map(|d| cell.step(*d, 1))
            .filter(|c| self.is_open(*c))
            .collect()
    }

    /// Number of cells of the given type.
    pub fn count(&self, cell_type: CellType) -> usize {
        self.cells.iter().filter(|t| **t == cell_type).count()
    }

    /// Return the cells of the given type, row by row.
    pub fn cells_of(&self, cell_type: CellType) -> Vec<Cell> {
        self.iter()
            .filter(|(_, t)| *t == cell_type)
            .map(|(c, _)| c)
            .collect()
    }

    /// Return the first cell of the given type, row by row.
    pub fn find(&self, cell_type: CellType) -> Option<Cell> {
        self.iter().find(|(_, t)| *t == cell_type).map(|(c, _)| c)
    }

    /// Iterate over the matrix, row by row.
    ///
    /// # Example:
    ///
    /// ```
    /// use mazetour::generator::grid::{CellType, Grid};
    ///
    /// let grid: Grid = Grid::parse("###\n#S#\n###").unwrap();
    /// for (cell, t) in grid.iter().filter(|(_, t)| t.is_open()) {
    ///     assert_eq!(t, CellType::Start);
    ///     assert_eq!((cell.x, cell.y), (1, 1));
    /// }
    /// ```
    pub fn iter(&self) -> GridIterator<'_> {
        GridIterator {
            grid: self,
            index: 0,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let s: String = row.iter().map(|t| t.symbol()).collect();
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Iterator for the cell matrix.
pub struct GridIterator<'a> {
    grid: &'a Grid,
    index: usize,
}

impl Iterator for GridIterator<'_> {
    type Item = (Cell, CellType);

    fn next(&mut self) -> Option<Self::Item> {
        let t: CellType = *self.grid.cells.get(self.index)?;
        let cell: Cell = Cell::new(self.index % self.grid.width, self.index / self.grid.width);
        self.index += 1;
        Some((cell, t))
    }
}

/// Serialize a [`Grid`] object.
///
/// The cells are stored as their numeric codes (see [`CellType::code`]), row by row.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `3` is the number of fields to serialize
        let mut state = serializer.serialize_struct("Grid", 3)?;
        let codes: Vec<u8> = self.cells.iter().map(|t| t.code()).collect();
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("cells", &codes)?;
        state.end()
    }
}

/// Serialized form of a [`Grid`] object, before the cell codes are verified.
#[derive(Deserialize)]
struct RawGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = MazeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.width * raw.height {
            return Err(MazeError::InvalidGrid(format!(
                "{} cells for a {}x{} grid",
                raw.cells.len(),
                raw.width,
                raw.height
            )));
        }
        let cells: Vec<CellType> = raw
            .cells
            .iter()
            .map(|code| {
                CellType::from_repr(*code)
                    .ok_or_else(|| MazeError::InvalidGrid(format!("unknown cell code {code}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "
#####
#S..#
###.#
#*..#
#####
";

    #[test]
    fn parse_reads_every_symbol() {
        let grid: Grid = Grid::parse(SMALL).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.get(Cell::new(1, 1)), CellType::Start);
        assert_eq!(grid.get(Cell::new(1, 3)), CellType::Checkpoint);
        assert_eq!(grid.get(Cell::new(3, 2)), CellType::Path);
        assert_eq!(grid.count(CellType::Path), 5);
        assert_eq!(grid.find(CellType::Start), Some(Cell::new(1, 1)));
    }

    #[test]
    fn parse_rejects_ragged_rows_and_unknown_symbols() {
        assert!(matches!(
            Grid::parse("###\n##\n"),
            Err(MazeError::InvalidGrid(_))
        ));
        assert!(matches!(
            Grid::parse("#?#\n"),
            Err(MazeError::InvalidGrid(_))
        ));
        assert!(matches!(Grid::parse("\n\n"), Err(MazeError::InvalidGrid(_))));
    }

    #[test]
    fn display_matches_parse_input() {
        let grid: Grid = Grid::parse(SMALL).unwrap();
        assert_eq!(grid.to_string().trim(), SMALL.trim());
    }

    #[test]
    fn outside_cells_are_walls() {
        let mut grid: Grid = Grid::parse(SMALL).unwrap();
        assert_eq!(grid.get(Cell::new(9, 0)), CellType::Wall);
        grid.set(Cell::new(9, 0), CellType::Path);
        assert_eq!(grid.count(CellType::Path), 5);
    }

    #[test]
    fn open_neighbors_skip_walls() {
        let grid: Grid = Grid::parse(SMALL).unwrap();
        assert_eq!(grid.open_neighbors(Cell::new(3, 2)), vec![
            Cell::new(3, 1),
            Cell::new(3, 3)
        ]);
    }

    #[test]
    fn serialized_form_uses_cell_codes() {
        let grid: Grid = Grid::parse("#S\n*.").unwrap();
        let json: String = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"width":2,"height":2,"cells":[1,6,2,0]}"#);

        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        let bad = serde_json::from_str::<Grid>(r#"{"width":1,"height":1,"cells":[9]}"#);
        assert!(bad.is_err());
        let short = serde_json::from_str::<Grid>(r#"{"width":2,"height":1,"cells":[1]}"#);
        assert!(short.is_err());
    }
}
