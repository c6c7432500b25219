/*
matrix.rs

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

//! Distances between the tour nodes.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Symmetric matrix of the shortest distances between tour nodes.
///
/// A missing edge is `None`. The diagonal is always `Some(0.0)`, and a distance between two
/// distinct nodes is always positive: a zero there would mean two checkpoints on the same cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    /// Number of nodes.
    size: usize,

    /// Distances, row by row.
    entries: Vec<Option<f64>>,
}

impl DistanceMatrix {
    /// Create a [`DistanceMatrix`] object with no edge.
    pub fn new(size: usize) -> Self {
        let mut entries: Vec<Option<f64>> = vec![None; size * size];
        for i in 0..size {
            entries[i * size + i] = Some(0.0);
        }
        Self { size, entries }
    }

    /// Build a matrix from rows of distances, such as `[[0, 4, 30], [4, 0, 26], [30, 26, 0]]`.
    ///
    /// # Errors
    ///
    /// The rows must form a symmetric square matrix with zeros on the diagonal and positive
    /// distances elsewhere.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MazeError> {
        let size: usize = rows.len();
        let mut matrix: DistanceMatrix = Self::new(size);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MazeError::InvalidMatrix(format!(
                "row {i} has {} entries instead of {size}",
                row.len()
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            if row[i] != 0.0 {
                return Err(MazeError::InvalidMatrix(format!(
                    "the diagonal entry of row {i} is not zero"
                )));
            }
            for (j, d) in row.iter().enumerate().skip(i + 1) {
                if rows[j][i] != *d {
                    return Err(MazeError::InvalidMatrix(format!(
                        "entries ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
                matrix.set(i, j, *d)?;
            }
        }
        Ok(matrix)
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance between the two nodes, or `None` if there is no edge.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.entries[i * self.size + j]
    }

    /// Set the distance between two distinct nodes, in both directions.
    ///
    /// # Errors
    ///
    /// The distance must be positive and finite, and the nodes must be distinct and in range.
    pub fn set(&mut self, i: usize, j: usize, distance: f64) -> Result<(), MazeError> {
        if i == j || i >= self.size || j >= self.size || !distance.is_finite() || distance <= 0.0
        {
            return Err(MazeError::InvalidDistance {
                from: i,
                to: j,
                distance,
            });
        }
        self.entries[i * self.size + j] = Some(distance);
        self.entries[j * self.size + i] = Some(distance);
        Ok(())
    }

    /// Whether every pair of nodes has an edge.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.is_some())
    }

    /// Total length of the path visiting the nodes in the given order, or `None` if an edge is
    /// missing.
    pub fn path_length(&self, order: &[usize]) -> Option<f64> {
        order
            .windows(2)
            .try_fold(0.0, |total, w| Some(total + self.get(w[0], w[1])?))
    }

    /// Print the matrix.
    pub fn debug(&self) {
        for i in 0..self.size {
            let s: String = (0..self.size)
                .map(|j| match self.get(i, j) {
                    Some(d) => format!("{d:>6}"),
                    None => format!("{:>6}", "-"),
                })
                .collect();
            debug!("{i:>3} |{s}");
        }
    }
}

/// Serialized form of a [`DistanceMatrix`] object, before the entries are verified.
#[derive(Deserialize)]
struct RawMatrix {
    size: usize,
    entries: Vec<Option<f64>>,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = MazeError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        let size: usize = raw.size;
        if size.checked_mul(size) != Some(raw.entries.len()) {
            return Err(MazeError::InvalidMatrix(format!(
                "{} entries for {size} nodes",
                raw.entries.len()
            )));
        }

        let mut matrix: DistanceMatrix = Self::new(size);
        for i in 0..size {
            if raw.entries[i * size + i] != Some(0.0) {
                return Err(MazeError::InvalidMatrix(format!(
                    "the diagonal entry of row {i} is not zero"
                )));
            }
            for j in i + 1..size {
                let d: Option<f64> = raw.entries[i * size + j];
                if raw.entries[j * size + i] != d {
                    return Err(MazeError::InvalidMatrix(format!(
                        "entries ({i}, {j}) and ({j}, {i}) differ"
                    )));
                }
                if let Some(d) = d {
                    matrix.set(i, j, d)?;
                }
            }
        }
        Ok(matrix)
    }
}
