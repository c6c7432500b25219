/*
solver.rs

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

//! Find the shortest tour through the checkpoints.
//!
//! A tour is an open path: it visits every node of the [`matrix::DistanceMatrix`] exactly once
//! and does not come back to its first node.
//! Node `0` is the maze entrance and node `i + 1` is checkpoint `i`.

pub mod brute_force;
pub mod held_karp;
pub mod matrix;
pub mod parallel;

use clap::ValueEnum;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Instant;
use strum_macros::FromRepr;

use crate::config::{BRUTE_FORCE_MAX_CHECKPOINTS, HELD_KARP_MAX_CHECKPOINTS};
use matrix::DistanceMatrix;

/// Algorithm used to order the checkpoints.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
#[serde(rename_all = "kebab-case")]
pub enum SolveStrategy {
    /// Only place the checkpoints.
    None,

    /// Held-Karp dynamic programming, starting from the maze entrance.
    HeldKarp,

    /// Held-Karp from every node, spread over worker threads.
    #[default]
    HeldKarpParallel,

    /// Try every ordering.
    BruteForce,
}

impl SolveStrategy {
    /// Maximum number of checkpoints the strategy accepts, or `None` if unbounded.
    pub fn max_checkpoints(&self) -> Option<usize> {
        match self {
            SolveStrategy::None => None,
            SolveStrategy::HeldKarp | SolveStrategy::HeldKarpParallel => {
                Some(HELD_KARP_MAX_CHECKPOINTS)
            }
            SolveStrategy::BruteForce => Some(BRUTE_FORCE_MAX_CHECKPOINTS),
        }
    }
}

impl fmt::Display for SolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveStrategy::None => write!(f, "none"),
            SolveStrategy::HeldKarp => write!(f, "Held-Karp"),
            SolveStrategy::HeldKarpParallel => write!(f, "parallel Held-Karp"),
            SolveStrategy::BruteForce => write!(f, "brute force"),
        }
    }
}

/// Type of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The distance matrix has no node.
    Empty,

    /// The distance matrix has more nodes than the algorithm accepts.
    TooManyNodes { nodes: usize, max: usize },

    /// The start node is not in the matrix.
    InvalidAnchor { anchor: usize, nodes: usize },

    /// Every ordering goes through a missing edge.
    NoTour,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Empty => write!(f, "no node to visit"),
            SolveError::TooManyNodes { nodes, max } => {
                write!(f, "{nodes} nodes to visit, but the maximum is {max}")
            }
            SolveError::InvalidAnchor { anchor, nodes } => {
                write!(f, "start node {anchor} is not one of the {nodes} nodes")
            }
            SolveError::NoTour => write!(f, "no tour goes through every node"),
        }
    }
}

impl Error for SolveError {}

/// Ordering of the tour nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tour {
    /// Node IDs in visiting order.
    pub order: Vec<usize>,

    /// Sum of the distances between consecutive nodes.
    pub length: f64,
}

/// Tour and the work it took to find it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub tour: Tour,

    /// Number of states or orderings evaluated.
    pub iterations: usize,
}

impl Solution {
    /// Solution for a matrix with a single node.
    fn single(node: usize) -> Self {
        Self {
            tour: Tour {
                order: vec![node],
                length: 0.0,
            },
            iterations: 0,
        }
    }
}

/// Return the number of nodes in the matrix, after checking that the algorithm can handle them.
fn check_size(matrix: &DistanceMatrix, max: usize) -> Result<usize, SolveError> {
    let nodes: usize = matrix.size();
    if nodes == 0 {
        return Err(SolveError::Empty);
    }
    if nodes > max {
        return Err(SolveError::TooManyNodes { nodes, max });
    }
    Ok(nodes)
}

/// Check that the start node is in the matrix.
fn check_anchor(anchor: usize, nodes: usize) -> Result<(), SolveError> {
    if anchor >= nodes {
        return Err(SolveError::InvalidAnchor { anchor, nodes });
    }
    Ok(())
}

/// Order the nodes of the matrix with the given strategy.
///
/// `threads` bounds the number of workers for [`SolveStrategy::HeldKarpParallel`], which
/// otherwise uses the available parallelism of the host. Every worker allocates its own tables.
///
/// Return `Ok(None)` for [`SolveStrategy::None`].
pub fn solve(
    matrix: &DistanceMatrix,
    strategy: SolveStrategy,
    threads: Option<usize>,
) -> Result<Option<Solution>, SolveError> {
    let start: Instant = Instant::now();
    debug!("Solving {} nodes with {strategy}", matrix.size());

    let solution: Solution = match strategy {
        SolveStrategy::None => return Ok(None),
        SolveStrategy::HeldKarp => held_karp::solve(matrix, 0)?,
        SolveStrategy::HeldKarpParallel => parallel::solve(matrix, threads)?,
        SolveStrategy::BruteForce => brute_force::solve(matrix, Some(0))?,
    };

    info!(
        "{strategy}: tour {:?}, length {}, {} iterations in {}s",
        solution.tour.order,
        solution.tour.length,
        solution.iterations,
        start.elapsed().as_secs_f32()
    );
    Ok(Some(solution))
}

/// Symmetric matrix with random integer distances, for the tests.
#[cfg(test)]
pub(crate) fn random_matrix(size: usize, seed: u64) -> DistanceMatrix {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    let mut matrix: DistanceMatrix = DistanceMatrix::new(size);
    for i in 0..size {
        for j in i + 1..size {
            matrix
                .set(i, j, rng.random_range(1..50) as f64)
                .expect("distances are positive");
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[vec![0.0, 4.0, 30.0], vec![4.0, 0.0, 26.0], vec![
            30.0, 26.0, 0.0,
        ]])
        .unwrap()
    }

    #[test]
    fn none_strategy_does_not_solve() {
        assert_eq!(solve(&example(), SolveStrategy::None, None), Ok(None));
    }

    #[test]
    fn every_strategy_finds_the_example_tour() {
        for strategy in [
            SolveStrategy::HeldKarp,
            SolveStrategy::HeldKarpParallel,
            SolveStrategy::BruteForce,
        ] {
            let s: Solution = solve(&example(), strategy, None).unwrap().unwrap();
            assert_eq!(s.tour.order, vec![0, 1, 2], "{strategy}");
            assert_eq!(s.tour.length, 30.0, "{strategy}");
            assert!(s.iterations > 0);
        }
    }

    #[test]
    fn empty_matrix_is_an_error() {
        let m: DistanceMatrix = DistanceMatrix::new(0);
        assert_eq!(
            solve(&m, SolveStrategy::HeldKarp, None),
            Err(SolveError::Empty)
        );
        assert_eq!(
            solve(&m, SolveStrategy::BruteForce, None),
            Err(SolveError::Empty)
        );
    }

    #[test]
    fn strategy_limits() {
        assert_eq!(SolveStrategy::None.max_checkpoints(), None);
        assert_eq!(SolveStrategy::HeldKarp.max_checkpoints(), Some(23));
        assert_eq!(SolveStrategy::HeldKarpParallel.max_checkpoints(), Some(23));
        assert_eq!(SolveStrategy::BruteForce.max_checkpoints(), Some(12));
        assert_eq!(SolveStrategy::default(), SolveStrategy::HeldKarpParallel);
        assert_eq!(SolveStrategy::from_repr(3), Some(SolveStrategy::BruteForce));
    }

    #[test]
    fn strategy_names() {
        assert_eq!(
            serde_json::to_string(&SolveStrategy::HeldKarpParallel).unwrap(),
            "\"held-karp-parallel\""
        );
        let s: SolveStrategy = serde_json::from_str("\"brute-force\"").unwrap();
        assert_eq!(s, SolveStrategy::BruteForce);
        let s: SolveStrategy = SolveStrategy::from_str("held-karp", false).unwrap();
        assert_eq!(s, SolveStrategy::HeldKarp);
    }
}
