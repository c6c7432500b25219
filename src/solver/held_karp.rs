/*
held_karp.rs

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

//! Held-Karp dynamic programming for the shortest open tour from a fixed start node.
//!
//! `cost[mask][last]` is the length of the shortest path that leaves the start node, visits
//! exactly the nodes in `mask`, and ends on `last`.
//! The start node is not part of the masks, so the tables hold `(n - 1) * 2^(n - 1)` entries.
//! With 23 checkpoints (24 nodes) that is about 1.5 GB of costs and 190 MB of parents.

use log::debug;

use super::matrix::DistanceMatrix;
use super::{Solution, SolveError, Tour, check_anchor, check_size};
use crate::config::HELD_KARP_MAX_CHECKPOINTS;

/// Maximum number of nodes: the checkpoints plus the maze entrance.
pub const MAX_NODES: usize = HELD_KARP_MAX_CHECKPOINTS + 1;

/// Parent of the states that directly follow the start node.
const NO_PARENT: u8 = u8::MAX;

/// Return the shortest tour that starts on `anchor` and visits every node of the matrix.
///
/// Edges missing from the matrix are never used.
/// When several tours have the same length, the one ending on the lowest node wins.
pub fn solve(matrix: &DistanceMatrix, anchor: usize) -> Result<Solution, SolveError> {
    let n: usize = check_size(matrix, MAX_NODES)?;
    check_anchor(anchor, n)?;
    if n == 1 {
        return Ok(Solution::single(anchor));
    }

    // Nodes other than the anchor. Bit `i` of a mask stands for `others[i]`.
    let others: Vec<usize> = (0..n).filter(|i| *i != anchor).collect();
    let m: usize = others.len();
    let subsets: usize = 1 << m;
    let mut cost: Vec<f64> = vec![f64::INFINITY; subsets * m];
    let mut parent: Vec<u8> = vec![NO_PARENT; subsets * m];
    let mut iteration: usize = 0;

    for (j, node) in others.iter().enumerate() {
        if let Some(d) = matrix.get(anchor, *node) {
            cost[(1 << j) * m + j] = d;
        }
    }

    // A mask is always processed before the larger masks that contain it
    for mask in 1..subsets {
        for last in 0..m {
            if mask & (1 << last) == 0 {
                continue;
            }
            let current: f64 = cost[mask * m + last];
            if current == f64::INFINITY {
                continue;
            }
            for next in 0..m {
                if mask & (1 << next) != 0 {
                    continue;
                }
                iteration += 1;
                let Some(d) = matrix.get(others[last], others[next]) else {
                    continue;
                };
                let index: usize = (mask | (1 << next)) * m + next;
                let candidate: f64 = current + d;
                if candidate < cost[index] {
                    cost[index] = candidate;
                    parent[index] = last as u8;
                }
            }
        }
    }

    let full: usize = subsets - 1;
    let mut best: Option<(usize, f64)> = None;
    for last in 0..m {
        let c: f64 = cost[full * m + last];
        if c < best.map_or(f64::INFINITY, |(_, b)| b) {
            best = Some((last, c));
        }
    }
    let Some((mut last, length)) = best else {
        debug!("Held-Karp from node {anchor}: no tour");
        return Err(SolveError::NoTour);
    };

    // Walk the parents back to the anchor
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut mask: usize = full;
    loop {
        order.push(others[last]);
        let p: u8 = parent[mask * m + last];
        mask &= !(1 << last);
        if p == NO_PARENT {
            break;
        }
        last = p as usize;
    }
    order.push(anchor);
    order.reverse();

    debug!("Held-Karp from node {anchor}: length {length}, {iteration} iterations");
    Ok(Solution {
        tour: Tour { order, length },
        iterations: iteration,
    })
}
