/*
brute_force.rs

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

//! Try every ordering of the nodes.

use log::debug;

use super::matrix::DistanceMatrix;
use super::{Solution, SolveError, Tour, check_anchor, check_size};
use crate::config::BRUTE_FORCE_MAX_CHECKPOINTS;

/// Maximum number of nodes: the checkpoints plus the maze entrance.
pub const MAX_NODES: usize = BRUTE_FORCE_MAX_CHECKPOINTS + 1;

/// Rearrange the slice into the next permutation in lexicographic order.
///
/// Return `false`, leaving the slice untouched, if it already is the last permutation.
fn next_permutation(values: &mut [usize]) -> bool {
    let Some(i) = values.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let mut j: usize = values.len() - 1;
    while values[j] <= values[i] {
        j -= 1;
    }
    values.swap(i, j);
    values[i + 1..].reverse();
    true
}

/// Return the shortest tour through every node of the matrix.
///
/// With `anchor` set, only the tours starting on that node are considered.
/// Permutations are enumerated in lexicographic order and the first strictly shortest one wins.
/// A permutation that uses a missing edge is skipped.
pub fn solve(matrix: &DistanceMatrix, anchor: Option<usize>) -> Result<Solution, SolveError> {
    let n: usize = check_size(matrix, MAX_NODES)?;
    if let Some(a) = anchor {
        check_anchor(a, n)?;
    }
    if n == 1 {
        return Ok(Solution::single(0));
    }

    let mut order: Vec<usize> = Vec::with_capacity(n);
    let fixed: usize = match anchor {
        Some(a) => {
            order.push(a);
            order.extend((0..n).filter(|i| *i != a));
            1
        }
        None => {
            order.extend(0..n);
            0
        }
    };

    let mut best: Option<Tour> = None;
    let mut iteration: usize = 0;
    loop {
        iteration += 1;
        if let Some(length) = matrix.path_length(&order)
            && best.as_ref().is_none_or(|b| length < b.length)
        {
            best = Some(Tour {
                order: order.clone(),
                length,
            });
        }
        if !next_permutation(&mut order[fixed..]) {
            break;
        }
    }

    let tour: Tour = best.ok_or(SolveError::NoTour)?;
    debug!(
        "Brute force: length {}, {iteration} permutations",
        tour.length
    );
    Ok(Solution {
        tour,
        iterations: iteration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_in_lexicographic_order() {
        let mut v: Vec<usize> = vec![0, 1, 2];
        let mut seen: Vec<Vec<usize>> = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(seen, vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ]);
        assert_eq!(v, vec![2, 1, 0]);

        let mut empty: Vec<usize> = Vec::new();
        assert!(!next_permutation(&mut empty));
    }

    #[test]
    fn example_tour() {
        let m: DistanceMatrix =
            DistanceMatrix::from_rows(&[vec![0.0, 4.0, 30.0], vec![4.0, 0.0, 26.0], vec![
                30.0, 26.0, 0.0,
            ]])
            .unwrap();
        let s: Solution = solve(&m, None).unwrap();
        assert_eq!(s.tour.order, vec![0, 1, 2]);
        assert_eq!(s.tour.length, 30.0);
        assert_eq!(s.iterations, 6);

        let s: Solution = solve(&m, Some(2)).unwrap();
        assert_eq!(s.tour.order, vec![2, 1, 0]);
        assert_eq!(s.iterations, 2);
    }

    #[test]
    fn missing_edge_invalidates_the_permutation() {
        let mut m: DistanceMatrix = DistanceMatrix::new(3);
        m.set(0, 1, 1.0).unwrap();
        m.set(0, 2, 1.0).unwrap();
        let s: Solution = solve(&m, None).unwrap();
        assert_eq!(s.tour.order, vec![1, 0, 2]);
        assert_eq!(solve(&m, Some(0)), Err(SolveError::NoTour));
    }

    #[test]
    fn size_limits() {
        assert_eq!(solve(&DistanceMatrix::new(0), None), Err(SolveError::Empty));
        assert_eq!(
            solve(&DistanceMatrix::new(MAX_NODES + 1), Some(0)),
            Err(SolveError::TooManyNodes {
                nodes: MAX_NODES + 1,
                max: MAX_NODES
            })
        );
        let s: Solution = solve(&DistanceMatrix::new(1), None).unwrap();
        assert_eq!(s.tour.order, vec![0]);
    }
}
