/*
parallel.rs

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

//! Run [`held_karp::solve`] from every node in worker threads, and keep the shortest tour.
//!
//! The start nodes are queued in a job channel that the workers drain, and each worker sends its
//! tours back through a result channel.
//! Every running worker owns a full set of Held-Karp tables, so the number of workers is also
//! the memory bound: about 1.7 GB per worker with 23 checkpoints.

use log::debug;
use std::thread;

use super::held_karp::{self, MAX_NODES};
use super::matrix::DistanceMatrix;
use super::{Solution, SolveError, check_size};

/// Return the shortest tour through every node of the matrix, whatever its first node.
///
/// `threads` bounds the number of workers. By default, it is the available parallelism of the
/// host. There are never more workers than nodes.
/// When tours from several start nodes have the same length, the lowest start node wins.
pub fn solve(matrix: &DistanceMatrix, threads: Option<usize>) -> Result<Solution, SolveError> {
    let n: usize = check_size(matrix, MAX_NODES)?;
    let workers: usize = worker_count(threads, n);
    debug!("Parallel Held-Karp: {n} start nodes, {workers} workers");

    let (job_sender, job_receiver) = async_channel::unbounded::<usize>();
    let (result_sender, result_receiver) =
        async_channel::unbounded::<(usize, Result<Solution, SolveError>)>();

    for anchor in 0..n {
        if job_sender.send_blocking(anchor).is_err() {
            break;
        }
    }
    // The workers stop once the queue is empty
    job_sender.close();

    thread::scope(|s| {
        for worker in 0..workers {
            let jobs: async_channel::Receiver<usize> = job_receiver.clone();
            let results = result_sender.clone();
            s.spawn(move || {
                while let Ok(anchor) = jobs.recv_blocking() {
                    debug!("Worker {worker}: start node {anchor}");
                    let r: Result<Solution, SolveError> = held_karp::solve(matrix, anchor);
                    if results.send_blocking((anchor, r)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_sender);

    let mut best: Option<(usize, Solution)> = None;
    let mut iteration: usize = 0;
    while let Ok((anchor, r)) = result_receiver.recv_blocking() {
        let solution: Solution = match r {
            Ok(s) => s,
            Err(SolveError::NoTour) => continue,
            Err(e) => return Err(e),
        };
        iteration += solution.iterations;
        let better: bool = match &best {
            None => true,
            Some((a, b)) => {
                solution.tour.length < b.tour.length
                    || (solution.tour.length == b.tour.length && anchor < *a)
            }
        };
        if better {
            best = Some((anchor, solution));
        }
    }

    let (anchor, solution) = best.ok_or(SolveError::NoTour)?;
    debug!(
        "Parallel Held-Karp: best start node {anchor}, length {}",
        solution.tour.length
    );
    Ok(Solution {
        tour: solution.tour,
        iterations: iteration,
    })
}

/// Return the number of workers to start for `nodes` start nodes.
fn worker_count(threads: Option<usize>, nodes: usize) -> usize {
    let wanted: usize = threads.unwrap_or_else(|| {
        thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(1)
    });
    wanted.min(nodes).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{brute_force, random_matrix};

    #[test]
    fn ties_go_to_the_lowest_start_node() {
        // 0-1-2 and 2-1-0 are both 30 long
        let m: DistanceMatrix =
            DistanceMatrix::from_rows(&[vec![0.0, 4.0, 30.0], vec![4.0, 0.0, 26.0], vec![
                30.0, 26.0, 0.0,
            ]])
            .unwrap();
        for threads in [None, Some(1), Some(2), Some(64)] {
            let s: Solution = solve(&m, threads).unwrap();
            assert_eq!(s.tour.order, vec![0, 1, 2]);
            assert_eq!(s.tour.length, 30.0);
        }
    }

    #[test]
    fn worker_count_is_bounded_by_the_nodes() {
        assert_eq!(worker_count(Some(4), 10), 4);
        assert_eq!(worker_count(Some(64), 10), 10);
        assert_eq!(worker_count(Some(0), 10), 1);

        let host: usize = thread::available_parallelism().map(|p| p.get()).unwrap_or(1);
        assert_eq!(worker_count(None, 24), host.min(24));
        assert_eq!(worker_count(None, 1), 1);
    }

    #[test]
    fn matches_brute_force_from_any_start() {
        for n in 1..=7 {
            for seed in 0..4 {
                let m: DistanceMatrix = random_matrix(n, 1000 + seed * 17 + n as u64);
                let par: Solution = solve(&m, Some(3)).unwrap();
                let bf: Solution = brute_force::solve(&m, None).unwrap();
                let single: Solution = held_karp::solve(&m, 0).unwrap();

                assert_eq!(par.tour.length, bf.tour.length, "n={n} seed={seed}");
                assert!(par.tour.length <= single.tour.length);
                assert_eq!(m.path_length(&par.tour.order), Some(par.tour.length));
            }
        }
    }

    #[test]
    fn start_node_may_differ_from_the_entrance() {
        // The shortest tour runs along the chain 1-0-2, so it cannot start on 0
        let mut m: DistanceMatrix = DistanceMatrix::new(3);
        m.set(1, 0, 1.0).unwrap();
        m.set(0, 2, 1.0).unwrap();
        m.set(1, 2, 50.0).unwrap();
        let s: Solution = solve(&m, None).unwrap();
        assert_eq!(s.tour.order, vec![1, 0, 2]);
        assert_eq!(s.tour.length, 2.0);
        assert_eq!(held_karp::solve(&m, 0).unwrap().tour.length, 51.0);
    }

    #[test]
    fn errors() {
        assert_eq!(solve(&DistanceMatrix::new(0), None), Err(SolveError::Empty));
        assert_eq!(solve(&DistanceMatrix::new(4), Some(2)), Err(SolveError::NoTour));
        assert!(matches!(
            solve(&DistanceMatrix::new(MAX_NODES + 3), None),
            Err(SolveError::TooManyNodes { .. })
        ));
    }
}
