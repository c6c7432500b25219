/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a 31x21 maze with 8 checkpoints, print it, and print some statistics:
//!
//! ```
//! $ mazetour --width 31 --height 21 --count 8 --seed 42 --print-grid
//! ```
//!
//! Use 10% of the path cells as checkpoints, solve with a single Held-Karp run, and print the
//! result in JSON format:
//!
//! ```
//! $ mazetour -p 10 -s held-karp --json
//! ```
//!
//! Read the parameters from a file:
//!
//! ```
//! $ mazetour --config maze.json
//! ```

use clap::Parser;
use log::{LevelFilter, debug};
use std::path::PathBuf;

use mazetour::config::{COPYRIGHT_NOTICE, MazeConfig};
use mazetour::generator::checkpoints::CheckpointRequest;
use mazetour::maze::Maze;
use mazetour::solver::SolveStrategy;

/// Generate a random maze and find the shortest tour through its checkpoints.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Width of the maze in cells
    #[arg(short = 'W', long, default_value_t = 21)]
    width: usize,

    /// Height of the maze in cells
    #[arg(short = 'H', long, default_value_t = 21)]
    height: usize,

    /// Number of checkpoints [default: 5]
    #[arg(short, long, group = "checkpoints")]
    count: Option<usize>,

    /// Number of checkpoints as a percentage of the path cells
    #[arg(short, long, group = "checkpoints")]
    percentage: Option<u8>,

    /// Algorithm for ordering the checkpoints
    #[arg(value_enum, short, long, default_value_t = SolveStrategy::HeldKarpParallel)]
    strategy: SolveStrategy,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of threads for the parallel strategy
    #[arg(short, long)]
    threads: Option<usize>,

    /// Do not record the intermediate steps
    #[arg(long, default_value_t = false)]
    no_snapshots: bool,

    /// Read the parameters from a JSON file
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "width", "height", "count", "percentage", "strategy", "seed", "threads", "no_snapshots"
        ]
    )]
    config: Option<PathBuf>,

    /// Print the result in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print the final grid
    #[arg(long, default_value_t = false)]
    print_grid: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Build the configuration from the individual options.
    fn to_config(&self) -> MazeConfig {
        let checkpoints: CheckpointRequest = match (self.count, self.percentage) {
            (_, Some(p)) => CheckpointRequest::Percentage(p),
            (Some(n), None) => CheckpointRequest::Count(n),
            (None, None) => CheckpointRequest::default(),
        };
        MazeConfig {
            width: self.width,
            height: self.height,
            checkpoints,
            strategy: self.strategy,
            seed: self.seed,
            record_snapshots: !self.no_snapshots,
            solver_threads: self.threads,
        }
    }
}

/// Parse the command-line options, generate the maze, and print the result.
///
/// Return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    let mut builder: env_logger::Builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
    debug!("{args:?}");

    let config: MazeConfig = match &args.config {
        Some(path) => match MazeConfig::load(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("Error: {}: {error}", path.display());
                return 1;
            }
        },
        None => args.to_config(),
    };

    let maze: Maze = match Maze::generate(&config) {
        Ok(m) => m,
        Err(error) => {
            eprintln!("Error: {error}");
            return 1;
        }
    };
    for notice in &maze.notices {
        eprintln!("{notice}");
    }

    if args.print_grid {
        println!("{}", maze.grid);
    }

    if args.json {
        match serde_json::to_string_pretty(&maze) {
            Ok(s) => println!("{s}"),
            Err(error) => {
                eprintln!("Error: {error}");
                return 1;
            }
        }
    } else {
        println!("{}", maze.stats);
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args: Args = Args::try_parse_from(["mazetour"]).unwrap();
        assert_eq!(args.to_config(), MazeConfig::default());
    }

    #[test]
    fn individual_options() {
        let args: Args = Args::try_parse_from([
            "mazetour",
            "-W",
            "31",
            "--height",
            "11",
            "-p",
            "10",
            "-s",
            "brute-force",
            "--seed",
            "9",
            "--threads",
            "2",
            "--no-snapshots",
        ])
        .unwrap();
        let c: MazeConfig = args.to_config();
        assert_eq!(c.width, 31);
        assert_eq!(c.height, 11);
        assert_eq!(c.checkpoints, CheckpointRequest::Percentage(10));
        assert_eq!(c.strategy, SolveStrategy::BruteForce);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.solver_threads, Some(2));
        assert!(!c.record_snapshots);
    }

    #[test]
    fn conflicting_options() {
        assert!(Args::try_parse_from(["mazetour", "-c", "3", "-p", "10"]).is_err());
        assert!(Args::try_parse_from(["mazetour", "--config", "m.json", "--width", "9"]).is_err());
        assert!(Args::try_parse_from(["mazetour", "--config", "m.json", "--json"]).is_ok());
        assert!(Args::try_parse_from(["mazetour", "-s", "fastest"]).is_err());
    }
}
