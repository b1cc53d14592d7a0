//! Solutions implemented for Advent of Code 2024.
//!
//! This module provides [`run_day`] to dynamically run a solution by its
//! day.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2024<DAY>`] for its day as
//!    a [`SolutionRunner`], usually via `#[solution_runner]`.
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`.
//! 4. Add a match case for the day below `MATCH SOLUTIONS HERE`.

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_harness::DynamicResult;
use aoc_harness::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day04;
mod day06;
mod day08;
mod day10;
mod day11;
mod day12;
mod day15;
mod day16;
mod day17;
mod day18;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day:
///
/// ```ignore
/// // in a submodule "day06.rs"
/// #[solution_runner(name = "Day 6", parsed = Patrol, part_one = Day06, part_two = Day06)]
/// impl super::AdventOfCode2024<6> {}
/// ```
struct AdventOfCode2024<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`]
/// error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        4 => AdventOfCode2024::<4>::run(input, handler, timed),
        6 => AdventOfCode2024::<6>::run(input, handler, timed),
        8 => AdventOfCode2024::<8>::run(input, handler, timed),
        10 => AdventOfCode2024::<10>::run(input, handler, timed),
        11 => AdventOfCode2024::<11>::run(input, handler, timed),
        12 => AdventOfCode2024::<12>::run(input, handler, timed),
        15 => AdventOfCode2024::<15>::run(input, handler, timed),
        16 => AdventOfCode2024::<16>::run(input, handler, timed),
        17 => AdventOfCode2024::<17>::run(input, handler, timed),
        18 => AdventOfCode2024::<18>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
