//! Functions and traits for running solutions.
//!
//! A runnable solution implements [`SolutionRunner`], normally through the
//! [`#[solution_runner]`][solution_runner] attribute macro:
//!
//! ```
//! # use aoc_harness::runner::solution_runner;
//! # use aoc_harness::{DynamicResult, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     type Output = usize;
//!
//!     fn solve(input: &str) -> DynamicResult<usize> {
//!         Ok(input.lines().count())
//!     }
//! }
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! struct Day01Runner;
//! ```

use std::fmt::Display;
use std::time::Duration;

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

// re-export the procedural macro next to the machinery it wires up
pub use aoc_harness_macros::solution_runner;

/// A handler for the events emitted while running a solution.
///
/// The runner reports each step — naming the solution, parsing input, and
/// solving parts — through these callbacks, leaving presentation to the
/// caller: a CLI prints them, tests can collect them.
pub trait OutputHandler {
    /// The solution's display name, emitted before any other event.
    fn solution_name(&mut self, name: &str);

    /// Input parsing is starting.
    fn parse_start(&mut self);

    /// Input parsing finished; the duration is passed when timing is
    /// enabled.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part is starting.
    fn part_start(&mut self, part: PartKind);

    /// A part finished with `output`; the duration is passed when timing is
    /// enabled.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Evaluate an expression, pairing its result with the elapsed
/// [`Duration`][std::time::Duration] when `$timed` is true and with `None`
/// otherwise.
///
/// Side effects of the expression are part of the measured time.
macro_rules! measure_if_timed {
    ($expr:expr, $timed:expr) => {{
        if $timed {
            let start = ::std::time::Instant::now();
            let result = $expr;
            (result, Some(start.elapsed()))
        } else {
            ($expr, None)
        }
    }};
}

/// Run a solution's parse step, reporting events through the handler.
fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure_if_timed!(D::parse(input), timed);
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run one solution part, reporting events through the handler.
fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure_if_timed!(S::solve(input), timed);
    let output = result?;
    handler.part_output(part, &output, duration_opt);
    Ok(())
}

/// Run a solution that only implements part one and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution is propagated.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)
}

/// Run a solution that implements both parts and accepts string input.
///
/// # Errors
///
/// Any dynamically dispatched error from the solution parts is propagated.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Run a solution that implements part one over parsed input data.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution is
/// propagated.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Run a solution that implements both parts over parsed input data.
///
/// The input is parsed once and lent to both parts.
///
/// # Errors
///
/// Any dynamically dispatched error from parsing or the solution parts is
/// propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A trait for solutions that can be run.
///
/// Implement with the [`solution_runner`] attribute macro.
pub trait SolutionRunner {
    /// Run the solution against `input`, reporting events through `handler`
    /// and timing each step when `timed` is set.
    ///
    /// # Errors
    ///
    /// Any dynamically dispatched error from running the solution is
    /// propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}
