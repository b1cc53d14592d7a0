#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::use_self
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_harness::PartKind;
use aoc_harness::runner::OutputHandler;
use clap::{ArgAction, Parser};

mod solutions;

/// Advent of Code 2024 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 1, 2, etc).
    day: u8,

    /// Sets an alternative input file to use over the day's default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,
}

/// Read the puzzle input to a string, preferring an explicit file argument
/// over the day's default `inputs/dayNN.txt` location.
fn read_input(day: u8, input_file: Option<PathBuf>) -> Result<String> {
    let path =
        input_file.unwrap_or_else(|| PathBuf::from("inputs").join(format!("day{day:02}.txt")));
    fs::read_to_string(&path)
        .with_context(|| format!("could not read input file at: {}", path.display()))
}

/// An [`OutputHandler`] that prints runner events to standard output.
struct StdoutHandler;

impl StdoutHandler {
    fn format_duration(duration: Duration) -> String {
        if duration >= Duration::from_secs(1) {
            format!("{:.3} seconds", duration.as_secs_f32())
        } else if duration >= Duration::from_millis(1) {
            format!("{:.3} milliseconds", duration.as_secs_f64() * 1e3)
        } else {
            format!("{} microseconds", duration.as_micros())
        }
    }
}

impl OutputHandler for StdoutHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {
        // do nothing
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(duration) = duration_opt {
            println!("Input parsed in {}", Self::format_duration(duration));
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        match duration_opt {
            Some(duration) => println!("{output} ({})", Self::format_duration(duration)),
            None => println!("{output}"),
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let input = read_input(args.day, args.input)?;
    let mut handler = StdoutHandler;
    solutions::run_day(args.day, &input, &mut handler, args.timed).map_err(|dyn_error| {
        Error::from_boxed(dyn_error).context("failed to run solution")
    })
}
