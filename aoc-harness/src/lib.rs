//! Solution traits, grid primitives, and search routines for Advent of Code.
//!
//! The crate has two halves. The first is the solution architecture: a
//! puzzle's input type implements [`ParseData`], each part implements
//! [`Solution`], and the [`runner`] module executes them while reporting
//! progress events. The second is the toolkit the grid puzzles share: the
//! bounds-checked [`grid::Grid`], the flood-filled [`region::Region`] with
//! its shape metrics, and the generic worklist routines in [`search`].
//!
//! # Quick Start
//!
//! 1. Define an input type and implement [`ParseData`]:
//!
//! ```
//! # use aoc_harness::{DynamicResult, ParseData};
//! #
//! struct Readings(Vec<u32>);
//!
//! impl ParseData for Readings {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let values = input
//!             .lines()
//!             .map(str::parse)
//!             .collect::<Result<Vec<_>, _>>()?;
//!         Ok(Self(values))
//!     }
//! }
//! ```
//!
//! 2. Implement [`Solution`] for each part:
//!
//! ```
//! # use aoc_harness::{DynamicResult, ParseData, PartOne, Solution};
//! #
//! # struct Readings(Vec<u32>);
//! # impl ParseData for Readings {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         let values = input
//! #             .lines()
//! #             .map(str::parse)
//! #             .collect::<Result<Vec<_>, _>>()?;
//! #         Ok(Self(values))
//! #     }
//! # }
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = Readings;
//!     type Output = u32;
//!
//!     fn solve(input: &Readings) -> DynamicResult<u32> {
//!         Ok(input.0.iter().sum())
//!     }
//! }
//! ```
//!
//! 3. Execute through the [`runner`] module, usually via the
//!    [`#[solution_runner]`][runner::solution_runner] attribute.

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
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]

use std::error::Error;
use std::fmt::Display;

pub mod grid;
pub mod parsing;
pub mod region;
pub mod runner;
pub mod search;

mod private {
    /// A sealed trait keeping [`Part`][super::Part] implementations inside
    /// this crate, so new part kinds can be added without breaking callers.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// An enum to identify a solution part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker trait identifying which part a [`Solution`] solves.
///
/// Implemented only by the zero-sized markers [`PartOne`] and [`PartTwo`],
/// which are used as the generic parameter of [`Solution<P>`].
pub trait Part: private::Sealed {
    /// Get the related [`PartKind`] for this part.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] as solving part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] as solving part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// A solution to one [`Part`] of a puzzle.
///
/// A type commonly implements both `Solution<PartOne>` and
/// `Solution<PartTwo>` over the same parsed input.
pub trait Solution<P: Part> {
    /// The input data type passed to the solution.
    ///
    /// [`Solution::solve`] receives a reference to this type; set it to
    /// `str` to solve directly from the raw input string.
    type Input: ?Sized;

    /// The output data type returned from the solution.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Anything from invalid input to an infeasible puzzle state can fail a
    /// solution; errors are returned dynamically dispatched.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// A data structure created by parsing string input.
///
/// Set [`Solution::Input`] to an implementing type to have parsed data
/// passed to the solution instead of the raw input string.
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically
    /// dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
