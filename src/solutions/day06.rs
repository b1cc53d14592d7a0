use std::collections::HashSet;

use aoc_harness::grid::{Direction, Grid, Pose};
use aoc_harness::runner::solution_runner;
use aoc_harness::search::deterministic_walk;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;
use rayon::prelude::*;

#[solution_runner(
    name = "Day 6: Guard Gallivant",
    parsed = Patrol,
    part_one = Day06,
    part_two = Day06
)]
impl super::AdventOfCode2024<6> {}

/*
Input is a character grid of a lab: `#` marks an obstruction and `^` the
guard, facing up. The guard walks straight ahead until something blocks the
next cell, turns 90 degrees clockwise when it does, and is gone once a step
leaves the mapped area.
*/

#[derive(Debug)]
struct Patrol {
    grid: Grid<char>,
    start: Pose,
}

#[derive(thiserror::Error, Debug)]
enum ParsePatrolError {
    #[error("input has no guard start marker")]
    MissingGuard,
}

impl ParseData for Patrol {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = Grid::from_text(input)?;
        let position = grid.find(&'^').ok_or(ParsePatrolError::MissingGuard)?;
        Ok(Self {
            grid,
            start: Pose {
                position,
                direction: Direction::North,
            },
        })
    }
}

/*
For part 1, count the distinct positions the guard covers before leaving the
area.
*/

/// The guard's unobstructed route never leaves the grid.
#[derive(thiserror::Error, Debug)]
#[error("the unobstructed patrol loops without leaving the grid")]
struct PatrolNeverLeaves;

impl Patrol {
    /// Advance the guard one step: turn clockwise until the cell ahead is
    /// free, then move into it. Returns `None` once the guard steps off the
    /// grid.
    ///
    /// A guard boxed in on all four sides stays put; the walk then sees the
    /// repeated pose and reports a loop rather than rotating forever.
    fn step(&self, pose: Pose, obstruction: Option<Point2<i32>>) -> Option<Pose> {
        let mut direction = pose.direction;
        for _ in 0..Direction::CARDINALS.len() {
            let ahead = pose.position + direction.to_vector2();
            if !self.grid.is_inside(ahead) {
                return None;
            }
            if *self.grid.get(ahead) == '#' || Some(ahead) == obstruction {
                direction = direction.to_right();
            } else {
                return Some(Pose {
                    position: ahead,
                    direction,
                });
            }
        }
        Some(pose)
    }

    /// Walk the guard from its start, optionally with one extra obstruction.
    /// `None` means the walk loops instead of leaving the grid.
    fn walk(&self, obstruction: Option<Point2<i32>>) -> Option<Vec<Pose>> {
        deterministic_walk(self.start, |pose| self.step(pose, obstruction))
    }

    /// The distinct positions on the unobstructed route.
    fn unobstructed_route(&self) -> Option<HashSet<Point2<i32>>> {
        self.walk(None)
            .map(|poses| poses.into_iter().map(|pose| pose.position).collect())
    }
}

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = Patrol;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let route = input.unobstructed_route().ok_or(PatrolNeverLeaves)?;
        Ok(route.len())
    }
}

/*
For part 2, count the positions where placing a single new obstruction traps
the guard in a loop.

Only cells on the unobstructed route can change anything: the guard never
reaches an obstruction anywhere else. Each candidate simulation is
independent and reads the shared grid immutably, so they run across threads.
*/

impl Solution<PartTwo> for Day06 {
    type Input = Patrol;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let candidates = input.unobstructed_route().ok_or(PatrolNeverLeaves)?;
        let looping = candidates
            .par_iter()
            .filter(|&&candidate| {
                candidate != input.start.position && input.walk(Some(candidate)).is_none()
            })
            .count();
        Ok(looping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Patrol::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 41);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Patrol::parse(EXAMPLE_INPUT)?;
        let result = <Day06 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 6);
        Ok(())
    }

    #[test]
    fn boxed_in_guard_counts_as_looping() -> DynamicResult<()> {
        let parsed = Patrol::parse(".#.\n#^#\n.#.\n")?;
        assert_eq!(parsed.walk(None), None);
        Ok(())
    }
}
