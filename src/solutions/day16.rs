use std::collections::{HashMap, HashSet};

use aoc_harness::grid::{Direction, Grid, Pose};
use aoc_harness::runner::solution_runner;
use aoc_harness::search::{LeastCostOutcome, least_cost_paths};
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;

#[solution_runner(
    name = "Day 16: Reindeer Maze",
    parsed = Maze,
    part_one = Day16,
    part_two = Day16
)]
impl super::AdventOfCode2024<16> {}

/*
Input is a character grid maze: `#` walls, `S` the start (facing east), `E`
the end. Moving forward one cell costs 1 point; rotating 90 degrees costs
1000 and always goes together with the step it enables.
*/

const STEP_COST: u32 = 1;
const TURN_COST: u32 = 1000;

#[derive(Debug)]
struct Maze {
    grid: Grid<char>,
    start: Pose,
    end: Point2<i32>,
}

#[derive(thiserror::Error, Debug)]
enum ParseMazeError {
    #[error("the maze has no start marker")]
    MissingStart,

    #[error("the maze has no end marker")]
    MissingEnd,
}

impl ParseData for Maze {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = Grid::from_text(input)?;
        let start = grid.find(&'S').ok_or(ParseMazeError::MissingStart)?;
        let end = grid.find(&'E').ok_or(ParseMazeError::MissingEnd)?;
        Ok(Self {
            grid,
            start: Pose {
                position: start,
                direction: Direction::East,
            },
            end,
        })
    }
}

/*
For part 1, find the lowest score a route from start to end can earn.
*/

/// No route reaches the end at all.
#[derive(thiserror::Error, Debug)]
#[error("no route from start to end")]
struct NoRoute;

/// A search state: the reindeer's pose, plus every position its route has
/// passed through so tying optimal routes can be merged afterwards.
#[derive(Debug, Clone)]
struct Route {
    pose: Pose,
    visited: Vec<Point2<i32>>,
}

impl Maze {
    fn explore(&self) -> LeastCostOutcome<Route> {
        let start = Route {
            pose: self.start,
            visited: vec![self.start.position],
        };

        // Revisiting a position from another direction is allowed while the
        // detour could still pay for itself, i.e. while the route is at most
        // one turn cost worse than the best recorded there. The margin is
        // tuned to this cost model; it is not a general pruning rule.
        let mut best_at_position: HashMap<Point2<i32>, u32> = HashMap::new();
        let reject = move |route: &Route, cost: u32| {
            let rejected = best_at_position
                .get(&route.pose.position)
                .is_some_and(|&recorded| cost.saturating_sub(recorded) > TURN_COST);
            if !rejected {
                best_at_position.insert(route.pose.position, cost);
            }
            rejected
        };

        let successors = |route: &Route| {
            let moves = [
                (route.pose.direction, STEP_COST),
                (route.pose.direction.to_left(), TURN_COST + STEP_COST),
                (route.pose.direction.to_right(), TURN_COST + STEP_COST),
            ];
            moves
                .into_iter()
                .filter_map(|(direction, cost)| {
                    let position = route.pose.position + direction.to_vector2();
                    if *self.grid.get(position) == '#' {
                        return None;
                    }
                    let mut visited = route.visited.clone();
                    visited.push(position);
                    Some((
                        Route {
                            pose: Pose {
                                position,
                                direction,
                            },
                            visited,
                        },
                        cost,
                    ))
                })
                .collect::<Vec<_>>()
        };

        least_cost_paths(start, successors, reject, |route: &Route| {
            route.pose.position == self.end
        })
    }
}

struct Day16;

impl Solution<PartOne> for Day16 {
    type Input = Maze;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let score = input.explore().best_cost.ok_or(NoRoute)?;
        Ok(score)
    }
}

/*
For part 2, count the cells that lie on at least one of the lowest-scoring
routes; tying routes all contribute.
*/

impl Solution<PartTwo> for Day16 {
    type Input = Maze;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let outcome = input.explore();
        outcome.best_cost.ok_or(NoRoute)?;
        let best_seats: HashSet<Point2<i32>> = outcome
            .best_states
            .iter()
            .flat_map(|route| route.visited.iter().copied())
            .collect();
        Ok(best_seats.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Maze::parse(EXAMPLE_INPUT)?;
        let result = <Day16 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 7036);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Maze::parse(EXAMPLE_INPUT)?;
        let result = <Day16 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 45);
        Ok(())
    }

    #[test]
    fn straight_corridor_costs_one_per_step() -> DynamicResult<()> {
        let parsed = Maze::parse("#####\n#S.E#\n#####\n")?;
        let result = <Day16 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2);
        Ok(())
    }

    #[test]
    fn single_turn_adds_the_turn_cost() -> DynamicResult<()> {
        let parsed = Maze::parse("####\n#.E#\n#S.#\n####\n")?;
        let result = <Day16 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2 * STEP_COST + TURN_COST);
        Ok(())
    }
}
