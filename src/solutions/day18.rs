use std::collections::HashMap;

use aoc_harness::grid::{Direction, Grid};
use aoc_harness::parsing::{parse_input_lines, parse_with_context};
use aoc_harness::runner::solution_runner;
use aoc_harness::search::{flood_fill, least_cost_paths};
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;

#[solution_runner(
    name = "Day 18: RAM Run",
    parsed = FallingBytes,
    part_one = Day18,
    part_two = Day18
)]
impl super::AdventOfCode2024<18> {}

/*
Input is a list of byte positions, one `x,y` pair per line, falling into a
71 by 71 memory grid in order. The escape runs from the top-left corner to
the bottom-right one, over uncorrupted cells only.
*/

const MEMORY_SIZE: i32 = 71;
const FIRST_KILOBYTE: usize = 1024;

#[derive(Debug)]
struct FallingBytes(Vec<Point2<i32>>);

#[derive(thiserror::Error, Debug)]
enum ParseByteError {
    #[error("expected a comma-separated coordinate pair")]
    MissingComma,
}

impl ParseData for FallingBytes {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let bytes = parse_input_lines(input, |_, line| -> DynamicResult<_> {
            let (x, y) = line.split_once(',').ok_or(ParseByteError::MissingComma)?;
            Ok(Point2::new(
                parse_with_context::<i32>(x.trim())?,
                parse_with_context::<i32>(y.trim())?,
            ))
        })
        .collect::<Result<_, _>>()?;
        Ok(Self(bytes))
    }
}

/*
For part 1, let the first kilobyte of bytes fall and find the fewest steps
to the exit.
*/

/// The exit is unreachable.
#[derive(thiserror::Error, Debug)]
#[error("the fallen bytes cut off the exit")]
struct ExitBlocked;

/// Build the memory grid with the given bytes marked corrupted.
fn corrupted_memory(size: i32, fallen: &[Point2<i32>]) -> Grid<char> {
    let mut memory = Grid::filled(size, size, '.');
    for &byte in fallen {
        memory.set(byte, '#');
    }
    memory
}

/// Iterate the uncorrupted cardinal neighbors of `position`.
fn open_neighbors<'memory>(
    memory: &'memory Grid<char>,
    position: Point2<i32>,
) -> impl Iterator<Item = Point2<i32>> + 'memory {
    Direction::CARDINALS
        .into_iter()
        .map(move |direction| position + direction.to_vector2())
        .filter(move |&next| memory.is_inside(next) && *memory.get(next) != '#')
}

/// Find the fewest steps from `start` to `goal` across uncorrupted cells,
/// or `None` when the exit is cut off.
fn shortest_exit(
    memory: &Grid<char>,
    start: Point2<i32>,
    goal: Point2<i32>,
) -> Option<u32> {
    let mut best_at_position: HashMap<Point2<i32>, u32> = HashMap::new();
    let reject = move |position: &Point2<i32>, cost: u32| {
        let dominated = best_at_position
            .get(position)
            .is_some_and(|&recorded| cost >= recorded);
        if !dominated {
            best_at_position.insert(*position, cost);
        }
        dominated
    };

    least_cost_paths(
        start,
        |&position: &Point2<i32>| {
            open_neighbors(memory, position)
                .map(|next| (next, 1))
                .collect::<Vec<_>>()
        },
        reject,
        |&position: &Point2<i32>| position == goal,
    )
    .best_cost
}

struct Day18;

impl Solution<PartOne> for Day18 {
    type Input = FallingBytes;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let fallen = input.0.len().min(FIRST_KILOBYTE);
        let memory = corrupted_memory(MEMORY_SIZE, &input.0[..fallen]);
        let steps = shortest_exit(
            &memory,
            Point2::new(0, 0),
            Point2::new(MEMORY_SIZE - 1, MEMORY_SIZE - 1),
        )
        .ok_or(ExitBlocked)?;
        Ok(steps)
    }
}

/*
For part 2, find the first byte whose fall cuts the exit off entirely, and
report it as `x,y`. Reachability is all that matters here, so a flood fill
replaces the costed search.
*/

/// Every byte can fall without cutting off the exit.
#[derive(thiserror::Error, Debug)]
#[error("the exit stays reachable under every fallen byte")]
struct ExitNeverBlocked;

fn exit_reachable(memory: &Grid<char>, start: Point2<i32>, goal: Point2<i32>) -> bool {
    flood_fill(start, |position| open_neighbors(memory, position)).contains(&goal)
}

impl Solution<PartTwo> for Day18 {
    type Input = FallingBytes;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let start = Point2::new(0, 0);
        let goal = Point2::new(MEMORY_SIZE - 1, MEMORY_SIZE - 1);
        for fallen in FIRST_KILOBYTE..=input.0.len() {
            let memory = corrupted_memory(MEMORY_SIZE, &input.0[..fallen]);
            if !exit_reachable(&memory, start, goal) {
                let byte = input.0[fallen - 1];
                return Ok(format!("{},{}", byte.x, byte.y));
            }
        }
        Err(ExitNeverBlocked.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    const EXAMPLE_SIZE: i32 = 7;

    #[test]
    fn shortest_exit_crosses_example_memory() -> DynamicResult<()> {
        let parsed = FallingBytes::parse(EXAMPLE_INPUT)?;
        let memory = corrupted_memory(EXAMPLE_SIZE, &parsed.0[..12]);
        let steps = shortest_exit(
            &memory,
            Point2::new(0, 0),
            Point2::new(EXAMPLE_SIZE - 1, EXAMPLE_SIZE - 1),
        );
        assert_eq!(steps, Some(22));
        Ok(())
    }

    #[test]
    fn first_blocking_byte_in_example_memory() -> DynamicResult<()> {
        let parsed = FallingBytes::parse(EXAMPLE_INPUT)?;
        let start = Point2::new(0, 0);
        let goal = Point2::new(EXAMPLE_SIZE - 1, EXAMPLE_SIZE - 1);
        let blocking = (12..=parsed.0.len()).find(|&fallen| {
            let memory = corrupted_memory(EXAMPLE_SIZE, &parsed.0[..fallen]);
            !exit_reachable(&memory, start, goal)
        });
        let byte = blocking.map(|fallen| parsed.0[fallen - 1]);
        assert_eq!(byte, Some(Point2::new(6, 1)));
        Ok(())
    }
}
