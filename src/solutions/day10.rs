use aoc_harness::grid::{Direction, Grid};
use aoc_harness::runner::solution_runner;
use aoc_harness::search::flood_fill;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;

#[solution_runner(
    name = "Day 10: Hoof It",
    parsed = TopographicMap,
    part_one = Day10,
    part_two = Day10
)]
impl super::AdventOfCode2024<10> {}

/*
Input is a character grid of digit heights. A hiking trail starts at height
`0`, ends at height `9`, and climbs by exactly one per cardinal step.
*/

#[derive(Debug)]
struct TopographicMap(Grid<char>);

impl ParseData for TopographicMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(Grid::from_text(input)?))
    }
}

/*
For part 1, a trailhead's score is the number of `9` cells reachable from
it; sum the scores of all trailheads.
*/

impl TopographicMap {
    /// Iterate the positions one cardinal step uphill from `point`, at a
    /// height exactly one greater.
    fn uphill_steps(&self, point: Point2<i32>) -> impl Iterator<Item = Point2<i32>> + '_ {
        let grid = &self.0;
        let height = *grid.get(point);
        Direction::CARDINALS
            .into_iter()
            .map(move |direction| point + direction.to_vector2())
            .filter(move |&next| {
                grid.is_inside(next) && *grid.get(next) as u32 == height as u32 + 1
            })
    }

    fn trailheads(&self) -> impl Iterator<Item = Point2<i32>> + '_ {
        let grid = &self.0;
        grid.points().filter(move |&point| *grid.get(point) == '0')
    }

    /// The number of peaks (`9` cells) reachable by climbing from `head`.
    fn trailhead_score(&self, head: Point2<i32>) -> usize {
        flood_fill(head, |point| self.uphill_steps(point))
            .into_iter()
            .filter(|&point| *self.0.get(point) == '9')
            .count()
    }
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .trailheads()
            .map(|head| input.trailhead_score(head))
            .sum())
    }
}

/*
For part 2, a trailhead's rating counts distinct trails instead: separate
routes to the same peak each count once.
*/

impl TopographicMap {
    /// Count the distinct climbing trails from `head` to any peak. Every
    /// branch is walked in full; no visited guard, since rejoining routes
    /// are distinct trails.
    fn trailhead_rating(&self, head: Point2<i32>) -> usize {
        let mut pending = vec![head];
        let mut rating = 0;
        while let Some(point) = pending.pop() {
            if *self.0.get(point) == '9' {
                rating += 1;
            } else {
                pending.extend(self.uphill_steps(point));
            }
        }
        rating
    }
}

impl Solution<PartTwo> for Day10 {
    type Input = TopographicMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .trailheads()
            .map(|head| input.trailhead_rating(head))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 36);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = TopographicMap::parse(EXAMPLE_INPUT)?;
        let result = <Day10 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 81);
        Ok(())
    }
}
