use std::collections::HashSet;

use aoc_harness::grid::Grid;
use aoc_harness::region::Region;
use aoc_harness::runner::solution_runner;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 12: Garden Groups",
    parsed = Garden,
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2024<12> {}

/*
Input is a character grid of garden plots; touching plots growing the same
plant type form a region.
*/

#[derive(Debug)]
struct Garden(Grid<char>);

impl ParseData for Garden {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(Grid::from_text(input)?))
    }
}

impl Garden {
    /// Partition the whole grid into its regions.
    fn regions(&self) -> Vec<Region> {
        let mut claimed = HashSet::new();
        let mut regions = Vec::new();
        for point in self.0.points() {
            if claimed.contains(&point) {
                continue;
            }
            let region = Region::fill(&self.0, point);
            claimed.extend(region.cells());
            regions.push(region);
        }
        regions
    }
}

/*
For part 1, fencing a region costs its area times its perimeter; price the
whole garden.
*/

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = Garden;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .regions()
            .iter()
            .map(|region| region.area() * region.perimeter())
            .sum())
    }
}

/*
For part 2, a bulk discount prices each region at its area times its number
of fence sides, however long each side runs.
*/

impl Solution<PartTwo> for Day12 {
    type Input = Garden;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .regions()
            .iter()
            .map(|region| region.area() * region.side_count())
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_EXAMPLE_INPUT: &str = r"AAAA
BBCD
BBCC
EEEC
";

    const EXAMPLE_INPUT: &str = r"RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    #[test]
    fn part_one_solves_small_example() -> DynamicResult<()> {
        let parsed = Garden::parse(SMALL_EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 140);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Garden::parse(EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 1930);
        Ok(())
    }

    #[test]
    fn part_two_solves_small_example() -> DynamicResult<()> {
        let parsed = Garden::parse(SMALL_EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 80);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Garden::parse(EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 1206);
        Ok(())
    }
}
