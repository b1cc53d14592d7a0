use std::collections::{HashMap, HashSet};

use aoc_harness::grid::Grid;
use aoc_harness::runner::solution_runner;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;

#[solution_runner(
    name = "Day 8: Resonant Collinearity",
    parsed = AntennaMap,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2024<8> {}

/*
Input is a character grid of antennas; every alphanumeric character is an
antenna broadcasting on that character's frequency.
*/

#[derive(Debug)]
struct AntennaMap {
    grid: Grid<char>,
    antennas_by_frequency: HashMap<char, Vec<Point2<i32>>>,
}

impl ParseData for AntennaMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let grid = Grid::from_text(input)?;
        let mut antennas_by_frequency: HashMap<char, Vec<Point2<i32>>> = HashMap::new();
        for point in grid.points() {
            let cell = *grid.get(point);
            if cell.is_ascii_alphanumeric() {
                antennas_by_frequency.entry(cell).or_default().push(point);
            }
        }
        Ok(Self {
            grid,
            antennas_by_frequency,
        })
    }
}

/*
For part 1, each ordered pair of same-frequency antennas projects an
antinode: the point in line with both, on the far side of the first, as far
from it as the two antennas are apart. Count the distinct antinode positions
inside the map.
*/

impl AntennaMap {
    /// Iterate the ordered pairs of distinct same-frequency antennas.
    fn antenna_pairs(&self) -> impl Iterator<Item = (Point2<i32>, Point2<i32>)> + '_ {
        self.antennas_by_frequency.values().flat_map(|antennas| {
            antennas.iter().flat_map(move |&first| {
                antennas
                    .iter()
                    .filter_map(move |&second| (first != second).then_some((first, second)))
            })
        })
    }
}

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut antinodes = HashSet::new();
        for (first, second) in input.antenna_pairs() {
            let antinode = first - (second - first);
            if input.grid.is_inside(antinode) {
                antinodes.insert(antinode);
            }
        }
        Ok(antinodes.len())
    }
}

/*
For part 2, resonant harmonics put an antinode at every grid position in
line with a pair, the antennas themselves included.
*/

impl Solution<PartTwo> for Day08 {
    type Input = AntennaMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut antinodes = HashSet::new();
        for (first, second) in input.antenna_pairs() {
            let delta = second - first;
            let mut antinode = first;
            while input.grid.is_inside(antinode) {
                antinodes.insert(antinode);
                antinode -= delta;
            }
        }
        Ok(antinodes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 14);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = AntennaMap::parse(EXAMPLE_INPUT)?;
        let result = <Day08 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 34);
        Ok(())
    }
}
