use aoc_harness::grid::{Grid, neighbor_offsets};
use aoc_harness::runner::solution_runner;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 4: Ceres Search",
    parsed = WordSearch,
    part_one = Day04,
    part_two = Day04
)]
impl super::AdventOfCode2024<4> {}

/*
Input is a character grid of a word search.
*/

#[derive(Debug)]
struct WordSearch(Grid<char>);

impl ParseData for WordSearch {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(Self(Grid::from_text(input)?))
    }
}

/*
For part 1, count every occurrence of `XMAS`: horizontal, vertical, or
diagonal, forwards or backwards, overlapping freely.
*/

const WORD: [char; 4] = ['X', 'M', 'A', 'S'];

impl WordSearch {
    /// Check for the word reading from `start` along `direction`.
    fn word_reads_along(&self, start: Point2<i32>, direction: Vector2<i32>) -> bool {
        let mut point = start;
        for expected in WORD {
            if !self.0.is_inside(point) || *self.0.get(point) != expected {
                return false;
            }
            point += direction;
        }
        true
    }

    /// Count the directions in which the word reads from `start`.
    fn count_words_at(&self, start: Point2<i32>) -> usize {
        neighbor_offsets()
            .into_iter()
            .filter(|&direction| self.word_reads_along(start, direction))
            .count()
    }
}

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .points()
            .map(|point| input.count_words_at(point))
            .sum())
    }
}

/*
For part 2, the search is actually for two `MAS` in the shape of an X: both
diagonals through a shared `A`, each reading `MAS` or `SAM`.
*/

impl WordSearch {
    /// Check whether both diagonals through `center` read `MAS` or `SAM`.
    ///
    /// `center` must have all four diagonal neighbors inside the grid.
    fn is_crossed_mas_center(&self, center: Point2<i32>) -> bool {
        const MAS: [char; 3] = ['M', 'A', 'S'];
        const SAM: [char; 3] = ['S', 'A', 'M'];

        let diagonal = |dx: i32, dy: i32| {
            [
                *self.0.get(Point2::new(center.x - dx, center.y - dy)),
                *self.0.get(center),
                *self.0.get(Point2::new(center.x + dx, center.y + dy)),
            ]
        };

        let falling = diagonal(1, 1);
        let rising = diagonal(-1, 1);
        (falling == MAS || falling == SAM) && (rising == MAS || rising == SAM)
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = WordSearch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        // only interior cells can center an X
        let crosses = (1..input.0.height() - 1)
            .flat_map(|y| (1..input.0.width() - 1).map(move |x| Point2::new(x, y)))
            .filter(|&center| input.is_crossed_mas_center(center))
            .count();
        Ok(crosses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 18);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = WordSearch::parse(EXAMPLE_INPUT)?;
        let result = <Day04 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 9);
        Ok(())
    }
}
