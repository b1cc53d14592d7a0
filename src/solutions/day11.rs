use std::collections::HashMap;

use aoc_harness::parsing::parse_with_context;
use aoc_harness::runner::solution_runner;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "Day 11: Plutonian Pebbles",
    parsed = Stones,
    part_one = Day11,
    part_two = Day11
)]
impl super::AdventOfCode2024<11> {}

/*
Input is a single line of numbers engraved on stones.

Every blink, each stone changes by the first matching rule:

- a `0` becomes a `1`;
- a number with an even count of digits splits into two stones holding its
  left and right digit halves (leading zeros are not kept);
- anything else is multiplied by 2024.
*/

#[derive(Debug)]
struct Stones(Vec<u64>);

impl ParseData for Stones {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let stones = input
            .split_whitespace()
            .map(parse_with_context::<u64>)
            .collect::<Result<_, _>>()?;
        Ok(Self(stones))
    }
}

/*
For part 1, count the stones after 25 blinks. The stones multiply far too
fast to keep as a list, but the count a single stone expands into depends
only on its number and the blinks remaining, which memoizes well.
*/

/// Count the stones that `value` becomes after `blinks` further blinks.
///
/// The memo maps `(value, blinks)` to a count; the caller owns it and lends
/// it down the recursion, so repeated values across blinks and across
/// stones are all counted once.
fn count_stones(value: u64, blinks: u32, memo: &mut HashMap<(u64, u32), u64>) -> u64 {
    if blinks == 0 {
        return 1;
    }
    if let Some(&count) = memo.get(&(value, blinks)) {
        return count;
    }

    let count = if value == 0 {
        count_stones(1, blinks - 1, memo)
    } else {
        let digit_count = value.ilog10() + 1;
        if digit_count % 2 == 0 {
            let divisor = 10u64.pow(digit_count / 2);
            count_stones(value / divisor, blinks - 1, memo)
                + count_stones(value % divisor, blinks - 1, memo)
        } else {
            count_stones(value * 2024, blinks - 1, memo)
        }
    };
    memo.insert((value, blinks), count);
    count
}

impl Stones {
    fn count_after_blinks(&self, blinks: u32) -> u64 {
        let mut memo = HashMap::new();
        self.0
            .iter()
            .map(|&value| count_stones(value, blinks, &mut memo))
            .sum()
    }
}

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = Stones;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_after_blinks(25))
    }
}

/*
For part 2, count the stones after 75 blinks.
*/

impl Solution<PartTwo> for Day11 {
    type Input = Stones;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.count_after_blinks(75))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = "125 17\n";

    #[test]
    fn example_expands_to_22_stones_after_6_blinks() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.count_after_blinks(6), 22);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Stones::parse(EXAMPLE_INPUT)?;
        let result = <Day11 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 55312);
        Ok(())
    }

    #[test]
    fn splitting_drops_leading_zeros() {
        let mut memo = HashMap::new();
        // 1000 -> 10, 0 -> 1, 0, 1 -> three stones
        assert_eq!(count_stones(1000, 2, &mut memo), 3);
    }
}
