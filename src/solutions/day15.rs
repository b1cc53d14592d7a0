use std::collections::HashSet;

use aoc_harness::grid::{Direction, Grid};
use aoc_harness::runner::solution_runner;
use aoc_harness::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::{Point2, Vector2};

#[solution_runner(
    name = "Day 15: Warehouse Woes",
    parsed = Warehouse,
    part_one = Day15,
    part_two = Day15
)]
impl super::AdventOfCode2024<15> {}

/*
Input is a character grid of a warehouse (`#` walls, `O` boxes, `@` the
robot), a blank line, then the robot's attempted moves as `^`, `>`, `v`, `<`
spread over any number of lines.
*/

#[derive(Debug, Clone)]
struct Warehouse {
    grid: Grid<char>,
    robot: Point2<i32>,
    moves: Vec<Direction>,
}

#[derive(thiserror::Error, Debug)]
enum ParseWarehouseError {
    #[error("no blank line separates the grid from the move list")]
    MissingMoveList,

    #[error("invalid move character: {0:?}")]
    InvalidMove(char),

    #[error("the warehouse has no robot")]
    MissingRobot,
}

impl ParseData for Warehouse {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let (grid_text, moves_text) = input
            .split_once("\n\n")
            .ok_or(ParseWarehouseError::MissingMoveList)?;
        let grid = Grid::from_text(grid_text)?;
        let robot = grid.find(&'@').ok_or(ParseWarehouseError::MissingRobot)?;
        let moves = moves_text
            .chars()
            .filter(|character| !character.is_whitespace())
            .map(|character| match character {
                '^' => Ok(Direction::North),
                '>' => Ok(Direction::East),
                'v' => Ok(Direction::South),
                '<' => Ok(Direction::West),
                _ => Err(ParseWarehouseError::InvalidMove(character)),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { grid, robot, moves })
    }
}

/*
For part 1, the robot attempts each move in order, pushing any straight line
of boxes ahead of it; a push against a wall moves nothing. Afterwards, sum
every box's GPS coordinate, `100 * y + x`.
*/

impl Warehouse {
    /// Attempt one move: scan ahead to the first gap, and if one comes
    /// before a wall, shift the line of boxes into it and step the robot.
    fn push(&mut self, direction: Direction) {
        let offset = direction.to_vector2();
        let mut scan = self.robot + offset;
        loop {
            match *self.grid.get(scan) {
                '#' => return,
                '.' => break,
                _ => scan += offset,
            }
        }

        // moving the whole line one step equals moving its front box into
        // the gap; nothing else changes cells
        let target = self.robot + offset;
        if scan != target {
            self.grid.set(scan, 'O');
        }
        self.grid.set(target, '@');
        self.grid.set(self.robot, '.');
        self.robot = target;
    }

    /// Sum the GPS coordinates, `100 * y + x`, of every box anchor.
    fn gps_sum(&self) -> i32 {
        self.grid
            .points()
            .filter(|&point| matches!(*self.grid.get(point), 'O' | '['))
            .map(|point| 100 * point.y + point.x)
            .sum()
    }
}

struct Day15;

impl Solution<PartOne> for Day15 {
    type Input = Warehouse;
    type Output = i32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut warehouse = input.clone();
        for direction in input.moves.iter().copied() {
            warehouse.push(direction);
        }
        Ok(warehouse.gps_sum())
    }
}

/*
For part 2, everything except the robot is twice as wide: walls become `##`
and boxes become `[]`. A box pushed vertically can rest on two boxes at
once, so a single push can fan out; it only happens if every box it would
move is clear, otherwise nothing moves at all.
*/

impl Warehouse {
    /// Double the warehouse's width, splitting each cell into its wide
    /// pair.
    fn widen(&self) -> Self {
        let mut grid = Grid::filled(self.grid.width() * 2, self.grid.height(), '.');
        for point in self.grid.points() {
            let (left, right) = match *self.grid.get(point) {
                'O' => ('[', ']'),
                '@' => ('@', '.'),
                cell => (cell, cell),
            };
            grid.set(Point2::new(2 * point.x, point.y), left);
            grid.set(Point2::new(2 * point.x + 1, point.y), right);
        }
        Self {
            grid,
            robot: Point2::new(2 * self.robot.x, self.robot.y),
            moves: self.moves.clone(),
        }
    }

    /// The anchor (left half) of the wide box covering `point`, if any.
    fn box_anchor(&self, point: Point2<i32>) -> Option<Point2<i32>> {
        match *self.grid.get(point) {
            '[' => Some(point),
            ']' => Some(point - Vector2::x()),
            _ => None,
        }
    }

    /// Collect the anchors of every box that has to move when the box at
    /// `anchor` is pushed along `offset`, or `None` when a wall blocks any
    /// of them.
    fn pushed_boxes(
        &self,
        anchor: Point2<i32>,
        offset: Vector2<i32>,
    ) -> Option<Vec<Point2<i32>>> {
        let mut pending = vec![anchor];
        let mut collected = HashSet::new();
        let mut pushed = Vec::new();
        while let Some(anchor) = pending.pop() {
            if !collected.insert(anchor) {
                continue;
            }
            for half in [anchor, anchor + Vector2::x()] {
                if *self.grid.get(half + offset) == '#' {
                    return None;
                }
            }
            pushed.push(anchor);
            for half in [anchor, anchor + Vector2::x()] {
                if let Some(next) = self.box_anchor(half + offset) {
                    if next != anchor {
                        pending.push(next);
                    }
                }
            }
        }
        Some(pushed)
    }

    /// Attempt one wide move: step into space, or push the box chain ahead.
    ///
    /// Feasibility is confirmed for the whole chain before any cell
    /// changes; a blocked push leaves the grid untouched, never half-moved.
    fn wide_push(&mut self, direction: Direction) {
        let offset = direction.to_vector2();
        let target = self.robot + offset;
        match *self.grid.get(target) {
            '#' => return,
            '.' => {}
            _ => {
                let Some(anchor) = self.box_anchor(target) else {
                    return;
                };
                let Some(pushed) = self.pushed_boxes(anchor, offset) else {
                    return;
                };
                // clear every box first, then write every box moved; the
                // two passes keep overlapping old and new cells straight
                for &anchor in &pushed {
                    self.grid.set(anchor, '.');
                    self.grid.set(anchor + Vector2::x(), '.');
                }
                for &anchor in &pushed {
                    self.grid.set(anchor + offset, '[');
                    self.grid.set(anchor + offset + Vector2::x(), ']');
                }
            }
        }
        self.grid.set(self.robot, '.');
        self.grid.set(target, '@');
        self.robot = target;
    }
}

impl Solution<PartTwo> for Day15 {
    type Input = Warehouse;
    type Output = i32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut warehouse = input.widen();
        for direction in input.moves.iter().copied() {
            warehouse.wide_push(direction);
        }
        Ok(warehouse.gps_sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::grid::GridFromTextError;

    const EXAMPLE_INPUT: &str = r"########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const WIDE_EXAMPLE_INPUT: &str = r"#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = Warehouse::parse(EXAMPLE_INPUT)?;
        let result = <Day15 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 2028);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = Warehouse::parse(WIDE_EXAMPLE_INPUT)?;
        let result = <Day15 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 618);
        Ok(())
    }

    fn wide_fixture(grid_text: &str) -> Result<Warehouse, GridFromTextError> {
        let grid = Grid::from_text(grid_text)?;
        let robot = grid.find(&'@').unwrap_or_else(|| Point2::new(0, 0));
        Ok(Warehouse {
            grid,
            robot,
            moves: Vec::new(),
        })
    }

    #[test]
    fn blocked_wide_push_changes_nothing() -> DynamicResult<()> {
        let mut warehouse = wide_fixture("#####\n#.#.#\n#[].#\n#@..#\n#####\n")?;
        let before = warehouse.grid.clone();
        warehouse.wide_push(Direction::North);
        assert_eq!(warehouse.grid, before);
        assert_eq!(warehouse.robot, Point2::new(1, 3));
        Ok(())
    }

    #[test]
    fn clear_wide_push_moves_both_halves() -> DynamicResult<()> {
        let mut warehouse = wide_fixture("#####\n#...#\n#[].#\n#@..#\n#####\n")?;
        warehouse.wide_push(Direction::North);
        assert_eq!(*warehouse.grid.get(Point2::new(1, 1)), '[');
        assert_eq!(*warehouse.grid.get(Point2::new(2, 1)), ']');
        assert_eq!(*warehouse.grid.get(Point2::new(1, 2)), '@');
        assert_eq!(warehouse.robot, Point2::new(1, 2));
        Ok(())
    }

    #[test]
    fn forked_wide_push_is_all_or_nothing() -> DynamicResult<()> {
        // the pushed box leans on two boxes; the right parent is blocked
        let mut warehouse = wide_fixture("########\n#...#..#\n#[][]..#\n#.[]...#\n#.@....#\n########\n")?;
        let before = warehouse.grid.clone();
        warehouse.wide_push(Direction::North);
        assert_eq!(warehouse.grid, before);
        Ok(())
    }
}
